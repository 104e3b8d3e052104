//! bin-stream is a library to read typed binary data from seekable streams.
//!
//! A [Reader] wraps a [ByteSource] and exposes one method per data type. Each
//! method consumes that type's width from the current position and decodes it
//! in network (big-endian) byte order:
//! - Integers: 8, 16, 24, 32 and 64 bit, signed and unsigned
//! - Fixed point: 2.14 (`short_frac`) and 16.16 (`fixed`)
//! - Timestamps: seconds since 1904 (`long_date_time`), returned as UTC
//!
//! Byte sources provided:
//! - [InMemoryByteSource]: owns all bytes, fastest
//! - [BufferedByteSource]: streams any `Read + Seek`, e.g. a file
//!
//! The source owns the cursor. A [Reader] is itself a [ByteSource], so seeking,
//! raw reads and typed reads can be interleaved on the same reader.
//!
//! # Example
//! ```
//! use bin_stream::{ByteSource, Reader};
//! use chrono::{TimeZone, Utc};
//!
//! let mut reader = Reader::from_bytes(&[
//!     0x40, 0x00, // short_frac
//!     0x00, 0x00, 0x00, 0x00, 0xA9, 0x75, 0x65, 0xDA, // long_date_time
//! ]);
//! assert_eq!(reader.short_frac()?, 1.0);
//! assert_eq!(
//!     reader.long_date_time()?,
//!     Utc.with_ymd_and_hms(1994, 2, 2, 14, 14, 50).unwrap()
//! );
//! assert_eq!(reader.position(), 10);
//! # Ok::<(), bin_stream::ReadingError>(())
//! ```
//!
//! Reading from a borrowed source leaves it usable afterwards:
//! ```
//! use bin_stream::{ByteSource, InMemoryByteSource, Reader};
//!
//! let mut source = InMemoryByteSource::from_slice(&[0xFF, 0xFE]);
//! let value = Reader::new(&mut source).int8()?;
//! assert_eq!(value, -1);
//! assert_eq!(source.read_byte()?, 0xFE);
//! # Ok::<(), bin_stream::ReadingError>(())
//! ```

pub mod reader;
pub mod stream;

pub use reader::Reader;
pub use stream::{
    BufferedByteSource, ByteSource, InMemoryByteSource, ReadingError, ReadingErrorType,
};
