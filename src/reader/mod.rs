//! Typed reading of big-endian binary data.
//!
//! This module provides [Reader], which decodes fixed-width values from any
//! [ByteSource](crate::stream::ByteSource).
//!
//! # Quick API
//! * [`open_file`] - streams a file through a buffered reader
//!
//! # Full API
//! Wrap any byte source with [Reader::new], or use the constructors
//! [Reader::from_bytes], [Reader::from_vec] and [Reader::from_file].
//!
//! # Format
//! All values are big-endian:
//! * `uint8`/`int8` (1 byte), `uint16`/`int16` (2), `uint24` (3),
//!   `uint32`/`int32` (4), `uint64`/`int64` (8)
//! * `short_frac` - 2.14 signed fixed point (2 bytes)
//! * `fixed` - 16.16 signed fixed point (4 bytes)
//! * `long_date_time` - signed seconds since 1904-01-01 UTC (8 bytes)

pub mod defs;
mod stream_reader;

pub use stream_reader::Reader;

use crate::stream::{BufferedByteSource, ReadingError};
use std::fs::File;
use std::path::Path;

// ============================================================================
// QUICK READING API (pub)
// ============================================================================
/// Opens the file at `path` for buffered, typed reading.
///
/// # Arguments
/// * `path` - Path to the file (accepting `&str`, `String`, `Path`, or `PathBuf`)
///
/// # Example
/// ```no_run
/// use bin_stream::reader::open_file;
///
/// let mut reader = open_file("font.ttf")?;
/// let version = reader.fixed()?;
/// let num_tables = reader.uint16()?;
/// println!("version {version}, {num_tables} tables");
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn open_file<P: AsRef<Path>>(
    path: P,
) -> Result<Reader<BufferedByteSource<File>>, ReadingError> {
    Reader::from_file(path)
}
