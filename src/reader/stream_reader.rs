//! Typed big-endian reader over a byte source.
//!
//! This module provides [Reader], which consumes fixed-width fields from a
//! [ByteSource] and interprets them as integers, fixed-point numbers or
//! timestamps. All multi-byte values are big-endian (network byte order).

use std::fs::File;
use std::io::SeekFrom;
use std::path::Path;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::reader::defs::{FIXED_SCALE, LONG_DATE_TIME_EPOCH_OFFSET, SHORT_FRAC_SCALE};
use crate::stream::{BufferedByteSource, ByteSource, InMemoryByteSource, ReadingError};

// =#========================================================================#=
// READER
// =#========================================================================#=
/// A reader decoding big-endian values from a [ByteSource].
///
/// Every typed operation reads exactly the number of bytes its type needs,
/// advancing the source by that many. If the source runs out first, the
/// operation fails with a [ShortRead](crate::stream::ReadingErrorType::ShortRead)
/// error; no value is ever padded.
///
/// The reader keeps no position of its own. It also implements [ByteSource]
/// itself, forwarding each stream operation unchanged, so seeking or raw reads
/// can be mixed freely with typed reads.
///
/// # Example
/// ```
/// use bin_stream::{ByteSource, Reader};
///
/// let mut reader = Reader::from_bytes(&[0x00, 0x01, 0xFF, 0x02]);
/// assert_eq!(reader.uint16()?, 1);
/// assert_eq!(reader.int16()?, -254);
///
/// reader.rewind()?;
/// assert_eq!(reader.uint32()?, 130818);
/// # Ok::<(), bin_stream::ReadingError>(())
/// ```
pub struct Reader<S: ByteSource> {
    source: S,
}

impl Reader<InMemoryByteSource> {
    /// Creates a new `Reader` from a byte slice by copying it into a Vec.
    ///
    /// # Arguments
    /// * `input` - The byte slice to read from
    pub fn from_bytes(input: &[u8]) -> Self {
        Self::new(InMemoryByteSource::from_slice(input))
    }

    /// Creates a new `Reader` that takes ownership of `input`.
    pub fn from_vec(input: Vec<u8>) -> Self {
        Self::new(InMemoryByteSource::from_vec(input))
    }
}

impl Reader<BufferedByteSource<File>> {
    /// Creates a new `Reader` streaming from the file at `path`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ReadingError> {
        Ok(Self::new(BufferedByteSource::from_file(path)?))
    }
}

impl<S: ByteSource> Reader<S> {
    /// Creates a new `Reader` from a byte source.
    ///
    /// Pass `&mut source` to keep ownership of the source with the caller.
    ///
    /// # Arguments
    /// * `source` - The byte source to read from
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Returns a reference to the underlying byte source.
    pub fn get_ref(&self) -> &S {
        &self.source
    }

    /// Returns a mutable reference to the underlying byte source.
    pub fn get_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Unwraps the reader, returning the underlying byte source.
    pub fn into_inner(self) -> S {
        self.source
    }

    /// Reads exactly `N` bytes.
    ///
    /// # Errors
    /// Returns a short read error if fewer than `N` bytes are left. The bytes that
    /// were available have been consumed by then.
    #[inline]
    fn read_array<const N: usize>(&mut self) -> Result<[u8; N], ReadingError> {
        let start = self.source.position();
        let mut buf = [0u8; N];
        let read = self.source.read_into(&mut buf)?;
        if read < N {
            debug!(position = start, needed = N, available = read, "short read");
            return Err(ReadingError::short_read(start, N, read));
        }
        Ok(buf)
    }

    // ------------------------------------------------------------------------
    // Integers
    // ------------------------------------------------------------------------
    /// Reads 1 byte as an unsigned integer.
    ///
    /// Bytes `01 FF` read as `1`, then `255`.
    pub fn uint8(&mut self) -> Result<u8, ReadingError> {
        self.read_array::<1>().map(|[b]| b)
    }

    /// Alias of [uint8](Reader::uint8).
    pub fn byte(&mut self) -> Result<u8, ReadingError> {
        self.uint8()
    }

    /// Reads 1 byte as a signed two's-complement integer.
    ///
    /// Bytes `01 FF` read as `1`, then `-1`.
    pub fn int8(&mut self) -> Result<i8, ReadingError> {
        self.read_array().map(i8::from_be_bytes)
    }

    /// Alias of [int8](Reader::int8).
    pub fn char(&mut self) -> Result<i8, ReadingError> {
        self.int8()
    }

    /// Reads 2 bytes as an unsigned integer.
    ///
    /// Bytes `00 01 FF 02` read as `1`, then `65282`.
    pub fn uint16(&mut self) -> Result<u16, ReadingError> {
        self.read_array().map(u16::from_be_bytes)
    }

    /// Alias of [uint16](Reader::uint16).
    pub fn ushort(&mut self) -> Result<u16, ReadingError> {
        self.uint16()
    }

    /// Reads 2 bytes as a signed integer.
    ///
    /// Bytes `00 01 FF 02` read as `1`, then `-254`.
    pub fn int16(&mut self) -> Result<i16, ReadingError> {
        self.read_array().map(i16::from_be_bytes)
    }

    /// Reads 3 bytes as an unsigned integer.
    pub fn uint24(&mut self) -> Result<u32, ReadingError> {
        let [a, b, c] = self.read_array::<3>()?;
        Ok(u32::from_be_bytes([0, a, b, c]))
    }

    /// Reads 4 bytes as an unsigned integer.
    ///
    /// Bytes `00 01 FF 02 FE 03 FD 04` read as `130818`, then `4261674244`.
    pub fn uint32(&mut self) -> Result<u32, ReadingError> {
        self.read_array().map(u32::from_be_bytes)
    }

    /// Reads 4 bytes as a signed integer.
    ///
    /// Bytes `00 01 FF 02 FE 03 FD 04` read as `130818`, then `-33293052`.
    pub fn int32(&mut self) -> Result<i32, ReadingError> {
        self.read_array().map(i32::from_be_bytes)
    }

    /// Reads 8 bytes as an unsigned integer.
    pub fn uint64(&mut self) -> Result<u64, ReadingError> {
        self.read_array().map(u64::from_be_bytes)
    }

    /// Reads 8 bytes as a signed integer.
    pub fn int64(&mut self) -> Result<i64, ReadingError> {
        self.read_array().map(i64::from_be_bytes)
    }

    // ------------------------------------------------------------------------
    // Fixed point
    // ------------------------------------------------------------------------
    /// Reads 2 bytes as a signed 2.14 fixed-point number:
    /// two integer bits (including the sign) and a 14 bit fraction.
    ///
    /// Bytes `7F FF 40 00 00 00 C0 00 80 00` read as
    /// `1.99993896484375`, `1.0`, `0.0`, `-1.0`, `-2.0`.
    pub fn short_frac(&mut self) -> Result<f64, ReadingError> {
        Ok(f64::from(self.int16()?) / SHORT_FRAC_SCALE)
    }

    /// Reads 4 bytes as a signed 16.16 fixed-point number.
    ///
    /// Bytes `00 01 80 00` read as `1.5`.
    pub fn fixed(&mut self) -> Result<f64, ReadingError> {
        Ok(f64::from(self.int32()?) / FIXED_SCALE)
    }

    // ------------------------------------------------------------------------
    // Timestamps
    // ------------------------------------------------------------------------
    /// Reads 8 bytes as a signed count of seconds since 1904-01-01T00:00:00 UTC.
    ///
    /// Bytes `00 00 00 00 A9 75 65 DA` read as 1994-02-02T14:14:50 UTC.
    /// Dates before 1970 are fine; the result is always in UTC.
    ///
    /// # Errors
    /// Besides short reads, fails with
    /// [TimestampOutOfRange](crate::stream::ReadingErrorType::TimestampOutOfRange)
    /// if the value cannot be represented. All 8 bytes are consumed either way.
    pub fn long_date_time(&mut self) -> Result<DateTime<Utc>, ReadingError> {
        let start = self.source.position();
        let raw = self.int64()?;

        raw.checked_sub(LONG_DATE_TIME_EPOCH_OFFSET)
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
            .ok_or_else(|| {
                debug!(position = start, raw, "timestamp out of range");
                ReadingError::timestamp_out_of_range(start, raw)
            })
    }
}

// ----------------------------------------------------------------------------
// Stream operations, forwarded unchanged to the source
// ----------------------------------------------------------------------------
impl<S: ByteSource> ByteSource for Reader<S> {
    #[inline]
    fn read_into(&mut self, buf: &mut [u8]) -> Result<usize, ReadingError> {
        self.source.read_into(buf)
    }

    #[inline]
    fn position(&self) -> u64 {
        self.source.position()
    }

    fn seek(&mut self, pos: SeekFrom) -> Result<u64, ReadingError> {
        self.source.seek(pos)
    }

    fn set_position(&mut self, pos: u64) -> Result<(), ReadingError> {
        self.source.set_position(pos)
    }

    fn rewind(&mut self) -> Result<(), ReadingError> {
        self.source.rewind()
    }

    fn read(&mut self, n: usize) -> Result<Vec<u8>, ReadingError> {
        self.source.read(n)
    }

    fn get_byte(&mut self) -> Result<Option<u8>, ReadingError> {
        self.source.get_byte()
    }

    fn read_byte(&mut self) -> Result<u8, ReadingError> {
        self.source.read_byte()
    }

    fn get_char(&mut self) -> Result<Option<char>, ReadingError> {
        self.source.get_char()
    }

    fn read_char(&mut self) -> Result<char, ReadingError> {
        self.source.read_char()
    }
}
