//! Byte source abstraction for readers.
//!
//! This module provides the [ByteSource] trait, the seekable stream contract
//! that [Reader](crate::reader::Reader) decodes from.

use std::io::SeekFrom;

use crate::stream::reading_error::ReadingError;

// =#========================================================================#=
// BYTE SOURCE (Trait)
// =#========================================================================T=
/// Trait defining the interface for seekable byte streams.
///
/// This trait abstracts over different ways of accessing byte data:
/// - In-memory byte vectors ([InMemoryByteSource](crate::stream::InMemoryByteSource))
/// - Buffered reading from files or any `Read + Seek`
///   ([BufferedByteSource](crate::stream::BufferedByteSource))
///
/// The source owns the cursor. Anything built on top of it asks the source
/// for the current position instead of tracking its own.
///
/// Only [read_into](ByteSource::read_into), [position](ByteSource::position) and
/// [seek](ByteSource::seek) are required; the remaining operations have default
/// implementations in terms of those three.
pub trait ByteSource {
    /// Reads as many bytes as are available, up to `buf.len()`,
    /// and advances the position by that many.
    ///
    /// # Returns
    /// The number of bytes read; fewer than `buf.len()` only at end of stream
    fn read_into(&mut self, buf: &mut [u8]) -> Result<usize, ReadingError>;

    /// Returns the current position in the byte stream.
    fn position(&self) -> u64;

    /// Moves the position, relative to the start, the current position, or the end.
    ///
    /// # Returns
    /// The new position
    ///
    /// # Errors
    /// [InvalidArgument](crate::stream::ReadingErrorType::InvalidArgument) if the
    /// target lies before the start of the stream.
    fn seek(&mut self, pos: SeekFrom) -> Result<u64, ReadingError>;

    /// Sets the position in the byte stream.
    ///
    /// # Arguments
    /// * `pos` - The byte offset to seek to
    fn set_position(&mut self, pos: u64) -> Result<(), ReadingError> {
        self.seek(SeekFrom::Start(pos)).map(|_| ())
    }

    /// Moves the position back to the start of the stream.
    fn rewind(&mut self) -> Result<(), ReadingError> {
        self.set_position(0)
    }

    /// Reads up to `n` bytes.
    ///
    /// # Returns
    /// The bytes read; shorter than `n` at end of stream and empty once exhausted
    fn read(&mut self, n: usize) -> Result<Vec<u8>, ReadingError> {
        // Capacity follows the bytes actually read, not `n`
        let mut buf = Vec::with_capacity(n.min(READ_CHUNK_SIZE));
        let mut chunk = [0u8; READ_CHUNK_SIZE];
        while buf.len() < n {
            let want = (n - buf.len()).min(READ_CHUNK_SIZE);
            let read = self.read_into(&mut chunk[..want])?;
            buf.extend_from_slice(&chunk[..read]);
            if read < want {
                break; // EOF
            }
        }
        Ok(buf)
    }

    /// Gets the current byte and advances the position (consumes it).
    ///
    /// # Returns
    /// * `Some(u8)` - The current byte if available
    /// * `None` - If at end of data (EOF)
    fn get_byte(&mut self) -> Result<Option<u8>, ReadingError> {
        let mut byte = [0];
        match self.read_into(&mut byte)? {
            0 => Ok(None),
            _ => Ok(Some(byte[0])),
        }
    }

    /// Reads one byte, failing with
    /// [EndOfStream](crate::stream::ReadingErrorType::EndOfStream) at end of data.
    fn read_byte(&mut self) -> Result<u8, ReadingError> {
        let start = self.position();
        self.get_byte()?
            .ok_or_else(|| ReadingError::end_of_stream(start))
    }

    /// Gets one UTF-8 encoded character and advances past it.
    ///
    /// # Returns
    /// * `Some(char)` - The decoded character if available
    /// * `None` - If at end of data (EOF)
    ///
    /// # Errors
    /// [ShortRead](crate::stream::ReadingErrorType::ShortRead) if the data ends
    /// inside a character, [InvalidCharacter](crate::stream::ReadingErrorType::InvalidCharacter)
    /// if the bytes are not valid UTF-8.
    fn get_char(&mut self) -> Result<Option<char>, ReadingError> {
        let start = self.position();
        let Some(lead) = self.get_byte()? else {
            return Ok(None);
        };

        let width = utf8_width(lead).ok_or_else(|| ReadingError::invalid_character(start))?;
        let mut buf = [lead, 0, 0, 0];
        let mut read = 1;
        while read < width {
            match self.get_byte()? {
                Some(byte @ 0x80..=0xBF) => {
                    buf[read] = byte;
                    read += 1;
                }
                Some(_) => {
                    // Consume only the lead byte
                    self.set_position(start + 1)?;
                    return Err(ReadingError::invalid_character(start));
                }
                None => return Err(ReadingError::short_read(start, width, read)),
            }
        }

        // Overlong encodings and surrogates pass the continuation check but not this one
        match std::str::from_utf8(&buf[..width]).ok().and_then(|s| s.chars().next()) {
            Some(ch) => Ok(Some(ch)),
            None => {
                self.set_position(start + 1)?;
                Err(ReadingError::invalid_character(start))
            }
        }
    }

    /// Reads one UTF-8 encoded character, failing with
    /// [EndOfStream](crate::stream::ReadingErrorType::EndOfStream) at end of data.
    fn read_char(&mut self) -> Result<char, ReadingError> {
        let start = self.position();
        self.get_char()?
            .ok_or_else(|| ReadingError::end_of_stream(start))
    }
}

/// Upper bound on the bytes [ByteSource::read] requests from the source at once
const READ_CHUNK_SIZE: usize = 8 * 1024;

/// Number of bytes in a UTF-8 sequence starting with `lead`,
/// or `None` if `lead` cannot start one.
fn utf8_width(lead: u8) -> Option<usize> {
    match lead {
        0x00..=0x7F => Some(1),
        0xC2..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF4 => Some(4),
        _ => None,
    }
}

// A borrowed source is a source too, so readers can work on a stream
// without taking ownership of it.
impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    #[inline]
    fn read_into(&mut self, buf: &mut [u8]) -> Result<usize, ReadingError> {
        (**self).read_into(buf)
    }

    #[inline]
    fn position(&self) -> u64 {
        (**self).position()
    }

    #[inline]
    fn seek(&mut self, pos: SeekFrom) -> Result<u64, ReadingError> {
        (**self).seek(pos)
    }

    fn set_position(&mut self, pos: u64) -> Result<(), ReadingError> {
        (**self).set_position(pos)
    }

    fn rewind(&mut self) -> Result<(), ReadingError> {
        (**self).rewind()
    }

    fn read(&mut self, n: usize) -> Result<Vec<u8>, ReadingError> {
        (**self).read(n)
    }

    #[inline]
    fn get_byte(&mut self) -> Result<Option<u8>, ReadingError> {
        (**self).get_byte()
    }

    fn read_byte(&mut self) -> Result<u8, ReadingError> {
        (**self).read_byte()
    }

    fn get_char(&mut self) -> Result<Option<char>, ReadingError> {
        (**self).get_char()
    }

    fn read_char(&mut self) -> Result<char, ReadingError> {
        (**self).read_char()
    }
}
