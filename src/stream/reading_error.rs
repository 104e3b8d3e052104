//! Error types for reading from byte sources.
//!
//! This module provides [ReadingError] and [ReadingErrorType] for representing
//! and reporting errors that occur while reading or decoding from a
//! [ByteSource](crate::stream::ByteSource).

use std::io;
use thiserror::Error;

// =#========================================================================#=
// READING ERROR TYPE
// =#========================================================================$=
/// Error types that can occur while reading from a byte source.
#[derive(Error, Debug)]
pub enum ReadingErrorType {
    #[error("Invalid argument - {0}")]
    InvalidArgument(String),
    #[error("Short read - needed {needed} bytes, got {available}")]
    ShortRead { needed: usize, available: usize },
    #[error("Unexpected end of stream")]
    EndOfStream,
    #[error("Invalid UTF-8 character")]
    InvalidCharacter,
    #[error("Timestamp out of range - {0} seconds")]
    TimestampOutOfRange(i64),
    #[error("IO error - {0}")]
    Io(io::Error),
}

// =#========================================================================#=
// READING ERROR
// =#========================================================================$=
/// Reading error with the stream position at which it occurred.
#[derive(Error, Debug)]
#[error("{kind} at position {position}")]
pub struct ReadingError {
    kind: ReadingErrorType,
    position: u64,
}

impl ReadingError {
    /// Create a ReadingError from an error type and stream position
    pub fn new(kind: ReadingErrorType, position: u64) -> Self {
        Self { kind, position }
    }

    /// Convenience constructor for InvalidArgument
    pub fn invalid_argument(position: u64, msg: impl Into<String>) -> Self {
        Self::new(ReadingErrorType::InvalidArgument(msg.into()), position)
    }

    /// Convenience constructor for ShortRead
    pub fn short_read(position: u64, needed: usize, available: usize) -> Self {
        Self::new(ReadingErrorType::ShortRead { needed, available }, position)
    }

    /// Convenience constructor for EndOfStream
    pub fn end_of_stream(position: u64) -> Self {
        Self::new(ReadingErrorType::EndOfStream, position)
    }

    /// Convenience constructor for InvalidCharacter
    pub fn invalid_character(position: u64) -> Self {
        Self::new(ReadingErrorType::InvalidCharacter, position)
    }

    /// Convenience constructor for TimestampOutOfRange
    pub fn timestamp_out_of_range(position: u64, seconds: i64) -> Self {
        Self::new(ReadingErrorType::TimestampOutOfRange(seconds), position)
    }

    /// Wraps an IO error, keeping the position the source was at.
    ///
    /// `InvalidInput` (e.g. seeking before the start of a file) becomes
    /// [ReadingErrorType::InvalidArgument] and `UnexpectedEof` becomes
    /// [ReadingErrorType::EndOfStream]; everything else stays an IO error.
    pub fn from_io(err: io::Error, position: u64) -> Self {
        let kind = match err.kind() {
            io::ErrorKind::InvalidInput => ReadingErrorType::InvalidArgument(err.to_string()),
            io::ErrorKind::UnexpectedEof => ReadingErrorType::EndOfStream,
            _ => ReadingErrorType::Io(err),
        };
        Self::new(kind, position)
    }

    /// Get the error kind
    pub fn kind(&self) -> &ReadingErrorType {
        &self.kind
    }

    /// Get the position where the error occurred
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Returns `true` if the stream ran out of bytes,
    /// either entirely or in the middle of a value.
    pub fn is_eof(&self) -> bool {
        matches!(
            self.kind,
            ReadingErrorType::EndOfStream | ReadingErrorType::ShortRead { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_position() {
        let err = ReadingError::short_read(6, 4, 2);
        assert_eq!(
            err.to_string(),
            "Short read - needed 4 bytes, got 2 at position 6"
        );
    }

    #[test]
    fn test_io_error_kinds_are_mapped() {
        let err = ReadingError::from_io(io::Error::from(io::ErrorKind::InvalidInput), 3);
        assert!(matches!(err.kind(), ReadingErrorType::InvalidArgument(_)));
        assert_eq!(err.position(), 3);

        let err = ReadingError::from_io(io::Error::from(io::ErrorKind::UnexpectedEof), 8);
        assert!(err.is_eof());
        assert_eq!(err.position(), 8);

        let err = ReadingError::from_io(io::Error::other("disk on fire"), 5);
        assert!(matches!(err.kind(), ReadingErrorType::Io(_)));
        assert_eq!(err.position(), 5);
        assert!(!err.is_eof());
    }
}
