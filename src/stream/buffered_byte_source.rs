//! Buffered reader implementation of byte source.
//!
//! This module provides [BufferedByteSource], which wraps a file (or any other
//! `Read + Seek`) in a [BufReader] for efficient streaming I/O. Use this for large
//! files where loading everything into memory would be impractical.

use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind, Read, Seek, SeekFrom};
use std::path::Path;

use tracing::trace;

use crate::stream::byte_source::ByteSource;
use crate::stream::reading_error::ReadingError;

// =#========================================================================#=
// BUFFERED BYTE SOURCE
// =#========================================================================$=
/// A buffered byte source for streaming large files.
///
/// Uses [BufReader] for disk I/O and keeps track of the absolute position
/// itself, so [position](ByteSource::position) never has to touch the
/// underlying stream.
pub struct BufferedByteSource<R: Read + Seek = File> {
    /// Underlying reader, handles getting chunks from the stream
    reader: BufReader<R>,

    /// Current absolute position in the stream
    pos: u64,
}

impl BufferedByteSource<File> {
    /// Creates a new buffered byte source from a file path.
    ///
    /// # Arguments
    /// * `path` - Path to the file (accepting `&str`, `String`, `Path`, or `PathBuf`)
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<BufferedByteSource<File>, ReadingError> {
        let file = File::open(path).map_err(|e| ReadingError::from_io(e, 0))?;
        Self::new(file)
    }
}

impl<R: Read + Seek> BufferedByteSource<R> {
    /// Wraps `inner` with the default [BufReader] capacity.
    ///
    /// Reading starts wherever `inner` is currently positioned.
    pub fn new(mut inner: R) -> Result<Self, ReadingError> {
        let pos = inner
            .stream_position()
            .map_err(|e| ReadingError::from_io(e, 0))?;
        Ok(Self {
            reader: BufReader::new(inner),
            pos,
        })
    }

    /// Wraps `inner` with a buffer of `capacity` bytes.
    pub fn with_capacity(capacity: usize, mut inner: R) -> Result<Self, ReadingError> {
        let pos = inner
            .stream_position()
            .map_err(|e| ReadingError::from_io(e, 0))?;
        Ok(Self {
            reader: BufReader::with_capacity(capacity, inner),
            pos,
        })
    }

    /// Unwraps the source, returning the underlying stream.
    ///
    /// Buffered but unread data is lost, so the stream's own position
    /// may be ahead of [position](ByteSource::position).
    pub fn into_inner(self) -> R {
        self.reader.into_inner()
    }
}

impl<R: Read + Seek> ByteSource for BufferedByteSource<R> {
    fn read_into(&mut self, buf: &mut [u8]) -> Result<usize, ReadingError> {
        let mut filled = 0;
        while filled < buf.len() {
            match self.reader.read(&mut buf[filled..]) {
                Ok(0) => break, // EOF
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => {
                    self.pos += filled as u64;
                    return Err(ReadingError::from_io(e, self.pos));
                }
            }
        }

        self.pos += filled as u64;
        Ok(filled)
    }

    #[inline]
    fn position(&self) -> u64 {
        self.pos
    }

    fn seek(&mut self, pos: SeekFrom) -> Result<u64, ReadingError> {
        let target = self
            .reader
            .seek(pos)
            .map_err(|e| ReadingError::from_io(e, self.pos))?;

        trace!(from = self.pos, to = target, "seek in buffered stream");
        self.pos = target;
        Ok(target)
    }

    fn get_byte(&mut self) -> Result<Option<u8>, ReadingError> {
        let byte = loop {
            match self.reader.fill_buf() {
                Ok(buf) => break buf.first().copied(),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(ReadingError::from_io(e, self.pos)),
            }
        };

        if byte.is_some() {
            self.reader.consume(1);
            self.pos += 1;
        }
        Ok(byte)
    }
}
