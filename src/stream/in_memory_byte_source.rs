//! In-memory implementation of byte source.

use std::fs::File;
use std::io::{Read, SeekFrom};
use std::path::Path;

use tracing::trace;

use crate::stream::byte_source::ByteSource;
use crate::stream::reading_error::ReadingError;

// =#========================================================================#=
// IN MEMORY BYTE SOURCE
// =#========================================================================$=
/// An in-memory byte source that owns its data.
///
/// This is the most efficient byte source for data
/// that can fit entirely in memory.
pub struct InMemoryByteSource {
    /// The owned byte data being read
    input: Vec<u8>,
    /// Current position, may lie past the end after a seek
    pos: u64,
}

impl InMemoryByteSource {
    /// Creates a new in-memory byte source from a Vec of bytes.
    ///
    /// # Arguments
    /// * `bytes` - The byte vector to read from
    pub fn from_vec(bytes: Vec<u8>) -> Self {
        Self {
            input: bytes,
            pos: 0,
        }
    }

    /// Creates a new in-memory byte source by copying a byte slice.
    pub fn from_slice(bytes: &[u8]) -> Self {
        Self::from_vec(bytes.to_vec())
    }

    /// Reads the entire file at `path` into memory.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<InMemoryByteSource, ReadingError> {
        let mut contents = Vec::new();
        let mut file = File::open(path).map_err(|e| ReadingError::from_io(e, 0))?;
        file.read_to_end(&mut contents)
            .map_err(|e| ReadingError::from_io(e, contents.len() as u64))?;
        Ok(Self::from_vec(contents))
    }

    /// Total number of bytes held by the source.
    pub fn len(&self) -> usize {
        self.input.len()
    }

    /// Returns `true` if the source holds no bytes at all.
    pub fn is_empty(&self) -> bool {
        self.input.is_empty()
    }

    /// Index of the current position clamped to the data.
    #[inline(always)]
    fn clamped_pos(&self) -> usize {
        usize::try_from(self.pos).map_or(self.input.len(), |p| p.min(self.input.len()))
    }
}

impl From<Vec<u8>> for InMemoryByteSource {
    fn from(bytes: Vec<u8>) -> Self {
        Self::from_vec(bytes)
    }
}

impl ByteSource for InMemoryByteSource {
    #[inline]
    fn read_into(&mut self, buf: &mut [u8]) -> Result<usize, ReadingError> {
        let start = self.clamped_pos();
        let end = (start + buf.len()).min(self.input.len());
        let n = end - start;
        buf[..n].copy_from_slice(&self.input[start..end]);
        self.pos += n as u64;
        Ok(n)
    }

    #[inline]
    fn position(&self) -> u64 {
        self.pos
    }

    fn seek(&mut self, pos: SeekFrom) -> Result<u64, ReadingError> {
        let (base, offset) = match pos {
            SeekFrom::Start(target) => (target, 0),
            SeekFrom::Current(offset) => (self.pos, offset),
            SeekFrom::End(offset) => (self.input.len() as u64, offset),
        };

        let target = base.checked_add_signed(offset).ok_or_else(|| {
            ReadingError::invalid_argument(
                self.pos,
                format!("cannot seek {offset} bytes from offset {base}"),
            )
        })?;

        trace!(from = self.pos, to = target, "seek in memory");
        self.pos = target;
        Ok(target)
    }

    #[inline(always)]
    fn get_byte(&mut self) -> Result<Option<u8>, ReadingError> {
        let byte = self.input.get(self.clamped_pos()).copied();
        if byte.is_some() {
            self.pos += 1;
        }
        Ok(byte)
    }
}
