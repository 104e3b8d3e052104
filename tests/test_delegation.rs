use bin_stream::{ByteSource, Reader, ReadingError, ReadingErrorType};
use std::cell::RefCell;
use std::io::SeekFrom;

/// Byte source that records every call and answers with canned values.
#[derive(Default)]
struct RecordingSource {
    calls: RefCell<Vec<String>>,
}

impl RecordingSource {
    fn record(&self, call: impl Into<String>) {
        self.calls.borrow_mut().push(call.into());
    }

    fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl ByteSource for RecordingSource {
    fn read_into(&mut self, buf: &mut [u8]) -> Result<usize, ReadingError> {
        self.record(format!("read_into {}", buf.len()));
        buf.fill(0x2a);
        Ok(buf.len())
    }

    fn position(&self) -> u64 {
        self.record("position");
        42
    }

    fn seek(&mut self, pos: SeekFrom) -> Result<u64, ReadingError> {
        self.record(format!("seek {pos:?}"));
        Err(ReadingError::invalid_argument(7, "refused"))
    }

    fn set_position(&mut self, pos: u64) -> Result<(), ReadingError> {
        self.record(format!("set_position {pos}"));
        Ok(())
    }

    fn rewind(&mut self) -> Result<(), ReadingError> {
        self.record("rewind");
        Ok(())
    }

    fn read(&mut self, n: usize) -> Result<Vec<u8>, ReadingError> {
        self.record(format!("read {n}"));
        Ok(vec![1; n])
    }

    fn get_byte(&mut self) -> Result<Option<u8>, ReadingError> {
        self.record("get_byte");
        Ok(None)
    }

    fn read_byte(&mut self) -> Result<u8, ReadingError> {
        self.record("read_byte");
        Ok(9)
    }

    fn get_char(&mut self) -> Result<Option<char>, ReadingError> {
        self.record("get_char");
        Ok(Some('g'))
    }

    fn read_char(&mut self) -> Result<char, ReadingError> {
        self.record("read_char");
        Ok('r')
    }
}

#[test]
fn test_delegates_rewind() {
    let mut reader = Reader::new(RecordingSource::default());
    reader.rewind().unwrap();
    assert_eq!(reader.get_ref().calls(), ["rewind"]);
}

#[test]
fn test_delegates_position() {
    let reader = Reader::new(RecordingSource::default());
    assert_eq!(reader.position(), 42);
    assert_eq!(reader.get_ref().calls(), ["position"]);
}

#[test]
fn test_delegates_set_position() {
    let mut reader = Reader::new(RecordingSource::default());
    reader.set_position(42).unwrap();
    assert_eq!(reader.get_ref().calls(), ["set_position 42"]);
}

#[test]
fn test_delegates_seek_and_its_error() {
    let mut reader = Reader::new(RecordingSource::default());
    let err = reader.seek(SeekFrom::Current(42)).unwrap_err();

    // error comes back untouched
    assert!(matches!(err.kind(), ReadingErrorType::InvalidArgument(msg) if msg == "refused"));
    assert_eq!(err.position(), 7);
    assert_eq!(reader.get_ref().calls(), ["seek Current(42)"]);
}

#[test]
fn test_delegates_read() {
    let mut reader = Reader::new(RecordingSource::default());
    assert_eq!(reader.read(3).unwrap(), vec![1, 1, 1]);
    assert_eq!(reader.get_ref().calls(), ["read 3"]);
}

#[test]
fn test_delegates_byte_and_char_reads() {
    let mut reader = Reader::new(RecordingSource::default());
    assert_eq!(reader.read_byte().unwrap(), 9);
    assert_eq!(reader.get_byte().unwrap(), None);
    assert_eq!(reader.read_char().unwrap(), 'r');
    assert_eq!(reader.get_char().unwrap(), Some('g'));
    assert_eq!(
        reader.get_ref().calls(),
        ["read_byte", "get_byte", "read_char", "get_char"]
    );
}

#[test]
fn test_typed_reads_ask_source_for_exact_width() {
    let mut reader = Reader::new(RecordingSource::default());
    assert_eq!(reader.uint16().unwrap(), 0x2a2a);
    assert_eq!(reader.int64().unwrap(), 0x2a2a_2a2a_2a2a_2a2a);
    assert_eq!(
        reader.get_ref().calls(),
        ["position", "read_into 2", "position", "read_into 8"]
    );
}
