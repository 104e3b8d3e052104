//! Seekable byte streams and the errors reading from them can produce.
pub(crate) mod buffered_byte_source;
pub(crate) mod byte_source;
pub(crate) mod in_memory_byte_source;
pub mod reading_error;

pub use buffered_byte_source::BufferedByteSource;
pub use byte_source::ByteSource;
pub use in_memory_byte_source::InMemoryByteSource;
pub use reading_error::{ReadingError, ReadingErrorType};
