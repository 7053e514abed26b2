//! Ready-made sinks
//!
//! A [`Logger`](crate::Logger) writes to any `Write + Send` value. These cover
//! the two cases that need more than a bare handle: an inspectable in-memory
//! buffer and an append-mode log file.

pub mod file;
pub mod memory;

pub use file::FileSink;
pub use memory::MemorySink;
