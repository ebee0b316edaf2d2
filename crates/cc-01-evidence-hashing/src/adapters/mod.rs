//! # Adapters
//!
//! Default `ByteSource` implementations.

mod file;
mod memory;

pub use file::FileByteSource;
pub use memory::MemoryByteSource;
