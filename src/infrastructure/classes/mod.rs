//! Class Source Implementations

mod fs;
mod in_memory;

pub use fs::{model_files, ClassSourceError, FsClassSource};
pub use in_memory::InMemoryClassSource;
