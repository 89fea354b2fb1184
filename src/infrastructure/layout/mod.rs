//! Layout Resource Implementations

mod fs_loader;

pub use fs_loader::{FsLayoutLoader, OBJECT_LAYOUT_SUFFIX};
