//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `classes/` - Class sources (model files, in-memory)
//! - `layout/` - Layout resources read from the layout directory
//! - `events/` - Event bus implementations
//! - `translation/` - Translation tables

pub mod classes;
pub mod events;
pub mod layout;
pub mod translation;

// Re-export for convenience
pub use classes::{ClassSourceError, FsClassSource, InMemoryClassSource};
pub use events::{InMemoryEventBus, JsonEventTrace};
pub use layout::FsLayoutLoader;
pub use translation::TomlTranslationService;
