//! LayoutResourceLoader port
//!
//! Loads layout documents. A missing resource is `Ok(None)`; a resource that
//! exists but cannot be read or parsed is an error the caller logs before
//! falling back to annotation-derived defaults.

use std::path::PathBuf;

use crate::domain::entities::{MenuBars, ObjectLayout};

pub trait LayoutResourceLoader: Send + Sync {
    fn object_layout(&self, class_name: &str) -> Result<Option<ObjectLayout>, LayoutLoadError>;

    fn menu_bars(&self) -> Result<Option<MenuBars>, LayoutLoadError>;
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LayoutLoadError {
    #[error("layout resource unreadable: {path}: {message}")]
    Unreadable { path: PathBuf, message: String },

    #[error("malformed layout resource {path}: {message}")]
    Malformed { path: PathBuf, message: String },
}

/// Loader that never finds a layout.
pub struct NoLayouts;

impl LayoutResourceLoader for NoLayouts {
    fn object_layout(&self, _class_name: &str) -> Result<Option<ObjectLayout>, LayoutLoadError> {
        Ok(None)
    }

    fn menu_bars(&self) -> Result<Option<MenuBars>, LayoutLoadError> {
        Ok(None)
    }
}
