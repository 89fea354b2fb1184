//! Error types for the metamodel
//!
//! Uses `thiserror` for library errors. Absence (no facet, no layout, no
//! subscriber answer) is never an error and is modelled with `Option`.

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::entities::ValidationFailures;

/// Result type alias for metamodel operations
pub type MetamodelResult<T> = Result<T, MetamodelError>;

/// Main error type for metamodel operations
#[derive(Error, Debug)]
pub enum MetamodelError {
    /// No descriptor registered for the requested class
    #[error("no domain class registered under '{class_name}'")]
    UnknownClass { class_name: String },

    /// Query made against an identifier of the wrong kind
    #[error("illegal state: {message}")]
    IllegalState { message: String },

    /// Aggregated structural defects found by a full-model validation pass
    #[error("metamodel is invalid ({} failure(s)):\n{}", .0.len(), .0)]
    ModelInvalid(ValidationFailures),

    /// A model or configuration file could not be parsed
    #[error("invalid {format} in {file}: {message}")]
    Parse {
        format: &'static str,
        file: PathBuf,
        message: String,
    },

    /// Directory not found
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl MetamodelError {
    pub fn illegal_state(message: impl Into<String>) -> Self {
        Self::IllegalState {
            message: message.into(),
        }
    }
}
