//! Terminal and NDJSON output for the CLI.

pub mod error;
pub mod json;
