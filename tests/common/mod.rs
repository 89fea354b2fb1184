//! Common test utilities for CLI and scenario tests.
//!
//! - `TestEnv`: isolated project and home directories plus a CLI runner
//! - Fixtures: a small CRM model and its menubars layout

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
