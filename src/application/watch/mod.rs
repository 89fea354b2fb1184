//! Watch Use Case
//!
//! Hot reload for prototyping. It orchestrates:
//! - File system monitoring (via `notify` crate)
//! - Debouncing (`prototyping.debounce_ms`)
//! - Fingerprinting, so editor saves that change nothing skip the rebuild
//! - A full metamodel rebuild, menu bars included
//!
//! A failed rebuild is reported and the previous metamodel stays in use.

mod event;
mod use_case;


pub use event::{is_watched, WatchEvent, WatcherState, WATCHED_EXTENSIONS};
pub use use_case::{RefreshOutcome, WatchUseCase};
