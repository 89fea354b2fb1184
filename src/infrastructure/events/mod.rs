//! Event Bus Implementations
//!
//! - InMemoryEventBus: typed in-process subscribers
//! - JsonEventTrace: NDJSON trace of posted events around another bus

mod in_memory;
mod json;

pub use in_memory::InMemoryEventBus;
pub use json::JsonEventTrace;
