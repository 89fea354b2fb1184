//! Event Bus Port
//!
//! Synchronous publish of domain events to subscribers. Subscribers mutate
//! the event in place; `post` returns nothing.

use std::any::Any;

use crate::domain::value_objects::Identifier;

/// An event that can be posted through the event bus.
pub trait DomainEvent: Any + Send {
    /// The configured event type name (e.g. a custom `TitleUiEvent` subtype).
    fn event_type(&self) -> &str;

    /// The metamodel element the event was posted for, if any.
    fn subject(&self) -> Option<&Identifier> {
        None
    }

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Process-wide event publishing service.
///
/// Posting happens on the calling thread; a panicking subscriber propagates
/// to the caller.
pub trait EventBusService: Send + Sync {
    fn post(&self, event: &mut dyn DomainEvent);

    /// Number of registered subscribers
    fn subscriber_count(&self) -> usize {
        0
    }
}

/// Event bus without subscribers.
pub struct NoopEventBus;

impl EventBusService for NoopEventBus {
    fn post(&self, _event: &mut dyn DomainEvent) {
        // Do nothing
    }
}
