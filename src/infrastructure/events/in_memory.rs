//! In-process event bus
//!
//! Subscribers register for a concrete event struct and, optionally, a single
//! configured event type name. Posting runs every matching subscriber on the
//! calling thread, in registration order. Handlers run on a snapshot of the
//! subscriber list, so a handler may subscribe; the new subscriber sees the
//! next post.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use crate::domain::ports::{DomainEvent, EventBusService};

type Handler = Arc<dyn Fn(&mut dyn DomainEvent) + Send + Sync>;

#[derive(Default)]
pub struct InMemoryEventBus {
    subscribers: RwLock<Vec<Handler>>,
    posted: AtomicUsize,
}

impl InMemoryEventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Receives every posted `E`, whatever its configured event type.
    pub fn subscribe<E, F>(&self, handler: F)
    where
        E: DomainEvent,
        F: Fn(&mut E) + Send + Sync + 'static,
    {
        self.register(Arc::new(move |event: &mut dyn DomainEvent| {
            if let Some(event) = event.as_any_mut().downcast_mut::<E>() {
                handler(event);
            }
        }));
    }

    /// Receives `E` only when it was posted under `event_type`, e.g. a
    /// class-specific `CssClassUiEvent` subtype.
    pub fn subscribe_to<E, F>(&self, event_type: impl Into<String>, handler: F)
    where
        E: DomainEvent,
        F: Fn(&mut E) + Send + Sync + 'static,
    {
        let event_type = event_type.into();
        self.register(Arc::new(move |event: &mut dyn DomainEvent| {
            if event.event_type() != event_type {
                return;
            }
            if let Some(event) = event.as_any_mut().downcast_mut::<E>() {
                handler(event);
            }
        }));
    }

    fn register(&self, handler: Handler) {
        let mut subscribers = self
            .subscribers
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        subscribers.push(handler);
        tracing::debug!(subscribers = subscribers.len(), "event subscriber registered");
    }

    /// Number of events posted so far.
    pub fn posted(&self) -> usize {
        self.posted.load(Ordering::SeqCst)
    }
}

impl EventBusService for InMemoryEventBus {
    fn post(&self, event: &mut dyn DomainEvent) {
        self.posted.fetch_add(1, Ordering::SeqCst);
        let subscribers: Vec<Handler> = self
            .subscribers
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone();
        tracing::trace!(
            event_type = event.event_type(),
            subscribers = subscribers.len(),
            "posting event"
        );
        for handler in subscribers.iter() {
            handler(&mut *event);
        }
    }

    fn subscriber_count(&self) -> usize {
        self.subscribers
            .read()
            .map(|s| s.len())
            .unwrap_or_else(|poisoned| poisoned.into_inner().len())
    }
}

impl std::fmt::Debug for InMemoryEventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryEventBus")
            .field("subscribers", &self.subscriber_count())
            .field("posted", &self.posted())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::any::Any;

    struct Greeting {
        kind: &'static str,
        text: Option<String>,
    }

    impl DomainEvent for Greeting {
        fn event_type(&self) -> &str {
            self.kind
        }

        fn as_any(&self) -> &dyn Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn Any {
            self
        }
    }

    struct Other;

    impl DomainEvent for Other {
        fn event_type(&self) -> &str {
            "test.Other"
        }

        fn as_any(&self) -> &dyn Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn Any {
            self
        }
    }

    fn greeting(kind: &'static str) -> Greeting {
        Greeting { kind, text: None }
    }

    #[test]
    fn typed_subscriber_only_sees_its_event() {
        let bus = InMemoryEventBus::new();
        bus.subscribe::<Greeting, _>(|g| g.text = Some("hi".into()));

        let mut event = greeting("test.Greeting");
        bus.post(&mut event);
        bus.post(&mut Other);

        assert_eq!(event.text.as_deref(), Some("hi"));
        assert_eq!(bus.posted(), 2);
        assert_eq!(bus.subscriber_count(), 1);
    }

    #[test]
    fn subscribe_to_filters_on_event_type() {
        let bus = InMemoryEventBus::new();
        bus.subscribe_to::<Greeting, _>("test.Loud", |g| g.text = Some("HI".into()));

        let mut quiet = greeting("test.Quiet");
        let mut loud = greeting("test.Loud");
        bus.post(&mut quiet);
        bus.post(&mut loud);

        assert_eq!(quiet.text, None);
        assert_eq!(loud.text.as_deref(), Some("HI"));
    }

    #[test]
    fn later_subscribers_see_earlier_answers() {
        let bus = InMemoryEventBus::new();
        bus.subscribe::<Greeting, _>(|g| g.text = Some("a".into()));
        bus.subscribe::<Greeting, _>(|g| {
            let prev = g.text.take().unwrap_or_default();
            g.text = Some(format!("{}b", prev));
        });

        let mut event = greeting("test.Greeting");
        bus.post(&mut event);
        assert_eq!(event.text.as_deref(), Some("ab"));
    }

    #[test]
    fn subscriber_may_subscribe_while_handling() {
        let bus = Arc::new(InMemoryEventBus::new());
        let inner = Arc::clone(&bus);
        bus.subscribe::<Greeting, _>(move |g| {
            g.text = Some("outer".into());
            inner.subscribe::<Other, _>(|_| {});
        });

        bus.post(&mut greeting("test.Greeting"));
        assert_eq!(bus.subscriber_count(), 2);

        bus.post(&mut greeting("test.Greeting"));
        assert_eq!(bus.subscriber_count(), 3);
        assert_eq!(bus.posted(), 2);
    }

    #[test]
    fn panicking_subscriber_propagates() {
        let bus = InMemoryEventBus::new();
        bus.subscribe::<Greeting, _>(|_| panic!("subscriber failed"));

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            bus.post(&mut greeting("test.Greeting"));
        }));
        assert!(result.is_err());
        // the bus stays usable
        assert_eq!(bus.subscriber_count(), 1);
    }
}
