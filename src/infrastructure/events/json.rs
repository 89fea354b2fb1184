//! JSON Event Trace
//!
//! Wraps another event bus and writes one NDJSON line per posted event,
//! before and after dispatch, for `metamodel explain --trace-events`.

use std::io::{self, Write};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::domain::ports::{DomainEvent, EventBusService};

pub struct JsonEventTrace {
    inner: Arc<dyn EventBusService>,
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
    sequence: AtomicUsize,
}

impl JsonEventTrace {
    /// Trace to stdout
    pub fn stdout(inner: Arc<dyn EventBusService>) -> Self {
        Self::with_writer(inner, io::stdout())
    }

    pub fn with_writer<W: Write + Send + 'static>(inner: Arc<dyn EventBusService>, writer: W) -> Self {
        Self {
            inner,
            writer: Mutex::new(Box::new(writer)),
            sequence: AtomicUsize::new(0),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl EventBusService for JsonEventTrace {
    fn post(&self, event: &mut dyn DomainEvent) {
        let seq = self.sequence.fetch_add(1, Ordering::SeqCst);
        let subject = event.subject().map(|id| id.to_string());
        self.write_event(serde_json::json!({
            "event": "post",
            "seq": seq,
            "type": event.event_type(),
            "subject": subject,
            "subscribers": self.inner.subscriber_count(),
        }));

        self.inner.post(event);

        self.write_event(serde_json::json!({
            "event": "posted",
            "seq": seq,
            "type": event.event_type(),
        }));
    }

    fn subscriber_count(&self) -> usize {
        self.inner.subscriber_count()
    }
}
