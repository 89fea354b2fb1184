//! Watch Use Case implementation

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::channel;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};

use crate::application::bootstrap::{source_fingerprint, BootstrapUseCase, Metamodel};
use crate::config::MetamodelConfig;
use crate::domain::ports::EventBusService;
use crate::domain::value_objects::Fingerprint;
use crate::infrastructure::InMemoryEventBus;

use super::event::{is_watched, WatchEvent, WatcherState};

/// Result of one refresh attempt
#[derive(Debug, Clone, PartialEq)]
pub enum RefreshOutcome {
    Unchanged,
    Reloaded { specs: usize, failures: usize },
}

/// Watch Use Case
///
/// Keeps a metamodel in sync with its model and layout directories. This is
/// the entry point for `metamodel watch`.
pub struct WatchUseCase {
    config: MetamodelConfig,
    event_bus: Arc<dyn EventBusService>,
}

impl WatchUseCase {
    pub fn new(config: MetamodelConfig) -> Self {
        Self {
            config,
            event_bus: Arc::new(InMemoryEventBus::new()),
        }
    }

    pub fn with_event_bus(mut self, event_bus: Arc<dyn EventBusService>) -> Self {
        self.event_bus = event_bus;
        self
    }

    /// Initial load plus its fingerprint.
    pub fn bootstrap(&self) -> Result<(Metamodel, Fingerprint)> {
        let metamodel = BootstrapUseCase::new(self.config.clone())
            .with_event_bus(Arc::clone(&self.event_bus))
            .execute()?;
        let fingerprint = source_fingerprint(&self.config)?;
        Ok((metamodel, fingerprint))
    }

    /// Rebuilds `metamodel` when its sources changed since `last`.
    ///
    /// On error `metamodel` and `last` are left as they were.
    pub fn refresh(&self, metamodel: &mut Metamodel, last: &mut Fingerprint) -> Result<RefreshOutcome> {
        let current = source_fingerprint(&self.config)?;
        if current == *last {
            return Ok(RefreshOutcome::Unchanged);
        }

        // a failed rebuild must leave `metamodel` untouched
        let rebuilt = BootstrapUseCase::new(self.config.clone())
            .with_event_bus(Arc::clone(&self.event_bus))
            .execute()
            .context("rebuilding metamodel")?;
        *metamodel = rebuilt;
        *last = current;

        let outcome = RefreshOutcome::Reloaded {
            specs: metamodel.loader().len(),
            failures: metamodel.validation_failures().len(),
        };
        tracing::info!(?outcome, fingerprint = %last, "metamodel reloaded");
        Ok(outcome)
    }

    /// Start watching (blocking)
    ///
    /// Returns once `running` is set to false.
    pub fn start<F>(&self, running: Arc<AtomicBool>, on_event: F) -> Result<()>
    where
        F: Fn(WatchEvent),
    {
        let model_dir = self.config.introspection.model_dir.clone();
        let layout_dir = self.config.layout.directory.clone();
        on_event(WatchEvent::WatchStarted {
            model_dir: model_dir.display().to_string(),
            layout_dir: layout_dir.display().to_string(),
        });

        let (mut metamodel, mut fingerprint) = match self.bootstrap() {
            Ok(loaded) => loaded,
            Err(e) => {
                on_event(WatchEvent::Error {
                    message: format!("{:#}", e),
                });
                return Err(e);
            }
        };
        on_event(WatchEvent::Reloaded {
            specs: metamodel.loader().len(),
            failures: metamodel.validation_failures().len(),
            fingerprint: fingerprint.to_string(),
        });

        let (tx, rx) = channel::<PathBuf>();
        let mut watcher = RecommendedWatcher::new(
            move |res: Result<Event, notify::Error>| {
                if let Ok(event) = res {
                    for path in event.paths {
                        let _ = tx.send(path);
                    }
                }
            },
            Config::default(),
        )
        .context("creating file watcher")?;

        watcher
            .watch(&model_dir, RecursiveMode::Recursive)
            .with_context(|| format!("watching {}", model_dir.display()))?;
        if layout_dir.is_dir() {
            watcher
                .watch(&layout_dir, RecursiveMode::NonRecursive)
                .with_context(|| format!("watching {}", layout_dir.display()))?;
        }

        let mut state = WatcherState::new(Duration::from_millis(self.config.prototyping.debounce_ms));

        // notify may report existing files right after registration
        let cooldown_end = Instant::now() + Duration::from_millis(200);
        while Instant::now() < cooldown_end {
            let _ = rx.recv_timeout(Duration::from_millis(50));
        }

        while running.load(Ordering::SeqCst) {
            if let Ok(path) = rx.recv_timeout(Duration::from_millis(50)) {
                if is_watched(&path) {
                    state.add_change(path);
                }
            }

            if !state.should_reload() {
                continue;
            }
            let changes = state.take_changes();
            on_event(WatchEvent::FilesChanged {
                paths: changes.iter().map(|p| p.display().to_string()).collect(),
            });

            match self.refresh(&mut metamodel, &mut fingerprint) {
                Ok(RefreshOutcome::Unchanged) => on_event(WatchEvent::Unchanged),
                Ok(RefreshOutcome::Reloaded { specs, failures }) => on_event(WatchEvent::Reloaded {
                    specs,
                    failures,
                    fingerprint: fingerprint.to_string(),
                }),
                Err(e) => {
                    tracing::warn!(error = %e, "reload failed; keeping previous metamodel");
                    on_event(WatchEvent::Error {
                        message: format!("{:#}", e),
                    });
                }
            }
        }

        on_event(WatchEvent::Shutdown);
        Ok(())
    }
}
