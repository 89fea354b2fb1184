//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod class_source;
pub mod event_bus;
pub mod layout_resources;
pub mod translation;

use std::sync::Arc;

pub use class_source::ClassSource;
pub use event_bus::{DomainEvent, EventBusService, NoopEventBus};
pub use layout_resources::{LayoutLoadError, LayoutResourceLoader, NoLayouts};
pub use translation::{
    NoopTranslationService, TranslatableString, TranslationContext, TranslationService,
};

/// Services facet queries need at call time.
#[derive(Clone)]
pub struct FacetServices {
    event_bus: Arc<dyn EventBusService>,
    translation: Arc<dyn TranslationService>,
}

impl FacetServices {
    pub fn new(
        event_bus: Arc<dyn EventBusService>,
        translation: Arc<dyn TranslationService>,
    ) -> Self {
        Self {
            event_bus,
            translation,
        }
    }

    pub fn with_event_bus(mut self, event_bus: Arc<dyn EventBusService>) -> Self {
        self.event_bus = event_bus;
        self
    }

    pub fn with_translation(mut self, translation: Arc<dyn TranslationService>) -> Self {
        self.translation = translation;
        self
    }

    pub fn event_bus(&self) -> &dyn EventBusService {
        self.event_bus.as_ref()
    }

    pub fn translation(&self) -> &dyn TranslationService {
        self.translation.as_ref()
    }
}

impl Default for FacetServices {
    fn default() -> Self {
        Self::new(Arc::new(NoopEventBus), Arc::new(NoopTranslationService))
    }
}

impl std::fmt::Debug for FacetServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FacetServices")
            .field("subscribers", &self.event_bus.subscriber_count())
            .finish()
    }
}
