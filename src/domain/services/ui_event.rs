//! UI event dispatch
//!
//! Title, icon, css class and layout can be overridden at query time by an
//! event subscriber. All four use one algorithm:
//!
//! 1. no target (unspecified or empty) → `None`, nothing posted
//! 2. build the typed event around a shared handle to the pojo
//! 3. post synchronously through the event bus
//! 4. result unset → delegate to the holder's best non-event facet
//! 5. result set → translate where applicable and return it

use std::any::Any;

use crate::domain::entities::{Facet, FacetHolder, ManagedObject, Pojo, UiEventFacet};
use crate::domain::ports::{DomainEvent, FacetServices, TranslatableString, TranslationContext};
use crate::domain::value_objects::{FacetType, IconSize, Identifier};

/// Namespace of the built-in event types.
pub const BUILTIN_EVENT_NAMESPACE: &str = "metamodel.events";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UiEventKind {
    Title,
    Icon,
    CssClass,
    Layout,
}

/// How a configured event type relates to the built-in sentinels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventTypeClass {
    /// The built-in default; posts only when configured to
    Default,
    /// The built-in no-op; never posts
    Noop,
    Custom,
}

impl UiEventKind {
    pub const ALL: [UiEventKind; 4] = [
        UiEventKind::Title,
        UiEventKind::Icon,
        UiEventKind::CssClass,
        UiEventKind::Layout,
    ];

    pub fn facet_type(self) -> FacetType {
        match self {
            UiEventKind::Title => FacetType::Title,
            UiEventKind::Icon => FacetType::Icon,
            UiEventKind::CssClass => FacetType::CssClass,
            UiEventKind::Layout => FacetType::Layout,
        }
    }

    /// Simple name of the built-in event type, e.g. `TitleUiEvent`.
    pub fn event_name(self) -> &'static str {
        match self {
            UiEventKind::Title => "TitleUiEvent",
            UiEventKind::Icon => "IconUiEvent",
            UiEventKind::CssClass => "CssClassUiEvent",
            UiEventKind::Layout => "LayoutUiEvent",
        }
    }

    pub fn default_event_type(self) -> String {
        format!("{}.{}.Default", BUILTIN_EVENT_NAMESPACE, self.event_name())
    }

    pub fn noop_event_type(self) -> String {
        format!("{}.{}.Noop", BUILTIN_EVENT_NAMESPACE, self.event_name())
    }

    pub fn classify(self, event_type: &str) -> EventTypeClass {
        if event_type == self.default_event_type() {
            EventTypeClass::Default
        } else if event_type == self.noop_event_type() {
            EventTypeClass::Noop
        } else {
            EventTypeClass::Custom
        }
    }

    /// Whether a facet posting `event_type` should exist at all.
    pub fn is_postable(self, event_type: &str, post_for_default: bool) -> bool {
        match self.classify(event_type) {
            EventTypeClass::Noop => false,
            EventTypeClass::Default => post_for_default,
            EventTypeClass::Custom => true,
        }
    }
}

/// Fields every UI event carries.
#[derive(Debug, Clone)]
pub struct UiEventSource {
    event_type: String,
    source: Pojo,
    identifier: Identifier,
}

impl UiEventSource {
    /// The domain object the event is about.
    pub fn source(&self) -> &serde_json::Value {
        &self.source
    }

    /// Identifier of the class whose facet posted the event.
    pub fn identifier(&self) -> &Identifier {
        &self.identifier
    }
}

macro_rules! ui_event {
    ($(#[$meta:meta])* $name:ident { $($field:ident : $ty:ty),* $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name {
            base: UiEventSource,
            $($field: $ty,)*
        }

        impl $name {
            pub fn source(&self) -> &serde_json::Value {
                self.base.source()
            }

            pub fn identifier(&self) -> &Identifier {
                self.base.identifier()
            }
        }

        impl DomainEvent for $name {
            fn event_type(&self) -> &str {
                &self.base.event_type
            }

            fn subject(&self) -> Option<&Identifier> {
                Some(self.base.identifier())
            }

            fn as_any(&self) -> &dyn Any {
                self
            }

            fn as_any_mut(&mut self) -> &mut dyn Any {
                self
            }
        }
    };
}

ui_event!(
    /// Asks subscribers for an object's title, plain or translatable.
    TitleUiEvent {
        title: Option<String>,
        translatable_title: Option<TranslatableString>,
    }
);

ui_event!(
    /// Asks subscribers for an object's icon name at a given size.
    IconUiEvent {
        size: IconSize,
        icon_name: Option<String>,
    }
);

ui_event!(
    CssClassUiEvent {
        css_class: Option<String>,
    }
);

ui_event!(
    /// Asks subscribers which named layout variant to use.
    LayoutUiEvent {
        layout: Option<String>,
    }
);

impl TitleUiEvent {
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    pub fn translatable_title(&self) -> Option<&TranslatableString> {
        self.translatable_title.as_ref()
    }

    pub fn set_translatable_title(&mut self, title: TranslatableString) {
        self.translatable_title = Some(title);
    }
}

impl IconUiEvent {
    pub fn size(&self) -> IconSize {
        self.size
    }

    pub fn icon_name(&self) -> Option<&str> {
        self.icon_name.as_deref()
    }

    pub fn set_icon_name(&mut self, icon_name: impl Into<String>) {
        self.icon_name = Some(icon_name.into());
    }
}

impl CssClassUiEvent {
    pub fn css_class(&self) -> Option<&str> {
        self.css_class.as_deref()
    }

    pub fn set_css_class(&mut self, css_class: impl Into<String>) {
        self.css_class = Some(css_class.into());
    }
}

impl LayoutUiEvent {
    pub fn layout(&self) -> Option<&str> {
        self.layout.as_deref()
    }

    pub fn set_layout(&mut self, layout: impl Into<String>) {
        self.layout = Some(layout.into());
    }
}

/// Post `build`'s event, read its answer with `answer`, and otherwise
/// delegate to the best non-event facet through `fallback`.
fn post_then_fallback<E, B, A, F>(
    facet: &UiEventFacet,
    holder: &FacetHolder,
    target: &ManagedObject,
    services: &FacetServices,
    build: B,
    answer: A,
    fallback: F,
) -> Option<String>
where
    E: DomainEvent,
    B: FnOnce(UiEventSource) -> E,
    A: FnOnce(E) -> Option<String>,
    F: FnOnce(&Facet) -> Option<String>,
{
    let pojo = target.pojo()?;
    let mut event = build(UiEventSource {
        event_type: facet.event_type.clone(),
        source: Pojo::clone(pojo),
        identifier: holder.identifier().to_class_identifier(),
    });

    tracing::trace!(
        event_type = %facet.event_type,
        holder = %holder.identifier(),
        "posting ui event"
    );
    services.event_bus().post(&mut event);

    match answer(event) {
        Some(result) => Some(result),
        None => holder
            .non_event_facet(facet.kind.facet_type())
            .and_then(fallback),
    }
}

pub fn title(
    facet: &UiEventFacet,
    holder: &FacetHolder,
    target: &ManagedObject,
    services: &FacetServices,
) -> Option<String> {
    post_then_fallback(
        facet,
        holder,
        target,
        services,
        |base| TitleUiEvent {
            base,
            title: None,
            translatable_title: None,
        },
        |event| {
            if let Some(translatable) = event.translatable_title {
                let context =
                    TranslationContext::for_method(event.base.identifier.class_name(), "title");
                return Some(translatable.translate(services.translation(), &context));
            }
            event.title
        },
        |fallback| fallback.title(holder, target, services),
    )
}

pub fn icon_name(
    facet: &UiEventFacet,
    holder: &FacetHolder,
    target: &ManagedObject,
    size: IconSize,
    services: &FacetServices,
) -> Option<String> {
    post_then_fallback(
        facet,
        holder,
        target,
        services,
        |base| IconUiEvent {
            base,
            size,
            icon_name: None,
        },
        |event| event.icon_name,
        |fallback| fallback.icon_name(holder, target, size, services),
    )
}

pub fn css_class(
    facet: &UiEventFacet,
    holder: &FacetHolder,
    target: &ManagedObject,
    services: &FacetServices,
) -> Option<String> {
    post_then_fallback(
        facet,
        holder,
        target,
        services,
        |base| CssClassUiEvent {
            base,
            css_class: None,
        },
        |event| event.css_class,
        |fallback| fallback.css_class(holder, target, services),
    )
}

pub fn layout(
    facet: &UiEventFacet,
    holder: &FacetHolder,
    target: &ManagedObject,
    services: &FacetServices,
) -> Option<String> {
    post_then_fallback(
        facet,
        holder,
        target,
        services,
        |base| LayoutUiEvent { base, layout: None },
        |event| event.layout,
        |fallback| fallback.layout(holder, target, services),
    )
}
