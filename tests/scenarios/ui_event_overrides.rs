//! Scenario: UI event subscribers override annotation-derived facets
//!
//! Journey: an application subscribes to the UI events of its entities.
//!
//! Steps:
//! 1. Model declares a custom CssClassUiEvent on `acme.Customer`
//! 2. A subscriber answers it; the answer beats the annotation
//! 3. Default title events post only once enabled in config
//! 4. Translatable titles go through the translation table
//!
//! Success Criteria:
//! - Nothing is posted without a target object
//! - Unanswered events fall back to the best non-event facet

use std::sync::Arc;

use serde_json::json;
use tempfile::TempDir;

use metamodel::domain::ports::TranslatableString;
use metamodel::domain::services::{CssClassUiEvent, TitleUiEvent, UiEventKind};
use metamodel::{BootstrapUseCase, InMemoryEventBus, ManagedObject, MetamodelConfig};

use crate::common::*;

fn project(config_toml: &str) -> (TempDir, MetamodelConfig) {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir_all(dir.path().join("model")).unwrap();
    std::fs::write(dir.path().join("model/crm.toml"), CRM_MODEL).unwrap();
    let config: MetamodelConfig = toml::from_str(config_toml).unwrap();
    let config = config.rooted_at(dir.path());
    (dir, config)
}

fn ada() -> ManagedObject {
    ManagedObject::new("crm.Customer", json!({ "name": "Ada" }))
}

/// SCENARIO: a subscriber answers the custom css class event
#[test]
fn scenario_subscriber_overrides_css_class() {
    let (_dir, config) = project("");
    let bus = Arc::new(InMemoryEventBus::new());
    bus.subscribe::<CssClassUiEvent, _>(|event| {
        let vip = event.source()["vip"].as_bool().unwrap_or(false);
        if vip {
            event.set_css_class("vip");
        }
    });

    let mut metamodel = BootstrapUseCase::new(config)
        .with_event_bus(bus.clone())
        .execute()
        .unwrap();

    let vip = ManagedObject::new("crm.Customer", json!({ "name": "Bob", "vip": true }));
    assert_eq!(metamodel.css_class("crm.Customer", &vip).unwrap().as_deref(), Some("vip"));
    // unanswered: the annotation applies
    assert_eq!(
        metamodel.css_class("crm.Customer", &ada()).unwrap().as_deref(),
        Some("customer")
    );
    assert_eq!(bus.posted(), 2);

    // nothing to ask about, nothing posted
    let empty = ManagedObject::empty("crm.Customer");
    assert_eq!(metamodel.css_class("crm.Customer", &empty).unwrap(), None);
    assert_eq!(metamodel.css_class("crm.Customer", &ManagedObject::Unspecified).unwrap(), None);
    assert_eq!(bus.posted(), 2);
}

/// SCENARIO: default title events stay silent until enabled
#[test]
fn scenario_default_title_event_posts_only_when_enabled() {
    let subscriber = |bus: &InMemoryEventBus| {
        bus.subscribe::<TitleUiEvent, _>(|event| event.set_title("Dr. Ada"));
    };

    let (_dir, config) = project("");
    let bus = Arc::new(InMemoryEventBus::new());
    subscriber(&bus);
    let mut metamodel = BootstrapUseCase::new(config)
        .with_event_bus(bus.clone())
        .execute()
        .unwrap();
    assert_eq!(metamodel.title("crm.Customer", &ada()).unwrap().as_deref(), Some("Ada"));
    assert_eq!(bus.posted(), 0);

    let (_dir, config) = project("[events]\ntitle_ui_event_post_for_default = true\n");
    assert!(config.events.post_for_default(UiEventKind::Title));
    let bus = Arc::new(InMemoryEventBus::new());
    subscriber(&bus);
    let mut metamodel = BootstrapUseCase::new(config)
        .with_event_bus(bus.clone())
        .execute()
        .unwrap();
    assert_eq!(
        metamodel.title("crm.Customer", &ada()).unwrap().as_deref(),
        Some("Dr. Ada")
    );
    assert_eq!(bus.posted(), 1);
}

/// SCENARIO: a translatable title is translated in the class's title() context
#[test]
fn scenario_translatable_title_uses_translation_table() {
    let (dir, config) = project(
        "[events]\ntitle_ui_event_post_for_default = true\n\n[translation]\nfile = \"translations.toml\"\n",
    );
    std::fs::write(
        dir.path().join("translations.toml"),
        "[\"acme.Customer#title()\"]\n\"Customer {name}\" = \"Kunde {name}\"\n",
    )
    .unwrap();

    let bus = Arc::new(InMemoryEventBus::new());
    bus.subscribe::<TitleUiEvent, _>(|event| {
        let name = event.source()["name"].as_str().unwrap_or_default().to_string();
        event.set_translatable_title(TranslatableString::tr("Customer {name}").with_arg("name", name));
    });
    let mut metamodel = BootstrapUseCase::new(config)
        .with_event_bus(bus)
        .execute()
        .unwrap();

    assert_eq!(
        metamodel.title("crm.Customer", &ada()).unwrap().as_deref(),
        Some("Kunde Ada")
    );
}
