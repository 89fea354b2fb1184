//! Scenario: Prototyping with hot reload
//!
//! Journey: a developer edits model and layout files while a watcher keeps
//! the metamodel current.
//!
//! Steps:
//! 1. Bootstrap a project with a model and a menubars layout
//! 2. Rename a menu action in the layout; the override shows up
//! 3. Save a broken model; the previous metamodel keeps working
//! 4. Fix it; the new class is picked up
//!
//! Success Criteria:
//! - Unchanged saves do not rebuild
//! - Errors never leave a half-built metamodel behind

use tempfile::TempDir;

use metamodel::application::RefreshOutcome;
use metamodel::{MetamodelConfig, WatchUseCase};

use crate::common::*;

#[test]
fn scenario_edit_layout_and_model_while_watching() {
    // Step 1
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    std::fs::create_dir_all(root.join("model")).unwrap();
    std::fs::create_dir_all(root.join("layouts")).unwrap();
    std::fs::write(root.join("model/crm.toml"), CRM_MODEL).unwrap();
    std::fs::write(root.join("layouts/menubars.layout.toml"), MENUBARS).unwrap();
    let config = MetamodelConfig::default().rooted_at(root);

    let watch = WatchUseCase::new(config);
    let (mut metamodel, mut fingerprint) = watch.bootstrap().unwrap();
    let spec = metamodel.loader().specification("acme.CustomerMenu").unwrap();
    assert_eq!(spec.action("findByName").unwrap().name(), "Find");
    assert_eq!(
        watch.refresh(&mut metamodel, &mut fingerprint).unwrap(),
        RefreshOutcome::Unchanged
    );

    // Step 2
    std::fs::write(
        root.join("layouts/menubars.layout.toml"),
        MENUBARS.replace("named = \"Find\"", "named = \"Search\""),
    )
    .unwrap();
    assert!(matches!(
        watch.refresh(&mut metamodel, &mut fingerprint).unwrap(),
        RefreshOutcome::Reloaded { specs: 2, .. }
    ));
    let spec = metamodel.loader().specification("acme.CustomerMenu").unwrap();
    assert_eq!(spec.action("findByName").unwrap().name(), "Search");

    // Step 3
    std::fs::write(root.join("model/orders.yaml"), "classes: [").unwrap();
    assert!(watch.refresh(&mut metamodel, &mut fingerprint).is_err());
    assert_eq!(metamodel.loader().len(), 2);

    // Step 4
    std::fs::write(root.join("model/orders.yaml"), ORDER_MENU_YAML).unwrap();
    assert!(matches!(
        watch.refresh(&mut metamodel, &mut fingerprint).unwrap(),
        RefreshOutcome::Reloaded { specs: 3, failures: 0 }
    ));
    assert!(metamodel
        .menu_bars()
        .actions()
        .any(|a| a.object_type == "acme.OrderMenu" && a.id == "recent"));
}
