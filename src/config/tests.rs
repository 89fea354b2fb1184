//! Tests for the config module

use super::loader::load_with_warnings;
use super::types::*;
use crate::domain::services::ui_event::UiEventKind;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn test_config_default() {
    let config = MetamodelConfig::default();

    assert_eq!(config.introspection.mode, IntrospectionMode::Full);
    assert_eq!(config.introspection.model_dir, PathBuf::from("model"));
    assert_eq!(config.layout.menubars_file, "menubars.layout.toml");
    assert!(!config.prototyping.hot_reload);
    assert!(config.validation.fail_on_invalid);
    for kind in UiEventKind::ALL {
        assert!(!config.events.post_for_default(kind));
    }
}

#[test]
fn test_config_parse_toml() {
    let toml = r#"
[introspection]
mode = "lazy"
model_dir = "domain"

[events]
css_class_ui_event_post_for_default = true

[layout]
directory = "ui"

[prototyping]
hot_reload = true
"#;

    let config: MetamodelConfig = toml::from_str(toml).unwrap();

    assert_eq!(config.introspection.mode, IntrospectionMode::Lazy);
    assert_eq!(config.introspection.model_dir, PathBuf::from("domain"));
    assert!(config.events.post_for_default(UiEventKind::CssClass));
    assert!(!config.events.post_for_default(UiEventKind::Title));
    assert_eq!(config.layout.directory, PathBuf::from("ui"));
    assert_eq!(config.layout.menubars_file, "menubars.layout.toml");
    assert!(config.prototyping.hot_reload);
}

#[test]
fn test_unknown_keys_become_warnings() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("metamodel.toml");
    fs::write(
        &path,
        "[events]\ncss_class_ui_event_post_for_defualt = true\n\n[prototyping]\nhot_reload = true\n",
    )
    .unwrap();

    let (config, warnings) = load_with_warnings(&path).unwrap();

    assert!(config.prototyping.hot_reload);
    assert!(!config.events.post_for_default(UiEventKind::CssClass));
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].key, "css_class_ui_event_post_for_defualt");
    assert_eq!(warnings[0].line, Some(2));
    assert_eq!(
        warnings[0].suggestion.as_deref(),
        Some("css_class_ui_event_post_for_default")
    );
}

#[test]
fn test_malformed_config_is_parse_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("metamodel.toml");
    fs::write(&path, "[events\n").unwrap();

    let err = MetamodelConfig::load(&path).unwrap_err();
    assert!(err.to_string().starts_with("invalid TOML in"));
}

#[test]
fn test_load_or_default_reads_project_config() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("metamodel.toml"),
        "[layout]\nmenubars_file = \"menus.toml\"\n",
    )
    .unwrap();

    let config = MetamodelConfig::load_or_default(Some(dir.path()));
    assert_eq!(config.layout.menubars_file, "menus.toml");
}

#[test]
fn test_rooted_at_resolves_relative_directories() {
    let config = MetamodelConfig::default().rooted_at(std::path::Path::new("/srv/app"));
    assert_eq!(config.introspection.model_dir, PathBuf::from("/srv/app/model"));
    assert_eq!(
        config.menubars_path(),
        PathBuf::from("/srv/app/layouts/menubars.layout.toml")
    );
}

#[test]
fn test_env_overrides() {
    // SAFETY: Single-threaded test, no concurrent access to env vars
    unsafe {
        std::env::set_var("METAMODEL_POST_FOR_DEFAULT", "title, css-class");
        std::env::set_var("METAMODEL_HOT_RELOAD", "1");
        std::env::set_var("METAMODEL_INTROSPECTION", "lazy");
    }
    let config = MetamodelConfig::default().with_env_overrides();
    unsafe {
        std::env::remove_var("METAMODEL_POST_FOR_DEFAULT");
        std::env::remove_var("METAMODEL_HOT_RELOAD");
        std::env::remove_var("METAMODEL_INTROSPECTION");
    }

    assert!(config.events.post_for_default(UiEventKind::Title));
    assert!(config.events.post_for_default(UiEventKind::CssClass));
    assert!(!config.events.post_for_default(UiEventKind::Icon));
    assert!(config.prototyping.hot_reload);
    assert_eq!(config.introspection.mode, IntrospectionMode::Lazy);
}
