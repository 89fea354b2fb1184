//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::services::ui_event::UiEventKind;
use crate::error::MetamodelResult;

use super::loader::{self, ConfigWarning};

/// How eagerly classes are introspected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IntrospectionMode {
    /// Only classes asked for, plus their supertypes
    Lazy,
    /// Every registered class, followed by validation
    #[default]
    Full,
}

/// Introspection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntrospectionConfig {
    #[serde(default)]
    pub mode: IntrospectionMode,

    /// Directory holding the domain class model files
    #[serde(default = "default_model_dir")]
    pub model_dir: PathBuf,
}

impl Default for IntrospectionConfig {
    fn default() -> Self {
        Self {
            mode: IntrospectionMode::default(),
            model_dir: default_model_dir(),
        }
    }
}

fn default_model_dir() -> PathBuf {
    PathBuf::from("model")
}

/// Whether the built-in `Default` UI event types are posted.
///
/// ```toml
/// [events]
/// css_class_ui_event_post_for_default = true
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct EventsConfig {
    #[serde(default)]
    pub title_ui_event_post_for_default: bool,

    #[serde(default)]
    pub icon_ui_event_post_for_default: bool,

    #[serde(default)]
    pub css_class_ui_event_post_for_default: bool,

    #[serde(default)]
    pub layout_ui_event_post_for_default: bool,
}

impl EventsConfig {
    pub fn post_for_default(&self, kind: UiEventKind) -> bool {
        match kind {
            UiEventKind::Title => self.title_ui_event_post_for_default,
            UiEventKind::Icon => self.icon_ui_event_post_for_default,
            UiEventKind::CssClass => self.css_class_ui_event_post_for_default,
            UiEventKind::Layout => self.layout_ui_event_post_for_default,
        }
    }

    pub fn set_post_for_default(&mut self, kind: UiEventKind, post: bool) {
        match kind {
            UiEventKind::Title => self.title_ui_event_post_for_default = post,
            UiEventKind::Icon => self.icon_ui_event_post_for_default = post,
            UiEventKind::CssClass => self.css_class_ui_event_post_for_default = post,
            UiEventKind::Layout => self.layout_ui_event_post_for_default = post,
        }
    }
}

/// Layout resource configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Directory holding `<class>.layout.toml` and the menu bars file
    #[serde(default = "default_layout_dir")]
    pub directory: PathBuf,

    #[serde(default = "default_menubars_file")]
    pub menubars_file: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            directory: default_layout_dir(),
            menubars_file: default_menubars_file(),
        }
    }
}

fn default_layout_dir() -> PathBuf {
    PathBuf::from("layouts")
}

fn default_menubars_file() -> String {
    "menubars.layout.toml".to_string()
}

/// Prototyping configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrototypingConfig {
    /// Rebuild the metamodel when model or layout files change
    #[serde(default)]
    pub hot_reload: bool,

    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

impl Default for PrototypingConfig {
    fn default() -> Self {
        Self {
            hot_reload: false,
            debounce_ms: default_debounce_ms(),
        }
    }
}

fn default_debounce_ms() -> u64 {
    300
}

/// Validation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Treat validation failures as a startup error
    #[serde(default = "default_true")]
    pub fail_on_invalid: bool,

    #[serde(default = "default_true")]
    pub orphaned_support_methods: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            fail_on_invalid: true,
            orphaned_support_methods: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Translation configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TranslationConfig {
    /// TOML translation table; identity translation when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MetamodelConfig {
    #[serde(default)]
    pub introspection: IntrospectionConfig,

    #[serde(default)]
    pub events: EventsConfig,

    #[serde(default)]
    pub layout: LayoutConfig,

    #[serde(default)]
    pub prototyping: PrototypingConfig,

    #[serde(default)]
    pub validation: ValidationConfig,

    #[serde(default)]
    pub translation: TranslationConfig,
}

impl MetamodelConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> MetamodelResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> MetamodelResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults
    pub fn load_or_default(project_root: Option<&Path>) -> Self {
        loader::load_or_default(project_root)
    }

    /// Apply environment variable overrides (METAMODEL_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Resolve relative directories against `root`.
    pub fn rooted_at(mut self, root: &Path) -> Self {
        if self.introspection.model_dir.is_relative() {
            self.introspection.model_dir = root.join(&self.introspection.model_dir);
        }
        if self.layout.directory.is_relative() {
            self.layout.directory = root.join(&self.layout.directory);
        }
        if let Some(file) = self.translation.file.as_mut() {
            if file.is_relative() {
                *file = root.join(&*file);
            }
        }
        self
    }

    pub fn menubars_path(&self) -> PathBuf {
        self.layout.directory.join(&self.layout.menubars_file)
    }
}
