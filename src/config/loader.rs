//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::services::ui_event::UiEventKind;
use crate::error::{MetamodelError, MetamodelResult};

use super::types::{IntrospectionMode, MetamodelConfig};

/// File name of the project configuration.
pub const PROJECT_CONFIG_FILE: &str = "metamodel.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> MetamodelResult<(MetamodelConfig, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: MetamodelConfig = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| MetamodelError::Parse {
        format: "TOML",
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from project config, user config, or defaults
pub fn load_or_default(project_root: Option<&Path>) -> MetamodelConfig {
    if let Some(root) = project_root {
        let project_config = root.join(PROJECT_CONFIG_FILE);
        if project_config.exists() {
            match MetamodelConfig::load(&project_config) {
                Ok(config) => return with_env_overrides(config),
                Err(e) => tracing::warn!(error = %e, "ignoring unreadable project config"),
            }
        }
    }

    if let Some(user_config) = user_config_path() {
        if user_config.exists() {
            match MetamodelConfig::load(&user_config) {
                Ok(config) => return with_env_overrides(config),
                Err(e) => tracing::warn!(error = %e, "ignoring unreadable user config"),
            }
        }
    }

    with_env_overrides(MetamodelConfig::default())
}

/// `~/.config/metamodel/config.toml` or the platform equivalent
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("metamodel").join("config.toml"))
}

/// Apply environment variable overrides (METAMODEL_* prefix)
pub fn with_env_overrides(mut config: MetamodelConfig) -> MetamodelConfig {
    // METAMODEL_MODEL_DIR
    if let Ok(dir) = std::env::var("METAMODEL_MODEL_DIR") {
        config.introspection.model_dir = PathBuf::from(dir);
    }

    // METAMODEL_INTROSPECTION (lazy | full)
    if let Ok(mode) = std::env::var("METAMODEL_INTROSPECTION") {
        config.introspection.mode = match mode.to_lowercase().as_str() {
            "lazy" => IntrospectionMode::Lazy,
            _ => IntrospectionMode::Full,
        };
    }

    // METAMODEL_LAYOUT_DIR
    if let Ok(dir) = std::env::var("METAMODEL_LAYOUT_DIR") {
        config.layout.directory = PathBuf::from(dir);
    }

    // METAMODEL_POST_FOR_DEFAULT (comma-separated: title,icon,css-class,layout or all)
    if let Ok(kinds) = std::env::var("METAMODEL_POST_FOR_DEFAULT") {
        for kind in kinds.split(',').map(|s| s.trim().to_lowercase()) {
            let selected: &[UiEventKind] = match kind.as_str() {
                "all" => &UiEventKind::ALL,
                "title" => &[UiEventKind::Title],
                "icon" => &[UiEventKind::Icon],
                "css-class" | "css_class" | "cssclass" => &[UiEventKind::CssClass],
                "layout" => &[UiEventKind::Layout],
                _ => &[],
            };
            for kind in selected {
                config.events.set_post_for_default(*kind, true);
            }
        }
    }

    // METAMODEL_HOT_RELOAD
    if let Ok(val) = std::env::var("METAMODEL_HOT_RELOAD") {
        config.prototyping.hot_reload = val.to_lowercase() != "false" && val != "0";
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "introspection",
        "mode",
        "model_dir",
        "events",
        "title_ui_event_post_for_default",
        "icon_ui_event_post_for_default",
        "css_class_ui_event_post_for_default",
        "layout_ui_event_post_for_default",
        "layout",
        "directory",
        "menubars_file",
        "prototyping",
        "hot_reload",
        "debounce_ms",
        "validation",
        "fail_on_invalid",
        "orphaned_support_methods",
        "translation",
        "file",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
