//! Configuration module for the metamodel
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (METAMODEL_*)
//! 3. Project config (metamodel.toml)
//! 4. User config (~/.config/metamodel/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
#[cfg(test)]
mod tests;
mod types;

pub use loader::{user_config_path, ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{
    EventsConfig, IntrospectionConfig, IntrospectionMode, LayoutConfig, MetamodelConfig,
    PrototypingConfig, TranslationConfig, ValidationConfig,
};
