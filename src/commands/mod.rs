//! Command implementations

pub mod explain;
pub mod menubars;
pub mod project_root;
pub mod specs;
pub mod validate;
pub mod watch;

use std::path::Path;

use anyhow::{Context, Result};
use metamodel::config::PROJECT_CONFIG_FILE;
use metamodel::MetamodelConfig;

/// Project configuration with directories resolved against the project root.
///
/// An explicit `--project` is used as is; otherwise the root is discovered
/// from the current directory.
pub(crate) fn load_config(project: Option<&Path>) -> Result<MetamodelConfig> {
    let root = match project {
        Some(dir) => dir.to_path_buf(),
        None => {
            let cwd = std::env::current_dir().context("reading current directory")?;
            project_root::discover_project_root(&cwd)
        }
    };

    let project_config = root.join(PROJECT_CONFIG_FILE);
    let config = if project_config.is_file() {
        let (config, warnings) = MetamodelConfig::load_with_warnings(&project_config)?;
        for warning in &warnings {
            tracing::warn!("{}", warning);
        }
        config.with_env_overrides()
    } else {
        MetamodelConfig::load_or_default(None)
    };

    tracing::debug!(root = %root.display(), "project root");
    Ok(config.rooted_at(&root))
}
