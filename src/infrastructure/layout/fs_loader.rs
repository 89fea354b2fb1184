//! File system layout loader
//!
//! Per-class layouts live in `<directory>/<class name>.layout.toml`; the
//! application menu bars in `<directory>/<menubars file>`. A missing menubars
//! file is reported once per path, a missing class layout only at debug level.

use std::collections::BTreeSet;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::de::DeserializeOwned;

use crate::config::MetamodelConfig;
use crate::domain::entities::{MenuBars, ObjectLayout};
use crate::domain::ports::{LayoutLoadError, LayoutResourceLoader};
use crate::domain::value_objects::Fingerprint;

pub const OBJECT_LAYOUT_SUFFIX: &str = ".layout.toml";

#[derive(Debug)]
pub struct FsLayoutLoader {
    directory: PathBuf,
    menubars_file: String,
    /// Missing resources already reported
    reported: Mutex<BTreeSet<PathBuf>>,
}

impl FsLayoutLoader {
    pub fn new(directory: impl Into<PathBuf>, menubars_file: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
            menubars_file: menubars_file.into(),
            reported: Mutex::new(BTreeSet::new()),
        }
    }

    pub fn from_config(config: &MetamodelConfig) -> Self {
        Self::new(&config.layout.directory, config.layout.menubars_file.clone())
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn object_layout_path(&self, class_name: &str) -> PathBuf {
        self.directory
            .join(format!("{}{}", class_name, OBJECT_LAYOUT_SUFFIX))
    }

    pub fn menubars_path(&self) -> PathBuf {
        self.directory.join(&self.menubars_file)
    }

    /// Fingerprint over every TOML file in the layout directory; an absent
    /// directory fingerprints like an empty one.
    pub fn fingerprint(&self) -> Fingerprint {
        let mut resources: Vec<(String, Vec<u8>)> = Vec::new();
        if let Ok(entries) = std::fs::read_dir(&self.directory) {
            for path in entries.filter_map(Result::ok).map(|e| e.path()) {
                if path.extension().is_some_and(|e| e == "toml") {
                    if let Ok(content) = std::fs::read(&path) {
                        let name = path
                            .file_name()
                            .map(|n| n.to_string_lossy().into_owned())
                            .unwrap_or_default();
                        resources.push((name, content));
                    }
                }
            }
        }
        Fingerprint::of_resources(
            resources
                .iter()
                .map(|(name, content)| (name.as_str(), content.as_slice())),
        )
    }

    fn read<T: DeserializeOwned>(&self, path: &Path) -> Result<Option<T>, LayoutLoadError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(LayoutLoadError::Unreadable {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })
            }
        };
        toml::from_str(&content)
            .map(Some)
            .map_err(|e| LayoutLoadError::Malformed {
                path: path.to_path_buf(),
                message: e.to_string(),
            })
    }

    /// True the first time `path` is reported missing.
    fn first_report(&self, path: &Path) -> bool {
        self.reported
            .lock()
            .map(|mut reported| reported.insert(path.to_path_buf()))
            .unwrap_or(false)
    }
}

impl LayoutResourceLoader for FsLayoutLoader {
    fn object_layout(&self, class_name: &str) -> Result<Option<ObjectLayout>, LayoutLoadError> {
        let path = self.object_layout_path(class_name);
        let layout = self.read(&path)?;
        if layout.is_none() {
            tracing::debug!(class = %class_name, path = %path.display(), "no layout resource");
        }
        Ok(layout)
    }

    fn menu_bars(&self) -> Result<Option<MenuBars>, LayoutLoadError> {
        let path = self.menubars_path();
        let menu_bars = self.read(&path)?;
        if menu_bars.is_none() && self.first_report(&path) {
            tracing::warn!(
                path = %path.display(),
                "menubars layout not found; menus derived from annotations"
            );
        }
        Ok(menu_bars)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn loader(dir: &Path) -> FsLayoutLoader {
        FsLayoutLoader::new(dir, "menubars.layout.toml")
    }

    #[test]
    fn missing_resources_are_none() {
        let dir = tempdir().unwrap();
        let loader = loader(dir.path());
        assert_eq!(loader.object_layout("acme.Customer").unwrap(), None);
        assert_eq!(loader.menu_bars().unwrap(), None);
        assert_eq!(loader.menu_bars().unwrap(), None);
        assert_eq!(loader.reported.lock().unwrap().len(), 1);
    }

    #[test]
    fn reads_object_layout_by_class_name() {
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join("acme.Customer.layout.toml"),
            "named = \"Client\"\n\n[[members]]\nid = \"email\"\nnamed = \"E-mail\"\n",
        )
        .unwrap();

        let layout = loader(dir.path()).object_layout("acme.Customer").unwrap().unwrap();
        assert_eq!(layout.named.as_deref(), Some("Client"));
        assert_eq!(layout.member("email").unwrap().named.as_deref(), Some("E-mail"));
    }

    #[test]
    fn malformed_menubars_is_an_error() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("menubars.layout.toml"), "[[primary.menus]\n").unwrap();

        let err = loader(dir.path()).menu_bars().unwrap_err();
        assert!(matches!(err, LayoutLoadError::Malformed { ref path, .. } if path.ends_with("menubars.layout.toml")));
    }

    #[test]
    fn fingerprint_changes_with_layout_content() {
        let dir = tempdir().unwrap();
        let loader = loader(dir.path());
        let empty = loader.fingerprint();
        assert_eq!(empty, FsLayoutLoader::new(dir.path().join("absent"), "m.toml").fingerprint());

        std::fs::write(dir.path().join("acme.Customer.layout.toml"), "named = \"A\"\n").unwrap();
        let first = loader.fingerprint();
        assert_ne!(empty, first);

        std::fs::write(dir.path().join("acme.Customer.layout.toml"), "named = \"B\"\n").unwrap();
        assert_ne!(first, loader.fingerprint());
    }
}
