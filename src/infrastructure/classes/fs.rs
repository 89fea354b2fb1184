//! File system class source
//!
//! Reads domain class descriptors from model files under a directory,
//! recursively. Each file holds a `classes` list in TOML, YAML or JSON,
//! chosen by extension. Files are read in path order so class registration
//! order is stable across runs.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::entities::DomainClass;
use crate::domain::ports::ClassSource;
use crate::domain::value_objects::Fingerprint;

#[derive(Debug, thiserror::Error)]
pub enum ClassSourceError {
    #[error("model directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid {format} in {path}: {message}")]
    Malformed {
        format: &'static str,
        path: PathBuf,
        message: String,
    },

    #[error("class '{class_name}' is declared in both {first} and {second}")]
    DuplicateClass {
        class_name: String,
        first: PathBuf,
        second: PathBuf,
    },
}

#[derive(Debug, Deserialize)]
struct ModelDocument {
    #[serde(default)]
    classes: Vec<DomainClass>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ModelFormat {
    Toml,
    Yaml,
    Json,
}

impl ModelFormat {
    fn of(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "toml" => Some(Self::Toml),
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Toml => "TOML",
            Self::Yaml => "YAML",
            Self::Json => "JSON",
        }
    }

    fn parse(self, content: &str) -> Result<ModelDocument, String> {
        match self {
            Self::Toml => toml::from_str(content).map_err(|e| e.to_string()),
            Self::Yaml => serde_yaml_ng::from_str(content).map_err(|e| e.to_string()),
            Self::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct FsClassSource {
    root: PathBuf,
    classes: Vec<DomainClass>,
    origins: BTreeMap<String, PathBuf>,
    fingerprint: Fingerprint,
}

impl FsClassSource {
    pub fn load(root: &Path) -> Result<Self, ClassSourceError> {
        if !root.is_dir() {
            return Err(ClassSourceError::DirectoryNotFound {
                path: root.to_path_buf(),
            });
        }

        let files = model_files(root)?;
        let mut classes = Vec::new();
        let mut origins: BTreeMap<String, PathBuf> = BTreeMap::new();
        let mut resources: Vec<(String, Vec<u8>)> = Vec::with_capacity(files.len());

        for path in files {
            let Some(format) = ModelFormat::of(&path) else {
                continue;
            };
            let content = std::fs::read_to_string(&path).map_err(|source| ClassSourceError::Io {
                path: path.clone(),
                source,
            })?;
            let document = format
                .parse(&content)
                .map_err(|message| ClassSourceError::Malformed {
                    format: format.name(),
                    path: path.clone(),
                    message,
                })?;

            for class in document.classes {
                if let Some(first) = origins.get(&class.name) {
                    return Err(ClassSourceError::DuplicateClass {
                        class_name: class.name,
                        first: first.clone(),
                        second: path,
                    });
                }
                origins.insert(class.name.clone(), path.clone());
                classes.push(class);
            }

            let name = path
                .strip_prefix(root)
                .unwrap_or(&path)
                .to_string_lossy()
                .into_owned();
            resources.push((name, content.into_bytes()));
        }

        let fingerprint = Fingerprint::of_resources(
            resources
                .iter()
                .map(|(name, content)| (name.as_str(), content.as_slice())),
        );
        tracing::debug!(
            root = %root.display(),
            classes = classes.len(),
            fingerprint = %fingerprint,
            "model loaded"
        );

        Ok(Self {
            root: root.to_path_buf(),
            classes,
            origins,
            fingerprint,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn fingerprint(&self) -> &Fingerprint {
        &self.fingerprint
    }

    /// The file `class_name` was declared in.
    pub fn origin(&self, class_name: &str) -> Option<&Path> {
        self.origins.get(class_name).map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl ClassSource for FsClassSource {
    fn class(&self, name: &str) -> Option<&DomainClass> {
        self.classes.iter().find(|c| c.name == name)
    }

    fn class_names(&self) -> Vec<String> {
        self.classes.iter().map(|c| c.name.clone()).collect()
    }
}

/// Model files under `root`, sorted; hidden directories are skipped.
pub fn model_files(root: &Path) -> Result<Vec<PathBuf>, ClassSourceError> {
    let mut files = Vec::new();
    collect_model_files(root, &mut files)?;
    files.sort();
    Ok(files)
}

fn collect_model_files(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), ClassSourceError> {
    let io_error = |source| ClassSourceError::Io {
        path: dir.to_path_buf(),
        source,
    };
    for entry in std::fs::read_dir(dir).map_err(io_error)? {
        let path = entry.map_err(io_error)?.path();
        let hidden = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.starts_with('.'));
        if hidden {
            continue;
        }
        if path.is_dir() {
            collect_model_files(&path, files)?;
        } else if ModelFormat::of(&path).is_some() {
            files.push(path);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{FeatureType, Nature};
    use tempfile::tempdir;

    const CUSTOMER_TOML: &str = r#"
[[classes]]
name = "acme.Customer"
superclass = "acme.Party"

[classes.domain_object]
logical_type_name = "crm.Customer"
nature = "entity"

[[classes.members]]
name = "email"
kind = "property"

[[classes.methods]]
name = "title"
body = "{name}"
"#;

    const PARTY_YAML: &str = r#"
classes:
  - name: acme.Party
    abstract: true
    members:
      - name: name
        kind: property
"#;

    const SERVICES_JSON: &str = r#"{
  "classes": [
    { "name": "acme.CustomerMenu", "domain_service": { "menu_bar": "secondary" } }
  ]
}"#;

    fn write(dir: &Path, name: &str, content: &str) {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }

    #[test]
    fn loads_all_three_formats_in_path_order() {
        let dir = tempdir().unwrap();
        write(dir.path(), "crm/customer.toml", CUSTOMER_TOML);
        write(dir.path(), "crm/party.yaml", PARTY_YAML);
        write(dir.path(), "menus.json", SERVICES_JSON);
        write(dir.path(), "README.md", "# not a model file");
        write(dir.path(), ".cache/stale.toml", "[[classes]]\nname = \"acme.Stale\"\n");

        let source = FsClassSource::load(dir.path()).unwrap();
        assert_eq!(
            source.class_names(),
            vec!["acme.Customer", "acme.Party", "acme.CustomerMenu"]
        );

        let customer = source.class("acme.Customer").unwrap();
        assert_eq!(customer.superclass.as_deref(), Some("acme.Party"));
        assert_eq!(customer.domain_object.as_ref().unwrap().nature, Nature::Entity);
        assert_eq!(customer.members[0].kind, FeatureType::Property);
        assert!(source.class("acme.Party").unwrap().is_abstract);
        assert_eq!(
            source.origin("acme.CustomerMenu"),
            Some(dir.path().join("menus.json").as_path())
        );
    }

    #[test]
    fn duplicate_classes_are_rejected() {
        let dir = tempdir().unwrap();
        write(dir.path(), "a.toml", CUSTOMER_TOML);
        write(dir.path(), "b.toml", CUSTOMER_TOML);

        let err = FsClassSource::load(dir.path()).unwrap_err();
        assert!(matches!(
            err,
            ClassSourceError::DuplicateClass { ref class_name, .. } if class_name == "acme.Customer"
        ));
    }

    #[test]
    fn malformed_file_names_its_format_and_path() {
        let dir = tempdir().unwrap();
        write(dir.path(), "broken.yaml", "classes: [");

        let err = FsClassSource::load(dir.path()).unwrap_err();
        match err {
            ClassSourceError::Malformed { format, path, .. } => {
                assert_eq!(format, "YAML");
                assert!(path.ends_with("broken.yaml"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_directory() {
        let dir = tempdir().unwrap();
        let err = FsClassSource::load(&dir.path().join("nope")).unwrap_err();
        assert!(matches!(err, ClassSourceError::DirectoryNotFound { .. }));
    }

    #[test]
    fn fingerprint_tracks_content() {
        let dir = tempdir().unwrap();
        write(dir.path(), "customer.toml", CUSTOMER_TOML);
        let before = FsClassSource::load(dir.path()).unwrap().fingerprint().clone();
        assert_eq!(
            &before,
            FsClassSource::load(dir.path()).unwrap().fingerprint()
        );

        write(dir.path(), "customer.toml", &CUSTOMER_TOML.replace("email", "phone"));
        assert_ne!(&before, FsClassSource::load(dir.path()).unwrap().fingerprint());
    }
}
