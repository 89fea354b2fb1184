//! TOML translation table
//!
//! One table per translation context, mapping message ids to translations:
//!
//! ```toml
//! ["acme.Customer#title()"]
//! "Customer {name}" = "Kunde {name}"
//! ```
//!
//! Entries under the `"*"` table apply to every context.

use std::collections::BTreeMap;
use std::path::Path;

use crate::domain::ports::{TranslationContext, TranslationService};
use crate::error::{MetamodelError, MetamodelResult};

const ANY_CONTEXT: &str = "*";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TomlTranslationService {
    contexts: BTreeMap<String, BTreeMap<String, String>>,
}

impl TomlTranslationService {
    pub fn load(path: &Path) -> MetamodelResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let service = Self::parse(&content).map_err(|message| MetamodelError::Parse {
            format: "TOML",
            file: path.to_path_buf(),
            message,
        })?;
        tracing::debug!(
            path = %path.display(),
            contexts = service.contexts.len(),
            "translations loaded"
        );
        Ok(service)
    }

    pub fn parse(content: &str) -> Result<Self, String> {
        let contexts = toml::from_str(content).map_err(|e| e.to_string())?;
        Ok(Self { contexts })
    }

    pub fn len(&self) -> usize {
        self.contexts.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TranslationService for TomlTranslationService {
    fn translate(&self, context: &TranslationContext, text: &str) -> String {
        [context.as_str(), ANY_CONTEXT]
            .iter()
            .find_map(|ctx| self.contexts.get(*ctx)?.get(text))
            .cloned()
            .unwrap_or_else(|| text.to_string())
    }
}
