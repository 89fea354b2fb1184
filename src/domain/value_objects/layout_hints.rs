//! Small enumerations carried by layout facets

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum BookmarkPolicy {
    #[default]
    Never,
    AsRoot,
    AsChild,
}

/// Which of the three menu bars a domain service contributes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MenuBarKind {
    #[default]
    Primary,
    Secondary,
    Tertiary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CssClassFaPosition {
    #[default]
    Left,
    Right,
}

/// Icon size requested by a viewer when asking for an object's icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IconSize {
    Small,
    #[default]
    Medium,
    Large,
}

/// Where a hidden member is hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Where {
    #[default]
    Everywhere,
    ObjectForms,
    AllTables,
    Nowhere,
}

impl Where {
    pub fn is_nowhere(&self) -> bool {
        matches!(self, Where::Nowhere)
    }
}
