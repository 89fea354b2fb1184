//! Precedence value object - the priority tier of a facet contribution

use serde::{Deserialize, Serialize};

/// Total order over facet origins, lowest influence first.
///
/// `Event` facets are dynamic subscriber overrides: they win over every
/// statically determined facet, but fall back to the highest non-event facet
/// when no subscriber supplies a value at query time.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Precedence {
    /// Derived by the framework from naming conventions or types
    Inferred,
    /// Declared by annotations
    #[default]
    Default,
    /// Declared imperatively by support methods
    Low,
    /// Declared by layout resources
    High,
    /// Provided by event subscribers at query time
    Event,
}

impl Precedence {
    pub const ALL: [Precedence; 5] = [
        Precedence::Inferred,
        Precedence::Default,
        Precedence::Low,
        Precedence::High,
        Precedence::Event,
    ];

    pub fn is_event(&self) -> bool {
        matches!(self, Precedence::Event)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Precedence::Inferred => "inferred",
            Precedence::Default => "default",
            Precedence::Low => "low",
            Precedence::High => "high",
            Precedence::Event => "event",
        }
    }
}

impl std::fmt::Display for Precedence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
