//! Bean sort - the classification of an introspected type

use serde::{Deserialize, Serialize};

/// Declared nature of a domain object (`@DomainObject(nature = ...)`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Nature {
    #[default]
    NotSpecified,
    Entity,
    ViewModel,
    Mixin,
}

/// Classification of a type once introspected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum BeanSort {
    Entity,
    ViewModel,
    Value,
    /// A domain service contributing menu actions
    Manager,
    Mixin,
    Abstract,
    #[default]
    Unknown,
}

impl BeanSort {
    pub fn is_entity_or_view_model(&self) -> bool {
        matches!(self, BeanSort::Entity | BeanSort::ViewModel)
    }

    pub fn is_manager(&self) -> bool {
        matches!(self, BeanSort::Manager)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BeanSort::Entity => "entity",
            BeanSort::ViewModel => "view-model",
            BeanSort::Value => "value",
            BeanSort::Manager => "manager",
            BeanSort::Mixin => "mixin",
            BeanSort::Abstract => "abstract",
            BeanSort::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for BeanSort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Nature> for BeanSort {
    fn from(nature: Nature) -> Self {
        match nature {
            Nature::Entity => BeanSort::Entity,
            Nature::ViewModel => BeanSort::ViewModel,
            Nature::Mixin => BeanSort::Mixin,
            Nature::NotSpecified => BeanSort::Unknown,
        }
    }
}
