//! Feature type - what kind of metamodel element a facet holder is

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FeatureType {
    ObjectType,
    Property,
    Collection,
    Action,
    ActionParameter,
}

impl FeatureType {
    pub const MEMBERS: [FeatureType; 3] = [
        FeatureType::Property,
        FeatureType::Collection,
        FeatureType::Action,
    ];

    pub fn is_member(&self) -> bool {
        Self::MEMBERS.contains(self)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FeatureType::ObjectType => "object-type",
            FeatureType::Property => "property",
            FeatureType::Collection => "collection",
            FeatureType::Action => "action",
            FeatureType::ActionParameter => "action-parameter",
        }
    }
}

impl std::fmt::Display for FeatureType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
