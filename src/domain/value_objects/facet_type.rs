//! Facet type tags
//!
//! Every facet contributes exactly one aspect of behavior; the tag keys the
//! holder's rankings.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FacetType {
    Title,
    Icon,
    CssClass,
    CssClassFa,
    Layout,
    Named,
    Described,
    Paged,
    BookmarkPolicy,
    LogicalType,
    ObjectNature,
    MenuBar,
    Hidden,
    Disabled,
    MemberOrder,
}

impl FacetType {
    /// Class-level facet types a subtype inherits from its supertype.
    pub const INHERITABLE: [FacetType; 7] = [
        FacetType::Title,
        FacetType::Icon,
        FacetType::CssClass,
        FacetType::CssClassFa,
        FacetType::Layout,
        FacetType::Paged,
        FacetType::BookmarkPolicy,
    ];

    pub fn is_inheritable(&self) -> bool {
        Self::INHERITABLE.contains(self)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FacetType::Title => "title",
            FacetType::Icon => "icon",
            FacetType::CssClass => "css-class",
            FacetType::CssClassFa => "css-class-fa",
            FacetType::Layout => "layout",
            FacetType::Named => "named",
            FacetType::Described => "described",
            FacetType::Paged => "paged",
            FacetType::BookmarkPolicy => "bookmark-policy",
            FacetType::LogicalType => "logical-type",
            FacetType::ObjectNature => "object-nature",
            FacetType::MenuBar => "menu-bar",
            FacetType::Hidden => "hidden",
            FacetType::Disabled => "disabled",
            FacetType::MemberOrder => "member-order",
        }
    }
}

impl std::fmt::Display for FacetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for FacetType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_value(serde_json::Value::String(s.to_string()))
            .map_err(|_| format!("unknown facet type '{}'", s))
    }
}
