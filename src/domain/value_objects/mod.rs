//! Domain Value Objects
//!
//! Immutable value types that represent metamodel concepts.

mod bean_sort;
mod facet_type;
mod feature_id;
mod feature_type;
mod fingerprint;
mod identifier;
mod layout_hints;
mod noun_forms;
mod precedence;

pub use bean_sort::{BeanSort, Nature};
pub use facet_type::FacetType;
pub use feature_id::{ApplicationFeatureId, ApplicationFeatureSort};
pub use feature_type::FeatureType;
pub use fingerprint::Fingerprint;
pub use identifier::Identifier;
pub use layout_hints::{BookmarkPolicy, CssClassFaPosition, IconSize, MenuBarKind, Where};
pub use noun_forms::{natural_name, pluralize, NounForm, NounForms};
pub use precedence::Precedence;
