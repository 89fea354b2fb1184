//! Domain Entities
//!
//! Core metamodel entities:
//! - `Facet` / `FacetRanking` / `FacetHolder` - ranked behavioral contributions
//! - `ObjectSpecification` / `ObjectMember` - the assembled metamodel graph
//! - `DomainClass` - declarative class descriptors introspection starts from
//! - `MenuBars` / `ObjectLayout` - layout documents
//! - `ValidationFailures` - structural defects found by a model scan

mod domain_class;
mod facet;
mod facet_holder;
mod facet_ranking;
mod layout;
pub(crate) mod managed_object;
mod object_member;
mod object_spec;
mod validation;

pub use domain_class::{
    DomainClass, DomainObjectAnnotation, DomainObjectLayoutAnnotation, DomainServiceAnnotation,
    MemberDescriptor, MemberLayoutAnnotation, MethodDescriptor, ParameterDescriptor,
    TitleAnnotation, MEMBER_SUPPORT_PREFIXES, OBJECT_SUPPORT_METHODS,
};
pub use facet::{
    ComputedText, DisabledFacet, Facet, FacetKind, HiddenFacet, TitleComponent, TitleFacet,
    UiEventFacet,
};
pub use facet_holder::FacetHolder;
pub use facet_ranking::FacetRanking;
pub use layout::{
    Menu, MenuBar, MenuBars, MenuSection, MemberLayout, ObjectLayout, ServiceActionLayout,
};
pub use managed_object::{render_template, ManagedObject, Pojo};
pub use object_member::{ActionParameter, ObjectMember};
pub use object_spec::{compare_sequences, ObjectSpecification};
pub use validation::{ValidationFailure, ValidationFailures};
