//! Built-in facet factories
//!
//! One factory per annotation or naming convention, run in registration
//! order. Later factories win ties at the same precedence.

pub mod create;
mod domain_object;
mod domain_object_layout;
mod domain_service;
mod fallback;
mod layout_resource;
mod member_layout;
mod member_support;
mod object_support;
mod parameter_layout;
mod title_annotation;


pub use domain_object::DomainObjectFacetFactory;
pub use domain_object_layout::DomainObjectLayoutFacetFactory;
pub use domain_service::DomainServiceFacetFactory;
pub use fallback::FallbackFacetFactory;
pub use layout_resource::{LayoutResourceFacetFactory, LAYOUT_RESOURCE_ORIGIN};
pub use member_layout::MemberLayoutFacetFactory;
pub use member_support::MemberSupportFacetFactory;
pub use object_support::ObjectSupportFacetFactory;
pub use parameter_layout::ParameterLayoutFacetFactory;
pub use title_annotation::TitleAnnotationFacetFactory;

use crate::domain::services::facet_factory::FacetFactory;

pub fn default_factories() -> Vec<Box<dyn FacetFactory>> {
    vec![
        Box::new(FallbackFacetFactory),
        Box::new(DomainObjectFacetFactory),
        Box::new(DomainServiceFacetFactory),
        Box::new(TitleAnnotationFacetFactory),
        Box::new(ObjectSupportFacetFactory),
        Box::new(DomainObjectLayoutFacetFactory),
        Box::new(MemberLayoutFacetFactory),
        Box::new(MemberSupportFacetFactory),
        Box::new(ParameterLayoutFacetFactory),
        Box::new(LayoutResourceFacetFactory),
    ]
}
