//! `@DomainObject`: logical type name and object nature

use crate::domain::entities::{DomainClass, Facet, FacetKind};
use crate::domain::services::facet_factory::{features, FacetFactory, ProcessClassContext};
use crate::domain::value_objects::{BeanSort, FeatureType, Nature, Precedence};

pub struct DomainObjectFacetFactory;

impl FacetFactory for DomainObjectFacetFactory {
    fn name(&self) -> &'static str {
        "domain-object"
    }

    fn feature_types(&self) -> &'static [FeatureType] {
        features::OBJECT
    }

    fn process_class(&self, ctx: &mut ProcessClassContext<'_>) {
        let id = ctx.identifier();

        ctx.holder.add_facet(Facet::new(
            FacetKind::LogicalType(ctx.class.name.clone()),
            Precedence::Inferred,
            self.name(),
            id.clone(),
        ));
        if let Some(name) = ctx
            .class
            .domain_object
            .as_ref()
            .and_then(|a| a.logical_type_name.as_deref())
            .filter(|name| !name.trim().is_empty())
        {
            ctx.holder.add_facet(Facet::new(
                FacetKind::LogicalType(name.trim().to_string()),
                Precedence::Default,
                self.name(),
                id.clone(),
            ));
        }

        let (sort, precedence) = object_nature(ctx.class);
        ctx.holder.add_facet(Facet::new(
            FacetKind::ObjectNature(sort),
            precedence,
            self.name(),
            id,
        ));
    }
}

/// Bean sort of a class, and whether it was declared or merely inferred.
fn object_nature(class: &DomainClass) -> (BeanSort, Precedence) {
    if class.is_abstract {
        return (BeanSort::Abstract, Precedence::Inferred);
    }
    if class.domain_service.is_some() {
        return (BeanSort::Manager, Precedence::Default);
    }
    if class.value {
        return (BeanSort::Value, Precedence::Default);
    }
    match class.domain_object.as_ref().map(|a| a.nature) {
        Some(nature) if nature != Nature::NotSpecified => {
            (BeanSort::from(nature), Precedence::Default)
        }
        _ => (BeanSort::Unknown, Precedence::Inferred),
    }
}
