//! `@DomainService` / `@DomainServiceLayout`: menu placement and naming

use crate::domain::entities::{Facet, FacetKind};
use crate::domain::services::facet_factory::{features, FacetFactory, ProcessClassContext};
use crate::domain::services::factories::create;
use crate::domain::value_objects::{FeatureType, Precedence};

pub struct DomainServiceFacetFactory;

impl FacetFactory for DomainServiceFacetFactory {
    fn name(&self) -> &'static str {
        "domain-service"
    }

    fn feature_types(&self) -> &'static [FeatureType] {
        features::OBJECT
    }

    fn process_class(&self, ctx: &mut ProcessClassContext<'_>) {
        let Some(service) = ctx.class.domain_service.as_ref() else {
            return;
        };
        let id = ctx.identifier();

        if let Some(name) = service
            .logical_type_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
        {
            ctx.holder.add_facet(Facet::new(
                FacetKind::LogicalType(name.trim().to_string()),
                Precedence::Default,
                self.name(),
                id.clone(),
            ));
        }

        ctx.holder.add_facet(Facet::new(
            FacetKind::MenuBar(service.menu_bar),
            Precedence::Default,
            self.name(),
            id.clone(),
        ));

        ctx.holder.add_facet_if_present(create::named(
            service.named.as_deref(),
            None,
            Precedence::Default,
            self.name(),
            &id,
        ));
    }
}
