//! Inferred facets every element gets, derived from names alone

use crate::domain::entities::{Facet, FacetKind, TitleFacet};
use crate::domain::services::facet_factory::{
    features, FacetFactory, ProcessClassContext, ProcessMemberContext, ProcessParameterContext,
};
use crate::domain::services::factories::create;
use crate::domain::value_objects::{natural_name, pluralize, FeatureType, Precedence};

pub struct FallbackFacetFactory;

impl FacetFactory for FallbackFacetFactory {
    fn name(&self) -> &'static str {
        "fallback"
    }

    fn feature_types(&self) -> &'static [FeatureType] {
        features::EVERYTHING
    }

    fn process_class(&self, ctx: &mut ProcessClassContext<'_>) {
        let id = ctx.identifier();
        let singular = natural_name(ctx.class.simple_name());
        let plural = pluralize(&singular);
        ctx.holder.add_facet_if_present(create::named(
            Some(&singular),
            Some(&plural),
            Precedence::Inferred,
            self.name(),
            &id,
        ));

        if ctx.class.value {
            ctx.holder.add_facet(Facet::new(
                FacetKind::Title(TitleFacet::ToString),
                Precedence::Inferred,
                self.name(),
                id,
            ));
        }
    }

    fn process_member(&self, ctx: &mut ProcessMemberContext<'_>) {
        let id = ctx.identifier();
        let name = natural_name(&ctx.member.name);
        ctx.holder.add_facet_if_present(create::named(
            Some(&name),
            None,
            Precedence::Inferred,
            self.name(),
            &id,
        ));
    }

    fn process_parameter(&self, ctx: &mut ProcessParameterContext<'_>) {
        let id = ctx.identifier();
        let name = natural_name(&ctx.parameter.name);
        ctx.holder.add_facet_if_present(create::named(
            Some(&name),
            None,
            Precedence::Inferred,
            self.name(),
            &id,
        ));
    }
}
