//! `@ParameterLayout`

use crate::domain::services::facet_factory::{features, FacetFactory, ProcessParameterContext};
use crate::domain::services::factories::create;
use crate::domain::value_objects::{FeatureType, Precedence};

pub struct ParameterLayoutFacetFactory;

impl FacetFactory for ParameterLayoutFacetFactory {
    fn name(&self) -> &'static str {
        "parameter-layout"
    }

    fn feature_types(&self) -> &'static [FeatureType] {
        features::PARAMETERS
    }

    fn process_parameter(&self, ctx: &mut ProcessParameterContext<'_>) {
        let id = ctx.identifier();
        let parameter = ctx.parameter;
        ctx.holder.add_facet_if_present(create::named(
            parameter.named.as_deref(),
            None,
            Precedence::Default,
            self.name(),
            &id,
        ));
        ctx.holder.add_facet_if_present(create::described(
            parameter.described_as.as_deref(),
            Precedence::Default,
            self.name(),
            &id,
        ));
    }
}
