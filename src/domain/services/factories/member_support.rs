//! `hideXxx()` and `disableXxx()` support methods

use crate::domain::entities::{DisabledFacet, Facet, FacetKind, HiddenFacet};
use crate::domain::services::facet_factory::{features, FacetFactory, ProcessMemberContext};
use crate::domain::value_objects::{FeatureType, Precedence};

pub struct MemberSupportFacetFactory;

impl FacetFactory for MemberSupportFacetFactory {
    fn name(&self) -> &'static str {
        "member-support"
    }

    fn feature_types(&self) -> &'static [FeatureType] {
        features::MEMBERS
    }

    fn process_member(&self, ctx: &mut ProcessMemberContext<'_>) {
        let id = ctx.identifier();
        for method in &ctx.class.methods {
            let Some((prefix, target)) = method.support_target() else {
                continue;
            };
            if target != ctx.member.name {
                continue;
            }
            let Some(body) = method.body.clone() else {
                tracing::debug!(method = %method.name, "support method without body, skipped");
                continue;
            };
            let kind = match prefix {
                "hide" => FacetKind::Hidden(HiddenFacet::Imperative {
                    method: method.name.clone(),
                    body,
                }),
                "disable" => FacetKind::Disabled(DisabledFacet::Imperative {
                    method: method.name.clone(),
                    body,
                }),
                // validate/default/choices/autoComplete bind but carry no facet here
                _ => continue,
            };
            ctx.holder
                .add_facet(Facet::new(kind, Precedence::Low, self.name(), id.clone()));
        }
    }
}
