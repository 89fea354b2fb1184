//! `@PropertyLayout`, `@CollectionLayout` and `@ActionLayout`

use crate::domain::services::facet_factory::{features, FacetFactory, ProcessMemberContext};
use crate::domain::services::factories::create;
use crate::domain::value_objects::{CssClassFaPosition, FeatureType, Precedence};

pub struct MemberLayoutFacetFactory;

impl FacetFactory for MemberLayoutFacetFactory {
    fn name(&self) -> &'static str {
        "member-layout"
    }

    fn feature_types(&self) -> &'static [FeatureType] {
        features::MEMBERS
    }

    fn process_member(&self, ctx: &mut ProcessMemberContext<'_>) {
        let Some(layout) = ctx.member.layout.as_ref() else {
            return;
        };
        let id = ctx.identifier();
        let origin = self.name();
        let holder = &mut *ctx.holder;

        holder.add_facet_if_present(create::named(
            layout.named.as_deref(),
            None,
            Precedence::Default,
            origin,
            &id,
        ));
        holder.add_facet_if_present(create::described(
            layout.described_as.as_deref(),
            Precedence::Default,
            origin,
            &id,
        ));
        holder.add_facet_if_present(create::css_class(
            layout.css_class.as_deref(),
            Precedence::Default,
            origin,
            &id,
        ));
        holder.add_facet_if_present(create::css_class_fa(
            layout.css_class_fa.as_deref(),
            CssClassFaPosition::Left,
            Precedence::Default,
            origin,
            &id,
        ));
        holder.add_facet_if_present(create::hidden(
            layout.hidden,
            Precedence::Default,
            origin,
            &id,
        ));
        holder.add_facet_if_present(create::member_order(
            layout.sequence.as_deref(),
            Precedence::Default,
            origin,
            &id,
        ));
        if ctx.member.kind == FeatureType::Collection {
            holder.add_facet_if_present(create::paged(
                layout.paged,
                Precedence::Default,
                origin,
                &id,
            ));
        }
    }
}
