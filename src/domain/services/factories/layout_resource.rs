//! Companion layout resource (`<class>.layout.toml`)
//!
//! Everything here is contributed at `High`, above annotations and support
//! methods.

use crate::domain::services::facet_factory::{
    FacetFactory, ProcessClassContext, ProcessMemberContext,
};
use crate::domain::services::factories::create;
use crate::domain::value_objects::{CssClassFaPosition, FeatureType, Precedence};

/// Origin marker of facets read from a per-class layout resource.
pub const LAYOUT_RESOURCE_ORIGIN: &str = "layout-resource";

pub struct LayoutResourceFacetFactory;

const CLASS_AND_MEMBERS: &[FeatureType] = &[
    FeatureType::ObjectType,
    FeatureType::Property,
    FeatureType::Collection,
    FeatureType::Action,
];

impl FacetFactory for LayoutResourceFacetFactory {
    fn name(&self) -> &'static str {
        LAYOUT_RESOURCE_ORIGIN
    }

    fn feature_types(&self) -> &'static [FeatureType] {
        CLASS_AND_MEMBERS
    }

    fn process_class(&self, ctx: &mut ProcessClassContext<'_>) {
        let Some(layout) = ctx.layout else {
            return;
        };
        let id = ctx.identifier();
        let origin = self.name();
        let holder = &mut *ctx.holder;

        holder.add_facet_if_present(create::named(
            layout.named.as_deref(),
            layout.plural.as_deref(),
            Precedence::High,
            origin,
            &id,
        ));
        holder.add_facet_if_present(create::described(
            layout.described_as.as_deref(),
            Precedence::High,
            origin,
            &id,
        ));
        holder.add_facet_if_present(create::css_class(
            layout.css_class.as_deref(),
            Precedence::High,
            origin,
            &id,
        ));
        holder.add_facet_if_present(create::css_class_fa(
            layout.css_class_fa.as_deref(),
            CssClassFaPosition::Left,
            Precedence::High,
            origin,
            &id,
        ));
    }

    fn process_member(&self, ctx: &mut ProcessMemberContext<'_>) {
        let Some(member) = ctx.layout.and_then(|l| l.member(&ctx.member.name)) else {
            return;
        };
        let id = ctx.identifier();
        let origin = self.name();
        let holder = &mut *ctx.holder;

        holder.add_facet_if_present(create::named(
            member.named.as_deref(),
            None,
            Precedence::High,
            origin,
            &id,
        ));
        holder.add_facet_if_present(create::described(
            member.described_as.as_deref(),
            Precedence::High,
            origin,
            &id,
        ));
        holder.add_facet_if_present(create::css_class(
            member.css_class.as_deref(),
            Precedence::High,
            origin,
            &id,
        ));
        holder.add_facet_if_present(create::css_class_fa(
            member.css_class_fa.as_deref(),
            CssClassFaPosition::Left,
            Precedence::High,
            origin,
            &id,
        ));
        holder.add_facet_if_present(create::hidden(
            member.hidden,
            Precedence::High,
            origin,
            &id,
        ));
        holder.add_facet_if_present(create::member_order(
            member.sequence.as_deref(),
            Precedence::High,
            origin,
            &id,
        ));
    }
}
