//! `@DomainObjectLayout`
//!
//! One annotation, many single-concern facets: each attribute goes through
//! its own `create` function.

use crate::domain::services::facet_factory::{features, FacetFactory, ProcessClassContext};
use crate::domain::services::factories::create;
use crate::domain::services::ui_event::UiEventKind;
use crate::domain::value_objects::{FeatureType, Precedence};

pub struct DomainObjectLayoutFacetFactory;

impl FacetFactory for DomainObjectLayoutFacetFactory {
    fn name(&self) -> &'static str {
        "domain-object-layout"
    }

    fn feature_types(&self) -> &'static [FeatureType] {
        features::OBJECT
    }

    fn process_class(&self, ctx: &mut ProcessClassContext<'_>) {
        let Some(layout) = ctx.class.domain_object_layout.as_ref() else {
            return;
        };
        let id = ctx.identifier();
        let origin = self.name();
        let events = &ctx.config.events;
        let holder = &mut *ctx.holder;

        holder.add_facet_if_present(create::ui_event(
            UiEventKind::Title,
            layout.title_ui_event.as_deref(),
            events,
            origin,
            &id,
        ));
        holder.add_facet_if_present(create::ui_event(
            UiEventKind::Icon,
            layout.icon_ui_event.as_deref(),
            events,
            origin,
            &id,
        ));
        holder.add_facet_if_present(create::ui_event(
            UiEventKind::CssClass,
            layout.css_class_ui_event.as_deref(),
            events,
            origin,
            &id,
        ));
        holder.add_facet_if_present(create::ui_event(
            UiEventKind::Layout,
            layout.layout_ui_event.as_deref(),
            events,
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
            layout.css_class_fa_position,
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
        holder.add_facet_if_present(create::named(
            layout.named.as_deref(),
            layout.plural.as_deref(),
            Precedence::Default,
            origin,
            &id,
        ));
        holder.add_facet_if_present(create::paged(
            layout.paged,
            Precedence::Default,
            origin,
            &id,
        ));
        holder.add_facet_if_present(create::bookmark_policy(
            layout.bookmarking,
            Precedence::Default,
            origin,
            &id,
        ));
    }
}
