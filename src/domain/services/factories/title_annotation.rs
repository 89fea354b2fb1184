//! `@Title` on properties: the title is composed from their values

use crate::domain::entities::{compare_sequences, Facet, FacetKind, TitleComponent, TitleFacet};
use crate::domain::services::facet_factory::{features, FacetFactory, ProcessClassContext};
use crate::domain::value_objects::{FeatureType, Precedence};

pub struct TitleAnnotationFacetFactory;

impl FacetFactory for TitleAnnotationFacetFactory {
    fn name(&self) -> &'static str {
        "title-annotation"
    }

    fn feature_types(&self) -> &'static [FeatureType] {
        features::OBJECT
    }

    fn process_class(&self, ctx: &mut ProcessClassContext<'_>) {
        let mut components: Vec<TitleComponent> = ctx
            .class
            .members
            .iter()
            .filter(|m| m.kind == FeatureType::Property)
            .filter_map(|m| {
                let title = m.title.as_ref()?;
                Some(TitleComponent {
                    property: m.name.clone(),
                    sequence: title.sequence.clone(),
                    prepend: title.prepend.clone(),
                    append: title.append.clone(),
                    abbreviated_to: title.abbreviated_to,
                })
            })
            .collect();
        if components.is_empty() {
            return;
        }
        components.sort_by(|a, b| compare_sequences(&a.sequence, &b.sequence));

        let id = ctx.identifier();
        ctx.holder.add_facet(Facet::new(
            FacetKind::Title(TitleFacet::Components(components)),
            Precedence::Default,
            self.name(),
            id,
        ));
    }
}
