//! `title()`, `iconName()`, `cssClass()` and `layout()` support methods

use crate::domain::entities::{ComputedText, Facet, FacetKind, TitleFacet};
use crate::domain::services::facet_factory::{features, FacetFactory, ProcessClassContext};
use crate::domain::value_objects::{FeatureType, Precedence};

pub struct ObjectSupportFacetFactory;

impl FacetFactory for ObjectSupportFacetFactory {
    fn name(&self) -> &'static str {
        "object-support"
    }

    fn feature_types(&self) -> &'static [FeatureType] {
        features::OBJECT
    }

    fn process_class(&self, ctx: &mut ProcessClassContext<'_>) {
        let id = ctx.identifier();
        let class = ctx.class;
        let template = |name: &str| class.support_method_body(name).map(str::to_string);

        let facets = [
            template("title").map(|t| FacetKind::Title(TitleFacet::Method(t))),
            template("iconName").map(|t| FacetKind::Icon(ComputedText::Template(t))),
            template("cssClass").map(|t| FacetKind::CssClass(ComputedText::Template(t))),
            template("layout").map(|t| FacetKind::Layout(ComputedText::Template(t))),
        ];
        for kind in facets.into_iter().flatten() {
            ctx.holder
                .add_facet(Facet::new(kind, Precedence::Low, self.name(), id.clone()));
        }
    }
}
