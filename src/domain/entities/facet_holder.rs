//! Facet holder
//!
//! Any metamodel element carrying facets: an object specification, a
//! property, collection or action, or an action parameter. Keeps exactly one
//! ranking per observed facet type.

use std::collections::BTreeMap;

use crate::domain::entities::{Facet, FacetRanking, ManagedObject};
use crate::domain::ports::FacetServices;
use crate::domain::value_objects::{FacetType, FeatureType, IconSize, Identifier, Precedence};

#[derive(Debug, Clone, PartialEq)]
pub struct FacetHolder {
    identifier: Identifier,
    feature_type: FeatureType,
    rankings: BTreeMap<FacetType, FacetRanking>,
}

impl FacetHolder {
    pub fn new(identifier: Identifier, feature_type: FeatureType) -> Self {
        Self {
            identifier,
            feature_type,
            rankings: BTreeMap::new(),
        }
    }

    pub fn identifier(&self) -> &Identifier {
        &self.identifier
    }

    pub fn feature_type(&self) -> FeatureType {
        self.feature_type
    }

    pub fn add_facet(&mut self, facet: Facet) {
        let facet_type = facet.facet_type();
        self.rankings
            .entry(facet_type)
            .or_insert_with(|| FacetRanking::new(facet_type))
            .add(facet);
    }

    pub fn add_facet_if_present(&mut self, facet: Option<Facet>) {
        if let Some(facet) = facet {
            self.add_facet(facet);
        }
    }

    /// The winning facet of this type.
    pub fn facet(&self, facet_type: FacetType) -> Option<&Facet> {
        self.rankings.get(&facet_type)?.winner()
    }

    pub fn contains(&self, facet_type: FacetType) -> bool {
        self.facet(facet_type).is_some()
    }

    /// What would apply if no event subscriber overrode this facet type.
    pub fn non_event_facet(&self, facet_type: FacetType) -> Option<&Facet> {
        self.rankings.get(&facet_type)?.winner_non_event()
    }

    pub fn facet_lower_or_equal_to(
        &self,
        facet_type: FacetType,
        ceiling: Precedence,
    ) -> Option<&Facet> {
        self.rankings
            .get(&facet_type)?
            .winner_non_event_lower_or_equal_to(ceiling)
    }

    pub fn ranking(&self, facet_type: FacetType) -> Option<&FacetRanking> {
        self.rankings.get(&facet_type)
    }

    pub fn facet_types(&self) -> impl Iterator<Item = FacetType> + '_ {
        self.rankings.keys().copied()
    }

    /// Winning facet of every type, in facet-type order.
    pub fn facets(&self) -> impl Iterator<Item = &Facet> {
        self.rankings.values().filter_map(FacetRanking::winner)
    }

    pub fn title(&self, target: &ManagedObject, services: &FacetServices) -> Option<String> {
        if target.is_unspecified_or_empty() {
            return None;
        }
        self.facet(FacetType::Title)?.title(self, target, services)
    }

    pub fn icon_name(
        &self,
        target: &ManagedObject,
        size: IconSize,
        services: &FacetServices,
    ) -> Option<String> {
        if target.is_unspecified_or_empty() {
            return None;
        }
        self.facet(FacetType::Icon)?
            .icon_name(self, target, size, services)
    }

    pub fn css_class(&self, target: &ManagedObject, services: &FacetServices) -> Option<String> {
        if target.is_unspecified_or_empty() {
            return None;
        }
        self.facet(FacetType::CssClass)?
            .css_class(self, target, services)
    }

    pub fn layout(&self, target: &ManagedObject, services: &FacetServices) -> Option<String> {
        if target.is_unspecified_or_empty() {
            return None;
        }
        self.facet(FacetType::Layout)?.layout(self, target, services)
    }
}
