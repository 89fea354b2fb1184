//! Facet ranking
//!
//! Every contribution for one (holder, facet type) pair, grouped by
//! precedence:
//! - Higher precedence always wins, regardless of insertion order
//! - Same precedence: the most recently registered origin wins
//! - Same precedence and same origin: the old contribution is dropped and the
//!   new one registered last

use std::collections::BTreeMap;
use std::sync::OnceLock;

use crate::domain::entities::Facet;
use crate::domain::value_objects::{FacetType, Precedence};

#[derive(Debug)]
pub struct FacetRanking {
    facet_type: FacetType,
    by_precedence: BTreeMap<Precedence, Vec<Facet>>,
    winner: OnceLock<Option<(Precedence, usize)>>,
}

impl FacetRanking {
    pub fn new(facet_type: FacetType) -> Self {
        Self {
            facet_type,
            by_precedence: BTreeMap::new(),
            winner: OnceLock::new(),
        }
    }

    pub fn facet_type(&self) -> FacetType {
        self.facet_type
    }

    /// Registers a contribution at the facet's own precedence.
    ///
    /// Facets of another facet type are ignored with a debug log.
    pub fn add(&mut self, facet: Facet) {
        if facet.facet_type() != self.facet_type {
            tracing::debug!(
                expected = %self.facet_type,
                actual = %facet.facet_type(),
                holder = %facet.holder(),
                "facet offered to ranking of another type; ignored"
            );
            return;
        }

        let tier = self.by_precedence.entry(facet.precedence()).or_default();
        tier.retain(|f| f.origin() != facet.origin());
        tier.push(facet);
        self.winner = OnceLock::new();
    }

    /// The highest-precedence contribution, if any.
    pub fn winner(&self) -> Option<&Facet> {
        let (precedence, index) = (*self
            .winner
            .get_or_init(|| self.resolve(Precedence::Event)))?;
        self.by_precedence.get(&precedence)?.get(index)
    }

    /// The winner among non-event contributions.
    pub fn winner_non_event(&self) -> Option<&Facet> {
        self.winner_non_event_lower_or_equal_to(Precedence::High)
    }

    /// The winner among non-event contributions at or below `ceiling`.
    pub fn winner_non_event_lower_or_equal_to(&self, ceiling: Precedence) -> Option<&Facet> {
        let ceiling = ceiling.min(Precedence::High);
        let (precedence, index) = self.resolve(ceiling)?;
        self.by_precedence.get(&precedence)?.get(index)
    }

    fn resolve(&self, ceiling: Precedence) -> Option<(Precedence, usize)> {
        self.by_precedence
            .range(..=ceiling)
            .rev()
            .find_map(|(precedence, tier)| {
                tier.len().checked_sub(1).map(|last| (*precedence, last))
            })
    }

    /// All contributions, lowest precedence first, registration order within
    /// a precedence.
    pub fn contributions(&self) -> impl Iterator<Item = &Facet> {
        self.by_precedence.values().flatten()
    }

    pub fn len(&self) -> usize {
        self.by_precedence.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Clone for FacetRanking {
    fn clone(&self) -> Self {
        Self {
            facet_type: self.facet_type,
            by_precedence: self.by_precedence.clone(),
            winner: OnceLock::new(),
        }
    }
}

impl PartialEq for FacetRanking {
    fn eq(&self, other: &Self) -> bool {
        self.facet_type == other.facet_type && self.by_precedence == other.by_precedence
    }
}

#[cfg(test)]
mod tests;
