//! Property tests for facet precedence ranking.

use proptest::prelude::*;

use metamodel::domain::entities::{FacetRanking, UiEventFacet};
use metamodel::domain::services::UiEventKind;
use metamodel::{Facet, FacetKind, FacetType, Identifier, Precedence};

/// (precedence, origin, text) for a described facet
type Contribution = (Precedence, u8, String);

fn non_event_precedence() -> impl Strategy<Value = Precedence> {
    prop::sample::select(vec![
        Precedence::Inferred,
        Precedence::Default,
        Precedence::Low,
        Precedence::High,
    ])
}

fn contribution() -> impl Strategy<Value = Contribution> {
    (non_event_precedence(), 0u8..4, "[a-z]{1,8}")
}

fn described((precedence, origin, text): &Contribution) -> Facet {
    Facet::new(
        FacetKind::Described(text.clone()),
        *precedence,
        format!("origin-{}", origin),
        Identifier::class("acme.Customer"),
    )
}

fn ranking_of(contributions: &[Contribution]) -> FacetRanking {
    let mut ranking = FacetRanking::new(FacetType::Described);
    for c in contributions {
        ranking.add(described(c));
    }
    ranking
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: The winner has the highest precedence contributed, whatever the order.
    #[test]
    fn property_winner_has_highest_precedence(
        contributions in proptest::collection::vec(contribution(), 1..12)
            .prop_shuffle(),
    ) {
        let ranking = ranking_of(&contributions);
        let highest = contributions.iter().map(|c| c.0).max().unwrap();

        prop_assert_eq!(ranking.winner().unwrap().precedence(), highest);
    }

    /// PROPERTY: Within a precedence the last origin to contribute wins, and
    /// re-contributing from an origin replaces its earlier facet.
    #[test]
    fn property_last_contribution_at_top_precedence_wins(
        contributions in proptest::collection::vec(contribution(), 1..12),
    ) {
        let ranking = ranking_of(&contributions);
        let highest = contributions.iter().map(|c| c.0).max().unwrap();
        let expected = contributions.iter().rev().find(|c| c.0 == highest).unwrap();

        let winner = ranking.winner().unwrap();
        prop_assert_eq!(winner.described(), Some(expected.2.as_str()));

        let distinct: std::collections::BTreeSet<(Precedence, u8)> =
            contributions.iter().map(|c| (c.0, c.1)).collect();
        prop_assert_eq!(ranking.len(), distinct.len());
    }

    /// PROPERTY: Event facets win outright but never win among non-event facets.
    #[test]
    fn property_event_facets_never_win_non_event_queries(
        contributions in proptest::collection::vec(contribution(), 0..8),
        with_event in any::<bool>(),
        ceiling in prop::sample::select(Precedence::ALL.to_vec()),
    ) {
        let mut ranking = FacetRanking::new(FacetType::CssClass);
        for (precedence, origin, text) in &contributions {
            ranking.add(Facet::new(
                FacetKind::CssClass(metamodel::domain::entities::ComputedText::Fixed(text.clone())),
                *precedence,
                format!("origin-{}", origin),
                Identifier::class("acme.Customer"),
            ));
        }
        if with_event {
            ranking.add(Facet::new(
                FacetKind::UiEvent(UiEventFacet {
                    kind: UiEventKind::CssClass,
                    event_type: "acme.CustomerCssClassUiEvent".to_string(),
                }),
                Precedence::Event,
                "domain-object-layout",
                Identifier::class("acme.Customer"),
            ));
            prop_assert!(ranking.winner().unwrap().is_event());
        }

        match ranking.winner_non_event() {
            Some(winner) => prop_assert!(!winner.is_event()),
            None => prop_assert!(contributions.is_empty()),
        }
        if let Some(winner) = ranking.winner_non_event_lower_or_equal_to(ceiling) {
            prop_assert!(!winner.is_event());
            prop_assert!(winner.precedence() <= ceiling);
        }
    }
}
