use super::*;
use crate::domain::entities::{ComputedText, FacetKind, UiEventFacet};
use crate::domain::services::ui_event::UiEventKind;
use crate::domain::value_objects::Identifier;

fn css(value: &str, precedence: Precedence, origin: &str) -> Facet {
    Facet::new(
        FacetKind::CssClass(ComputedText::Fixed(value.to_string())),
        precedence,
        origin,
        Identifier::class("acme.Customer"),
    )
}

fn css_event() -> Facet {
    Facet::new(
        FacetKind::UiEvent(UiEventFacet {
            kind: UiEventKind::CssClass,
            event_type: "acme.CustomerCssClassUiEvent".to_string(),
        }),
        Precedence::Event,
        "domain-object-layout",
        Identifier::class("acme.Customer"),
    )
}

fn fixed_value(facet: Option<&Facet>) -> Option<String> {
    match facet?.kind() {
        FacetKind::CssClass(ComputedText::Fixed(v)) => Some(v.clone()),
        _ => None,
    }
}

#[test]
fn empty_ranking_has_no_winner() {
    let ranking = FacetRanking::new(FacetType::CssClass);
    assert!(ranking.winner().is_none());
    assert!(ranking.winner_non_event().is_none());
    assert!(ranking.is_empty());
}

#[test]
fn higher_precedence_wins_regardless_of_order() {
    let mut ranking = FacetRanking::new(FacetType::CssClass);
    ranking.add(css("high", Precedence::High, "layout"));
    ranking.add(css("default", Precedence::Default, "annotation"));

    assert_eq!(fixed_value(ranking.winner()).as_deref(), Some("high"));

    let mut reversed = FacetRanking::new(FacetType::CssClass);
    reversed.add(css("default", Precedence::Default, "annotation"));
    reversed.add(css("high", Precedence::High, "layout"));

    assert_eq!(fixed_value(reversed.winner()).as_deref(), Some("high"));
}

#[test]
fn same_precedence_last_registered_origin_wins() {
    let mut ranking = FacetRanking::new(FacetType::CssClass);
    ranking.add(css("first", Precedence::Default, "factory-a"));
    ranking.add(css("second", Precedence::Default, "factory-b"));

    assert_eq!(fixed_value(ranking.winner()).as_deref(), Some("second"));
    assert_eq!(ranking.len(), 2);
}

#[test]
fn same_origin_re_registration_replaces_and_wins() {
    let mut ranking = FacetRanking::new(FacetType::CssClass);
    ranking.add(css("a1", Precedence::Default, "factory-a"));
    ranking.add(css("b", Precedence::Default, "factory-b"));
    ranking.add(css("a2", Precedence::Default, "factory-a"));

    assert_eq!(ranking.len(), 2);
    assert_eq!(fixed_value(ranking.winner()).as_deref(), Some("a2"));
    let values: Vec<_> = ranking.contributions().map(|f| f.summary()).collect();
    assert_eq!(values, vec!["\"b\"", "\"a2\""]);
}

#[test]
fn re_registering_the_latest_origin_changes_nothing() {
    let mut ranking = FacetRanking::new(FacetType::CssClass);
    ranking.add(css("a", Precedence::High, "layout-resource"));
    ranking.add(css("b", Precedence::High, "menubars-layout"));
    let before = ranking.clone();

    ranking.add(css("b", Precedence::High, "menubars-layout"));
    assert_eq!(ranking, before);
    assert_eq!(fixed_value(ranking.winner()).as_deref(), Some("b"));
}

#[test]
fn winner_cache_is_invalidated_on_add() {
    let mut ranking = FacetRanking::new(FacetType::CssClass);
    ranking.add(css("default", Precedence::Default, "annotation"));
    assert_eq!(fixed_value(ranking.winner()).as_deref(), Some("default"));

    ranking.add(css("low", Precedence::Low, "method"));
    assert_eq!(fixed_value(ranking.winner()).as_deref(), Some("low"));
}

#[test]
fn event_facets_win_but_are_excluded_from_non_event_winner() {
    let mut ranking = FacetRanking::new(FacetType::CssClass);
    ranking.add(css("default", Precedence::Default, "annotation"));
    ranking.add(css_event());

    assert!(ranking.winner().unwrap().is_event());
    assert_eq!(fixed_value(ranking.winner_non_event()).as_deref(), Some("default"));
}

#[test]
fn ceiling_excludes_higher_contributions() {
    let mut ranking = FacetRanking::new(FacetType::CssClass);
    ranking.add(css("inferred", Precedence::Inferred, "fallback"));
    ranking.add(css("default", Precedence::Default, "annotation"));
    ranking.add(css("high", Precedence::High, "layout"));
    ranking.add(css_event());

    assert_eq!(
        fixed_value(ranking.winner_non_event_lower_or_equal_to(Precedence::Default)).as_deref(),
        Some("default")
    );
    assert_eq!(
        fixed_value(ranking.winner_non_event_lower_or_equal_to(Precedence::Inferred)).as_deref(),
        Some("inferred")
    );
    // an Event ceiling is clamped: event facets never qualify
    assert_eq!(
        fixed_value(ranking.winner_non_event_lower_or_equal_to(Precedence::Event)).as_deref(),
        Some("high")
    );
}

#[test]
fn only_event_contributions_give_no_non_event_winner() {
    let mut ranking = FacetRanking::new(FacetType::CssClass);
    ranking.add(css_event());
    assert!(ranking.winner().is_some());
    assert!(ranking.winner_non_event().is_none());
}

#[test]
fn facet_of_other_type_is_ignored() {
    let mut ranking = FacetRanking::new(FacetType::Icon);
    ranking.add(css("x", Precedence::Default, "annotation"));
    assert!(ranking.is_empty());
}

#[test]
fn clone_preserves_contributions() {
    let mut ranking = FacetRanking::new(FacetType::CssClass);
    ranking.add(css("default", Precedence::Default, "annotation"));
    let _ = ranking.winner();
    let copy = ranking.clone();
    assert_eq!(copy, ranking);
    assert_eq!(fixed_value(copy.winner()).as_deref(), Some("default"));
}
