//! Single-concern facet constructors
//!
//! Each function builds at most one facet of one type from already-extracted
//! annotation values. `None` means "not applicable" and is never an error;
//! callers feed the result to `FacetHolder::add_facet_if_present`.

use crate::config::EventsConfig;
use crate::domain::entities::{ComputedText, Facet, FacetKind, HiddenFacet, UiEventFacet};
use crate::domain::services::ui_event::UiEventKind;
use crate::domain::value_objects::{
    BookmarkPolicy, CssClassFaPosition, Identifier, NounForms, Precedence, Where,
};

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

pub fn named(
    singular: Option<&str>,
    plural: Option<&str>,
    precedence: Precedence,
    origin: &str,
    holder: &Identifier,
) -> Option<Facet> {
    let forms = NounForms::new(singular, plural);
    if forms.is_empty() {
        return None;
    }
    Some(Facet::new(
        FacetKind::Named(forms),
        precedence,
        origin,
        holder.clone(),
    ))
}

pub fn described(
    text: Option<&str>,
    precedence: Precedence,
    origin: &str,
    holder: &Identifier,
) -> Option<Facet> {
    let text = non_blank(text)?;
    Some(Facet::new(
        FacetKind::Described(text.to_string()),
        precedence,
        origin,
        holder.clone(),
    ))
}

pub fn css_class(
    css_class: Option<&str>,
    precedence: Precedence,
    origin: &str,
    holder: &Identifier,
) -> Option<Facet> {
    let css_class = non_blank(css_class)?;
    Some(Facet::new(
        FacetKind::CssClass(ComputedText::Fixed(css_class.to_string())),
        precedence,
        origin,
        holder.clone(),
    ))
}

/// Font Awesome icon class; a bare name such as `user` becomes `fa fa-user`.
pub fn css_class_fa(
    css_class: Option<&str>,
    position: CssClassFaPosition,
    precedence: Precedence,
    origin: &str,
    holder: &Identifier,
) -> Option<Facet> {
    let css_class = non_blank(css_class)?;
    Some(Facet::new(
        FacetKind::CssClassFa {
            css_class: normalize_fa(css_class),
            position,
        },
        precedence,
        origin,
        holder.clone(),
    ))
}

fn normalize_fa(css_class: &str) -> String {
    if css_class.split_whitespace().any(|c| c.starts_with("fa-")) {
        return css_class.to_string();
    }
    let classes: Vec<String> = css_class
        .split_whitespace()
        .map(|c| format!("fa-{}", c))
        .collect();
    format!("fa {}", classes.join(" "))
}

pub fn paged(
    page_size: Option<u32>,
    precedence: Precedence,
    origin: &str,
    holder: &Identifier,
) -> Option<Facet> {
    let page_size = page_size.filter(|size| *size > 0)?;
    Some(Facet::new(
        FacetKind::Paged(page_size),
        precedence,
        origin,
        holder.clone(),
    ))
}

pub fn bookmark_policy(
    policy: Option<BookmarkPolicy>,
    precedence: Precedence,
    origin: &str,
    holder: &Identifier,
) -> Option<Facet> {
    Some(Facet::new(
        FacetKind::BookmarkPolicy(policy?),
        precedence,
        origin,
        holder.clone(),
    ))
}

pub fn hidden(
    where_: Option<Where>,
    precedence: Precedence,
    origin: &str,
    holder: &Identifier,
) -> Option<Facet> {
    Some(Facet::new(
        FacetKind::Hidden(HiddenFacet::Static(where_?)),
        precedence,
        origin,
        holder.clone(),
    ))
}

pub fn member_order(
    sequence: Option<&str>,
    precedence: Precedence,
    origin: &str,
    holder: &Identifier,
) -> Option<Facet> {
    let sequence = non_blank(sequence)?;
    Some(Facet::new(
        FacetKind::MemberOrder {
            sequence: sequence.to_string(),
        },
        precedence,
        origin,
        holder.clone(),
    ))
}

/// An event-sourced facet, or `None` when the event type is not postable.
///
/// An unset event type means the built-in `Default` sentinel.
pub fn ui_event(
    kind: UiEventKind,
    event_type: Option<&str>,
    events: &EventsConfig,
    origin: &str,
    holder: &Identifier,
) -> Option<Facet> {
    let event_type = non_blank(event_type)
        .map(str::to_string)
        .unwrap_or_else(|| kind.default_event_type());
    if !kind.is_postable(&event_type, events.post_for_default(kind)) {
        tracing::trace!(%event_type, holder = %holder, "ui event not postable");
        return None;
    }
    Some(Facet::new(
        FacetKind::UiEvent(UiEventFacet { kind, event_type }),
        Precedence::Event,
        origin,
        holder.clone(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::FacetType;

    fn id() -> Identifier {
        Identifier::class("acme.Customer")
    }

    #[test]
    fn empty_noun_forms_produce_no_facet() {
        assert!(named(None, None, Precedence::Default, "t", &id()).is_none());
        assert!(named(Some("  "), Some(""), Precedence::Default, "t", &id()).is_none());
        let facet = named(None, Some("Clients"), Precedence::Default, "t", &id()).unwrap();
        assert_eq!(facet.facet_type(), FacetType::Named);
    }

    #[test]
    fn blank_text_is_not_applicable() {
        assert!(described(Some(" "), Precedence::Default, "t", &id()).is_none());
        assert!(css_class(None, Precedence::Default, "t", &id()).is_none());
        assert!(member_order(Some(""), Precedence::Default, "t", &id()).is_none());
        assert!(paged(Some(0), Precedence::Default, "t", &id()).is_none());
    }

    #[test]
    fn css_class_fa_is_normalized() {
        assert_eq!(normalize_fa("user"), "fa fa-user");
        assert_eq!(normalize_fa("fa fa-user"), "fa fa-user");
        assert_eq!(normalize_fa("user fw"), "fa fa-user fa-fw");
    }

    #[test]
    fn ui_event_respects_postability() {
        let mut events = EventsConfig::default();
        let kind = UiEventKind::Title;

        assert!(ui_event(kind, None, &events, "t", &id()).is_none());
        assert!(ui_event(kind, Some(&kind.noop_event_type()), &events, "t", &id()).is_none());

        events.set_post_for_default(kind, true);
        let facet = ui_event(kind, None, &events, "t", &id()).unwrap();
        assert_eq!(facet.precedence(), Precedence::Event);
        assert_eq!(facet.facet_type(), FacetType::Title);

        let custom = ui_event(kind, Some("acme.CustomerTitle"), &EventsConfig::default(), "t", &id());
        assert!(custom.is_some());
    }
}
