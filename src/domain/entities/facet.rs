//! Facet entity
//!
//! A facet is one decided aspect of behavior for a class, member or
//! parameter. Facets are tagged variants: the tag (`FacetType`) keys the
//! holder's ranking, the variant carries the type-specific state.

use crate::domain::entities::managed_object::{property_text, render_template, ManagedObject};
use crate::domain::entities::FacetHolder;
use crate::domain::ports::FacetServices;
use crate::domain::services::ui_event::{self, UiEventKind};
use crate::domain::value_objects::{
    BeanSort, BookmarkPolicy, CssClassFaPosition, FacetType, IconSize, Identifier, MenuBarKind,
    NounForm, NounForms, Precedence, Where,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Facet {
    kind: FacetKind,
    precedence: Precedence,
    origin: String,
    holder: Identifier,
}

/// Type-specific facet state.
#[derive(Debug, Clone, PartialEq)]
pub enum FacetKind {
    Title(TitleFacet),
    Icon(ComputedText),
    CssClass(ComputedText),
    CssClassFa {
        css_class: String,
        position: CssClassFaPosition,
    },
    Layout(ComputedText),
    Named(NounForms),
    Described(String),
    Paged(u32),
    BookmarkPolicy(BookmarkPolicy),
    LogicalType(String),
    ObjectNature(BeanSort),
    MenuBar(MenuBarKind),
    Hidden(HiddenFacet),
    Disabled(DisabledFacet),
    MemberOrder {
        sequence: String,
    },
    /// Event-sourced override for title, icon, css class or layout
    UiEvent(UiEventFacet),
}

/// A text value that is either fixed or computed from the object's state.
#[derive(Debug, Clone, PartialEq)]
pub enum ComputedText {
    Fixed(String),
    Template(String),
}

impl ComputedText {
    pub fn evaluate(&self, target: &ManagedObject) -> Option<String> {
        let pojo = target.pojo()?;
        let text = match self {
            ComputedText::Fixed(text) => text.clone(),
            ComputedText::Template(template) => render_template(template, pojo),
        };
        (!text.is_empty()).then_some(text)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TitleFacet {
    /// `@Title` annotated properties, sorted by sequence
    Components(Vec<TitleComponent>),
    /// A `title()` support method
    Method(String),
    /// The value itself, for value types
    ToString,
    Fixed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct TitleComponent {
    pub property: String,
    pub sequence: String,
    pub prepend: String,
    pub append: String,
    pub abbreviated_to: Option<usize>,
}

impl TitleFacet {
    pub fn title(&self, target: &ManagedObject) -> Option<String> {
        let pojo = target.pojo()?;
        let title = match self {
            TitleFacet::Components(components) => {
                let parts: Vec<String> = components
                    .iter()
                    .filter_map(|c| {
                        let value = property_text(pojo, &c.property)?;
                        let value = abbreviate(&value, c.abbreviated_to);
                        Some(format!("{}{}{}", c.prepend, value, c.append))
                    })
                    .filter(|part| !part.trim().is_empty())
                    .collect();
                parts.join(" ").trim().to_string()
            }
            TitleFacet::Method(template) => render_template(template, pojo),
            TitleFacet::ToString => match pojo.as_ref() {
                serde_json::Value::String(s) => s.clone(),
                serde_json::Value::Number(n) => n.to_string(),
                serde_json::Value::Bool(b) => b.to_string(),
                _ => String::new(),
            },
            TitleFacet::Fixed(text) => text.clone(),
        };
        (!title.is_empty()).then_some(title)
    }
}

fn abbreviate(value: &str, max: Option<usize>) -> String {
    match max {
        Some(max) if max <= 3 && value.chars().count() > max => value.chars().take(max).collect(),
        Some(max) if value.chars().count() > max => {
            let cut: String = value.chars().take(max.saturating_sub(3)).collect();
            format!("{}...", cut)
        }
        _ => value.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum HiddenFacet {
    Static(Where),
    /// `hideXxx()` whose body renders `true` when hidden
    Imperative { method: String, body: String },
}

impl HiddenFacet {
    pub fn hides(&self, target: &ManagedObject) -> bool {
        match self {
            HiddenFacet::Static(where_) => !where_.is_nowhere(),
            HiddenFacet::Imperative { body, .. } => target
                .pojo()
                .map(|pojo| render_template(body, pojo) == "true")
                .unwrap_or(false),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DisabledFacet {
    Static(String),
    /// `disableXxx()` whose body renders a non-empty reason when disabled
    Imperative { method: String, body: String },
}

impl DisabledFacet {
    pub fn disabled_reason(&self, target: &ManagedObject) -> Option<String> {
        match self {
            DisabledFacet::Static(reason) => Some(reason.clone()),
            DisabledFacet::Imperative { body, .. } => {
                let reason = render_template(body, target.pojo()?);
                (!reason.is_empty()).then_some(reason)
            }
        }
    }
}

/// An event-sourced facet: the event type posted before falling back.
#[derive(Debug, Clone, PartialEq)]
pub struct UiEventFacet {
    pub kind: UiEventKind,
    pub event_type: String,
}

impl Facet {
    pub fn new(
        kind: FacetKind,
        precedence: Precedence,
        origin: impl Into<String>,
        holder: Identifier,
    ) -> Self {
        Self {
            kind,
            precedence,
            origin: origin.into(),
            holder,
        }
    }

    pub fn facet_type(&self) -> FacetType {
        match &self.kind {
            FacetKind::Title(_) => FacetType::Title,
            FacetKind::Icon(_) => FacetType::Icon,
            FacetKind::CssClass(_) => FacetType::CssClass,
            FacetKind::CssClassFa { .. } => FacetType::CssClassFa,
            FacetKind::Layout(_) => FacetType::Layout,
            FacetKind::Named(_) => FacetType::Named,
            FacetKind::Described(_) => FacetType::Described,
            FacetKind::Paged(_) => FacetType::Paged,
            FacetKind::BookmarkPolicy(_) => FacetType::BookmarkPolicy,
            FacetKind::LogicalType(_) => FacetType::LogicalType,
            FacetKind::ObjectNature(_) => FacetType::ObjectNature,
            FacetKind::MenuBar(_) => FacetType::MenuBar,
            FacetKind::Hidden(_) => FacetType::Hidden,
            FacetKind::Disabled(_) => FacetType::Disabled,
            FacetKind::MemberOrder { .. } => FacetType::MemberOrder,
            FacetKind::UiEvent(event) => event.kind.facet_type(),
        }
    }

    pub fn kind(&self) -> &FacetKind {
        &self.kind
    }

    pub fn precedence(&self) -> Precedence {
        self.precedence
    }

    /// Marker of the factory or resource that contributed this facet.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Identifier of the holder this facet is attached to.
    pub fn holder(&self) -> &Identifier {
        &self.holder
    }

    pub fn is_event(&self) -> bool {
        matches!(self.kind, FacetKind::UiEvent(_))
    }

    /// Same facet re-attached to another holder (inheritance).
    pub fn reattached(&self, holder: Identifier) -> Self {
        Self {
            holder,
            ..self.clone()
        }
    }

    pub fn title(
        &self,
        holder: &FacetHolder,
        target: &ManagedObject,
        services: &FacetServices,
    ) -> Option<String> {
        match &self.kind {
            FacetKind::Title(title) => title.title(target),
            FacetKind::UiEvent(event) if event.kind == UiEventKind::Title => {
                ui_event::title(event, holder, target, services)
            }
            _ => None,
        }
    }

    pub fn icon_name(
        &self,
        holder: &FacetHolder,
        target: &ManagedObject,
        size: IconSize,
        services: &FacetServices,
    ) -> Option<String> {
        match &self.kind {
            FacetKind::Icon(icon) => icon.evaluate(target),
            FacetKind::UiEvent(event) if event.kind == UiEventKind::Icon => {
                ui_event::icon_name(event, holder, target, size, services)
            }
            _ => None,
        }
    }

    pub fn css_class(
        &self,
        holder: &FacetHolder,
        target: &ManagedObject,
        services: &FacetServices,
    ) -> Option<String> {
        match &self.kind {
            FacetKind::CssClass(css) => css.evaluate(target),
            FacetKind::UiEvent(event) if event.kind == UiEventKind::CssClass => {
                ui_event::css_class(event, holder, target, services)
            }
            _ => None,
        }
    }

    pub fn layout(
        &self,
        holder: &FacetHolder,
        target: &ManagedObject,
        services: &FacetServices,
    ) -> Option<String> {
        match &self.kind {
            FacetKind::Layout(layout) => layout.evaluate(target),
            FacetKind::UiEvent(event) if event.kind == UiEventKind::Layout => {
                ui_event::layout(event, holder, target, services)
            }
            _ => None,
        }
    }

    pub fn named(&self, form: NounForm) -> Option<&str> {
        match &self.kind {
            FacetKind::Named(forms) => forms.get(form),
            _ => None,
        }
    }

    pub fn described(&self) -> Option<&str> {
        match &self.kind {
            FacetKind::Described(text) => Some(text),
            _ => None,
        }
    }

    pub fn logical_type_name(&self) -> Option<&str> {
        match &self.kind {
            FacetKind::LogicalType(name) => Some(name),
            _ => None,
        }
    }

    pub fn member_order_sequence(&self) -> Option<&str> {
        match &self.kind {
            FacetKind::MemberOrder { sequence } => Some(sequence),
            _ => None,
        }
    }

    /// One-line, human readable rendering of the facet's state.
    pub fn summary(&self) -> String {
        match &self.kind {
            FacetKind::Title(TitleFacet::Components(components)) => format!(
                "title from properties [{}]",
                components
                    .iter()
                    .map(|c| c.property.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
            FacetKind::Title(TitleFacet::Method(body)) => format!("title() = \"{}\"", body),
            FacetKind::Title(TitleFacet::ToString) => "title from value".to_string(),
            FacetKind::Title(TitleFacet::Fixed(text)) => format!("title \"{}\"", text),
            FacetKind::Icon(text) | FacetKind::CssClass(text) | FacetKind::Layout(text) => {
                match text {
                    ComputedText::Fixed(value) => format!("\"{}\"", value),
                    ComputedText::Template(body) => format!("computed \"{}\"", body),
                }
            }
            FacetKind::CssClassFa {
                css_class,
                position,
            } => format!("\"{}\" ({:?})", css_class, position),
            FacetKind::Named(forms) => match (forms.singular(), forms.plural()) {
                (Some(s), Some(p)) => format!("\"{}\" / \"{}\"", s, p),
                (Some(s), None) => format!("\"{}\"", s),
                (None, Some(p)) => format!("plural \"{}\"", p),
                (None, None) => "<no forms>".to_string(),
            },
            FacetKind::Described(text) => format!("\"{}\"", text),
            FacetKind::Paged(size) => format!("page size {}", size),
            FacetKind::BookmarkPolicy(policy) => format!("{:?}", policy),
            FacetKind::LogicalType(name) => name.clone(),
            FacetKind::ObjectNature(sort) => sort.to_string(),
            FacetKind::MenuBar(bar) => format!("{:?}", bar),
            FacetKind::Hidden(HiddenFacet::Static(where_)) => format!("hidden {:?}", where_),
            FacetKind::Hidden(HiddenFacet::Imperative { method, .. }) => {
                format!("hidden via {}()", method)
            }
            FacetKind::Disabled(DisabledFacet::Static(reason)) => format!("disabled: {}", reason),
            FacetKind::Disabled(DisabledFacet::Imperative { method, .. }) => {
                format!("disabled via {}()", method)
            }
            FacetKind::MemberOrder { sequence } => format!("sequence {}", sequence),
            FacetKind::UiEvent(event) => format!("posts {}", event.event_type),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn customer(state: serde_json::Value) -> ManagedObject {
        ManagedObject::new("acme.Customer", state)
    }

    #[test]
    fn title_components_join_in_order() {
        let facet = TitleFacet::Components(vec![
            TitleComponent {
                property: "first".into(),
                sequence: "1".into(),
                prepend: String::new(),
                append: String::new(),
                abbreviated_to: None,
            },
            TitleComponent {
                property: "last".into(),
                sequence: "2".into(),
                prepend: "(".into(),
                append: ")".into(),
                abbreviated_to: None,
            },
        ]);

        let title = facet.title(&customer(json!({"first": "Ada", "last": "Lovelace"})));
        assert_eq!(title.as_deref(), Some("Ada (Lovelace)"));
    }

    #[test]
    fn title_components_skip_missing_values() {
        let facet = TitleFacet::Components(vec![TitleComponent {
            property: "nickname".into(),
            sequence: "1".into(),
            prepend: String::new(),
            append: String::new(),
            abbreviated_to: None,
        }]);
        assert_eq!(facet.title(&customer(json!({"first": "Ada"}))), None);
    }

    #[test]
    fn title_component_abbreviation() {
        assert_eq!(abbreviate("Lovelace", Some(6)), "Lov...");
        assert_eq!(abbreviate("Ada", Some(6)), "Ada");
        assert_eq!(abbreviate("Ada", None), "Ada");
        // too short for an ellipsis
        assert_eq!(abbreviate("Lovelace", Some(2)), "Lo");
        assert_eq!(abbreviate("Lovelace", Some(3)), "Lov");
        assert_eq!(abbreviate("Lovelace", Some(0)), "");
    }

    #[test]
    fn computed_text_requires_a_target() {
        let fixed = ComputedText::Fixed("x-customer".into());
        assert_eq!(fixed.evaluate(&ManagedObject::Unspecified), None);
        assert_eq!(
            fixed.evaluate(&customer(json!({}))).as_deref(),
            Some("x-customer")
        );
        let template = ComputedText::Template("status-{status}".into());
        assert_eq!(
            template.evaluate(&customer(json!({"status": "gold"}))).as_deref(),
            Some("status-gold")
        );
    }

    #[test]
    fn imperative_hidden_and_disabled() {
        let hidden = HiddenFacet::Imperative {
            method: "hideDiscount".into(),
            body: "{archived}".into(),
        };
        assert!(hidden.hides(&customer(json!({"archived": true}))));
        assert!(!hidden.hides(&customer(json!({"archived": false}))));
        assert!(HiddenFacet::Static(Where::Everywhere).hides(&ManagedObject::Unspecified));
        assert!(!HiddenFacet::Static(Where::Nowhere).hides(&ManagedObject::Unspecified));

        let disabled = DisabledFacet::Imperative {
            method: "disableDiscount".into(),
            body: "{lockReason}".into(),
        };
        assert_eq!(
            disabled
                .disabled_reason(&customer(json!({"lockReason": "Closed"})))
                .as_deref(),
            Some("Closed")
        );
        assert_eq!(disabled.disabled_reason(&customer(json!({}))), None);
    }

    #[test]
    fn facet_type_of_event_facet_follows_event_kind() {
        let facet = Facet::new(
            FacetKind::UiEvent(UiEventFacet {
                kind: UiEventKind::CssClass,
                event_type: "acme.CustomerCssClassUiEvent".into(),
            }),
            Precedence::Event,
            "test",
            Identifier::class("acme.Customer"),
        );
        assert_eq!(facet.facet_type(), FacetType::CssClass);
        assert!(facet.is_event());
        assert_eq!(facet.summary(), "posts acme.CustomerCssClassUiEvent");
    }
}
