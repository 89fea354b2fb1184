//! Managed object - the runtime target of facet queries
//!
//! The domain object's state is held as shared, immutable JSON so events can
//! carry it to subscribers without copying.

use std::sync::Arc;

use serde_json::Value;

/// Shared state of a domain object instance.
pub type Pojo = Arc<Value>;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ManagedObject {
    /// No object and no type known
    #[default]
    Unspecified,
    /// Type known but no instance (e.g. an empty reference)
    Empty { logical_type: String },
    Present { logical_type: String, pojo: Pojo },
}

impl ManagedObject {
    pub fn new(logical_type: impl Into<String>, state: Value) -> Self {
        Self::Present {
            logical_type: logical_type.into(),
            pojo: Arc::new(state),
        }
    }

    pub fn empty(logical_type: impl Into<String>) -> Self {
        Self::Empty {
            logical_type: logical_type.into(),
        }
    }

    pub fn pojo(&self) -> Option<&Pojo> {
        match self {
            ManagedObject::Present { pojo, .. } => Some(pojo),
            _ => None,
        }
    }

    pub fn logical_type(&self) -> Option<&str> {
        match self {
            ManagedObject::Unspecified => None,
            ManagedObject::Empty { logical_type } | ManagedObject::Present { logical_type, .. } => {
                Some(logical_type)
            }
        }
    }

    /// True for `Unspecified` and `Empty`: there is nothing to ask about.
    pub fn is_unspecified_or_empty(&self) -> bool {
        self.pojo().is_none()
    }
}

/// Reads a dotted property path (`address.city`) from the pojo as text.
///
/// Strings render as-is, numbers and booleans via `to_string`; `null`,
/// objects, arrays and missing paths yield `None`.
pub fn property_text(pojo: &Value, path: &str) -> Option<String> {
    let mut current = pojo;
    for segment in path.split('.') {
        current = current.get(segment)?;
    }
    match current {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Renders `{path}` placeholders against the pojo; `{{`/`}}` escape braces.
///
/// Missing values render as empty text. Surrounding whitespace is trimmed.
pub fn render_template(template: &str, pojo: &Value) -> String {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                out.push('{');
            }
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
                out.push('}');
            }
            '{' => {
                let mut path = String::new();
                let mut closed = false;
                for c in chars.by_ref() {
                    if c == '}' {
                        closed = true;
                        break;
                    }
                    path.push(c);
                }
                if closed {
                    if let Some(text) = property_text(pojo, path.trim()) {
                        out.push_str(&text);
                    }
                } else {
                    out.push('{');
                    out.push_str(&path);
                }
            }
            _ => out.push(ch),
        }
    }
    out.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unspecified_and_empty_have_no_pojo() {
        assert!(ManagedObject::Unspecified.is_unspecified_or_empty());
        assert!(ManagedObject::empty("acme.Customer").is_unspecified_or_empty());
        assert!(!ManagedObject::new("acme.Customer", json!({})).is_unspecified_or_empty());
    }

    #[test]
    fn property_text_reads_nested_paths() {
        let pojo = json!({"name": "Fred", "age": 42, "address": {"city": "Leeds"}, "vip": true});
        assert_eq!(property_text(&pojo, "name").as_deref(), Some("Fred"));
        assert_eq!(property_text(&pojo, "age").as_deref(), Some("42"));
        assert_eq!(property_text(&pojo, "address.city").as_deref(), Some("Leeds"));
        assert_eq!(property_text(&pojo, "vip").as_deref(), Some("true"));
        assert_eq!(property_text(&pojo, "address"), None);
        assert_eq!(property_text(&pojo, "missing"), None);
    }

    #[test]
    fn render_template_substitutes_and_escapes() {
        let pojo = json!({"first": "Ada", "last": "Lovelace"});
        assert_eq!(render_template("{first} {last}", &pojo), "Ada Lovelace");
        assert_eq!(render_template("{{literal}} {first}", &pojo), "{literal} Ada");
        assert_eq!(render_template("{ missing } {last}", &pojo), "Lovelace");
        assert_eq!(render_template("open {first", &pojo), "open {first");
    }
}
