//! Noun forms - singular and plural natural-language names

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NounForm {
    Singular,
    Plural,
}

/// Singular and plural name contributions, each independently optional.
///
/// Blank strings count as absent. A `NounForms` without any supported form
/// yields no `Named` facet at all.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NounForms {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    singular: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    plural: Option<String>,
}

impl NounForms {
    pub fn new(singular: Option<&str>, plural: Option<&str>) -> Self {
        Self {
            singular: non_blank(singular),
            plural: non_blank(plural),
        }
    }

    pub fn singular_only(singular: &str) -> Self {
        Self::new(Some(singular), None)
    }

    pub fn singular(&self) -> Option<&str> {
        self.singular.as_deref()
    }

    pub fn plural(&self) -> Option<&str> {
        self.plural.as_deref()
    }

    pub fn get(&self, form: NounForm) -> Option<&str> {
        match form {
            NounForm::Singular => self.singular(),
            NounForm::Plural => self.plural(),
        }
    }

    pub fn supported_forms(&self) -> Vec<NounForm> {
        let mut forms = Vec::new();
        if self.singular.is_some() {
            forms.push(NounForm::Singular);
        }
        if self.plural.is_some() {
            forms.push(NounForm::Plural);
        }
        forms
    }

    pub fn is_empty(&self) -> bool {
        self.singular.is_none() && self.plural.is_none()
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Turns an identifier such as `firstName` or `CustomerOrder` into
/// `First Name` / `Customer Order`.
pub fn natural_name(identifier: &str) -> String {
    let mut out = String::with_capacity(identifier.len() + 4);
    let mut prev: Option<char> = None;
    for ch in identifier.chars() {
        if ch == '_' || ch == '-' {
            if !out.ends_with(' ') && !out.is_empty() {
                out.push(' ');
            }
            prev = Some(' ');
            continue;
        }
        let boundary = match prev {
            Some(p) => ch.is_uppercase() && (p.is_lowercase() || p.is_ascii_digit()),
            None => false,
        };
        if boundary && !out.ends_with(' ') {
            out.push(' ');
        }
        if out.is_empty() || out.ends_with(' ') {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
        prev = Some(ch);
    }
    out.trim().to_string()
}

/// English pluralisation good enough for inferred collection headings.
pub fn pluralize(singular: &str) -> String {
    if singular.is_empty() {
        return String::new();
    }
    let lower = singular.to_lowercase();
    let ends_with_consonant_y = lower.ends_with('y')
        && !matches!(
            lower.chars().rev().nth(1),
            Some('a') | Some('e') | Some('i') | Some('o') | Some('u')
        );
    if ends_with_consonant_y {
        format!("{}ies", &singular[..singular.len() - 1])
    } else if ["s", "x", "z", "ch", "sh"].iter().any(|s| lower.ends_with(s)) {
        format!("{}es", singular)
    } else {
        format!("{}s", singular)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_forms_absent_is_empty() {
        let forms = NounForms::new(None, None);
        assert!(forms.is_empty());
        assert!(forms.supported_forms().is_empty());
    }

    #[test]
    fn blank_forms_count_as_absent() {
        let forms = NounForms::new(Some("  "), Some(""));
        assert!(forms.is_empty());
    }

    #[test]
    fn supported_forms_in_order() {
        let forms = NounForms::new(Some("Customer"), Some("Clientele"));
        assert_eq!(forms.supported_forms(), vec![NounForm::Singular, NounForm::Plural]);
        assert_eq!(forms.get(NounForm::Plural), Some("Clientele"));
    }

    #[test]
    fn natural_name_splits_camel_case() {
        assert_eq!(natural_name("firstName"), "First Name");
        assert_eq!(natural_name("CustomerOrder"), "Customer Order");
        assert_eq!(natural_name("line2Address"), "Line2 Address");
        assert_eq!(natural_name("due_date"), "Due Date");
        assert_eq!(natural_name("x"), "X");
    }

    #[test]
    fn pluralize_common_endings() {
        assert_eq!(pluralize("Customer"), "Customers");
        assert_eq!(pluralize("Category"), "Categories");
        assert_eq!(pluralize("Day"), "Days");
        assert_eq!(pluralize("Box"), "Boxes");
        assert_eq!(pluralize("Address"), "Addresses");
    }
}
