//! Translation Port
//!
//! Resolves a (text, context) pair to a localized string.

use std::collections::BTreeMap;

/// Where a translatable text originates, e.g. `acme.Customer#title()`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TranslationContext(String);

impl TranslationContext {
    pub fn new(context: impl Into<String>) -> Self {
        Self(context.into())
    }

    pub fn for_method(class_name: &str, method: &str) -> Self {
        Self(format!("{}#{}()", class_name, method))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TranslationContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

pub trait TranslationService: Send + Sync {
    /// Returns the translation, or `text` itself when none is known.
    fn translate(&self, context: &TranslationContext, text: &str) -> String;
}

/// Identity translation.
pub struct NoopTranslationService;

impl TranslationService for NoopTranslationService {
    fn translate(&self, _context: &TranslationContext, text: &str) -> String {
        text.to_string()
    }
}

/// A pattern with `{name}` placeholders, translated before substitution.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TranslatableString {
    pattern: String,
    args: BTreeMap<String, String>,
}

impl TranslatableString {
    pub fn tr(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            args: BTreeMap::new(),
        }
    }

    pub fn with_arg(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.args.insert(name.into(), value.into());
        self
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn translate(&self, service: &dyn TranslationService, context: &TranslationContext) -> String {
        let mut text = service.translate(context, &self.pattern);
        for (name, value) in &self.args {
            text = text.replace(&format!("{{{}}}", name), value);
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Upper;

    impl TranslationService for Upper {
        fn translate(&self, _context: &TranslationContext, text: &str) -> String {
            text.to_uppercase()
        }
    }

    #[test]
    fn context_for_method() {
        assert_eq!(
            TranslationContext::for_method("acme.Customer", "title").as_str(),
            "acme.Customer#title()"
        );
    }

    #[test]
    fn translatable_string_translates_pattern_then_substitutes() {
        let text = TranslatableString::tr("customer {name}").with_arg("NAME", "Ada");
        // pattern translated first: "{name}" becomes "{NAME}"
        let context = TranslationContext::new("ctx");
        assert_eq!(text.translate(&Upper, &context), "CUSTOMER Ada");
        assert_eq!(
            TranslatableString::tr("Hi {who}")
                .with_arg("who", "Bob")
                .translate(&NoopTranslationService, &context),
            "Hi Bob"
        );
    }
}
