//! Identifier value object - names a class, member or action parameter
//!
//! Used as a map key throughout the metamodel and in validation messages.

use serde::{Deserialize, Serialize};

/// Uniquely names a feature: a fully-qualified type name, optionally a member
/// name, optionally a parameter index.
///
/// Two identifiers are equal iff all three components match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Identifier {
    class_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    member_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    parameter_index: Option<usize>,
}

impl Identifier {
    pub fn class(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            member_name: None,
            parameter_index: None,
        }
    }

    pub fn member(class_name: impl Into<String>, member_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            member_name: Some(member_name.into()),
            parameter_index: None,
        }
    }

    pub fn parameter(
        class_name: impl Into<String>,
        member_name: impl Into<String>,
        parameter_index: usize,
    ) -> Self {
        Self {
            class_name: class_name.into(),
            member_name: Some(member_name.into()),
            parameter_index: Some(parameter_index),
        }
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn member_name(&self) -> Option<&str> {
        self.member_name.as_deref()
    }

    pub fn parameter_index(&self) -> Option<usize> {
        self.parameter_index
    }

    /// Simple (unqualified) part of the class name.
    pub fn class_simple_name(&self) -> &str {
        self.class_name
            .rsplit_once('.')
            .map(|(_, simple)| simple)
            .unwrap_or(&self.class_name)
    }

    pub fn is_class(&self) -> bool {
        self.member_name.is_none()
    }

    pub fn is_parameter(&self) -> bool {
        self.parameter_index.is_some()
    }

    /// The identifier of the class declaring this feature.
    pub fn to_class_identifier(&self) -> Identifier {
        Identifier::class(self.class_name.clone())
    }

    /// Returns a copy of this identifier with the parameter index dropped.
    pub fn to_member_identifier(&self) -> Identifier {
        Self {
            class_name: self.class_name.clone(),
            member_name: self.member_name.clone(),
            parameter_index: None,
        }
    }
}

impl std::fmt::Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.class_name)?;
        if let Some(member) = &self.member_name {
            write!(f, "#{}", member)?;
        }
        if let Some(index) = self.parameter_index {
            write!(f, "[{}]", index)?;
        }
        Ok(())
    }
}
