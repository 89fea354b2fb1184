//! Validation failures collected over a full-model scan

use serde::Serialize;

use crate::domain::value_objects::Identifier;
use crate::error::{MetamodelError, MetamodelResult};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ValidationFailure {
    pub identifier: Identifier,
    pub message: String,
}

impl ValidationFailure {
    pub fn new(identifier: Identifier, message: impl Into<String>) -> Self {
        Self {
            identifier,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.identifier, self.message)
    }
}

/// Every structural defect found, reported together once the whole model has
/// been introspected.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ValidationFailures {
    failures: Vec<ValidationFailure>,
}

impl ValidationFailures {
    pub fn push(&mut self, failure: ValidationFailure) {
        if !self.failures.contains(&failure) {
            self.failures.push(failure);
        }
    }

    pub fn extend(&mut self, other: ValidationFailures) {
        for failure in other.failures {
            self.push(failure);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn len(&self) -> usize {
        self.failures.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationFailure> {
        self.failures.iter()
    }

    pub fn for_identifier<'a>(
        &'a self,
        identifier: &'a Identifier,
    ) -> impl Iterator<Item = &'a ValidationFailure> {
        self.failures
            .iter()
            .filter(move |f| &f.identifier == identifier)
    }

    pub fn messages(&self) -> Vec<String> {
        self.failures.iter().map(ToString::to_string).collect()
    }

    /// Sorted by identifier for stable reporting.
    pub fn sorted(mut self) -> Self {
        self.failures.sort();
        self
    }

    /// Turns a non-empty set of failures into one composite error.
    pub fn throw_if_invalid(self) -> MetamodelResult<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(MetamodelError::ModelInvalid(self.sorted()))
        }
    }
}

impl std::fmt::Display for ValidationFailures {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for failure in &self.failures {
            writeln!(f, "  - {}", failure)?;
        }
        Ok(())
    }
}

impl IntoIterator for ValidationFailures {
    type Item = ValidationFailure;
    type IntoIter = std::vec::IntoIter<ValidationFailure>;

    fn into_iter(self) -> Self::IntoIter {
        self.failures.into_iter()
    }
}
