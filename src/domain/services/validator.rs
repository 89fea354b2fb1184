//! Metamodel validator
//!
//! Structural checks run once every class has been introspected. Failures
//! are collected, never thrown; callers decide whether to fail hard.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::domain::entities::{
    ObjectSpecification, ValidationFailure, ValidationFailures, OBJECT_SUPPORT_METHODS,
};
use crate::domain::ports::ClassSource;
use crate::domain::value_objects::{FeatureType, Identifier};

#[derive(Debug, Clone)]
pub struct MetamodelValidator {
    orphaned_support_methods: bool,
}

impl Default for MetamodelValidator {
    fn default() -> Self {
        Self {
            orphaned_support_methods: true,
        }
    }
}

impl MetamodelValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_orphaned_support_methods(mut self, enabled: bool) -> Self {
        self.orphaned_support_methods = enabled;
        self
    }

    pub fn validate(
        &self,
        classes: &dyn ClassSource,
        specs: &[Arc<ObjectSpecification>],
    ) -> ValidationFailures {
        let mut failures = ValidationFailures::default();

        for spec in specs {
            ambiguous_support_methods(classes, spec, &mut failures);
            action_overloading(classes, spec, &mut failures);
            if self.orphaned_support_methods {
                orphaned_support_methods(classes, spec, &mut failures);
            }
        }
        logical_type_clashes(specs, &mut failures);

        failures.sorted()
    }
}

/// More than one `title()` (or `iconName()`, ...) declared on a class.
fn ambiguous_support_methods(
    classes: &dyn ClassSource,
    spec: &ObjectSpecification,
    failures: &mut ValidationFailures,
) {
    let Some(class) = classes.class(spec.class_name()) else {
        return;
    };
    for name in OBJECT_SUPPORT_METHODS {
        let declared = class.methods_named(name).count();
        if declared > 1 {
            failures.push(ValidationFailure::new(
                spec.identifier().clone(),
                format!("ambiguous {}() methods: {} declared", name, declared),
            ));
        }
    }
}

/// Two actions of one class sharing a name.
fn action_overloading(
    classes: &dyn ClassSource,
    spec: &ObjectSpecification,
    failures: &mut ValidationFailures,
) {
    let Some(class) = classes.class(spec.class_name()) else {
        return;
    };
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for member in class.members.iter().filter(|m| m.kind == FeatureType::Action) {
        *counts.entry(member.name.as_str()).or_default() += 1;
    }
    for (name, count) in counts.into_iter().filter(|(_, count)| *count > 1) {
        failures.push(ValidationFailure::new(
            Identifier::member(spec.class_name(), name),
            format!("action '{}' is overloaded ({} declarations)", name, count),
        ));
    }
}

/// `hideXxx()` and friends whose `xxx` names no member, own or inherited.
fn orphaned_support_methods(
    classes: &dyn ClassSource,
    spec: &ObjectSpecification,
    failures: &mut ValidationFailures,
) {
    let Some(class) = classes.class(spec.class_name()) else {
        return;
    };
    for method in &class.methods {
        let Some((_, target)) = method.support_target() else {
            continue;
        };
        if spec.member(&target).is_none() {
            failures.push(ValidationFailure::new(
                Identifier::member(spec.class_name(), method.name.clone()),
                format!(
                    "orphaned support method '{}': no member named '{}'",
                    method.name, target
                ),
            ));
        }
    }
}

/// One logical type name mapped to more than one class.
fn logical_type_clashes(specs: &[Arc<ObjectSpecification>], failures: &mut ValidationFailures) {
    let mut by_name: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for spec in specs {
        by_name
            .entry(spec.logical_type_name())
            .or_default()
            .push(spec.class_name());
    }
    for (logical_type, class_names) in by_name.into_iter().filter(|(_, c)| c.len() > 1) {
        for class_name in &class_names {
            let others: Vec<&str> = class_names
                .iter()
                .copied()
                .filter(|other| other != class_name)
                .collect();
            failures.push(ValidationFailure::new(
                Identifier::class(*class_name),
                format!(
                    "logical type name '{}' is also used by {}",
                    logical_type,
                    others.join(", ")
                ),
            ));
        }
    }
}
