//! Explain Use Case
//!
//! Shows how a specification (or one of its members) came to be: every facet
//! type with its winner and all ranked contributions, plus the validation
//! failures recorded against it.

use std::fmt::Write as _;

use serde::Serialize;

use crate::application::bootstrap::Metamodel;
use crate::domain::entities::{Facet, FacetHolder, ObjectSpecification};
use crate::domain::value_objects::ApplicationFeatureId;
use crate::error::{MetamodelError, MetamodelResult};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContributionReport {
    pub precedence: &'static str,
    pub origin: String,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FacetReport {
    pub facet_type: &'static str,
    /// Winner ignoring event facets; what applies when nobody answers
    pub winner: Option<ContributionReport>,
    pub event: Option<ContributionReport>,
    pub contributions: Vec<ContributionReport>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElementReport {
    pub identifier: String,
    pub feature_type: &'static str,
    pub facets: Vec<FacetReport>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExplainReport {
    pub class_name: String,
    pub logical_type: String,
    pub bean_sort: &'static str,
    pub superclass: Option<String>,
    /// Application feature and its enclosing features, nearest first
    pub feature: String,
    pub parents: Vec<String>,
    pub element: ElementReport,
    pub failures: Vec<String>,
}

impl ExplainReport {
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{} ({})", self.element.identifier, self.element.feature_type);
        let _ = writeln!(out, "  class:        {}", self.class_name);
        let _ = writeln!(out, "  logical type: {}", self.logical_type);
        let _ = writeln!(out, "  sort:         {}", self.bean_sort);
        if let Some(superclass) = &self.superclass {
            let _ = writeln!(out, "  extends:      {}", superclass);
        }
        let _ = writeln!(out, "  feature:      {}", self.feature);

        for facet in &self.element.facets {
            let _ = writeln!(out, "  {}", facet.facet_type);
            for c in &facet.contributions {
                let marker = if facet.winner.as_ref() == Some(c) || facet.event.as_ref() == Some(c) {
                    "*"
                } else {
                    " "
                };
                let _ = writeln!(
                    out,
                    "    {} {:<8} {:<22} {}",
                    marker, c.precedence, c.origin, c.summary
                );
            }
        }

        if !self.failures.is_empty() {
            let _ = writeln!(out, "  failures:");
            for failure in &self.failures {
                let _ = writeln!(out, "    {}", failure);
            }
        }
        out
    }
}

pub struct ExplainUseCase;

impl ExplainUseCase {
    /// `name` is a class or logical type name; `member` narrows the report
    /// to one property, collection or action.
    pub fn execute(
        metamodel: &mut Metamodel,
        name: &str,
        member: Option<&str>,
    ) -> MetamodelResult<ExplainReport> {
        let spec = metamodel.specification(name)?;
        let (element, feature) = match member {
            None => (
                element_report(spec.holder()),
                ApplicationFeatureId::new_class(spec.class_name()),
            ),
            Some(id) => {
                let member = spec.member(id).ok_or_else(|| {
                    MetamodelError::illegal_state(format!(
                        "{} has no member named '{}'",
                        spec.class_name(),
                        id
                    ))
                })?;
                (
                    element_report(member.holder()),
                    ApplicationFeatureId::new_member(spec.class_name(), id),
                )
            }
        };

        Ok(ExplainReport {
            class_name: spec.class_name().to_string(),
            logical_type: spec.logical_type_name().to_string(),
            bean_sort: spec.bean_sort().as_str(),
            superclass: spec.superclass().map(str::to_string),
            feature: feature.to_string(),
            parents: feature.parent_ids().iter().map(ToString::to_string).collect(),
            failures: failures_for(metamodel, &spec, member),
            element,
        })
    }
}

fn contribution(facet: &Facet) -> ContributionReport {
    ContributionReport {
        precedence: facet.precedence().as_str(),
        origin: facet.origin().to_string(),
        summary: facet.summary(),
    }
}

fn element_report(holder: &FacetHolder) -> ElementReport {
    let facets = holder
        .facet_types()
        .filter_map(|facet_type| {
            let ranking = holder.ranking(facet_type)?;
            Some(FacetReport {
                facet_type: facet_type.as_str(),
                winner: ranking.winner_non_event().map(contribution),
                event: ranking.winner().filter(|f| f.is_event()).map(contribution),
                contributions: ranking.contributions().map(contribution).collect(),
            })
        })
        .collect();
    ElementReport {
        identifier: holder.identifier().to_string(),
        feature_type: holder.feature_type().as_str(),
        facets,
    }
}

fn failures_for(metamodel: &Metamodel, spec: &ObjectSpecification, member: Option<&str>) -> Vec<String> {
    metamodel
        .validation_failures()
        .iter()
        .filter(|f| f.identifier.class_name() == spec.class_name())
        .filter(|f| member.is_none() || f.identifier.member_name() == member)
        .map(|f| f.message.clone())
        .collect()
}
