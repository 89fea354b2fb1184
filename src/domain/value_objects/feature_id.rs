//! Application feature identifiers
//!
//! Names a namespace (package), a type (class) or a member, and navigates to
//! the enclosing features. Used by the permission layer to match rules against
//! the most specific feature first.

use serde::{Deserialize, Serialize};

use crate::error::{MetamodelError, MetamodelResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationFeatureSort {
    Namespace,
    Type,
    Member,
}

/// Identifier of a package, class or member feature.
///
/// Orders hierarchically: a namespace sorts before the types it contains, a
/// type before its members.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ApplicationFeatureId {
    namespace: String,
    type_simple_name: Option<String>,
    member_name: Option<String>,
    sort: ApplicationFeatureSort,
}

impl ApplicationFeatureId {
    pub fn new_package(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            type_simple_name: None,
            member_name: None,
            sort: ApplicationFeatureSort::Namespace,
        }
    }

    pub fn new_class(fully_qualified_name: &str) -> Self {
        let (namespace, simple) = split_class_name(fully_qualified_name);
        Self {
            namespace: namespace.to_string(),
            type_simple_name: Some(simple.to_string()),
            member_name: None,
            sort: ApplicationFeatureSort::Type,
        }
    }

    pub fn new_member(fully_qualified_class_name: &str, member_name: impl Into<String>) -> Self {
        let (namespace, simple) = split_class_name(fully_qualified_class_name);
        Self {
            namespace: namespace.to_string(),
            type_simple_name: Some(simple.to_string()),
            member_name: Some(member_name.into()),
            sort: ApplicationFeatureSort::Member,
        }
    }

    pub fn sort(&self) -> ApplicationFeatureSort {
        self.sort
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn type_simple_name(&self) -> Option<&str> {
        self.type_simple_name.as_deref()
    }

    pub fn member_name(&self) -> Option<&str> {
        self.member_name.as_deref()
    }

    /// Fully qualified class name; `None` for namespaces.
    pub fn class_name(&self) -> Option<String> {
        let simple = self.type_simple_name.as_deref()?;
        if self.namespace.is_empty() {
            Some(simple.to_string())
        } else {
            Some(format!("{}.{}", self.namespace, simple))
        }
    }

    pub fn fully_qualified_name(&self) -> String {
        match self.sort {
            ApplicationFeatureSort::Namespace => self.namespace.clone(),
            ApplicationFeatureSort::Type => self.class_name().unwrap_or_default(),
            ApplicationFeatureSort::Member => format!(
                "{}#{}",
                self.class_name().unwrap_or_default(),
                self.member_name.as_deref().unwrap_or_default()
            ),
        }
    }

    /// The namespace enclosing this namespace or type.
    ///
    /// The root namespace has no parent (`Ok(None)`). Members do not have a
    /// parent package; asking for one is an illegal-state error.
    pub fn parent_package_id(&self) -> MetamodelResult<Option<ApplicationFeatureId>> {
        match self.sort {
            ApplicationFeatureSort::Namespace => Ok(self
                .namespace
                .rsplit_once('.')
                .map(|(parent, _)| ApplicationFeatureId::new_package(parent))),
            ApplicationFeatureSort::Type => {
                if self.namespace.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(ApplicationFeatureId::new_package(self.namespace.clone())))
                }
            }
            ApplicationFeatureSort::Member => Err(MetamodelError::illegal_state(format!(
                "'{}' is a member feature; it has a parent class, not a parent package",
                self.fully_qualified_name()
            ))),
        }
    }

    /// The type declaring this member; illegal for namespaces and types.
    pub fn parent_class_id(&self) -> MetamodelResult<ApplicationFeatureId> {
        match self.sort {
            ApplicationFeatureSort::Member => Ok(Self {
                namespace: self.namespace.clone(),
                type_simple_name: self.type_simple_name.clone(),
                member_name: None,
                sort: ApplicationFeatureSort::Type,
            }),
            _ => Err(MetamodelError::illegal_state(format!(
                "'{}' is not a member feature; it has no parent class",
                self.fully_qualified_name()
            ))),
        }
    }

    /// All enclosing features, nearest first.
    pub fn parent_ids(&self) -> Vec<ApplicationFeatureId> {
        let mut parents = Vec::new();
        let mut next = match self.sort {
            ApplicationFeatureSort::Member => self.parent_class_id().ok(),
            _ => self.parent_package_id().ok().flatten(),
        };
        while let Some(id) = next {
            next = id.parent_package_id().ok().flatten();
            parents.push(id);
        }
        parents
    }
}

impl std::fmt::Display for ApplicationFeatureId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.fully_qualified_name())
    }
}

fn split_class_name(fully_qualified_name: &str) -> (&str, &str) {
    fully_qualified_name
        .rsplit_once('.')
        .unwrap_or(("", fully_qualified_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn package_parents() {
        let id = ApplicationFeatureId::new_package("com.mycompany");
        assert_eq!(id.parent_ids(), vec![ApplicationFeatureId::new_package("com")]);
    }

    #[test]
    fn class_parents_nearest_first() {
        let id = ApplicationFeatureId::new_class("com.mycompany.Bar");
        assert_eq!(
            id.parent_ids(),
            vec![
                ApplicationFeatureId::new_package("com.mycompany"),
                ApplicationFeatureId::new_package("com"),
            ]
        );
    }

    #[test]
    fn member_parents_start_with_class() {
        let id = ApplicationFeatureId::new_member("com.mycompany.Bar", "foo");
        assert_eq!(
            id.parent_ids(),
            vec![
                ApplicationFeatureId::new_class("com.mycompany.Bar"),
                ApplicationFeatureId::new_package("com.mycompany"),
                ApplicationFeatureId::new_package("com"),
            ]
        );
    }

    #[test]
    fn root_package_has_no_parent() {
        let id = ApplicationFeatureId::new_package("com");
        assert_eq!(id.parent_package_id().unwrap(), None);
        assert!(id.parent_ids().is_empty());
    }

    #[test]
    fn member_parent_package_is_illegal_state() {
        let id = ApplicationFeatureId::new_member("com.mycompany.Bar", "foo");
        assert!(matches!(
            id.parent_package_id(),
            Err(MetamodelError::IllegalState { .. })
        ));
    }

    #[test]
    fn class_parent_class_is_illegal_state() {
        let id = ApplicationFeatureId::new_class("com.mycompany.Bar");
        assert!(matches!(
            id.parent_class_id(),
            Err(MetamodelError::IllegalState { .. })
        ));
    }

    #[test]
    fn class_in_root_namespace_has_no_parent_package() {
        let id = ApplicationFeatureId::new_class("Bar");
        assert_eq!(id.parent_package_id().unwrap(), None);
        assert_eq!(id.fully_qualified_name(), "Bar");
    }

    #[test]
    fn ordering_is_hierarchical() {
        let mut ids = vec![
            ApplicationFeatureId::new_member("com.mycompany.Bar", "foo"),
            ApplicationFeatureId::new_class("com.mycompany.Bar"),
            ApplicationFeatureId::new_package("com.mycompany"),
        ];
        ids.sort();
        assert_eq!(ids[0].sort(), ApplicationFeatureSort::Namespace);
        assert_eq!(ids[1].sort(), ApplicationFeatureSort::Type);
        assert_eq!(ids[2].sort(), ApplicationFeatureSort::Member);
    }

    #[test]
    fn display_fully_qualified() {
        assert_eq!(
            ApplicationFeatureId::new_member("com.mycompany.Bar", "foo").to_string(),
            "com.mycompany.Bar#foo"
        );
    }
}
