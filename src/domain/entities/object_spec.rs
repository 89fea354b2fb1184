//! Object specification - the assembled metamodel node for one domain type

use std::cmp::Ordering;

use crate::domain::entities::{Facet, FacetHolder, ManagedObject, ObjectMember};
use crate::domain::ports::FacetServices;
use crate::domain::value_objects::{
    BeanSort, FacetType, FeatureType, IconSize, Identifier, NounForm,
};

#[derive(Debug, Clone, PartialEq)]
pub struct ObjectSpecification {
    class_name: String,
    logical_type_name: String,
    bean_sort: BeanSort,
    superclass: Option<String>,
    holder: FacetHolder,
    members: Vec<ObjectMember>,
}

impl ObjectSpecification {
    pub fn new(class_name: impl Into<String>) -> Self {
        let class_name = class_name.into();
        Self {
            holder: FacetHolder::new(
                Identifier::class(class_name.clone()),
                FeatureType::ObjectType,
            ),
            logical_type_name: class_name.clone(),
            class_name,
            bean_sort: BeanSort::Unknown,
            superclass: None,
            members: Vec::new(),
        }
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn identifier(&self) -> &Identifier {
        self.holder.identifier()
    }

    pub fn logical_type_name(&self) -> &str {
        &self.logical_type_name
    }

    pub fn bean_sort(&self) -> BeanSort {
        self.bean_sort
    }

    /// Class name of the direct supertype, if it has a specification.
    pub fn superclass(&self) -> Option<&str> {
        self.superclass.as_deref()
    }

    pub fn holder(&self) -> &FacetHolder {
        &self.holder
    }

    pub fn holder_mut(&mut self) -> &mut FacetHolder {
        &mut self.holder
    }

    pub(crate) fn set_superclass(&mut self, superclass: Option<String>) {
        self.superclass = superclass;
    }

    /// Copies the resolved identity facets into plain fields.
    pub(crate) fn finish_identity(&mut self) {
        if let Some(name) = self
            .holder
            .facet(FacetType::LogicalType)
            .and_then(Facet::logical_type_name)
        {
            self.logical_type_name = name.to_string();
        }
        if let Some(crate::domain::entities::FacetKind::ObjectNature(sort)) =
            self.holder.facet(FacetType::ObjectNature).map(Facet::kind)
        {
            self.bean_sort = *sort;
        }
    }

    /// Adds a member, replacing any inherited member with the same id.
    pub fn push_member(&mut self, member: ObjectMember) {
        match self.members.iter_mut().find(|m| m.id() == member.id()) {
            Some(existing) => *existing = member,
            None => self.members.push(member),
        }
    }

    /// Stable sort by member-order sequence; unsequenced members keep
    /// declaration order after all sequenced ones.
    pub(crate) fn sort_members(&mut self) {
        self.members
            .sort_by(|a, b| match (a.sequence(), b.sequence()) {
                (Some(x), Some(y)) => compare_sequences(x, y),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            });
    }

    pub fn members(&self) -> &[ObjectMember] {
        &self.members
    }

    pub fn members_mut(&mut self) -> &mut [ObjectMember] {
        &mut self.members
    }

    pub fn member(&self, id: &str) -> Option<&ObjectMember> {
        self.members.iter().find(|m| m.id() == id)
    }

    pub fn member_mut(&mut self, id: &str) -> Option<&mut ObjectMember> {
        self.members.iter_mut().find(|m| m.id() == id)
    }

    pub fn properties(&self) -> impl Iterator<Item = &ObjectMember> {
        self.members.iter().filter(|m| m.is_property())
    }

    pub fn collections(&self) -> impl Iterator<Item = &ObjectMember> {
        self.members.iter().filter(|m| m.is_collection())
    }

    pub fn actions(&self) -> impl Iterator<Item = &ObjectMember> {
        self.members.iter().filter(|m| m.is_action())
    }

    pub fn action(&self, id: &str) -> Option<&ObjectMember> {
        self.actions().find(|m| m.id() == id)
    }

    pub fn facet(&self, facet_type: FacetType) -> Option<&Facet> {
        self.holder.facet(facet_type)
    }

    pub fn contains_facet(&self, facet_type: FacetType) -> bool {
        self.holder.contains(facet_type)
    }

    pub fn singular_name(&self) -> String {
        self.holder
            .facet(FacetType::Named)
            .and_then(|f| f.named(NounForm::Singular))
            .map(str::to_string)
            .unwrap_or_else(|| self.identifier().class_simple_name().to_string())
    }

    pub fn plural_name(&self) -> Option<String> {
        self.holder
            .facet(FacetType::Named)
            .and_then(|f| f.named(NounForm::Plural))
            .map(str::to_string)
    }

    pub fn description(&self) -> Option<&str> {
        self.holder.facet(FacetType::Described)?.described()
    }

    pub fn title(&self, target: &ManagedObject, services: &FacetServices) -> Option<String> {
        self.holder.title(target, services)
    }

    pub fn icon_name(
        &self,
        target: &ManagedObject,
        size: IconSize,
        services: &FacetServices,
    ) -> Option<String> {
        self.holder.icon_name(target, size, services)
    }

    pub fn css_class(&self, target: &ManagedObject, services: &FacetServices) -> Option<String> {
        self.holder.css_class(target, services)
    }

    pub fn layout(&self, target: &ManagedObject, services: &FacetServices) -> Option<String> {
        self.holder.layout(target, services)
    }
}

/// Compares Dewey-decimal sequences (`1.2.10` after `1.2.9`).
///
/// Non-numeric components compare as text after numeric ones.
pub fn compare_sequences(a: &str, b: &str) -> Ordering {
    let mut left = a.split('.');
    let mut right = b.split('.');
    loop {
        match (left.next(), right.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => {
                let ordering = match (x.trim().parse::<u64>(), y.trim().parse::<u64>()) {
                    (Ok(m), Ok(n)) => m.cmp(&n),
                    (Ok(_), Err(_)) => Ordering::Less,
                    (Err(_), Ok(_)) => Ordering::Greater,
                    (Err(_), Err(_)) => x.cmp(y),
                };
                if ordering != Ordering::Equal {
                    return ordering;
                }
            }
        }
    }
}
