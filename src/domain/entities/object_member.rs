//! Object members - properties, collections, actions and action parameters

use crate::domain::entities::{FacetHolder, FacetKind, ManagedObject};
use crate::domain::value_objects::{FacetType, FeatureType, Identifier, NounForm};

#[derive(Debug, Clone, PartialEq)]
pub struct ObjectMember {
    id: String,
    type_name: Option<String>,
    holder: FacetHolder,
    parameters: Vec<ActionParameter>,
}

impl ObjectMember {
    pub fn new(class_name: &str, id: impl Into<String>, feature_type: FeatureType) -> Self {
        let id = id.into();
        Self {
            holder: FacetHolder::new(Identifier::member(class_name, id.clone()), feature_type),
            id,
            type_name: None,
            parameters: Vec::new(),
        }
    }

    pub fn with_type_name(mut self, type_name: Option<String>) -> Self {
        self.type_name = type_name;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn identifier(&self) -> &Identifier {
        self.holder.identifier()
    }

    pub fn feature_type(&self) -> FeatureType {
        self.holder.feature_type()
    }

    /// Property or element type; action return type.
    pub fn type_name(&self) -> Option<&str> {
        self.type_name.as_deref()
    }

    pub fn holder(&self) -> &FacetHolder {
        &self.holder
    }

    pub fn holder_mut(&mut self) -> &mut FacetHolder {
        &mut self.holder
    }

    pub fn parameters(&self) -> &[ActionParameter] {
        &self.parameters
    }

    pub fn parameters_mut(&mut self) -> &mut [ActionParameter] {
        &mut self.parameters
    }

    pub fn push_parameter(&mut self, parameter: ActionParameter) {
        self.parameters.push(parameter);
    }

    pub fn is_action(&self) -> bool {
        self.feature_type() == FeatureType::Action
    }

    pub fn is_property(&self) -> bool {
        self.feature_type() == FeatureType::Property
    }

    pub fn is_collection(&self) -> bool {
        self.feature_type() == FeatureType::Collection
    }

    /// Friendly name from the winning `Named` facet, else the id.
    pub fn name(&self) -> String {
        self.holder
            .facet(FacetType::Named)
            .and_then(|f| f.named(NounForm::Singular))
            .unwrap_or(&self.id)
            .to_string()
    }

    pub fn description(&self) -> Option<&str> {
        self.holder.facet(FacetType::Described)?.described()
    }

    pub fn sequence(&self) -> Option<&str> {
        self.holder
            .facet(FacetType::MemberOrder)?
            .member_order_sequence()
    }

    /// Whether the member is hidden for this target (statically or imperatively).
    pub fn is_hidden(&self, target: &ManagedObject) -> bool {
        match self.holder.facet(FacetType::Hidden).map(|f| f.kind()) {
            Some(FacetKind::Hidden(hidden)) => hidden.hides(target),
            _ => false,
        }
    }

    /// Statically hidden regardless of any object state.
    pub fn is_always_hidden(&self) -> bool {
        self.is_hidden(&ManagedObject::Unspecified)
    }

    pub fn disabled_reason(&self, target: &ManagedObject) -> Option<String> {
        match self.holder.facet(FacetType::Disabled).map(|f| f.kind()) {
            Some(FacetKind::Disabled(disabled)) => disabled.disabled_reason(target),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActionParameter {
    index: usize,
    name: String,
    type_name: Option<String>,
    holder: FacetHolder,
}

impl ActionParameter {
    pub fn new(class_name: &str, action_id: &str, index: usize, name: impl Into<String>) -> Self {
        Self {
            index,
            name: name.into(),
            type_name: None,
            holder: FacetHolder::new(
                Identifier::parameter(class_name, action_id, index),
                FeatureType::ActionParameter,
            ),
        }
    }

    pub fn with_type_name(mut self, type_name: Option<String>) -> Self {
        self.type_name = type_name;
        self
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn id(&self) -> &str {
        &self.name
    }

    pub fn type_name(&self) -> Option<&str> {
        self.type_name.as_deref()
    }

    pub fn holder(&self) -> &FacetHolder {
        &self.holder
    }

    pub fn holder_mut(&mut self) -> &mut FacetHolder {
        &mut self.holder
    }

    pub fn name(&self) -> String {
        self.holder
            .facet(FacetType::Named)
            .and_then(|f| f.named(NounForm::Singular))
            .unwrap_or(&self.name)
            .to_string()
    }
}
