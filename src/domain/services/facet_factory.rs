//! Facet factories
//!
//! A factory inspects one annotation or naming convention of a class, member
//! or parameter and contributes facets to the holder being populated.
//! Factories are stateless; "not applicable" is a silent no-op.

use crate::config::MetamodelConfig;
use crate::domain::entities::{
    DomainClass, FacetHolder, MemberDescriptor, ObjectLayout, ParameterDescriptor,
};
use crate::domain::services::factories;
use crate::domain::value_objects::{FeatureType, Identifier};

pub trait FacetFactory: Send + Sync {
    /// Origin marker stamped on every facet this factory contributes
    fn name(&self) -> &'static str;

    /// Feature types this factory is consulted for
    fn feature_types(&self) -> &'static [FeatureType];

    fn process_class(&self, _ctx: &mut ProcessClassContext<'_>) {}

    fn process_member(&self, _ctx: &mut ProcessMemberContext<'_>) {}

    fn process_parameter(&self, _ctx: &mut ProcessParameterContext<'_>) {}
}

/// Feature-type sets shared by the built-in factories.
pub mod features {
    use crate::domain::value_objects::FeatureType;

    pub const OBJECT: &[FeatureType] = &[FeatureType::ObjectType];
    pub const MEMBERS: &[FeatureType] = &[
        FeatureType::Property,
        FeatureType::Collection,
        FeatureType::Action,
    ];
    pub const PARAMETERS: &[FeatureType] = &[FeatureType::ActionParameter];
    pub const EVERYTHING: &[FeatureType] = &[
        FeatureType::ObjectType,
        FeatureType::Property,
        FeatureType::Collection,
        FeatureType::Action,
        FeatureType::ActionParameter,
    ];
}

pub struct ProcessClassContext<'a> {
    pub class: &'a DomainClass,
    pub holder: &'a mut FacetHolder,
    pub config: &'a MetamodelConfig,
    /// The class's companion layout resource, if one was found
    pub layout: Option<&'a ObjectLayout>,
}

pub struct ProcessMemberContext<'a> {
    /// The class being introspected, with inherited members and methods merged in
    pub class: &'a DomainClass,
    pub member: &'a MemberDescriptor,
    pub holder: &'a mut FacetHolder,
    pub config: &'a MetamodelConfig,
    pub layout: Option<&'a ObjectLayout>,
}

pub struct ProcessParameterContext<'a> {
    pub class: &'a DomainClass,
    pub action: &'a MemberDescriptor,
    pub parameter: &'a ParameterDescriptor,
    pub index: usize,
    pub holder: &'a mut FacetHolder,
    pub config: &'a MetamodelConfig,
}

impl ProcessClassContext<'_> {
    pub fn identifier(&self) -> Identifier {
        self.holder.identifier().clone()
    }
}

impl ProcessMemberContext<'_> {
    pub fn identifier(&self) -> Identifier {
        self.holder.identifier().clone()
    }
}

impl ProcessParameterContext<'_> {
    pub fn identifier(&self) -> Identifier {
        self.holder.identifier().clone()
    }
}

/// Runs the registered factories, in order, over classes, members and parameters.
pub struct FacetProcessor {
    factories: Vec<Box<dyn FacetFactory>>,
}

impl FacetProcessor {
    pub fn new(factories: Vec<Box<dyn FacetFactory>>) -> Self {
        Self { factories }
    }

    pub fn factory_names(&self) -> Vec<&'static str> {
        self.factories.iter().map(|f| f.name()).collect()
    }

    pub fn process_class(
        &self,
        class: &DomainClass,
        holder: &mut FacetHolder,
        config: &MetamodelConfig,
        layout: Option<&ObjectLayout>,
    ) {
        let mut ctx = ProcessClassContext {
            class,
            holder,
            config,
            layout,
        };
        for factory in self.applicable(FeatureType::ObjectType) {
            factory.process_class(&mut ctx);
        }
    }

    pub fn process_member(
        &self,
        class: &DomainClass,
        member: &MemberDescriptor,
        holder: &mut FacetHolder,
        config: &MetamodelConfig,
        layout: Option<&ObjectLayout>,
    ) {
        let mut ctx = ProcessMemberContext {
            class,
            member,
            holder,
            config,
            layout,
        };
        for factory in self.applicable(member.kind) {
            factory.process_member(&mut ctx);
        }
    }

    pub fn process_parameter(
        &self,
        class: &DomainClass,
        action: &MemberDescriptor,
        index: usize,
        holder: &mut FacetHolder,
        config: &MetamodelConfig,
    ) {
        let Some(parameter) = action.parameters.get(index) else {
            return;
        };
        let mut ctx = ProcessParameterContext {
            class,
            action,
            parameter,
            index,
            holder,
            config,
        };
        for factory in self.applicable(FeatureType::ActionParameter) {
            factory.process_parameter(&mut ctx);
        }
    }

    fn applicable(&self, feature_type: FeatureType) -> impl Iterator<Item = &dyn FacetFactory> {
        self.factories
            .iter()
            .map(|f| f.as_ref())
            .filter(move |f| f.feature_types().contains(&feature_type))
    }
}

impl Default for FacetProcessor {
    fn default() -> Self {
        Self::new(factories::default_factories())
    }
}

impl std::fmt::Debug for FacetProcessor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FacetProcessor")
            .field("factories", &self.factory_names())
            .finish()
    }
}
