//! Specification loader
//!
//! Builds and caches one `ObjectSpecification` per registered domain class.
//! Supertypes are loaded first so a subtype starts from its inherited facets
//! and members. Specifications are handed out as `Arc`s and never mutated in
//! place once shared; `update_specification` goes through copy-on-write.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::config::MetamodelConfig;
use crate::domain::entities::{
    ActionParameter, DomainClass, MemberDescriptor, ObjectLayout, ObjectMember,
    ObjectSpecification, ValidationFailure, ValidationFailures,
};
use crate::domain::ports::{ClassSource, LayoutResourceLoader};
use crate::domain::services::facet_factory::FacetProcessor;
use crate::domain::services::validator::MetamodelValidator;
use crate::domain::value_objects::{FacetType, FeatureType, Identifier};
use crate::error::{MetamodelError, MetamodelResult};

pub struct SpecificationLoader {
    classes: Arc<dyn ClassSource>,
    layouts: Arc<dyn LayoutResourceLoader>,
    config: MetamodelConfig,
    processor: FacetProcessor,
    validator: MetamodelValidator,
    specs: BTreeMap<String, Arc<ObjectSpecification>>,
    /// Classes whose supertypes are currently being resolved
    in_progress: Vec<String>,
    /// Defects found while loading (unknown supertype, cycles)
    load_failures: ValidationFailures,
    validation: ValidationFailures,
}

impl SpecificationLoader {
    pub fn new(
        classes: Arc<dyn ClassSource>,
        layouts: Arc<dyn LayoutResourceLoader>,
        config: MetamodelConfig,
    ) -> Self {
        let validator = MetamodelValidator::new()
            .with_orphaned_support_methods(config.validation.orphaned_support_methods);
        Self {
            classes,
            layouts,
            config,
            processor: FacetProcessor::default(),
            validator,
            specs: BTreeMap::new(),
            in_progress: Vec::new(),
            load_failures: ValidationFailures::default(),
            validation: ValidationFailures::default(),
        }
    }

    pub fn with_processor(mut self, processor: FacetProcessor) -> Self {
        self.processor = processor;
        self
    }

    pub fn config(&self) -> &MetamodelConfig {
        &self.config
    }

    pub fn class_source(&self) -> &dyn ClassSource {
        self.classes.as_ref()
    }

    pub fn layout_loader(&self) -> &dyn LayoutResourceLoader {
        self.layouts.as_ref()
    }

    /// Swaps the class and layout sources; takes effect on the next load.
    pub fn replace_sources(
        &mut self,
        classes: Arc<dyn ClassSource>,
        layouts: Arc<dyn LayoutResourceLoader>,
    ) {
        self.classes = classes;
        self.layouts = layouts;
    }

    /// Loads (or returns the cached) specification for `class_name`.
    pub fn load_specification(
        &mut self,
        class_name: &str,
    ) -> MetamodelResult<Arc<ObjectSpecification>> {
        if let Some(spec) = self.specs.get(class_name) {
            return Ok(Arc::clone(spec));
        }
        let class = self
            .classes
            .class(class_name)
            .cloned()
            .ok_or_else(|| MetamodelError::UnknownClass {
                class_name: class_name.to_string(),
            })?;
        if self.in_progress.iter().any(|c| c == class_name) {
            return Err(MetamodelError::illegal_state(format!(
                "supertype cycle through '{}'",
                class_name
            )));
        }

        self.in_progress.push(class_name.to_string());
        let supertype = self.load_supertype(&class);
        let spec = self.introspect(&class, supertype.as_deref());
        self.in_progress.pop();

        tracing::debug!(
            class = %class_name,
            logical_type = spec.logical_type_name(),
            members = spec.members().len(),
            "specification loaded"
        );
        let spec = Arc::new(spec);
        self.specs.insert(class_name.to_string(), Arc::clone(&spec));
        Ok(spec)
    }

    fn load_supertype(&mut self, class: &DomainClass) -> Option<Arc<ObjectSpecification>> {
        let superclass = class.superclass.as_deref()?;
        match self.load_specification(superclass) {
            Ok(spec) => Some(spec),
            Err(MetamodelError::UnknownClass { .. }) => {
                self.load_failures.push(ValidationFailure::new(
                    Identifier::class(class.name.clone()),
                    format!("unknown supertype '{}'", superclass),
                ));
                None
            }
            Err(e) => {
                self.load_failures.push(ValidationFailure::new(
                    Identifier::class(class.name.clone()),
                    e.to_string(),
                ));
                None
            }
        }
    }

    fn introspect(
        &self,
        class: &DomainClass,
        supertype: Option<&ObjectSpecification>,
    ) -> ObjectSpecification {
        let mut spec = ObjectSpecification::new(class.name.clone());
        spec.set_superclass(supertype.map(|s| s.class_name().to_string()));

        if let Some(supertype) = supertype {
            let identifier = spec.identifier().clone();
            // a subtype's own layout annotation decides which UI events it posts
            let own_events = class.domain_object_layout.is_some();
            for facet_type in FacetType::INHERITABLE {
                let Some(ranking) = supertype.holder().ranking(facet_type) else {
                    continue;
                };
                for facet in ranking
                    .contributions()
                    .filter(|f| !(own_events && f.is_event()))
                {
                    spec.holder_mut()
                        .add_facet(facet.reattached(identifier.clone()));
                }
            }
        }

        let layout = self.object_layout(&class.name);
        self.processor
            .process_class(class, spec.holder_mut(), &self.config, layout.as_ref());

        let effective = self.effective_class(class, supertype);
        for descriptor in &effective.members {
            let member = self.introspect_member(&effective, descriptor, layout.as_ref());
            spec.push_member(member);
        }

        spec.sort_members();
        spec.finish_identity();
        spec
    }

    fn introspect_member(
        &self,
        class: &DomainClass,
        descriptor: &MemberDescriptor,
        layout: Option<&ObjectLayout>,
    ) -> ObjectMember {
        let mut member = ObjectMember::new(&class.name, descriptor.name.clone(), descriptor.kind)
            .with_type_name(descriptor.type_name.clone());
        self.processor
            .process_member(class, descriptor, member.holder_mut(), &self.config, layout);

        if descriptor.kind == FeatureType::Action {
            for (index, param) in descriptor.parameters.iter().enumerate() {
                let mut parameter =
                    ActionParameter::new(&class.name, &descriptor.name, index, param.name.clone())
                        .with_type_name(param.type_name.clone());
                self.processor.process_parameter(
                    class,
                    descriptor,
                    index,
                    parameter.holder_mut(),
                    &self.config,
                );
                member.push_parameter(parameter);
            }
        }
        member
    }

    /// The class with every ancestor's members and methods merged in,
    /// ancestors first; a redeclared member takes the inherited one's place.
    fn effective_class(
        &self,
        class: &DomainClass,
        supertype: Option<&ObjectSpecification>,
    ) -> DomainClass {
        let mut chain: Vec<&DomainClass> = Vec::new();
        let mut next = supertype.map(|s| s.class_name().to_string());
        while let Some(name) = next {
            let Some(ancestor) = self.classes.class(&name) else {
                break;
            };
            chain.push(ancestor);
            next = self
                .specs
                .get(&name)
                .and_then(|s| s.superclass().map(str::to_string));
        }

        let mut effective = class.clone();
        effective.members.clear();
        effective.methods.clear();
        for source in chain.iter().rev().copied().chain(std::iter::once(class)) {
            for member in &source.members {
                match effective.members.iter_mut().find(|m| m.name == member.name) {
                    Some(existing) => *existing = member.clone(),
                    None => effective.members.push(member.clone()),
                }
            }
            effective.methods.extend(source.methods.iter().cloned());
        }
        effective
    }

    fn object_layout(&self, class_name: &str) -> Option<ObjectLayout> {
        match self.layouts.object_layout(class_name) {
            Ok(layout) => layout,
            Err(e) => {
                tracing::error!(class = %class_name, error = %e, "ignoring layout resource");
                None
            }
        }
    }

    /// Introspects every registered class, then validates the whole model.
    pub fn load_all(&mut self) -> &ValidationFailures {
        let class_names = self.classes.class_names();
        for class_name in &class_names {
            if let Err(e) = self.load_specification(class_name) {
                tracing::warn!(class = %class_name, error = %e, "class not loaded");
            }
        }

        let specs: Vec<Arc<ObjectSpecification>> = self.specs.values().cloned().collect();
        let mut failures = self.load_failures.clone();
        failures.extend(self.validator.validate(self.classes.as_ref(), &specs));
        self.validation = failures.sorted();

        tracing::info!(
            classes = specs.len(),
            failures = self.validation.len(),
            "metamodel loaded"
        );
        &self.validation
    }

    /// Failures of the last `load_all`.
    pub fn validation_failures(&self) -> &ValidationFailures {
        &self.validation
    }

    pub fn specification(&self, class_name: &str) -> Option<Arc<ObjectSpecification>> {
        self.specs.get(class_name).cloned()
    }

    pub fn specification_by_logical_type(
        &self,
        logical_type_name: &str,
    ) -> Option<Arc<ObjectSpecification>> {
        self.specs
            .values()
            .find(|s| s.logical_type_name() == logical_type_name)
            .cloned()
    }

    /// Loaded specifications, ordered by class name.
    pub fn specifications(&self) -> impl Iterator<Item = &Arc<ObjectSpecification>> {
        self.specs.values()
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Drops every cached specification and validation result.
    pub fn invalidate(&mut self) {
        tracing::debug!(specs = self.specs.len(), "invalidating metamodel");
        self.specs.clear();
        self.in_progress.clear();
        self.load_failures = ValidationFailures::default();
        self.validation = ValidationFailures::default();
    }

    /// Invalidates and reloads everything.
    pub fn rebuild(&mut self) -> &ValidationFailures {
        self.invalidate();
        self.load_all()
    }

    /// Mutates one specification copy-on-write: readers holding the old
    /// `Arc` keep seeing the old state.
    pub fn update_specification<F>(&mut self, class_name: &str, update: F) -> MetamodelResult<()>
    where
        F: FnOnce(&mut ObjectSpecification),
    {
        let spec = self
            .specs
            .get_mut(class_name)
            .ok_or_else(|| MetamodelError::UnknownClass {
                class_name: class_name.to_string(),
            })?;
        update(Arc::make_mut(spec));
        Ok(())
    }
}

impl std::fmt::Debug for SpecificationLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpecificationLoader")
            .field("specs", &self.specs.keys().collect::<Vec<_>>())
            .field("processor", &self.processor)
            .finish()
    }
}
