//! Bootstrap Use Case
//!
//! Turns configuration into a loaded metamodel: class and layout sources,
//! translation table, specification loading, menu bar reconciliation and the
//! fail-on-invalid policy.

use std::sync::Arc;

use anyhow::{Context, Result};

use crate::config::{IntrospectionMode, MetamodelConfig};
use crate::domain::entities::{
    DomainClass, ManagedObject, MenuBars, ObjectSpecification, ValidationFailures,
};
use crate::domain::ports::{
    ClassSource, EventBusService, FacetServices, LayoutResourceLoader, NoopTranslationService,
    TranslationService,
};
use crate::domain::services::{MenuBarsService, ResolvedMenuBars, SpecificationLoader};
use crate::domain::value_objects::{Fingerprint, IconSize};
use crate::error::{MetamodelError, MetamodelResult};
use crate::infrastructure::{FsClassSource, FsLayoutLoader, InMemoryEventBus, TomlTranslationService};

/// A loaded metamodel together with the services facet queries use.
pub struct Metamodel {
    loader: SpecificationLoader,
    menu_bars: ResolvedMenuBars,
    services: FacetServices,
}

impl Metamodel {
    pub fn config(&self) -> &MetamodelConfig {
        self.loader.config()
    }

    pub fn loader(&self) -> &SpecificationLoader {
        &self.loader
    }

    pub fn loader_mut(&mut self) -> &mut SpecificationLoader {
        &mut self.loader
    }

    pub fn services(&self) -> &FacetServices {
        &self.services
    }

    pub fn menu_bars(&self) -> &MenuBars {
        &self.menu_bars.menu_bars
    }

    pub fn resolved_menu_bars(&self) -> &ResolvedMenuBars {
        &self.menu_bars
    }

    pub fn validation_failures(&self) -> &ValidationFailures {
        self.loader.validation_failures()
    }

    /// Looks a specification up by class name, then by logical type name,
    /// loading it on demand.
    pub fn specification(&mut self, name: &str) -> MetamodelResult<Arc<ObjectSpecification>> {
        if let Some(spec) = self.loader.specification_by_logical_type(name) {
            return Ok(spec);
        }
        let classes = self.loader.class_source();
        let class_name = if classes.class(name).is_some() {
            name.to_string()
        } else {
            classes
                .class_names()
                .into_iter()
                .find(|c| {
                    classes
                        .class(c)
                        .is_some_and(|class| declared_logical_type(class) == Some(name))
                })
                .unwrap_or_else(|| name.to_string())
        };
        self.loader.load_specification(&class_name)
    }

    pub fn title(&mut self, name: &str, target: &ManagedObject) -> MetamodelResult<Option<String>> {
        Ok(self.specification(name)?.title(target, &self.services))
    }

    pub fn icon_name(
        &mut self,
        name: &str,
        target: &ManagedObject,
        size: IconSize,
    ) -> MetamodelResult<Option<String>> {
        Ok(self.specification(name)?.icon_name(target, size, &self.services))
    }

    pub fn css_class(&mut self, name: &str, target: &ManagedObject) -> MetamodelResult<Option<String>> {
        Ok(self.specification(name)?.css_class(target, &self.services))
    }

    pub fn layout(&mut self, name: &str, target: &ManagedObject) -> MetamodelResult<Option<String>> {
        Ok(self.specification(name)?.layout(target, &self.services))
    }

    /// Swaps in new sources and rebuilds everything, menu bars included.
    pub fn reload(
        &mut self,
        classes: Arc<dyn ClassSource>,
        layouts: Arc<dyn LayoutResourceLoader>,
    ) -> MetamodelResult<()> {
        self.loader.replace_sources(classes, layouts);
        self.loader.invalidate();
        self.menu_bars = populate(&mut self.loader)?;
        Ok(())
    }
}

impl std::fmt::Debug for Metamodel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Metamodel")
            .field("loader", &self.loader)
            .field("menu_bars", &self.menu_bars.source)
            .field("services", &self.services)
            .finish()
    }
}

fn declared_logical_type(class: &DomainClass) -> Option<&str> {
    class
        .domain_object
        .as_ref()
        .and_then(|a| a.logical_type_name.as_deref())
        .or_else(|| {
            class
                .domain_service
                .as_ref()
                .and_then(|a| a.logical_type_name.as_deref())
        })
}

/// Fingerprint of everything a bootstrap reads from disk.
pub fn source_fingerprint(config: &MetamodelConfig) -> Result<Fingerprint> {
    let classes = FsClassSource::load(&config.introspection.model_dir)?;
    let layouts = FsLayoutLoader::from_config(config).fingerprint();
    let fingerprint = Fingerprint::of_resources([
        ("model", classes.fingerprint().as_str().as_bytes()),
        ("layouts", layouts.as_str().as_bytes()),
    ]);
    Ok(fingerprint)
}

pub struct BootstrapUseCase {
    config: MetamodelConfig,
    event_bus: Arc<dyn EventBusService>,
}

impl BootstrapUseCase {
    pub fn new(config: MetamodelConfig) -> Self {
        Self {
            config,
            event_bus: Arc::new(InMemoryEventBus::new()),
        }
    }

    pub fn with_event_bus(mut self, event_bus: Arc<dyn EventBusService>) -> Self {
        self.event_bus = event_bus;
        self
    }

    /// Bootstraps from the model and layout directories named in the config.
    pub fn execute(&self) -> Result<Metamodel> {
        let model_dir = &self.config.introspection.model_dir;
        let classes = FsClassSource::load(model_dir)
            .with_context(|| format!("loading domain model from {}", model_dir.display()))?;
        let layouts = FsLayoutLoader::from_config(&self.config);
        let metamodel = self.execute_with(Arc::new(classes), Arc::new(layouts))?;
        Ok(metamodel)
    }

    /// Bootstraps from explicit sources.
    pub fn execute_with(
        &self,
        classes: Arc<dyn ClassSource>,
        layouts: Arc<dyn LayoutResourceLoader>,
    ) -> MetamodelResult<Metamodel> {
        let services = FacetServices::new(Arc::clone(&self.event_bus), self.translation()?);
        let mut loader = SpecificationLoader::new(classes, layouts, self.config.clone());
        let menu_bars = populate(&mut loader)?;

        tracing::info!(
            specs = loader.len(),
            menus = ?menu_bars.source,
            subscribers = services.event_bus().subscriber_count(),
            "metamodel ready"
        );
        Ok(Metamodel {
            loader,
            menu_bars,
            services,
        })
    }

    fn translation(&self) -> MetamodelResult<Arc<dyn TranslationService>> {
        match &self.config.translation.file {
            Some(path) => Ok(Arc::new(TomlTranslationService::load(path)?)),
            None => Ok(Arc::new(NoopTranslationService)),
        }
    }
}

/// Loads according to the introspection mode, applies the validation policy
/// and reconciles menu bars.
fn populate(loader: &mut SpecificationLoader) -> MetamodelResult<ResolvedMenuBars> {
    match loader.config().introspection.mode {
        IntrospectionMode::Full => {
            let failures = loader.load_all().clone();
            if !failures.is_empty() {
                if loader.config().validation.fail_on_invalid {
                    return Err(MetamodelError::ModelInvalid(failures));
                }
                for failure in failures.iter() {
                    tracing::warn!(%failure, "metamodel validation failure");
                }
            }
        }
        IntrospectionMode::Lazy => {
            // menus need every service up front
            let services: Vec<String> = loader
                .class_source()
                .class_names()
                .into_iter()
                .filter(|name| {
                    loader
                        .class_source()
                        .class(name)
                        .is_some_and(|c| c.domain_service.is_some())
                })
                .collect();
            for name in services {
                if let Err(e) = loader.load_specification(&name) {
                    tracing::warn!(class = %name, error = %e, "service not loaded");
                }
            }
        }
    }
    Ok(MenuBarsService::reconcile(loader))
}
