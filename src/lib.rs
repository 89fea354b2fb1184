//! Metamodel - facet-based domain metamodel engine
//!
//! Builds object specifications from declarative domain class descriptors.
//! Every piece of behavior (naming, visibility, titles, icons, CSS classes)
//! is a facet; competing contributions are ranked by precedence, so layout
//! resources and UI event subscribers can override what annotations declare.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{BootstrapUseCase, ExplainReport, ExplainUseCase, Metamodel, WatchUseCase};
pub use config::{IntrospectionMode, MetamodelConfig};
pub use domain::entities::{DomainClass, Facet, FacetKind, ManagedObject, ObjectSpecification};
pub use domain::ports::{ClassSource, EventBusService, FacetServices, LayoutResourceLoader};
pub use domain::services::{MenuBarsService, SpecificationLoader};
pub use domain::value_objects::{FacetType, Identifier, Precedence};
pub use error::{MetamodelError, MetamodelResult};
pub use infrastructure::{FsClassSource, FsLayoutLoader, InMemoryEventBus};
