//! Domain Layer
//!
//! The metamodel itself: facets and their rankings, specifications and
//! members, the factories that populate them and the loader that ties it
//! together.
//!
//! ## Structure
//!
//! - `entities/` - Facets, holders, specifications, layouts, validation failures
//! - `value_objects/` - Identifiers, precedence, facet and feature types
//! - `services/` - Facet factories, specification loader, validator, menu bars
//! - `ports/` - Class sources, layout resources, event bus, translation
//!
//! This layer never touches the file system directly; `infrastructure`
//! provides the port implementations.

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
