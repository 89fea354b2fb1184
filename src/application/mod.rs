//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain metamodel rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `BootstrapUseCase` - Loads sources, introspects, validates and reconciles menu bars
//! - `ExplainUseCase` - Reports how the facets of one element were ranked
//! - `WatchUseCase` - Rebuilds the metamodel when model or layout files change

pub mod bootstrap;
pub mod explain;
pub mod watch;

pub use bootstrap::{source_fingerprint, BootstrapUseCase, Metamodel};
pub use explain::{ContributionReport, ElementReport, ExplainReport, ExplainUseCase, FacetReport};
pub use watch::{RefreshOutcome, WatchEvent, WatchUseCase, WatcherState};
