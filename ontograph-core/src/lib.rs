//! # ontograph-core
//!
//! Foundation crate for Ontograph change previews.
//! Defines the graph model, operations, impact report types, traits, errors,
//! config, and constants. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod graph;
pub mod impact;
pub mod operation;
pub mod traits;
pub mod tracing_setup;

// Re-export the most commonly used types at the crate root.
pub use config::OntographConfig;
pub use errors::{OntographError, OntographResult};
pub use graph::{AttributeMap, ElementKind, Entity, GraphSnapshot, Relationship};
pub use impact::{
    ConfidenceFactors, ConfidenceLevel, ConfidenceRange, ConfidenceScore, Impact,
    ImpactReport, ImpactStatistics, ImpactType, ReportParts, ReportSummary, Severity,
};
pub use operation::{Operation, OperationKind};
