//! # ontograph-impact
//!
//! The "what breaks" engine. Given a graph clone and a proposed operation,
//! computes direct impacts against the pre-mutation snapshot, applies the
//! mutation to the clone, then propagates indirect and multi-hop ripple
//! impacts with decaying confidence, and scores the whole report.

pub mod confidence;
pub mod context;
pub mod direct;
pub mod engine;
pub mod graph;
pub mod indirect;
pub mod mutation;
pub mod ripple;
pub mod statistics;

pub use confidence::ConfidenceCalculator;
pub use engine::AssessmentEngine;
pub use graph::IndexedGraph;
pub use mutation::AppliedMutation;
pub use ripple::{RippleCalculator, RippleResult, RippleSeed};
