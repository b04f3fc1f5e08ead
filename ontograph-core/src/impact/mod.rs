//! Impact report model: individual impacts, statistics, confidence, and the report itself.

pub mod confidence;
pub mod report;
pub mod severity;
pub mod statistics;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::graph::ElementKind;

pub use confidence::{ConfidenceFactors, ConfidenceLevel, ConfidenceRange, ConfidenceScore};
pub use report::{ImpactReport, ReportParts, ReportSummary};
pub use severity::Severity;
pub use statistics::ImpactStatistics;

/// What happened to an affected element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ImpactType {
    EntityDeleted,
    EntityModified,
    EdgeModified,
    EdgeCascadeDelete,
    EdgeValidityChange,
    RippleEffect,
}

impl ImpactType {
    pub const ALL: [ImpactType; 6] = [
        Self::EntityDeleted,
        Self::EntityModified,
        Self::EdgeModified,
        Self::EdgeCascadeDelete,
        Self::EdgeValidityChange,
        Self::RippleEffect,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EntityDeleted => "ENTITY_DELETED",
            Self::EntityModified => "ENTITY_MODIFIED",
            Self::EdgeModified => "EDGE_MODIFIED",
            Self::EdgeCascadeDelete => "EDGE_CASCADE_DELETE",
            Self::EdgeValidityChange => "EDGE_VALIDITY_CHANGE",
            Self::RippleEffect => "RIPPLE_EFFECT",
        }
    }
}

impl fmt::Display for ImpactType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One affected graph element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Impact {
    pub impact_type: ImpactType,
    pub element_id: String,
    pub element_kind: ElementKind,
    pub severity: Severity,
    /// Certainty that the element is affected, 0.0–1.0.
    pub confidence: f64,
    /// Element whose impact caused this one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caused_by: Option<String>,
    /// Traversal depth for ripple impacts (1-indexed).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depth: Option<usize>,
    /// Names of changed attributes, for modification impacts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub changed_attributes: Option<Vec<String>>,
    /// Propagation chain from the originating element to this one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<String>>,
}

impl Impact {
    pub fn new(
        impact_type: ImpactType,
        element_id: impl Into<String>,
        element_kind: ElementKind,
        severity: Severity,
        confidence: f64,
    ) -> Self {
        Self {
            impact_type,
            element_id: element_id.into(),
            element_kind,
            severity,
            confidence: confidence.clamp(0.0, 1.0),
            caused_by: None,
            depth: None,
            changed_attributes: None,
            path: None,
        }
    }

    pub fn caused_by(mut self, cause: impl Into<String>) -> Self {
        self.caused_by = Some(cause.into());
        self
    }

    pub fn at_depth(mut self, depth: usize) -> Self {
        self.depth = Some(depth);
        self
    }

    pub fn with_changed_attributes(mut self, names: Vec<String>) -> Self {
        self.changed_attributes = Some(names);
        self
    }

    pub fn with_path(mut self, path: Vec<String>) -> Self {
        self.path = Some(path);
        self
    }

    /// The chain reported as a critical path: the tracked path if present,
    /// otherwise `[cause, element]`, otherwise `[element]`.
    pub fn chain(&self) -> Vec<String> {
        if let Some(path) = &self.path {
            return path.clone();
        }
        match &self.caused_by {
            Some(cause) => vec![cause.clone(), self.element_id.clone()],
            None => vec![self.element_id.clone()],
        }
    }
}
