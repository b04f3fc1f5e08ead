use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ConfidenceLevel, ConfidenceScore, Impact, ImpactStatistics, Severity};
use crate::operation::{Operation, OperationKind};

/// Immutable result of one assessment call.
///
/// Fields are private so consumers (renderers, review workflows) can only read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactReport {
    id: String,
    graph_id: String,
    clone_id: String,
    operation: Operation,
    direct_impacts: Vec<Impact>,
    indirect_impacts: Vec<Impact>,
    ripple_impacts: Vec<Impact>,
    statistics: ImpactStatistics,
    confidence: ConfidenceScore,
    created_at: DateTime<Utc>,
}

/// Compact, serializable overview of a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub report_id: String,
    pub operation: OperationKind,
    pub target_id: String,
    pub direct: usize,
    pub indirect: usize,
    pub ripple: usize,
    pub total_affected: usize,
    pub highest_severity: Option<Severity>,
    pub percentage_of_graph: f64,
    pub confidence: f64,
    pub confidence_level: ConfidenceLevel,
}

/// Everything needed to build a report; consumed by [`ImpactReport::new`].
#[derive(Debug, Clone)]
pub struct ReportParts {
    pub id: String,
    pub graph_id: String,
    pub clone_id: String,
    pub operation: Operation,
    pub direct_impacts: Vec<Impact>,
    pub indirect_impacts: Vec<Impact>,
    pub ripple_impacts: Vec<Impact>,
    pub statistics: ImpactStatistics,
    pub confidence: ConfidenceScore,
    pub created_at: DateTime<Utc>,
}

impl ImpactReport {
    pub fn new(parts: ReportParts) -> Self {
        Self {
            id: parts.id,
            graph_id: parts.graph_id,
            clone_id: parts.clone_id,
            operation: parts.operation,
            direct_impacts: parts.direct_impacts,
            indirect_impacts: parts.indirect_impacts,
            ripple_impacts: parts.ripple_impacts,
            statistics: parts.statistics,
            confidence: parts.confidence,
            created_at: parts.created_at,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn graph_id(&self) -> &str {
        &self.graph_id
    }

    pub fn clone_id(&self) -> &str {
        &self.clone_id
    }

    pub fn operation(&self) -> &Operation {
        &self.operation
    }

    pub fn direct_impacts(&self) -> &[Impact] {
        &self.direct_impacts
    }

    pub fn indirect_impacts(&self) -> &[Impact] {
        &self.indirect_impacts
    }

    pub fn ripple_impacts(&self) -> &[Impact] {
        &self.ripple_impacts
    }

    pub fn statistics(&self) -> &ImpactStatistics {
        &self.statistics
    }

    pub fn confidence(&self) -> &ConfidenceScore {
        &self.confidence
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Direct, then indirect, then ripple impacts.
    pub fn all_impacts(&self) -> impl Iterator<Item = &Impact> {
        self.direct_impacts
            .iter()
            .chain(&self.indirect_impacts)
            .chain(&self.ripple_impacts)
    }

    /// Every impact recorded for `element_id`.
    pub fn impacts_for<'a>(&'a self, element_id: &'a str) -> impl Iterator<Item = &'a Impact> + 'a {
        self.all_impacts().filter(move |i| i.element_id == element_id)
    }

    /// Ripple impacts grouped by depth.
    pub fn ripple_by_depth(&self) -> BTreeMap<usize, Vec<&Impact>> {
        let mut buckets: BTreeMap<usize, Vec<&Impact>> = BTreeMap::new();
        for impact in &self.ripple_impacts {
            buckets.entry(impact.depth.unwrap_or(0)).or_default().push(impact);
        }
        buckets
    }

    pub fn summary(&self) -> ReportSummary {
        ReportSummary {
            report_id: self.id.clone(),
            operation: self.operation.kind(),
            target_id: self.operation.target_id().to_string(),
            direct: self.direct_impacts.len(),
            indirect: self.indirect_impacts.len(),
            ripple: self.ripple_impacts.len(),
            total_affected: self.statistics.total_affected,
            highest_severity: self.all_impacts().map(|i| i.severity).max(),
            percentage_of_graph: self.statistics.percentage_of_graph,
            confidence: self.confidence.overall,
            confidence_level: self.confidence.level(),
        }
    }
}
