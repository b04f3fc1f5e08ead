use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{ImpactType, Severity};

/// Aggregate view over all impacts of one assessment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImpactStatistics {
    /// |direct| + |indirect| + |ripple|.
    pub total_affected: usize,
    pub by_type: BTreeMap<ImpactType, usize>,
    pub by_severity: BTreeMap<Severity, usize>,
    /// Greatest ripple depth reached; 0 when no ripple impacts exist.
    pub max_depth: usize,
    /// Share of the pre-mutation graph affected, 0.0–100.0.
    pub percentage_of_graph: f64,
    /// Chains from a cause to every HIGH/CRITICAL element.
    pub critical_paths: Vec<Vec<String>>,
    /// Entity count of the snapshot at assessment time.
    pub node_count: usize,
    /// Relationship count of the snapshot at assessment time.
    pub edge_count: usize,
}

impl ImpactStatistics {
    pub fn count_of(&self, impact_type: ImpactType) -> usize {
        self.by_type.get(&impact_type).copied().unwrap_or(0)
    }

    pub fn count_with_severity(&self, severity: Severity) -> usize {
        self.by_severity.get(&severity).copied().unwrap_or(0)
    }
}
