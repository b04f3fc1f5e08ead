//! Report confidence: complexity, spread, and density penalties multiplied together.

use ontograph_core::config::ConfidenceConfig;
use ontograph_core::errors::ConfigError;
use ontograph_core::impact::{ConfidenceFactors, ConfidenceRange, ConfidenceScore, ImpactStatistics};
use ontograph_core::operation::OperationKind;

/// Complexity weight of an operation kind, 0.0–1.0.
///
/// Deleting an entity is the most disruptive change; creating an edge the least.
pub fn operation_complexity(kind: OperationKind) -> f64 {
    match kind {
        OperationKind::DeleteEntity => 1.0,
        OperationKind::DeleteEdge => 0.8,
        OperationKind::UpdateEntity => 0.6,
        OperationKind::UpdateEdge => 0.4,
        OperationKind::CreateEntity => 0.2,
        OperationKind::CreateEdge => 0.1,
    }
}

/// edges / (nodes × (nodes − 1)), or 0 for graphs with at most one node.
pub fn graph_density(node_count: usize, edge_count: usize) -> f64 {
    if node_count <= 1 {
        return 0.0;
    }
    let possible = node_count as f64 * (node_count as f64 - 1.0);
    (edge_count as f64 / possible).clamp(0.0, 1.0)
}

/// Pure scoring over an operation kind and the report statistics.
#[derive(Debug, Clone, Default)]
pub struct ConfidenceCalculator {
    config: ConfidenceConfig,
}

impl ConfidenceCalculator {
    /// Fails if the weights fall outside [0, 1] or the range is wider than
    /// `MAX_CONFIDENCE_RANGE_WIDTH`.
    pub fn new(config: ConfidenceConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ConfidenceConfig {
        &self.config
    }

    /// Score an assessment. `statistics.node_count`/`edge_count` describe the
    /// snapshot at assessment time.
    ///
    /// overall = (1 − complexity·p_c)(1 − min(spread, p_s))(1 − density·p_d),
    /// clamped to [0, 1]; range = [overall − below, overall + above], clamped.
    pub fn calculate(&self, kind: OperationKind, statistics: &ImpactStatistics) -> ConfidenceScore {
        let cfg = &self.config;

        let factors = ConfidenceFactors {
            operation_complexity: operation_complexity(kind),
            spread: (statistics.total_affected as f64 / cfg.spread_normalizer).min(1.0),
            graph_density: graph_density(statistics.node_count, statistics.edge_count),
        };

        let overall = ((1.0 - factors.operation_complexity * cfg.complexity_penalty)
            * (1.0 - factors.spread.min(cfg.max_spread_penalty))
            * (1.0 - factors.graph_density * cfg.density_penalty))
            .clamp(0.0, 1.0);

        ConfidenceScore {
            overall,
            factors,
            range: ConfidenceRange {
                min: (overall - cfg.range_below).max(0.0),
                max: (overall + cfg.range_above).min(1.0),
            },
        }
    }
}
