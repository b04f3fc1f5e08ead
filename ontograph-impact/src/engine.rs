//! AssessmentEngine: orchestrates one impact assessment over a clone.
//!
//! validate → direct (pre-mutation) → apply → indirect → ripple → statistics
//! → confidence → report.

use std::sync::Arc;

use tracing::{debug, info};

use ontograph_clone::{CloneHandle, CloneManager};
use ontograph_core::config::OntographConfig;
use ontograph_core::errors::{ConfigError, OntographResult};
use ontograph_core::graph::{ElementKind, GraphSnapshot};
use ontograph_core::impact::{ImpactReport, ReportParts};
use ontograph_core::operation::Operation;
use ontograph_core::traits::{Clock, IdGenerator, SystemClock, UuidGenerator};

use crate::confidence::ConfidenceCalculator;
use crate::context::AssessmentContext;
use crate::graph::IndexedGraph;
use crate::ripple::RippleCalculator;
use crate::{direct, indirect, mutation, statistics};

/// Computes impact reports. Holds only immutable configuration and injected
/// capabilities; all per-call state lives in an [`AssessmentContext`], so one
/// engine can serve concurrent calls on different clones.
pub struct AssessmentEngine {
    config: OntographConfig,
    ripple: RippleCalculator,
    confidence: ConfidenceCalculator,
    ids: Arc<dyn IdGenerator>,
    clock: Arc<dyn Clock>,
}

impl AssessmentEngine {
    pub fn new() -> Self {
        Self {
            config: OntographConfig::default(),
            ripple: RippleCalculator::default(),
            confidence: ConfidenceCalculator::default(),
            ids: Arc::new(UuidGenerator),
            clock: Arc::new(SystemClock),
        }
    }

    /// Build an engine from `config`, which must pass
    /// [`OntographConfig::validate`].
    pub fn with_config(config: OntographConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            ripple: RippleCalculator::new(&config.assessment)?,
            confidence: ConfidenceCalculator::new(config.confidence.clone())?,
            config,
            ids: Arc::new(UuidGenerator),
            clock: Arc::new(SystemClock),
        })
    }

    /// Replace the report id source.
    pub fn with_id_generator(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.ids = ids;
        self
    }

    /// Replace the report timestamp source.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn config(&self) -> &OntographConfig {
        &self.config
    }

    /// Assess `operation` against the clone behind `handle`, applying it to
    /// the clone's working snapshot.
    ///
    /// Allowed once per clone. On error the clone is left exactly as it was.
    pub fn assess_impact(
        &self,
        clones: &CloneManager,
        handle: &CloneHandle,
        operation: Operation,
    ) -> OntographResult<ImpactReport> {
        let span = ontograph_core::assessment_span!(operation.kind(), handle.clone_id());
        let _guard = span.enter();

        clones.with_assessment(handle, |snapshot| {
            self.assess_snapshot(snapshot, handle.graph_id(), handle.clone_id(), operation)
        })
    }

    /// Core assessment over a bare snapshot. `snapshot` is mutated only when
    /// the operation validates.
    pub fn assess_snapshot(
        &self,
        snapshot: &mut GraphSnapshot,
        graph_id: &str,
        clone_id: &str,
        operation: Operation,
    ) -> OntographResult<ImpactReport> {
        // Step 1: Validate before anything is touched.
        mutation::validate(snapshot, &operation)?;
        let mut ctx =
            AssessmentContext::new(snapshot.entity_count(), snapshot.relationship_count());

        // Step 2: Direct impacts on the pre-mutation topology.
        ctx.direct = direct::compute(snapshot, &operation);
        debug!(direct = ctx.direct.len(), "direct impacts computed");

        // Step 3: Mutate the clone.
        let applied = mutation::apply(snapshot, &operation)?;
        if operation.kind().element_kind() == ElementKind::Entity {
            ctx.visit(operation.target_id());
        }

        // Step 4: Indirect impacts, one hop from the primary impact.
        let assessment = &self.config.assessment;
        let seeds = match ctx.direct.first().cloned() {
            Some(primary) => {
                let connected = indirect::connected_entities(&applied, snapshot);
                indirect::compute(
                    &mut ctx,
                    &primary,
                    connected,
                    assessment.decay_factor,
                    assessment.track_paths,
                )
            }
            None => Vec::new(),
        };
        debug!(indirect = ctx.indirect.len(), "indirect impacts computed");

        // Step 5: Ripple outward from the indirect impacts.
        if !seeds.is_empty() {
            let graph = IndexedGraph::from_snapshot(snapshot);
            let ripples = self.ripple.calculate_ripples(
                &graph,
                &seeds,
                assessment.ripple_max_depth,
                &mut ctx.visited,
            );
            debug!(
                ripple = ripples.len(),
                max_depth = ripples.max_depth_reached,
                "ripple propagation complete"
            );
            ctx.ripple = ripples.into_impacts();
        }

        // Step 6: Statistics and confidence.
        let stats = statistics::aggregate(
            &ctx.direct,
            &ctx.indirect,
            &ctx.ripple,
            ctx.node_count,
            ctx.edge_count,
        );
        let confidence = self.confidence.calculate(operation.kind(), &stats);

        info!(
            total_affected = stats.total_affected,
            max_depth = stats.max_depth,
            percentage = stats.percentage_of_graph,
            confidence = confidence.overall,
            "impact assessment complete"
        );

        Ok(ImpactReport::new(ReportParts {
            id: self.ids.next_id(),
            graph_id: graph_id.to_string(),
            clone_id: clone_id.to_string(),
            operation,
            direct_impacts: ctx.direct,
            indirect_impacts: ctx.indirect,
            ripple_impacts: ctx.ripple,
            statistics: stats,
            confidence,
            created_at: self.clock.now(),
        }))
    }
}

impl Default for AssessmentEngine {
    fn default() -> Self {
        Self::new()
    }
}
