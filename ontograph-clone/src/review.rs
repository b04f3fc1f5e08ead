//! Review decisions: accept all, reject all, or accept a subset of direct impacts.
//!
//! Partial accept always commits the operation's core mutation together with
//! the structurally required direct impacts (the target element itself and
//! cascade-deleted edges, which cannot survive without their endpoint).
//! Selection only decides which of the remaining direct impacts the reviewer
//! signs off on. Indirect and ripple impacts are informational and never
//! persisted on their own.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::info;

use ontograph_core::errors::{ImpactError, OntographResult};
use ontograph_core::impact::{Impact, ImpactReport, ImpactType};

use crate::handle::CloneHandle;
use crate::manager::CloneManager;

/// What the reviewer decided for a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "decision", content = "element_ids", rename_all = "snake_case")]
pub enum ReviewDecision {
    AcceptAll,
    RejectAll,
    /// Element ids of the direct impacts the reviewer accepts.
    AcceptSelected(Vec<String>),
}

/// Result of applying a [`ReviewDecision`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewOutcome {
    pub report_id: String,
    pub committed: bool,
    /// Direct impacts committed regardless of selection.
    pub required: Vec<Impact>,
    /// Optional direct impacts the reviewer accepted.
    pub accepted: Vec<Impact>,
    /// Optional direct impacts the reviewer left out.
    pub declined: Vec<Impact>,
    /// Indirect + ripple impacts, reported but never persisted.
    pub informational: usize,
}

/// Whether a direct impact is inseparable from the operation itself.
pub fn is_required(report: &ImpactReport, impact: &Impact) -> bool {
    impact.element_id == report.operation().target_id()
        || impact.impact_type == ImpactType::EdgeCascadeDelete
}

impl CloneManager {
    /// Finalize a preview session according to `decision`.
    pub fn finalize(
        &self,
        handle: &CloneHandle,
        report: &ImpactReport,
        decision: ReviewDecision,
    ) -> OntographResult<ReviewOutcome> {
        if report.clone_id() != handle.clone_id() {
            return Err(ImpactError::invalid(format!(
                "report {} was produced for clone {}, not {}",
                report.id(),
                report.clone_id(),
                handle.clone_id()
            ))
            .into());
        }

        let (required, optional): (Vec<Impact>, Vec<Impact>) = report
            .direct_impacts()
            .iter()
            .cloned()
            .partition(|i| is_required(report, i));
        let informational = report.indirect_impacts().len() + report.ripple_impacts().len();

        let outcome = match decision {
            ReviewDecision::AcceptAll => {
                self.commit(handle)?;
                ReviewOutcome {
                    report_id: report.id().to_string(),
                    committed: true,
                    required,
                    accepted: optional,
                    declined: Vec::new(),
                    informational,
                }
            }
            ReviewDecision::RejectAll => {
                self.reject(handle)?;
                ReviewOutcome {
                    report_id: report.id().to_string(),
                    committed: false,
                    required: Vec::new(),
                    accepted: Vec::new(),
                    declined: report.direct_impacts().to_vec(),
                    informational,
                }
            }
            ReviewDecision::AcceptSelected(ids) => {
                let direct_ids: HashSet<&str> = report
                    .direct_impacts()
                    .iter()
                    .map(|i| i.element_id.as_str())
                    .collect();
                if let Some(unknown) = ids.iter().find(|id| !direct_ids.contains(id.as_str())) {
                    return Err(ImpactError::invalid(format!(
                        "{unknown} is not a direct impact of report {}",
                        report.id()
                    ))
                    .into());
                }

                let selected: HashSet<&str> = ids.iter().map(String::as_str).collect();
                let (accepted, declined): (Vec<Impact>, Vec<Impact>) = optional
                    .into_iter()
                    .partition(|i| selected.contains(i.element_id.as_str()));

                self.commit(handle)?;
                ReviewOutcome {
                    report_id: report.id().to_string(),
                    committed: true,
                    required,
                    accepted,
                    declined,
                    informational,
                }
            }
        };

        info!(
            report_id = report.id(),
            committed = outcome.committed,
            accepted = outcome.accepted.len(),
            declined = outcome.declined.len(),
            "review finalized"
        );
        Ok(outcome)
    }
}
