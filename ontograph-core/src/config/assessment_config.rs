use serde::{Deserialize, Serialize};

use super::{defaults, invalid};
use crate::constants::MAX_RIPPLE_DEPTH;
use crate::errors::ConfigError;

/// Impact assessment configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssessmentConfig {
    /// Maximum ripple depth (hops beyond the indirect impacts).
    pub ripple_max_depth: usize,
    /// Confidence multiplier applied per hop.
    pub decay_factor: f64,
    /// Record the full propagation path on each indirect/ripple impact.
    pub track_paths: bool,
}

impl Default for AssessmentConfig {
    fn default() -> Self {
        Self {
            ripple_max_depth: defaults::DEFAULT_RIPPLE_MAX_DEPTH,
            decay_factor: defaults::DEFAULT_DECAY_FACTOR,
            track_paths: defaults::DEFAULT_TRACK_PATHS,
        }
    }
}

impl AssessmentConfig {
    /// Depth within `1..=MAX_RIPPLE_DEPTH`; decay strictly inside (0, 1) so
    /// confidence falls on every hop.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ripple_max_depth == 0 || self.ripple_max_depth > MAX_RIPPLE_DEPTH {
            return Err(invalid(
                "assessment.ripple_max_depth",
                format!("must be between 1 and {MAX_RIPPLE_DEPTH}"),
            ));
        }
        if !(self.decay_factor > 0.0 && self.decay_factor < 1.0) {
            return Err(invalid(
                "assessment.decay_factor",
                "must be strictly between 0.0 and 1.0",
            ));
        }
        Ok(())
    }
}
