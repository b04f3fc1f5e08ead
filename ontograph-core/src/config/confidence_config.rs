use serde::{Deserialize, Serialize};

use super::{defaults, invalid};
use crate::constants::MAX_CONFIDENCE_RANGE_WIDTH;
use crate::errors::ConfigError;

/// Weights used by the confidence calculator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfidenceConfig {
    /// Penalty per unit of operation complexity.
    pub complexity_penalty: f64,
    /// Upper bound on the blast-radius penalty.
    pub max_spread_penalty: f64,
    /// Affected-element count at which spread saturates to 1.0.
    pub spread_normalizer: f64,
    /// Penalty per unit of graph density.
    pub density_penalty: f64,
    /// Distance from the overall score to the lower end of the range.
    pub range_below: f64,
    /// Distance from the overall score to the upper end of the range.
    pub range_above: f64,
}

impl Default for ConfidenceConfig {
    fn default() -> Self {
        Self {
            complexity_penalty: defaults::DEFAULT_COMPLEXITY_PENALTY,
            max_spread_penalty: defaults::DEFAULT_MAX_SPREAD_PENALTY,
            spread_normalizer: defaults::DEFAULT_SPREAD_NORMALIZER,
            density_penalty: defaults::DEFAULT_DENSITY_PENALTY,
            range_below: defaults::DEFAULT_RANGE_BELOW,
            range_above: defaults::DEFAULT_RANGE_ABOVE,
        }
    }
}

impl ConfidenceConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("confidence.complexity_penalty", self.complexity_penalty),
            ("confidence.max_spread_penalty", self.max_spread_penalty),
            ("confidence.density_penalty", self.density_penalty),
            ("confidence.range_below", self.range_below),
            ("confidence.range_above", self.range_above),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(invalid(field, "must be between 0.0 and 1.0"));
            }
        }
        if self.spread_normalizer.is_nan() || self.spread_normalizer <= 0.0 {
            return Err(invalid("confidence.spread_normalizer", "must be greater than 0"));
        }
        if self.range_below + self.range_above > MAX_CONFIDENCE_RANGE_WIDTH + 1e-9 {
            return Err(invalid(
                "confidence.range_below",
                format!("range_below + range_above must not exceed {MAX_CONFIDENCE_RANGE_WIDTH}"),
            ));
        }
        Ok(())
    }
}
