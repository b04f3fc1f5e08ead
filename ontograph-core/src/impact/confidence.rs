use serde::{Deserialize, Serialize};

/// Inputs that drove a confidence score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceFactors {
    /// Operation complexity weight, 0.0–1.0.
    pub operation_complexity: f64,
    /// Blast-radius spread, 0.0–1.0.
    pub spread: f64,
    /// Graph density, 0.0–1.0.
    pub graph_density: f64,
}

/// Uncertainty range around the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceRange {
    pub min: f64,
    pub max: f64,
}

impl ConfidenceRange {
    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }
}

/// Bounded estimate of how reliable a computed impact set is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceScore {
    pub overall: f64,
    pub factors: ConfidenceFactors,
    pub range: ConfidenceRange,
}

impl ConfidenceScore {
    pub fn level(&self) -> ConfidenceLevel {
        ConfidenceLevel::from_score(self.overall)
    }
}

/// Confidence level classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
    VeryLow,
}

impl ConfidenceLevel {
    pub fn from_score(score: f64) -> Self {
        if score >= 0.8 {
            Self::High
        } else if score >= 0.5 {
            Self::Medium
        } else if score >= 0.3 {
            Self::Low
        } else {
            Self::VeryLow
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
            Self::VeryLow => "very low",
        }
    }
}
