use std::fmt;

use serde::{Deserialize, Serialize};

/// How serious an impact is. Ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub const ALL: [Severity; 4] = [Self::Low, Self::Medium, Self::High, Self::Critical];

    /// One step less severe, saturating at `Low`.
    pub fn step_down(self) -> Self {
        match self {
            Self::Critical => Self::High,
            Self::High => Self::Medium,
            Self::Medium | Self::Low => Self::Low,
        }
    }

    /// Severity of a ripple impact discovered `depth` hops from its seed.
    pub fn for_ripple_depth(depth: usize) -> Self {
        match depth {
            0 | 1 => Self::High,
            2 => Self::Medium,
            _ => Self::Low,
        }
    }

    /// HIGH and CRITICAL impacts contribute critical paths.
    pub fn is_critical_path(self) -> bool {
        self >= Self::High
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
