// Single source of truth for all default values.

// --- Assessment ---
pub const DEFAULT_RIPPLE_MAX_DEPTH: usize = 3;
pub const DEFAULT_DECAY_FACTOR: f64 = 0.8;
pub const DEFAULT_TRACK_PATHS: bool = true;

// --- Confidence ---
pub const DEFAULT_COMPLEXITY_PENALTY: f64 = 0.1;
pub const DEFAULT_MAX_SPREAD_PENALTY: f64 = 0.5;
pub const DEFAULT_SPREAD_NORMALIZER: f64 = 100.0;
pub const DEFAULT_DENSITY_PENALTY: f64 = 0.2;
pub const DEFAULT_RANGE_BELOW: f64 = 0.15;
pub const DEFAULT_RANGE_ABOVE: f64 = 0.10;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
