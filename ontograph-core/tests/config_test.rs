//! Configuration loading and validation.

use std::io::Write;

use ontograph_core::config::defaults;
use ontograph_core::errors::ConfigError;
use ontograph_core::OntographConfig;

#[test]
fn empty_toml_uses_defaults() {
    let config = OntographConfig::from_toml("").unwrap();
    assert_eq!(config.assessment.ripple_max_depth, defaults::DEFAULT_RIPPLE_MAX_DEPTH);
    assert_eq!(config.assessment.decay_factor, defaults::DEFAULT_DECAY_FACTOR);
    assert!(config.assessment.track_paths);
    assert_eq!(config.confidence.range_below, 0.15);
    assert_eq!(config.confidence.range_above, 0.10);
    assert_eq!(config.observability.log_level, "info");
    assert!(!config.observability.json_logs);
}

#[test]
fn partial_sections_keep_other_defaults() {
    let config = OntographConfig::from_toml(
        r#"
        [assessment]
        ripple_max_depth = 5

        [observability]
        json_logs = true
        "#,
    )
    .unwrap();
    assert_eq!(config.assessment.ripple_max_depth, 5);
    assert_eq!(config.assessment.decay_factor, 0.8);
    assert!(config.observability.json_logs);
    assert_eq!(config.confidence.complexity_penalty, 0.1);
}

#[test]
fn rejects_out_of_range_values() {
    for (toml, field) in [
        ("[assessment]\nripple_max_depth = 0", "assessment.ripple_max_depth"),
        ("[assessment]\nripple_max_depth = 51", "assessment.ripple_max_depth"),
        ("[assessment]\ndecay_factor = 1.0", "assessment.decay_factor"),
        ("[assessment]\ndecay_factor = 0.0", "assessment.decay_factor"),
        ("[confidence]\ndensity_penalty = 1.5", "confidence.density_penalty"),
        ("[confidence]\nspread_normalizer = 0.0", "confidence.spread_normalizer"),
        ("[confidence]\nrange_below = 0.2\nrange_above = 0.1", "confidence.range_below"),
        ("[observability]\nlog_level = \"loud\"", "observability.log_level"),
    ] {
        match OntographConfig::from_toml(toml) {
            Err(ConfigError::ValidationFailed { field: got, .. }) => {
                assert_eq!(got, field, "{toml}")
            }
            other => panic!("expected ValidationFailed for {toml}, got {other:?}"),
        }
    }
}

#[test]
fn malformed_toml_is_a_parse_error() {
    assert!(matches!(
        OntographConfig::from_toml("[assessment\nripple_max_depth = 3"),
        Err(ConfigError::ParseError { .. })
    ));
}

#[test]
fn load_reads_file_and_reports_missing_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[assessment]\ntrack_paths = false").unwrap();
    let config = OntographConfig::load(file.path()).unwrap();
    assert!(!config.assessment.track_paths);

    let missing = file.path().with_extension("does-not-exist");
    assert!(matches!(
        OntographConfig::load(&missing),
        Err(ConfigError::FileNotFound { .. })
    ));
}
