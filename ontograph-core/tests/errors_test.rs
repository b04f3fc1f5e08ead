//! Error codes and conversions.

use ontograph_core::errors::{CloneError, ConfigError, ImpactError, OntographErrorCode};
use ontograph_core::OntographError;

#[test]
fn every_variant_has_a_stable_code() {
    let cases: Vec<(OntographError, &str)> = vec![
        (ImpactError::entity_not_found("e1").into(), "ELEMENT_NOT_FOUND"),
        (ImpactError::edge_not_found("r1").into(), "ELEMENT_NOT_FOUND"),
        (ImpactError::invalid("bad").into(), "INVALID_OPERATION"),
        (
            CloneError::CloneNotFound { clone_id: "c".into() }.into(),
            "CLONE_NOT_FOUND",
        ),
        (
            CloneError::CloneConflict {
                graph_id: "g".into(),
                clone_id: "c".into(),
            }
            .into(),
            "CLONE_CONFLICT",
        ),
        (
            CloneError::GraphNotFound { graph_id: "g".into() }.into(),
            "GRAPH_NOT_FOUND",
        ),
        (
            CloneError::LockPoisoned { details: "x".into() }.into(),
            "CONCURRENCY_ERROR",
        ),
        (
            ConfigError::FileNotFound { path: "p".into() }.into(),
            "CONFIG_ERROR",
        ),
    ];
    for (err, code) in cases {
        assert_eq!(err.error_code(), code, "{err}");
    }
}

#[test]
fn coded_string_prefixes_the_code() {
    let err = ImpactError::entity_not_found("e9");
    assert_eq!(err.coded_string(), "[ELEMENT_NOT_FOUND] entity not found: e9");
}

#[test]
fn serde_json_errors_convert() {
    let parse: Result<serde_json::Value, _> = serde_json::from_str("{");
    let err: OntographError = parse.unwrap_err().into();
    assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
}
