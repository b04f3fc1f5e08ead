//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::ObservabilityConfig;

static INIT: Once = Once::new();

/// Environment variable holding a filter directive, e.g. `ONTOGRAPH_LOG=ontograph_impact=debug`.
pub const LOG_ENV_VAR: &str = "ONTOGRAPH_LOG";

/// Initialize the global subscriber.
///
/// `ONTOGRAPH_LOG` takes precedence over `config.log_level`.
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

        let registry = tracing_subscriber::registry().with(filter);
        let result = if config.json_logs {
            registry
                .with(fmt::layer().json().with_target(true).with_thread_ids(true))
                .try_init()
        } else {
            registry
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_file(true)
                        .with_line_number(true),
                )
                .try_init()
        };

        if let Err(e) = result {
            tracing::debug!(error = %e, "global tracing subscriber already set");
        }
    });
}

/// Create the span wrapping one impact assessment.
#[macro_export]
macro_rules! assessment_span {
    ($operation:expr, $clone_id:expr) => {
        tracing::info_span!("ontograph.assess", operation = %$operation, clone_id = %$clone_id)
    };
}
