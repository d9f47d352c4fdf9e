//! Tracing setup: structured logging with span definitions and event types.

pub mod events;
pub mod spans;

use std::sync::Once;

use tracing_subscriber::EnvFilter;

use frostline_core::config::ObservabilityConfig;

/// Environment variable holding the filter directive.
pub const LOG_ENV_VAR: &str = "FROSTLINE_LOG";

static INIT: Once = Once::new();

/// Initialize the global subscriber with JSON output.
///
/// Filter from `FROSTLINE_LOG`, `info` when unset. Only the first call
/// installs a subscriber; later calls are no-ops.
pub fn init_tracing() {
    init_tracing_with(&ObservabilityConfig {
        json_logs: true,
        ..Default::default()
    });
}

/// Initialize the global subscriber from the `[observability]` section.
/// `FROSTLINE_LOG` still takes precedence over `log_level`.
pub fn init_tracing_with(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true);

        // Another subscriber may already be installed by the host process.
        let installed = if config.json_logs {
            builder
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true)
                .json()
                .try_init()
                .is_ok()
        } else {
            builder.try_init().is_ok()
        };
        if !installed {
            tracing::debug!("global subscriber already set, keeping it");
        }
    });
}
