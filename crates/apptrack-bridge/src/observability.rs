//! Tracing initialization.

use std::sync::Once;

use apptrack_core::config::defaults::DEFAULT_LOG_FILTER;
use apptrack_core::config::ObservabilityConfig;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding per-target log directives,
/// e.g. `APPTRACK_LOG=apptrack_bridge=debug,apptrack_transport=warn`.
pub const LOG_ENV_VAR: &str = "APPTRACK_LOG";

/// Initialize human-readable logging from `APPTRACK_LOG`, falling back to
/// `apptrack=info`. Idempotent; a subscriber installed by the host wins.
pub fn init_tracing() {
    install(env_filter(DEFAULT_LOG_FILTER), false);
}

/// Initialize with an explicit filter directive instead of the environment.
pub fn init_tracing_with_filter(filter: &str) {
    install(EnvFilter::new(filter), false);
}

/// Initialize from the `[observability]` section. `APPTRACK_LOG` still
/// overrides the configured filter.
pub fn init_tracing_from_config(config: &ObservabilityConfig) {
    install(env_filter(&config.log_filter), config.json);
}

fn env_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(fallback))
}

fn install(filter: EnvFilter, json: bool) {
    INIT.call_once(|| {
        let registry = tracing_subscriber::registry().with(filter);
        let result = if json {
            registry
                .with(fmt::layer().json().with_target(true).with_thread_ids(true))
                .try_init()
        } else {
            registry
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_thread_ids(true)
                        .with_file(true)
                        .with_line_number(true),
                )
                .try_init()
        };
        if result.is_err() {
            tracing::debug!("global subscriber already set, keeping it");
        }
    });
}
