//! Process-wide bridge handle for host glue that cannot thread a `Bridge`.
//!
//! The handle is stored behind `OnceLock`: initialized once via
//! [`initialize`] and read via [`get`] for the lifetime of the process.
//! Code that can own a [`Bridge`] directly should do so instead.

use std::sync::{Arc, OnceLock};

use apptrack_core::config::BridgeConfig;
use apptrack_core::errors::BridgeError;
use apptrack_core::TrackingEngine;

use crate::bridge::Bridge;
use crate::conversions::error_codes::{self, FailureReport};
use crate::observability;

static RUNTIME: OnceLock<Arc<Bridge>> = OnceLock::new();

/// Validate `config`, set up tracing from it, and install the global bridge.
///
/// Fails with `CONFIG_ERROR` on an invalid config and `ALREADY_INITIALIZED`
/// on a second call.
pub fn initialize(engine: Arc<dyn TrackingEngine>, config: BridgeConfig) -> Result<(), FailureReport> {
    config
        .validate_or_error()
        .map_err(|e| FailureReport::from_error("runtime", &e))?;
    observability::init_tracing_from_config(&config.observability);

    RUNTIME
        .set(Arc::new(Bridge::new(engine, config)))
        .map_err(|_| error_codes::already_initialized())?;
    tracing::info!("bridge runtime initialized");
    Ok(())
}

/// [`initialize`] from a TOML string. Empty input means all defaults.
pub fn initialize_from_toml(engine: Arc<dyn TrackingEngine>, toml_str: &str) -> Result<(), FailureReport> {
    let config = BridgeConfig::from_toml(toml_str)
        .map_err(|e: BridgeError| FailureReport::from_error("runtime", &e))?;
    initialize(engine, config)
}

/// The global bridge. Fails with `RUNTIME_NOT_INITIALIZED` before [`initialize`].
pub fn get() -> Result<Arc<Bridge>, FailureReport> {
    RUNTIME
        .get()
        .cloned()
        .ok_or_else(error_codes::runtime_not_initialized)
}

pub fn is_initialized() -> bool {
    RUNTIME.get().is_some()
}
