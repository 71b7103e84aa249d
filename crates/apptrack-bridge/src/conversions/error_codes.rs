//! Uniform failure report returned by every entry point.
//!
//! Display format: `[ERROR_CODE] method: message`. The host parses the code
//! from the bracketed prefix.

use std::fmt;

use apptrack_core::errors::BridgeErrorCode;
use serde::{Deserialize, Serialize};

pub use apptrack_core::errors::error_code::{
    CONFIG_ERROR, ENGINE_FAILURE, LOOKUP_FAILURE, TRANSLATION_FAILURE,
};

// Runtime handle
pub const ALREADY_INITIALIZED: &str = "ALREADY_INITIALIZED";
pub const RUNTIME_NOT_INITIALIZED: &str = "RUNTIME_NOT_INITIALIZED";

/// Success value or failure report; exactly one per call.
pub type BridgeOutcome = Result<serde_json::Value, FailureReport>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureReport {
    pub method: String,
    pub code: String,
    pub message: String,
}

impl FailureReport {
    pub fn new(method: impl Into<String>, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            code: code.into(),
            message: message.into(),
        }
    }

    /// Report for any error that carries a bridge error code.
    pub fn from_error(method: impl Into<String>, err: &(impl fmt::Display + BridgeErrorCode)) -> Self {
        Self::new(method, err.error_code(), err.to_string())
    }

    pub fn is(&self, code: &str) -> bool {
        self.code == code
    }
}

impl fmt::Display for FailureReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.code, self.method, self.message)
    }
}

impl std::error::Error for FailureReport {}

pub fn runtime_not_initialized() -> FailureReport {
    FailureReport::new(
        "runtime",
        RUNTIME_NOT_INITIALIZED,
        "bridge runtime not initialized; call runtime::initialize() first",
    )
}

pub fn already_initialized() -> FailureReport {
    FailureReport::new("runtime", ALREADY_INITIALIZED, "bridge runtime already initialized")
}
