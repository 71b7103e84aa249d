//! Stable error codes reported to the host alongside the message.

use super::{BridgeError, EngineError, LookupError, TranslationError};

pub const LOOKUP_FAILURE: &str = "LOOKUP_FAILURE";
pub const TRANSLATION_FAILURE: &str = "TRANSLATION_FAILURE";
pub const ENGINE_FAILURE: &str = "ENGINE_FAILURE";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";

/// Maps an error to the code string the host parses.
pub trait BridgeErrorCode {
    fn error_code(&self) -> &'static str;
}

impl BridgeErrorCode for LookupError {
    fn error_code(&self) -> &'static str {
        LOOKUP_FAILURE
    }
}

impl BridgeErrorCode for TranslationError {
    fn error_code(&self) -> &'static str {
        TRANSLATION_FAILURE
    }
}

impl BridgeErrorCode for EngineError {
    fn error_code(&self) -> &'static str {
        ENGINE_FAILURE
    }
}

impl BridgeErrorCode for BridgeError {
    fn error_code(&self) -> &'static str {
        match self {
            BridgeError::Lookup(e) => e.error_code(),
            BridgeError::Translation(e) => e.error_code(),
            BridgeError::Engine(e) => e.error_code(),
            BridgeError::Config(_) => CONFIG_ERROR,
        }
    }
}
