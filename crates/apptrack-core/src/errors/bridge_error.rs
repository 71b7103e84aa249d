use super::engine_error::EngineError;
use super::lookup_error::LookupError;
use super::translation_error::TranslationError;

/// Top-level bridge error. Every failure an entry point can hit is one of these.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BridgeError {
    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error(transparent)]
    Translation(#[from] TranslationError),

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("configuration error: {0}")]
    Config(String),
}

pub type BridgeResult<T> = Result<T, BridgeError>;
