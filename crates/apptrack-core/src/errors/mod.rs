//! Error taxonomy: lookup, translation, engine, and configuration failures.

pub mod bridge_error;
pub mod engine_error;
pub mod error_code;
pub mod lookup_error;
pub mod translation_error;

pub use bridge_error::{BridgeError, BridgeResult};
pub use engine_error::{EngineError, EngineResult};
pub use error_code::BridgeErrorCode;
pub use lookup_error::LookupError;
pub use translation_error::TranslationError;
