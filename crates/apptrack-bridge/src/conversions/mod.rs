//! Conversions between untyped host values and the typed model.

pub mod config_types;
pub mod error_codes;
pub mod event_types;
pub mod input;
pub mod network_types;
