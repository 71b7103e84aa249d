//! Bridge entry points, grouped by concern.
//!
//! Every entry point takes one JSON object and returns a [`BridgeOutcome`]:
//! a success value (usually `true`) or a [`FailureReport`].
//!
//! [`BridgeOutcome`]: crate::conversions::error_codes::BridgeOutcome
//! [`FailureReport`]: crate::conversions::error_codes::FailureReport

pub mod dispatch;
pub mod events;
pub mod lifecycle;
pub mod subject;
pub mod tags;
