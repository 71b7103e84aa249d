//! # apptrack-core
//!
//! Foundation crate for the apptrack bridge.
//! Defines the typed configuration model, typed events, self-describing
//! payloads, the error taxonomy, and the traits the external tracking engine
//! implements. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod event;
pub mod payload;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{BridgeConfig, Configuration};
pub use errors::{BridgeError, BridgeErrorCode, BridgeResult};
pub use event::{Event, EventKind, TypedEvent};
pub use payload::SelfDescribingJson;
pub use traits::{NetworkTransport, SubjectController, TrackerController, TrackingEngine};
