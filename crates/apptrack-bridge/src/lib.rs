//! # apptrack-bridge
//!
//! Accepts untyped JSON from a host, translates it into the typed
//! configuration and events of `apptrack-core`, and routes each call to the
//! tracker registered under the requested namespace.
//!
//! ```ignore
//! let bridge = Bridge::with_defaults(engine);
//! bridge.create_tracker(&json!({ "appName": "App", "customerKey": "K" }))?;
//! bridge.invoke("trackPageView", &json!({ "eventData": { "pageUrl": "https://x" } }))?;
//! ```

pub mod bindings;
pub mod bridge;
pub mod conversions;
pub mod observability;
pub mod registry;
pub mod runtime;
pub mod validation;

pub use bridge::Bridge;
pub use conversions::error_codes::{BridgeOutcome, FailureReport};
pub use registry::TrackerRegistry;
