//! The bridge handle every entry point hangs off.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use apptrack_core::config::BridgeConfig;
use apptrack_core::constants::TRACKER_NAMESPACE_KEY;
use apptrack_core::errors::{BridgeErrorCode, BridgeResult, EngineError};
use apptrack_core::{TrackerController, TrackingEngine};
use apptrack_transport::HttpTransportConfig;
use serde_json::Value;

use crate::conversions::error_codes::{BridgeOutcome, FailureReport};
use crate::conversions::input::Input;
use crate::registry::TrackerRegistry;

/// Owns the tracker registry and the engine it creates trackers with.
///
/// Entry points take one untyped JSON object and resolve exactly one
/// [`BridgeOutcome`]. They never panic into the caller.
pub struct Bridge {
    pub(crate) engine: Arc<dyn TrackingEngine>,
    pub(crate) registry: TrackerRegistry,
    pub(crate) config: BridgeConfig,
}

impl Bridge {
    pub fn new(engine: Arc<dyn TrackingEngine>, config: BridgeConfig) -> Self {
        Self {
            engine,
            registry: TrackerRegistry::new(),
            config,
        }
    }

    pub fn with_defaults(engine: Arc<dyn TrackingEngine>) -> Self {
        Self::new(engine, BridgeConfig::default())
    }

    pub fn registry(&self) -> &TrackerRegistry {
        &self.registry
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    /// Run one entry point body inside its span and convert the result.
    pub(crate) fn call<F>(&self, method: &str, body: F) -> BridgeOutcome
    where
        F: FnOnce() -> BridgeResult<Value>,
    {
        let span = tracing::info_span!("bridge_call", method);
        let _guard = span.enter();

        let result = panic::catch_unwind(AssertUnwindSafe(body)).unwrap_or_else(|payload| {
            Err(EngineError::Panicked {
                operation: method.to_string(),
                reason: panic_message(payload.as_ref()),
            }
            .into())
        });

        result.map_err(|err| {
            let report = FailureReport::from_error(method, &err);
            tracing::warn!(code = err.error_code(), error = %err, "bridge call failed");
            report
        })
    }

    /// Tracker named by the `tracker` key; absent or null means the default.
    pub(crate) fn target(&self, args: Input<'_>) -> BridgeResult<Arc<dyn TrackerController>> {
        let namespace = args.str(TRACKER_NAMESPACE_KEY)?;
        Ok(self.registry.resolve(namespace)?)
    }

    /// Transport settings for a tracker. Each namespace gets its own cookie
    /// directory so jars are never shared.
    pub(crate) fn transport_config(&self, namespace: &str) -> HttpTransportConfig {
        let mut transport = HttpTransportConfig::default();
        if let Some(dir) = &self.config.storage.cookie_dir {
            transport.cookie_dir = Some(dir.join(namespace_dir_name(namespace)));
        }
        transport
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

/// Directory name for a namespace. ASCII alphanumerics and `-` are kept;
/// every other byte becomes `_XX` (uppercase hex), so distinct namespaces
/// never share a directory.
fn namespace_dir_name(namespace: &str) -> String {
    let mut name = String::with_capacity(namespace.len());
    for byte in namespace.bytes() {
        if byte.is_ascii_alphanumeric() || byte == b'-' {
            name.push(char::from(byte));
        } else {
            name.push_str(&format!("_{byte:02X}"));
        }
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn namespace_becomes_a_safe_directory_name() {
        assert_eq!(namespace_dir_name("my-app1"), "my-app1");
        assert_eq!(namespace_dir_name("../etc/x y"), "_2E_2E_2Fetc_2Fx_20y");
        assert_eq!(namespace_dir_name("café"), "caf_C3_A9");
    }

    #[test]
    fn punctuation_variants_get_distinct_directories() {
        let names = ["shop.app", "shop_app", "shop app", "shop_2Eapp"];
        let dirs: std::collections::HashSet<String> =
            names.iter().map(|n| namespace_dir_name(n)).collect();
        assert_eq!(dirs.len(), names.len());
    }

    #[test]
    fn panic_message_reads_str_and_string_payloads() {
        let s: Box<dyn Any + Send> = Box::new("boom");
        assert_eq!(panic_message(s.as_ref()), "boom");
        let s: Box<dyn Any + Send> = Box::new(String::from("bang"));
        assert_eq!(panic_message(s.as_ref()), "bang");
    }
}
