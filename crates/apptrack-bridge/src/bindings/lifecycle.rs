//! Lifecycle bindings: create and remove trackers, client id.

use apptrack_core::config::Configuration;
use serde_json::Value;

use crate::bridge::Bridge;
use crate::conversions::config_types::{tracker_setup, TrackerSetup};
use crate::conversions::error_codes::BridgeOutcome;
use crate::conversions::input::Input;
use crate::validation;

impl Bridge {
    /// Translate every supplied configuration domain and create the tracker
    /// under `appName`. Either the tracker is fully created and registered,
    /// or nothing is registered.
    pub fn create_tracker(&self, args: &Value) -> BridgeOutcome {
        self.call("createTracker", || {
            let input = Input::from_value("createTracker", args)?;
            if self.config.validation.strict {
                validation::into_result(validation::validate_create_args(input.map()))?;
            }

            let namespace = input.str("appName")?.unwrap_or_default();
            let transport = self.transport_config(namespace);
            let TrackerSetup {
                app_name,
                customer_key,
                configurations,
            } = tracker_setup(input, &self.config, &transport)?;

            let domains: Vec<&str> = configurations.iter().map(Configuration::domain).collect();
            tracing::debug!(namespace = %app_name, ?domains, "creating tracker");

            self.registry.create_with(&app_name, || {
                self.engine
                    .create_tracker(&customer_key, &app_name, configurations)
            })?;
            Ok(Value::Bool(true))
        })
    }

    /// `{ tracker }`; resolves to whether the engine still knew the tracker.
    pub fn remove_tracker(&self, args: &Value) -> BridgeOutcome {
        self.call("removeTracker", || {
            let input = Input::from_value("removeTracker", args)?;
            let namespace = input.str("tracker")?;
            let detached = self
                .registry
                .remove_with(namespace, |tracker| self.engine.remove_tracker(tracker))?;
            Ok(Value::Bool(detached))
        })
    }

    pub fn remove_all_trackers(&self) -> BridgeOutcome {
        self.call("removeAllTrackers", || {
            self.registry
                .remove_all_with(|tracker| self.engine.remove_tracker(tracker))?;
            Ok(Value::Bool(true))
        })
    }

    /// `{ clientId }`.
    pub fn set_client_id(&self, args: &Value) -> BridgeOutcome {
        self.call("setClientId", || {
            let input = Input::from_value("setClientId", args)?;
            let client_id = input.required_str("clientId")?;
            Ok(Value::Bool(self.engine.set_client_id(client_id)?))
        })
    }

    /// The engine's client id, or null when none is set.
    pub fn get_client_id(&self) -> BridgeOutcome {
        self.call("getClientId", || {
            Ok(self
                .engine
                .client_id()?
                .map_or(Value::Null, Value::String))
        })
    }
}
