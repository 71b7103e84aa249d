//! Runtime configuration of the bridge itself, loaded from TOML.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::{BridgeError, BridgeResult};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BridgeConfig {
    pub storage: StorageConfig,
    pub validation: ValidationConfig,
    pub remote: RemoteDefaults,
    pub observability: ObservabilityConfig,
}

/// Host persistent storage.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding the collector cookie jar. `None` keeps cookies in memory.
    pub cookie_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ValidationConfig {
    /// Run the strict pre-check before translation.
    pub strict: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            strict: defaults::DEFAULT_STRICT_VALIDATION,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RemoteDefaults {
    /// Remote configuration endpoint used when the host supplies none.
    pub default_endpoint: String,
}

impl Default for RemoteDefaults {
    fn default() -> Self {
        Self {
            default_endpoint: defaults::DEFAULT_REMOTE_ENDPOINT.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// `EnvFilter` directive used when `APPTRACK_LOG` is unset.
    pub log_filter: String,
    /// Emit logs as JSON lines.
    pub json: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_filter: defaults::DEFAULT_LOG_FILTER.to_string(),
            json: defaults::DEFAULT_JSON_LOGS,
        }
    }
}

/// One problem found by [`BridgeConfig::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    pub field: String,
    pub message: String,
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "config.{}: {}", self.field, self.message)
    }
}

impl BridgeConfig {
    /// Parse from a TOML string. Missing sections and keys take defaults.
    pub fn from_toml(toml_str: &str) -> BridgeResult<Self> {
        toml::from_str(toml_str).map_err(|e| BridgeError::Config(e.to_string()))
    }

    pub fn to_toml(&self) -> BridgeResult<String> {
        toml::to_string_pretty(self).map_err(|e| BridgeError::Config(e.to_string()))
    }

    /// Every issue found, empty when the config is usable.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if let Some(dir) = &self.storage.cookie_dir {
            if dir.as_os_str().is_empty() {
                issues.push(ConfigIssue {
                    field: "storage.cookie_dir".to_string(),
                    message: "must not be empty when set".to_string(),
                });
            }
        }

        if self.remote.default_endpoint.trim().is_empty() {
            issues.push(ConfigIssue {
                field: "remote.default_endpoint".to_string(),
                message: "must not be empty".to_string(),
            });
        }

        if self.observability.log_filter.trim().is_empty() {
            issues.push(ConfigIssue {
                field: "observability.log_filter".to_string(),
                message: "must not be empty".to_string(),
            });
        }

        issues
    }

    /// Like [`validate`](Self::validate) but collapses issues into one error.
    pub fn validate_or_error(&self) -> BridgeResult<()> {
        let issues = self.validate();
        if issues.is_empty() {
            return Ok(());
        }
        let joined = issues
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        Err(BridgeError::Config(joined))
    }
}
