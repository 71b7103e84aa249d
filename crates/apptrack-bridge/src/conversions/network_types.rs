//! Network Transport Builder.

use std::sync::Arc;

use apptrack_core::config::{HttpMethod, NetworkConfiguration};
use apptrack_core::errors::{BridgeResult, TranslationError};
use apptrack_transport::{HeaderInjector, HttpTransport, HttpTransportConfig};
use serde_json::Value;

use super::input::Input;

/// Translate `networkConfig`. The endpoint is required.
///
/// A `requestHeaders` object builds a dedicated [`HttpTransport`] that injects
/// those headers into every request; it replaces the engine's default
/// transport and belongs to this tracker alone.
pub fn network_configuration(
    input: Input<'_>,
    transport: &HttpTransportConfig,
) -> BridgeResult<NetworkConfiguration> {
    network_setup(input)?.build(transport)
}

/// A translated `networkConfig` whose transport has not been built yet.
///
/// Building may create the cookie jar on disk, so callers translate every
/// other domain before calling [`NetworkSetup::build`].
#[derive(Debug)]
pub struct NetworkSetup {
    config: NetworkConfiguration,
    headers: Option<HeaderInjector>,
}

pub fn network_setup(input: Input<'_>) -> BridgeResult<NetworkSetup> {
    let endpoint = input.required_str("endpoint")?;

    let mut config = match input.str("method")? {
        Some(token) => NetworkConfiguration::with_method(endpoint, HttpMethod::from_token(token)),
        None => NetworkConfiguration::new(endpoint),
    };

    if let Some(path) = input.string("customPostPath")? {
        config = config.custom_post_path(path);
    }

    Ok(NetworkSetup {
        config,
        headers: request_headers(input)?,
    })
}

impl NetworkSetup {
    pub fn build(self, transport: &HttpTransportConfig) -> BridgeResult<NetworkConfiguration> {
        let Some(headers) = self.headers else {
            return Ok(self.config);
        };
        let transport = HttpTransport::builder(transport.clone())
            .interceptor(headers)
            .build()?;
        tracing::debug!(endpoint = %self.config.endpoint, transport = ?transport, "custom collector transport built");
        Ok(self.config.transport(Arc::new(transport)))
    }
}

/// `None` when no headers were requested. Null values are skipped.
pub fn request_headers(input: Input<'_>) -> BridgeResult<Option<HeaderInjector>> {
    let Some(headers) = input.owned_map("requestHeaders")? else {
        return Ok(None);
    };
    let mut pairs = Vec::with_capacity(headers.len());
    for (name, value) in headers {
        let value = match value {
            Value::Null => None,
            Value::String(s) => Some(s),
            _ => {
                return Err(TranslationError::invalid_type(
                    input.domain(),
                    format!("requestHeaders.{name}"),
                    "a string",
                )
                .into())
            }
        };
        pairs.push((name, value));
    }
    Ok(Some(HeaderInjector::new(pairs)?))
}
