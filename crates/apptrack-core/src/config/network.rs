use std::sync::Arc;

use super::enums::HttpMethod;
use crate::traits::NetworkTransport;

/// Collector endpoint and how events are submitted to it.
#[derive(Debug, Clone)]
pub struct NetworkConfiguration {
    pub endpoint: String,
    pub method: HttpMethod,
    /// Replaces the engine's default collection path, POST submissions only.
    pub custom_post_path: Option<String>,
    /// Replaces the engine's default transport when set.
    pub transport: Option<Arc<dyn NetworkTransport>>,
}

impl NetworkConfiguration {
    /// Endpoint-only construction; the method is POST.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_method(endpoint, HttpMethod::Post)
    }

    pub fn with_method(endpoint: impl Into<String>, method: HttpMethod) -> Self {
        Self {
            endpoint: endpoint.into(),
            method,
            custom_post_path: None,
            transport: None,
        }
    }

    pub fn custom_post_path(mut self, path: impl Into<String>) -> Self {
        self.custom_post_path = Some(path.into());
        self
    }

    pub fn transport(mut self, transport: Arc<dyn NetworkTransport>) -> Self {
        self.transport = Some(transport);
        self
    }
}
