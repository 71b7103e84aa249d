use std::fmt;

use crate::config::HttpMethod;
use crate::errors::EngineResult;

/// One submission to the collector, as built by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectorRequest {
    pub method: HttpMethod,
    pub url: String,
    /// Headers the engine set itself, in order.
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl CollectorRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn post(url: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Post,
            url: url.into(),
            headers: Vec::new(),
            body: Some(body.into()),
        }
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectorResponse {
    pub status: u16,
}

impl CollectorResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Replacement for the engine's default HTTP transport.
pub trait NetworkTransport: Send + Sync + fmt::Debug {
    fn send(&self, request: CollectorRequest) -> EngineResult<CollectorResponse>;
}
