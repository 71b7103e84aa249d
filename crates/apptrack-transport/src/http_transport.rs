//! Blocking reqwest transport with an interceptor chain.

use std::fmt;
use std::sync::Arc;

use apptrack_core::config::HttpMethod;
use apptrack_core::errors::{EngineError, EngineResult};
use apptrack_core::traits::{CollectorRequest, CollectorResponse, NetworkTransport};
use reqwest::blocking::{Client, Request};

use crate::config::HttpTransportConfig;
use crate::cookie_jar::PersistentCookieJar;
use crate::interceptor::RequestInterceptor;

/// Collector transport owned by a single tracker.
pub struct HttpTransport {
    client: Client,
    cookie_jar: Arc<PersistentCookieJar>,
    interceptors: Vec<Arc<dyn RequestInterceptor>>,
    config: HttpTransportConfig,
}

impl HttpTransport {
    pub fn builder(config: HttpTransportConfig) -> HttpTransportBuilder {
        HttpTransportBuilder {
            config,
            interceptors: Vec::new(),
        }
    }

    pub fn config(&self) -> &HttpTransportConfig {
        &self.config
    }

    pub fn cookie_jar(&self) -> &Arc<PersistentCookieJar> {
        &self.cookie_jar
    }

    pub fn interceptors(&self) -> &[Arc<dyn RequestInterceptor>] {
        &self.interceptors
    }

    /// Build the outgoing request and run every interceptor over it, in order.
    pub fn prepare(&self, request: CollectorRequest) -> EngineResult<Request> {
        let method = match request.method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
        };
        let mut builder = self.client.request(method, &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            let has_content_type = request
                .headers
                .iter()
                .any(|(name, _)| name.eq_ignore_ascii_case("content-type"));
            if !has_content_type {
                builder = builder.header(reqwest::header::CONTENT_TYPE, "application/json; charset=utf-8");
            }
            builder = builder.body(body);
        }
        let mut prepared = builder.build().map_err(EngineError::transport)?;

        for interceptor in &self.interceptors {
            interceptor.intercept(&mut prepared)?;
        }
        Ok(prepared)
    }
}

impl NetworkTransport for HttpTransport {
    fn send(&self, request: CollectorRequest) -> EngineResult<CollectorResponse> {
        let prepared = self.prepare(request)?;
        let url = prepared.url().clone();
        tracing::debug!(method = %prepared.method(), url = %url, "sending collector request");

        let response = self.client.execute(prepared).map_err(|e| {
            tracing::warn!(url = %url, error = %e, "collector request failed");
            EngineError::transport(e)
        })?;

        let status = response.status().as_u16();
        if !response.status().is_success() {
            tracing::warn!(url = %url, status, "collector returned non-success status");
        }
        Ok(CollectorResponse { status })
    }
}

impl fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpTransport")
            .field("config", &self.config)
            .field("interceptors", &self.interceptors)
            .finish_non_exhaustive()
    }
}

pub struct HttpTransportBuilder {
    config: HttpTransportConfig,
    interceptors: Vec<Arc<dyn RequestInterceptor>>,
}

impl HttpTransportBuilder {
    /// Append an interceptor. Interceptors run in the order they were added.
    pub fn interceptor(mut self, interceptor: impl RequestInterceptor + 'static) -> Self {
        self.interceptors.push(Arc::new(interceptor));
        self
    }

    pub fn build(self) -> EngineResult<HttpTransport> {
        let cookie_jar = match &self.config.cookie_dir {
            Some(dir) => Arc::new(PersistentCookieJar::open(dir)?),
            None => Arc::new(PersistentCookieJar::in_memory()),
        };

        let client = Client::builder()
            .connect_timeout(self.config.connect_timeout)
            .timeout(self.config.read_timeout)
            .gzip(self.config.gzip)
            .cookie_provider(Arc::clone(&cookie_jar))
            .build()
            .map_err(EngineError::transport)?;

        Ok(HttpTransport {
            client,
            cookie_jar,
            interceptors: self.interceptors,
            config: self.config,
        })
    }
}
