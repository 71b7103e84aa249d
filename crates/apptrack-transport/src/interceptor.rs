//! Request-mutation steps applied before every send.

use std::fmt;

use apptrack_core::errors::{EngineResult, TranslationError};
use reqwest::blocking::Request;
use reqwest::header::{HeaderName, HeaderValue};

/// One step in the transport's interceptor chain.
pub trait RequestInterceptor: Send + Sync + fmt::Debug {
    fn intercept(&self, request: &mut Request) -> EngineResult<()>;
}

/// Adds a fixed set of headers to every outgoing request.
///
/// Named headers are inserted or overwritten; every other header already on
/// the request is left where it is.
#[derive(Clone, PartialEq, Eq)]
pub struct HeaderInjector {
    headers: Vec<(HeaderName, HeaderValue)>,
}

impl HeaderInjector {
    /// Build from host-supplied pairs. Pairs with a `None` value are skipped.
    pub fn new<I, K, V>(headers: I) -> Result<Self, TranslationError>
    where
        I: IntoIterator<Item = (K, Option<V>)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut parsed = Vec::new();
        for (name, value) in headers {
            let name = name.as_ref();
            let Some(value) = value else {
                tracing::debug!(header = name, "skipping header with null value");
                continue;
            };
            let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
                TranslationError::invalid_value("networkConfig", "requestHeaders", format!("{name}: {e}"))
            })?;
            let header_value = HeaderValue::from_str(value.as_ref()).map_err(|e| {
                TranslationError::invalid_value("networkConfig", "requestHeaders", format!("{name}: {e}"))
            })?;
            parsed.push((header_name, header_value));
        }
        Ok(Self { headers: parsed })
    }

    pub fn len(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.headers.iter().map(|(n, _)| n.as_str())
    }
}

impl RequestInterceptor for HeaderInjector {
    fn intercept(&self, request: &mut Request) -> EngineResult<()> {
        let target = request.headers_mut();
        for (name, value) in &self.headers {
            target.insert(name.clone(), value.clone());
        }
        Ok(())
    }
}

// Header values can carry credentials; only names are printed.
impl fmt::Debug for HeaderInjector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeaderInjector")
            .field("headers", &self.names().collect::<Vec<_>>())
            .finish()
    }
}
