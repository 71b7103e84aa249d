use std::path::PathBuf;
use std::time::Duration;

use apptrack_core::constants::{HTTP_CONNECT_TIMEOUT_SECS, HTTP_READ_TIMEOUT_SECS};

/// Settings for [`HttpTransport`](crate::HttpTransport).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpTransportConfig {
    pub connect_timeout: Duration,
    /// Upper bound on the whole request once connected.
    pub read_timeout: Duration,
    /// Host storage directory for the cookie jar. `None` keeps cookies in memory.
    pub cookie_dir: Option<PathBuf>,
    pub gzip: bool,
}

impl Default for HttpTransportConfig {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(HTTP_CONNECT_TIMEOUT_SECS),
            read_timeout: Duration::from_secs(HTTP_READ_TIMEOUT_SECS),
            cookie_dir: None,
            gzip: true,
        }
    }
}

impl HttpTransportConfig {
    pub fn with_cookie_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cookie_dir = Some(dir.into());
        self
    }
}
