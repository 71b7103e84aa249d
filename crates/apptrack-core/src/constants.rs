//! Fixed values shared across the bridge.

/// Stamped onto every tracker configuration so the collector can tell
/// bridge emissions apart from other client integrations.
pub const TRACKER_VERSION_SUFFIX: &str = concat!("apptrack-bridge-", env!("CARGO_PKG_VERSION"));

/// Connect timeout of the HTTP client built for custom request headers.
pub const HTTP_CONNECT_TIMEOUT_SECS: u64 = 15;

/// Read timeout of the HTTP client built for custom request headers.
pub const HTTP_READ_TIMEOUT_SECS: u64 = 15;

/// Default remote-configuration endpoint used when the caller supplies none.
pub const DEFAULT_REMOTE_CONFIG_ENDPOINT: &str = "https://config.apptrack.dev/v1/remote";

/// File name of the persisted collector cookie jar inside the host storage directory.
pub const COOKIE_JAR_FILENAME: &str = "collector_cookies.json";

/// Key under which entry points receive the target tracker namespace.
pub const TRACKER_NAMESPACE_KEY: &str = "tracker";
