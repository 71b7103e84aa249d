// Single source of truth for bridge runtime defaults.

// --- Validation ---
pub const DEFAULT_STRICT_VALIDATION: bool = false;

// --- Remote ---
pub const DEFAULT_REMOTE_ENDPOINT: &str = crate::constants::DEFAULT_REMOTE_CONFIG_ENDPOINT;

// --- Observability ---
pub const DEFAULT_LOG_FILTER: &str = "apptrack=info";
pub const DEFAULT_JSON_LOGS: bool = false;
