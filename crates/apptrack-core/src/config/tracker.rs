use super::enums::{DevicePlatform, LogLevel};
use crate::constants::TRACKER_VERSION_SUFFIX;

/// Tracker identity and behaviour toggles.
///
/// Every `Option` left as `None` keeps the engine's own default. The version
/// suffix is always the bridge's own and cannot be overridden from input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerConfiguration {
    pub app_id: String,
    pub device_platform: DevicePlatform,
    pub log_level: LogLevel,
    version_suffix: &'static str,

    pub base64_encoding: Option<bool>,
    pub application_context: Option<bool>,
    pub platform_context: Option<bool>,
    pub geo_location_context: Option<bool>,
    pub session_context: Option<bool>,
    pub deep_link_context: Option<bool>,
    pub screen_context: Option<bool>,
    pub screen_view_autotracking: Option<bool>,
    pub lifecycle_autotracking: Option<bool>,
    pub install_autotracking: Option<bool>,
    pub exception_autotracking: Option<bool>,
    pub diagnostic_autotracking: Option<bool>,
    pub user_anonymisation: Option<bool>,
    pub bundle_info_autotracking: Option<bool>,
    pub user_click_autotracking: Option<bool>,
    pub deep_link_autotracking: Option<bool>,
    pub enable_periodic_heartbeat: Option<bool>,

    pub periodic_heartbeat_interval_secs: Option<u32>,
    pub periodic_heartbeat_delay_secs: Option<u32>,
}

impl TrackerConfiguration {
    pub fn new(app_id: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            device_platform: DevicePlatform::default(),
            log_level: LogLevel::default(),
            version_suffix: TRACKER_VERSION_SUFFIX,
            base64_encoding: None,
            application_context: None,
            platform_context: None,
            geo_location_context: None,
            session_context: None,
            deep_link_context: None,
            screen_context: None,
            screen_view_autotracking: None,
            lifecycle_autotracking: None,
            install_autotracking: None,
            exception_autotracking: None,
            diagnostic_autotracking: None,
            user_anonymisation: None,
            bundle_info_autotracking: None,
            user_click_autotracking: None,
            deep_link_autotracking: None,
            enable_periodic_heartbeat: None,
            periodic_heartbeat_interval_secs: None,
            periodic_heartbeat_delay_secs: None,
        }
    }

    pub fn version_suffix(&self) -> &'static str {
        self.version_suffix
    }

    /// Mutable handle to the boolean toggle stored under a host key.
    pub fn toggle_mut(&mut self, key: &str) -> Option<&mut Option<bool>> {
        let slot = match key {
            "base64Encoding" => &mut self.base64_encoding,
            "applicationContext" => &mut self.application_context,
            "platformContext" => &mut self.platform_context,
            "geoLocationContext" => &mut self.geo_location_context,
            "sessionContext" => &mut self.session_context,
            "deepLinkContext" => &mut self.deep_link_context,
            "screenContext" => &mut self.screen_context,
            "screenViewAutotracking" => &mut self.screen_view_autotracking,
            "lifecycleAutotracking" => &mut self.lifecycle_autotracking,
            "installAutotracking" => &mut self.install_autotracking,
            "exceptionAutotracking" => &mut self.exception_autotracking,
            "diagnosticAutotracking" => &mut self.diagnostic_autotracking,
            "userAnonymisation" => &mut self.user_anonymisation,
            "bundleInfoAutotracking" => &mut self.bundle_info_autotracking,
            "userClickAutotracking" => &mut self.user_click_autotracking,
            "deepLinkAutotracking" => &mut self.deep_link_autotracking,
            "enablePeriodicHeartbeat" => &mut self.enable_periodic_heartbeat,
            _ => return None,
        };
        Some(slot)
    }

    /// Host keys of every boolean toggle, in declaration order.
    pub const TOGGLE_KEYS: &'static [&'static str] = &[
        "base64Encoding",
        "applicationContext",
        "platformContext",
        "geoLocationContext",
        "sessionContext",
        "deepLinkContext",
        "screenContext",
        "screenViewAutotracking",
        "lifecycleAutotracking",
        "installAutotracking",
        "exceptionAutotracking",
        "diagnosticAutotracking",
        "userAnonymisation",
        "bundleInfoAutotracking",
        "userClickAutotracking",
        "deepLinkAutotracking",
        "enablePeriodicHeartbeat",
    ];
}
