//! Name-based routing for host glue that forwards method names verbatim.

use apptrack_core::errors::TranslationError;
use apptrack_core::event::EventKind;
use serde_json::Value;

use crate::bridge::Bridge;
use crate::conversions::error_codes::BridgeOutcome;

/// Every method name [`Bridge::invoke`] understands.
pub const METHODS: &[&str] = &[
    "createTracker",
    "removeTracker",
    "removeAllTrackers",
    "setClientId",
    "getClientId",
    "trackSelfDescribingEvent",
    "trackStructuredEvent",
    "trackScreenViewEvent",
    "trackPageView",
    "trackTimingEvent",
    "trackConsentGrantedEvent",
    "trackConsentWithdrawnEvent",
    "trackEcommerceTransactionEvent",
    "trackDeepLinkReceivedEvent",
    "trackMessageNotificationEvent",
    "trackClickEvent",
    "trackCustomEvent",
    "setCustomTags",
    "setCustomTagsWithCategory",
    "clearCustomTags",
    "clearAllCustomTags",
    "setUserId",
    "setNetworkUserId",
    "setDomainUserId",
    "setIpAddress",
    "setUseragent",
    "setTimezone",
    "setLanguage",
    "setScreenResolution",
    "setScreenViewport",
    "setColorDepth",
    "setSubjectData",
];

impl Bridge {
    /// Route a host method name to its entry point.
    pub fn invoke(&self, method: &str, args: &Value) -> BridgeOutcome {
        if let Some(kind) = EventKind::from_method_name(method) {
            return self.track(kind, args);
        }
        match method {
            "createTracker" => self.create_tracker(args),
            "removeTracker" => self.remove_tracker(args),
            "removeAllTrackers" => self.remove_all_trackers(),
            "setClientId" => self.set_client_id(args),
            "getClientId" => self.get_client_id(),
            "setCustomTags" => self.set_custom_tags(args),
            "setCustomTagsWithCategory" => self.set_custom_tags_with_category(args),
            "clearCustomTags" => self.clear_custom_tags(args),
            "clearAllCustomTags" => self.clear_all_custom_tags(args),
            "setUserId" => self.set_user_id(args),
            "setNetworkUserId" => self.set_network_user_id(args),
            "setDomainUserId" => self.set_domain_user_id(args),
            "setIpAddress" => self.set_ip_address(args),
            "setUseragent" => self.set_useragent(args),
            "setTimezone" => self.set_timezone(args),
            "setLanguage" => self.set_language(args),
            "setScreenResolution" => self.set_screen_resolution(args),
            "setScreenViewport" => self.set_screen_viewport(args),
            "setColorDepth" => self.set_color_depth(args),
            "setSubjectData" => self.set_subject_data(args),
            unknown => self.call(unknown, || {
                Err(TranslationError::UnknownMethod {
                    method: unknown.to_string(),
                }
                .into())
            }),
        }
    }
}
