//! Configuration translation and event encoding against the JSON fixtures.

use std::time::Duration;

use apptrack_bridge::conversions::config_types::{
    global_contexts_configuration, remote_configuration, session_configuration,
    subject_configuration, tracker_setup,
};
use apptrack_bridge::conversions::event_types::{custom_event, encode_event};
use apptrack_bridge::conversions::input::Input;
use apptrack_bridge::conversions::network_types::{network_configuration, request_headers};
use apptrack_core::config::*;
use apptrack_core::constants::TRACKER_VERSION_SUFFIX;
use apptrack_core::errors::{BridgeError, TranslationError};
use apptrack_core::event::{Event, EventKind};
use apptrack_transport::HttpTransportConfig;
use proptest::prelude::*;
use serde_json::{json, Map, Value};

// ============================================================================
// HELPERS
// ============================================================================

fn setup(args: &Value) -> Vec<Configuration> {
    let input = Input::from_value("createTracker", args).unwrap();
    tracker_setup(input, &BridgeConfig::default(), &HttpTransportConfig::default())
        .unwrap()
        .configurations
}

fn translation_error(err: BridgeError) -> TranslationError {
    match err {
        BridgeError::Translation(e) => e,
        other => panic!("expected a translation error, got {other:?}"),
    }
}

fn event_args(method: &str) -> Value {
    let events: Map<String, Value> = test_fixtures::load_fixture("bridge/events.json");
    events
        .get(method)
        .cloned()
        .unwrap_or_else(|| panic!("no fixture for {method}"))
}

// ============================================================================
// CONFIGURATION
// ============================================================================

#[test]
fn full_fixture_translates_every_domain_in_order() {
    let args = test_fixtures::load_fixture_value("bridge/create_tracker_full.json");
    let input = Input::from_value("createTracker", &args).unwrap();
    let setup = tracker_setup(input, &BridgeConfig::default(), &HttpTransportConfig::default()).unwrap();

    assert_eq!(setup.app_name, "shop-app");
    assert_eq!(setup.customer_key, "ck-live-42");
    let domains: Vec<&str> = setup.configurations.iter().map(Configuration::domain).collect();
    assert_eq!(
        domains,
        [
            "networkConfig",
            "trackerConfig",
            "sessionConfig",
            "emitterConfig",
            "subjectConfig",
            "gdprConfig",
            "gcConfig",
            "remoteConfig",
        ]
    );

    for config in &setup.configurations {
        match config {
            Configuration::Network(n) => {
                assert_eq!(n.endpoint, "https://collector.example.com");
                assert_eq!(n.method, HttpMethod::Get);
                assert_eq!(n.custom_post_path.as_deref(), Some("com.example/events"));
                assert!(n.transport.is_some(), "request headers build a dedicated transport");
            }
            Configuration::Tracker(t) => {
                assert_eq!(t.app_id, "shop-app");
                assert_eq!(t.device_platform, DevicePlatform::Web);
                assert_eq!(t.log_level, LogLevel::Debug);
                assert_eq!(t.base64_encoding, Some(false));
                assert_eq!(t.session_context, Some(true));
                assert_eq!(t.enable_periodic_heartbeat, Some(true));
                assert_eq!(t.application_context, None);
                assert_eq!(t.periodic_heartbeat_interval_secs, Some(45));
                assert_eq!(t.periodic_heartbeat_delay_secs, Some(5));
                assert_eq!(t.version_suffix(), TRACKER_VERSION_SUFFIX);
            }
            Configuration::Session(s) => {
                assert_eq!(s.foreground_timeout, Duration::from_secs(1800));
                assert_eq!(s.background_timeout, Duration::from_secs(900));
            }
            Configuration::Emitter(e) => {
                assert_eq!(e.buffer_option, Some(BufferOption::HeavyGroup));
                assert_eq!(e.emit_range, Some(150));
                assert_eq!(e.thread_pool_size, Some(4));
                assert_eq!(e.byte_limit_post, Some(40_000));
                assert_eq!(e.byte_limit_get, Some(20_000));
                assert_eq!(e.server_anonymisation, Some(true));
                assert_eq!(e.disable_event_caching, None);
            }
            Configuration::Subject(s) => {
                assert_eq!(s.user_id, FieldUpdate::Set("user-7".to_string()));
                assert_eq!(s.ip_address, FieldUpdate::Clear);
                assert_eq!(s.network_user_id, FieldUpdate::Unchanged);
                assert_eq!(s.screen_resolution, FieldUpdate::Set(ScreenSize::new(1920, 1080)));
                assert_eq!(s.color_depth, FieldUpdate::Set(24));
            }
            Configuration::Gdpr(g) => {
                assert_eq!(g.basis_for_processing, Basis::Consent);
                assert_eq!(g.document_id, "privacy-policy");
                assert_eq!(g.document_version, "3.1");
            }
            Configuration::GlobalContexts(gc) => {
                assert_eq!(gc.len(), 2);
                let app = gc.get("app").unwrap();
                assert_eq!(app.static_contexts.len(), 1);
                assert_eq!(app.static_contexts[0].schema, "iglu:com.example/app/jsonschema/1-0-0");
                assert_eq!(gc.get("user").unwrap().static_contexts.len(), 2);
            }
            Configuration::Remote(r) => {
                assert_eq!(r.endpoint, "https://config.example.com/remote.json");
                assert_eq!(r.method, HttpMethod::Post);
            }
        }
    }
}

#[test]
fn minimal_input_yields_only_the_tracker_domain() {
    let configs = setup(&json!({ "appName": "App", "customerKey": "k" }));
    assert_eq!(configs.len(), 1);
    let Configuration::Tracker(tracker) = &configs[0] else {
        panic!("expected tracker configuration");
    };
    assert_eq!(tracker.app_id, "App");
    assert_eq!(tracker.device_platform, DevicePlatform::Mobile);
    assert_eq!(tracker.log_level, LogLevel::Off);
    assert_eq!(tracker.version_suffix(), TRACKER_VERSION_SUFFIX);
}

#[test]
fn null_domains_are_treated_as_absent() {
    let configs = setup(&json!({
        "appName": "App",
        "customerKey": "k",
        "networkConfig": null,
        "sessionConfig": null,
        "gcConfig": null,
    }));
    assert_eq!(configs.len(), 1);
}

#[test]
fn unknown_tokens_fall_back_to_defaults() {
    let configs = setup(&json!({
        "appName": "App",
        "customerKey": "k",
        "trackerConfig": { "devicePlatform": "Web", "logLevel": "loud" },
        "emitterConfig": { "bufferOption": "huge" },
        "gdprConfig": {
            "basisForProcessing": "because",
            "documentId": "d",
            "documentVersion": "1",
            "documentDescription": "x"
        }
    }));
    for config in configs {
        match config {
            Configuration::Tracker(t) => {
                assert_eq!(t.device_platform, DevicePlatform::Mobile);
                assert_eq!(t.log_level, LogLevel::Off);
            }
            Configuration::Emitter(e) => assert_eq!(e.buffer_option, Some(BufferOption::Single)),
            Configuration::Gdpr(g) => assert_eq!(g.basis_for_processing, Basis::Consent),
            _ => {}
        }
    }
}

#[test]
fn app_name_and_customer_key_are_required_and_non_empty() {
    let input_missing = json!({ "customerKey": "k" });
    let err = tracker_setup(
        Input::from_value("createTracker", &input_missing).unwrap(),
        &BridgeConfig::default(),
        &HttpTransportConfig::default(),
    )
    .unwrap_err();
    assert_eq!(
        translation_error(err),
        TranslationError::missing("createTracker", "appName")
    );

    let input_empty = json!({ "appName": "App", "customerKey": "" });
    let err = tracker_setup(
        Input::from_value("createTracker", &input_empty).unwrap(),
        &BridgeConfig::default(),
        &HttpTransportConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(
        translation_error(err),
        TranslationError::InvalidValue { field, .. } if field == "customerKey"
    ));
}

#[test]
fn session_requires_both_timeouts() {
    let value = json!({ "foregroundTimeout": 30 });
    let err = session_configuration(Input::from_value("sessionConfig", &value).unwrap()).unwrap_err();
    assert_eq!(err, TranslationError::missing("sessionConfig", "backgroundTimeout"));
}

#[test]
fn session_numbers_are_truncated() {
    let value = json!({ "foregroundTimeout": 30.9, "backgroundTimeout": 60 });
    let session = session_configuration(Input::from_value("sessionConfig", &value).unwrap()).unwrap();
    assert_eq!(session, SessionConfiguration::from_secs(30, 60));
}

#[test]
fn network_without_method_defaults_to_post_and_no_transport() {
    let value = json!({ "endpoint": "https://c.example.com" });
    let network = network_configuration(
        Input::from_value("networkConfig", &value).unwrap(),
        &HttpTransportConfig::default(),
    )
    .unwrap();
    assert_eq!(network.method, HttpMethod::Post);
    assert!(network.custom_post_path.is_none());
    assert!(network.transport.is_none());
}

#[test]
fn network_method_is_case_insensitive() {
    let value = json!({ "endpoint": "https://c.example.com", "method": "GET" });
    let network = network_configuration(
        Input::from_value("networkConfig", &value).unwrap(),
        &HttpTransportConfig::default(),
    )
    .unwrap();
    assert_eq!(network.method, HttpMethod::Get);
}

#[test]
fn network_requires_endpoint() {
    let value = json!({ "method": "post" });
    let err = network_configuration(
        Input::from_value("networkConfig", &value).unwrap(),
        &HttpTransportConfig::default(),
    )
    .unwrap_err();
    assert_eq!(
        translation_error(err),
        TranslationError::missing("networkConfig", "endpoint")
    );
}

#[test]
fn request_headers_skip_nulls_and_reject_non_strings() {
    let value = json!({
        "endpoint": "https://c.example.com",
        "requestHeaders": { "X-Api-Key": "k", "X-Gone": null }
    });
    let headers = request_headers(Input::from_value("networkConfig", &value).unwrap())
        .unwrap()
        .unwrap();
    assert_eq!(headers.names().collect::<Vec<_>>(), ["x-api-key"]);

    let value = json!({ "endpoint": "e", "requestHeaders": { "X-Count": 3 } });
    let err = request_headers(Input::from_value("networkConfig", &value).unwrap()).unwrap_err();
    assert!(matches!(
        translation_error(err),
        TranslationError::InvalidType { field, .. } if field == "requestHeaders.X-Count"
    ));

    let value = json!({ "endpoint": "e" });
    assert!(request_headers(Input::from_value("networkConfig", &value).unwrap())
        .unwrap()
        .is_none());
}

#[test]
fn invalid_header_name_is_a_translation_error() {
    let value = json!({ "endpoint": "e", "requestHeaders": { "bad header": "v" } });
    let err = request_headers(Input::from_value("networkConfig", &value).unwrap()).unwrap_err();
    assert!(matches!(
        translation_error(err),
        TranslationError::InvalidValue { field, .. } if field == "requestHeaders"
    ));
}

#[test]
fn subject_keeps_absent_null_and_set_apart() {
    let value = json!({ "userId": "u", "language": null, "screenViewport": [320.7, 480] });
    let subject = subject_configuration(Input::from_value("subjectConfig", &value).unwrap()).unwrap();
    assert_eq!(subject.user_id, FieldUpdate::Set("u".to_string()));
    assert_eq!(subject.language, FieldUpdate::Clear);
    assert_eq!(subject.timezone, FieldUpdate::Unchanged);
    assert_eq!(subject.screen_viewport, FieldUpdate::Set(ScreenSize::new(320, 480)));
}

#[test]
fn subject_screen_size_must_be_a_pair() {
    let value = json!({ "screenResolution": "1920x1080" });
    let err = subject_configuration(Input::from_value("subjectConfig", &value).unwrap()).unwrap_err();
    assert!(matches!(err, TranslationError::InvalidType { field, .. } if field == "screenResolution"));
}

#[test]
fn global_context_entries_require_tag_and_contexts() {
    let entries = json!([{ "globalContexts": [] }]);
    let err = global_contexts_configuration(entries.as_array().unwrap()).unwrap_err();
    assert_eq!(err, TranslationError::missing("gcConfig[0]", "tag"));

    let entries = json!([{ "tag": "t", "globalContexts": [{ "schema": "s" }] }]);
    let err = global_contexts_configuration(entries.as_array().unwrap()).unwrap_err();
    assert_eq!(err, TranslationError::missing("gcConfig[0].globalContexts[0]", "data"));
}

#[test]
fn remote_endpoint_falls_back_to_the_configured_default() {
    let value = json!({});
    let remote = remote_configuration(
        Input::from_value("remoteConfig", &value).unwrap(),
        "https://fallback.example.com/config",
    )
    .unwrap();
    assert_eq!(remote.endpoint, "https://fallback.example.com/config");
    assert_eq!(remote.method, HttpMethod::Post);
}

#[test]
fn remote_configuration_key_is_accepted_as_an_alias() {
    let configs = setup(&json!({
        "appName": "App",
        "customerKey": "k",
        "remoteConfiguration": { "endpoint": "https://r.example.com", "method": "get" }
    }));
    let remote = configs
        .iter()
        .find_map(|c| match c {
            Configuration::Remote(r) => Some(r),
            _ => None,
        })
        .unwrap();
    assert_eq!(remote.endpoint, "https://r.example.com");
    assert_eq!(remote.method, HttpMethod::Get);
}

// ============================================================================
// EVENTS
// ============================================================================

#[test]
fn every_event_fixture_encodes_to_its_kind() {
    for kind in EventKind::ALL {
        let args = event_args(kind.method_name());
        let typed = if kind == EventKind::Custom {
            encode_event(kind, &args, None)
        } else {
            encode_event(kind, &args["eventData"], args.get("contexts"))
        }
        .unwrap_or_else(|e| panic!("{kind}: {e}"));
        assert_eq!(typed.kind(), kind);
    }
}

#[test]
fn structured_event_carries_optional_fields() {
    let args = event_args("trackStructuredEvent");
    let typed = encode_event(EventKind::Structured, &args["eventData"], None).unwrap();
    let Event::Structured(s) = typed.event else {
        panic!("expected structured");
    };
    assert_eq!(s.category, "shop");
    assert_eq!(s.action, "add-to-basket");
    assert_eq!(s.label.as_deref(), Some("sku-1"));
    assert_eq!(s.property.as_deref(), Some("red"));
    assert_eq!(s.value, Some(19.99));
}

#[test]
fn missing_required_event_field_names_kind_and_field() {
    let err = encode_event(EventKind::PageView, &json!({ "pageTitle": "t" }), None).unwrap_err();
    assert_eq!(err, TranslationError::missing("pageView", "pageUrl"));

    let err = encode_event(EventKind::Timing, &json!({ "category": "c", "variable": "v" }), None)
        .unwrap_err();
    assert_eq!(err, TranslationError::missing("timing", "timing"));
}

#[test]
fn contexts_attach_in_order() {
    let contexts = json!([
        { "schema": "iglu:a/1", "data": { "n": 1 } },
        { "schema": "iglu:b/1", "data": { "n": 2 } },
        { "schema": "iglu:c/1", "data": { "n": 3 } }
    ]);
    let typed = encode_event(
        EventKind::ScreenView,
        &json!({ "name": "Home" }),
        Some(&contexts),
    )
    .unwrap();
    let schemas: Vec<&str> = typed.contexts.iter().map(|c| c.schema.as_str()).collect();
    assert_eq!(schemas, ["iglu:a/1", "iglu:b/1", "iglu:c/1"]);
}

#[test]
fn malformed_context_fails_the_whole_event() {
    let contexts = json!([{ "schema": "iglu:a/1", "data": {} }, { "data": {} }]);
    let err = encode_event(EventKind::PageView, &json!({ "pageUrl": "u" }), Some(&contexts))
        .unwrap_err();
    assert_eq!(err, TranslationError::missing("pageView.contexts[1]", "schema"));
}

#[test]
fn click_event_ignores_contexts() {
    let contexts = json!([{ "schema": "iglu:a/1", "data": {} }]);
    let typed = encode_event(
        EventKind::ButtonClick,
        &json!({ "id": "buy" }),
        Some(&contexts),
    )
    .unwrap();
    assert!(typed.contexts.is_empty());
}

#[test]
fn click_event_requires_attributes() {
    let err = encode_event(EventKind::ButtonClick, &json!({}), None).unwrap_err();
    assert!(matches!(err, TranslationError::InvalidValue { .. }));
}

#[test]
fn message_trigger_is_strict() {
    let data = json!({ "title": "t", "body": "b", "trigger": "carrier-pigeon" });
    let err = encode_event(EventKind::MessageNotification, &data, None).unwrap_err();
    assert!(matches!(err, TranslationError::InvalidValue { field, .. } if field == "trigger"));
}

#[test]
fn message_notification_reads_attachments() {
    let args = event_args("trackMessageNotificationEvent");
    let typed = encode_event(EventKind::MessageNotification, &args["eventData"], None).unwrap();
    let Event::MessageNotification(m) = typed.event else {
        panic!("expected message notification");
    };
    assert_eq!(m.trigger, Trigger::Push);
    assert_eq!(m.attachments.len(), 1);
    assert_eq!(m.attachments[0].attachment_type, "image/png");
    assert_eq!(m.body_loc_args, ["20"]);
    assert_eq!(m.notification_count, Some(2));
}

#[test]
fn ecommerce_items_are_decoded_with_their_index_in_errors() {
    let data = json!({
        "orderId": "o",
        "totalValue": 1.0,
        "items": [{ "sku": "a", "price": 1.0, "quantity": 1 }, { "sku": "b", "quantity": 1 }]
    });
    let err = encode_event(EventKind::EcommerceTransaction, &data, None).unwrap_err();
    assert_eq!(err, TranslationError::missing("ecommerceTransaction.items[1]", "price"));
}

#[test]
fn custom_event_with_null_data_encodes_empty_object() {
    let event = custom_event("ping", &Value::Null).unwrap();
    assert_eq!(event.name, "ping");
    assert_eq!(event.payload_json, "{}");
}

#[test]
fn custom_event_rejects_non_object_data() {
    let err = custom_event("ping", &json!([1, 2])).unwrap_err();
    assert!(matches!(err, TranslationError::InvalidType { field, .. } if field == "eventData"));
    let err = custom_event("", &json!({})).unwrap_err();
    assert!(matches!(err, TranslationError::InvalidValue { field, .. } if field == "eventName"));
}

proptest! {
    #[test]
    fn custom_event_payload_round_trips_as_json(
        name in "[a-zA-Z][a-zA-Z0-9_]{0,15}",
        entries in proptest::collection::btree_map("[a-z]{1,8}", any::<i64>(), 0..8),
    ) {
        let data: Map<String, Value> = entries
            .into_iter()
            .map(|(k, v)| (k, Value::from(v)))
            .collect();
        let data = Value::Object(data);
        let event = custom_event(&name, &data).unwrap();
        let parsed: Value = serde_json::from_str(&event.payload_json).unwrap();
        prop_assert_eq!(event.name, name);
        prop_assert_eq!(parsed, data);
    }

    #[test]
    fn unknown_platform_tokens_never_fail_translation(token in "[A-Z][a-z]{2,10}") {
        let configs = setup(&json!({
            "appName": "App",
            "customerKey": "k",
            "trackerConfig": { "devicePlatform": token }
        }));
        let Configuration::Tracker(tracker) = &configs[0] else {
            panic!("expected tracker configuration");
        };
        prop_assert_eq!(tracker.device_platform, DevicePlatform::Mobile);
    }
}
