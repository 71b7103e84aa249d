use std::time::Duration;

use apptrack_core::traits::CollectorRequest;
use apptrack_transport::{HeaderInjector, HttpTransport, HttpTransportConfig};

#[test]
fn default_config_uses_fifteen_second_timeouts() {
    let config = HttpTransportConfig::default();
    assert_eq!(config.connect_timeout, Duration::from_secs(15));
    assert_eq!(config.read_timeout, Duration::from_secs(15));
    assert!(config.cookie_dir.is_none());
}

#[test]
fn prepared_request_carries_injected_and_engine_headers() {
    let transport = HttpTransport::builder(HttpTransportConfig::default())
        .interceptor(HeaderInjector::new([("X-Api-Key", Some("k-1"))]).unwrap())
        .build()
        .unwrap();

    let request = CollectorRequest::post("https://collector.example.com/com.acme/tp2", "{}")
        .header("X-Engine", "1");
    let prepared = transport.prepare(request).unwrap();

    assert_eq!(prepared.method(), reqwest::Method::POST);
    assert_eq!(prepared.headers()["x-api-key"], "k-1");
    assert_eq!(prepared.headers()["x-engine"], "1");
    assert!(prepared.headers().contains_key("content-type"));
}

#[test]
fn engine_content_type_is_not_duplicated() {
    let transport = HttpTransport::builder(HttpTransportConfig::default())
        .build()
        .unwrap();
    let request = CollectorRequest::post("https://collector.example.com/com.acme/tp2", "{}")
        .header("Content-Type", "application/vnd.acme+json");
    let prepared = transport.prepare(request).unwrap();

    let values: Vec<&str> = prepared
        .headers()
        .get_all("content-type")
        .iter()
        .map(|v| v.to_str().unwrap())
        .collect();
    assert_eq!(values, ["application/vnd.acme+json"]);
}

#[test]
fn interceptors_run_in_insertion_order() {
    let transport = HttpTransport::builder(HttpTransportConfig::default())
        .interceptor(HeaderInjector::new([("X-Order", Some("first"))]).unwrap())
        .interceptor(HeaderInjector::new([("X-Order", Some("second"))]).unwrap())
        .build()
        .unwrap();
    assert_eq!(transport.interceptors().len(), 2);

    let prepared = transport
        .prepare(CollectorRequest::get("https://collector.example.com/i"))
        .unwrap();
    assert_eq!(prepared.headers()["x-order"], "second");
    assert_eq!(prepared.method(), reqwest::Method::GET);
}

#[test]
fn invalid_url_is_a_transport_error() {
    let transport = HttpTransport::builder(HttpTransportConfig::default())
        .build()
        .unwrap();
    let err = transport
        .prepare(CollectorRequest::get("not a url"))
        .unwrap_err();
    assert!(err.to_string().starts_with("transport error"));
}

#[test]
fn cookie_dir_binds_a_persistent_jar() {
    let dir = tempfile::tempdir().unwrap();
    let transport =
        HttpTransport::builder(HttpTransportConfig::default().with_cookie_dir(dir.path()))
            .build()
            .unwrap();
    assert!(transport.cookie_jar().path().unwrap().starts_with(dir.path()));
}
