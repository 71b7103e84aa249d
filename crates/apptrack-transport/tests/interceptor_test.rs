use apptrack_core::errors::TranslationError;
use apptrack_transport::{HeaderInjector, RequestInterceptor};
use reqwest::blocking::Request;
use reqwest::header::HeaderValue;
use reqwest::{Method, Url};

fn request_with(headers: &[(&'static str, &'static str)]) -> Request {
    let mut req = Request::new(
        Method::POST,
        Url::parse("https://collector.example.com/com.acme/tp2").unwrap(),
    );
    for &(name, value) in headers {
        req.headers_mut()
            .append(name, HeaderValue::from_static(value));
    }
    req
}

#[test]
fn injects_every_supplied_header() {
    let injector = HeaderInjector::new([
        ("X-Api-Key", Some("k-123")),
        ("X-Tenant", Some("acme")),
    ])
    .unwrap();
    let mut req = request_with(&[]);
    injector.intercept(&mut req).unwrap();

    assert_eq!(req.headers()["x-api-key"], "k-123");
    assert_eq!(req.headers()["x-tenant"], "acme");
}

#[test]
fn null_header_values_are_skipped() {
    let injector = HeaderInjector::new([("X-Present", Some("yes")), ("X-Absent", None)]).unwrap();
    assert_eq!(injector.len(), 1);

    let mut req = request_with(&[]);
    injector.intercept(&mut req).unwrap();
    assert!(req.headers().contains_key("x-present"));
    assert!(!req.headers().contains_key("x-absent"));
}

#[test]
fn existing_headers_are_kept_in_order() {
    let injector = HeaderInjector::new([("X-Api-Key", Some("new"))]).unwrap();
    let mut req = request_with(&[
        ("accept", "application/json"),
        ("x-api-key", "old"),
        ("user-agent", "engine/1.0"),
    ]);
    injector.intercept(&mut req).unwrap();

    let names: Vec<&str> = req.headers().keys().map(|k| k.as_str()).collect();
    assert_eq!(names, vec!["accept", "x-api-key", "user-agent"]);
    assert_eq!(req.headers()["x-api-key"], "new");
    assert_eq!(req.headers()["accept"], "application/json");
}

#[test]
fn invalid_header_name_is_a_translation_error() {
    let err = HeaderInjector::new([("bad header", Some("v"))]).unwrap_err();
    assert!(matches!(err, TranslationError::InvalidValue { .. }));
    assert!(err.to_string().contains("requestHeaders"));
}

#[test]
fn debug_output_hides_header_values() {
    let injector = HeaderInjector::new([("Authorization", Some("Bearer secret"))]).unwrap();
    let printed = format!("{injector:?}");
    assert!(printed.contains("authorization"));
    assert!(!printed.contains("secret"));
}
