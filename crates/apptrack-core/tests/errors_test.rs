use apptrack_core::errors::error_code::*;
use apptrack_core::errors::*;

#[test]
fn lookup_error_names_namespace() {
    let err = LookupError::for_namespace(Some("checkout"));
    assert!(err.to_string().contains("checkout"));
    assert_eq!(LookupError::for_namespace(None), LookupError::NoDefaultTracker);
}

#[test]
fn translation_error_names_domain_and_field() {
    let err = TranslationError::missing("sessionConfig", "foregroundTimeout");
    let msg = err.to_string();
    assert!(msg.contains("sessionConfig"));
    assert!(msg.contains("foregroundTimeout"));

    let err = TranslationError::invalid_type("structured", "value", "a number");
    assert!(err.to_string().contains("must be a number"));
}

#[test]
fn validation_error_joins_issues() {
    let err = TranslationError::Validation {
        issues: vec!["a is bad".into(), "b is bad".into()],
    };
    assert_eq!(err.to_string(), "validation failed: a is bad; b is bad");
}

#[test]
fn bridge_error_codes_follow_taxonomy() {
    let lookup: BridgeError = LookupError::NoDefaultTracker.into();
    let translation: BridgeError = TranslationError::missing("x", "y").into();
    let engine: BridgeError = EngineError::transport("connection refused").into();
    let config = BridgeError::Config("bad".into());

    assert_eq!(lookup.error_code(), LOOKUP_FAILURE);
    assert_eq!(translation.error_code(), TRANSLATION_FAILURE);
    assert_eq!(engine.error_code(), ENGINE_FAILURE);
    assert_eq!(config.error_code(), CONFIG_ERROR);
}

#[test]
fn bridge_error_is_transparent_over_inner_message() {
    let inner = EngineError::operation("app", "track", "queue full");
    let outer: BridgeError = inner.clone().into();
    assert_eq!(outer.to_string(), inner.to_string());
    assert!(outer.to_string().contains("queue full"));
}
