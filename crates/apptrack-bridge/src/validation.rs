//! Strict pre-check of `createTracker` and subject input.
//!
//! Runs only when `[validation] strict = true`. Where the translator falls
//! back silently on an unknown enum token or ignores an unknown key, this
//! reports it. Every issue is collected before failing.

use apptrack_core::config::{
    Basis, BufferOption, DevicePlatform, HttpMethod, LogLevel, TrackerConfiguration,
};
use apptrack_core::errors::TranslationError;
use serde_json::{Map, Value};

const CREATE_KEYS: &[&str] = &[
    "appName",
    "customerKey",
    "networkConfig",
    "trackerConfig",
    "sessionConfig",
    "emitterConfig",
    "subjectConfig",
    "gdprConfig",
    "gcConfig",
    "remoteConfig",
    "remoteConfiguration",
];
const NETWORK_KEYS: &[&str] = &["endpoint", "method", "customPostPath", "requestHeaders"];
const TRACKER_KEYS: &[&str] = &[
    "devicePlatform",
    "logLevel",
    "periodicHeartbeatIntervalInSec",
    "periodicHeartbeatDelayInSec",
];
const SESSION_KEYS: &[&str] = &["foregroundTimeout", "backgroundTimeout"];
const EMITTER_KEYS: &[&str] = &[
    "bufferOption",
    "emitRange",
    "threadPoolSize",
    "byteLimitPost",
    "byteLimitGet",
    "serverAnonymisation",
    "disableEventCaching",
];
pub const SUBJECT_KEYS: &[&str] = &[
    "userId",
    "networkUserId",
    "domainUserId",
    "useragent",
    "ipAddress",
    "timezone",
    "language",
    "screenResolution",
    "screenViewport",
    "colorDepth",
];
const GDPR_KEYS: &[&str] = &[
    "basisForProcessing",
    "documentId",
    "documentVersion",
    "documentDescription",
];
const GC_KEYS: &[&str] = &["tag", "globalContexts"];
const REMOTE_KEYS: &[&str] = &["endpoint", "method"];

/// Issues found in `createTracker` arguments, empty when valid.
pub fn validate_create_args(args: &Map<String, Value>) -> Vec<String> {
    let mut issues = Vec::new();
    unknown_keys("createTracker", args, CREATE_KEYS, &mut issues);

    for key in ["appName", "customerKey"] {
        match args.get(key) {
            Some(Value::String(s)) if !s.is_empty() => {}
            Some(Value::String(_)) => issues.push(format!("{key} must not be empty")),
            Some(_) => issues.push(format!("{key} must be a string")),
            None => issues.push(format!("{key} is required")),
        }
    }

    if let Some(network) = domain(args, "networkConfig", &mut issues) {
        unknown_keys("networkConfig", network, NETWORK_KEYS, &mut issues);
        required("networkConfig", network, &["endpoint"], &mut issues);
        token(
            "networkConfig",
            network,
            "method",
            HttpMethod::TOKENS,
            true,
            &mut issues,
        );
        if let Some(headers) = network.get("requestHeaders") {
            match headers {
                Value::Object(map) => {
                    for (name, value) in map {
                        if !(value.is_string() || value.is_null()) {
                            issues.push(format!(
                                "networkConfig.requestHeaders.{name} must be a string or null"
                            ));
                        }
                    }
                }
                Value::Null => {}
                _ => issues.push("networkConfig.requestHeaders must be an object".to_string()),
            }
        }
    }

    if let Some(tracker) = domain(args, "trackerConfig", &mut issues) {
        let allowed: Vec<&str> = TRACKER_KEYS
            .iter()
            .chain(TrackerConfiguration::TOGGLE_KEYS)
            .copied()
            .collect();
        unknown_keys("trackerConfig", tracker, &allowed, &mut issues);
        token(
            "trackerConfig",
            tracker,
            "devicePlatform",
            DevicePlatform::TOKENS,
            false,
            &mut issues,
        );
        token(
            "trackerConfig",
            tracker,
            "logLevel",
            LogLevel::TOKENS,
            false,
            &mut issues,
        );
    }

    if let Some(session) = domain(args, "sessionConfig", &mut issues) {
        unknown_keys("sessionConfig", session, SESSION_KEYS, &mut issues);
        required("sessionConfig", session, SESSION_KEYS, &mut issues);
    }

    if let Some(emitter) = domain(args, "emitterConfig", &mut issues) {
        unknown_keys("emitterConfig", emitter, EMITTER_KEYS, &mut issues);
        token(
            "emitterConfig",
            emitter,
            "bufferOption",
            BufferOption::TOKENS,
            false,
            &mut issues,
        );
    }

    if let Some(subject) = domain(args, "subjectConfig", &mut issues) {
        issues.extend(validate_subject("subjectConfig", subject));
    }

    if let Some(gdpr) = domain(args, "gdprConfig", &mut issues) {
        unknown_keys("gdprConfig", gdpr, GDPR_KEYS, &mut issues);
        required("gdprConfig", gdpr, GDPR_KEYS, &mut issues);
        token(
            "gdprConfig",
            gdpr,
            "basisForProcessing",
            Basis::TOKENS,
            false,
            &mut issues,
        );
    }

    match args.get("gcConfig") {
        None | Some(Value::Null) => {}
        Some(Value::Array(entries)) => {
            for (i, entry) in entries.iter().enumerate() {
                let name = format!("gcConfig[{i}]");
                match entry {
                    Value::Object(map) => {
                        unknown_keys(&name, map, GC_KEYS, &mut issues);
                        required(&name, map, GC_KEYS, &mut issues);
                    }
                    _ => issues.push(format!("{name} must be an object")),
                }
            }
        }
        Some(_) => issues.push("gcConfig must be an array".to_string()),
    }

    for key in ["remoteConfig", "remoteConfiguration"] {
        if let Some(remote) = domain(args, key, &mut issues) {
            unknown_keys(key, remote, REMOTE_KEYS, &mut issues);
            token(key, remote, "method", HttpMethod::TOKENS, true, &mut issues);
        }
    }

    issues
}

/// Issues in a subject record: unknown keys and malformed screen sizes.
pub fn validate_subject(name: &str, subject: &Map<String, Value>) -> Vec<String> {
    let mut issues = Vec::new();
    unknown_keys(name, subject, SUBJECT_KEYS, &mut issues);
    for key in ["screenResolution", "screenViewport"] {
        match subject.get(key) {
            None | Some(Value::Null) => {}
            Some(Value::Array(items))
                if items.len() == 2 && items.iter().all(|n| n.as_f64().is_some_and(|n| n >= 0.0)) => {}
            Some(_) => issues.push(format!(
                "{name}.{key} must be [width, height] with non-negative numbers"
            )),
        }
    }
    issues
}

/// Collapse issues into one translation error.
pub fn into_result(issues: Vec<String>) -> Result<(), TranslationError> {
    if issues.is_empty() {
        Ok(())
    } else {
        Err(TranslationError::Validation { issues })
    }
}

fn domain<'a>(
    args: &'a Map<String, Value>,
    key: &str,
    issues: &mut Vec<String>,
) -> Option<&'a Map<String, Value>> {
    match args.get(key)? {
        Value::Object(map) => Some(map),
        Value::Null => None,
        _ => {
            issues.push(format!("{key} must be an object"));
            None
        }
    }
}

fn unknown_keys(name: &str, map: &Map<String, Value>, allowed: &[&str], issues: &mut Vec<String>) {
    for key in map.keys() {
        if !allowed.contains(&key.as_str()) {
            issues.push(format!("{name}: unknown key '{key}'"));
        }
    }
}

fn required(name: &str, map: &Map<String, Value>, keys: &[&str], issues: &mut Vec<String>) {
    for key in keys {
        if map.get(*key).map_or(true, Value::is_null) {
            issues.push(format!("{name}.{key} is required"));
        }
    }
}

fn token(
    name: &str,
    map: &Map<String, Value>,
    key: &str,
    tokens: &[&str],
    ignore_case: bool,
    issues: &mut Vec<String>,
) {
    let Some(value) = map.get(key).filter(|v| !v.is_null()) else {
        return;
    };
    let Some(s) = value.as_str() else {
        issues.push(format!("{name}.{key} must be a string"));
        return;
    };
    let known = tokens
        .iter()
        .any(|t| if ignore_case { t.eq_ignore_ascii_case(s) } else { *t == s });
    if !known {
        issues.push(format!(
            "{name}.{key}: unknown value '{s}', expected one of {}",
            tokens.join(", ")
        ));
    }
}
