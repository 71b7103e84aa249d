//! Configuration Translator: untyped domain maps → typed configuration records.
//!
//! A key is read only when present. Enum tokens decode permissively; a
//! missing required field is a `TranslationError` naming domain and field.

use apptrack_core::config::*;
use apptrack_core::errors::{BridgeResult, TranslationError};
use apptrack_transport::HttpTransportConfig;
use serde_json::Value;

use super::event_types::self_describing;
use super::input::Input;
use super::network_types::network_setup;

type Result<T> = std::result::Result<T, TranslationError>;

/// Everything `createTracker` hands to the engine.
#[derive(Debug, Clone)]
pub struct TrackerSetup {
    pub app_name: String,
    pub customer_key: String,
    pub configurations: Vec<Configuration>,
}

/// Translate `createTracker` arguments into the engine's configuration set.
///
/// Domains are emitted in a fixed order: network, tracker, session, emitter,
/// subject, gdpr, global contexts, remote. The tracker domain is always
/// present so the bridge version suffix is stamped.
pub fn tracker_setup(
    args: Input<'_>,
    config: &BridgeConfig,
    transport: &HttpTransportConfig,
) -> BridgeResult<TrackerSetup> {
    let app_name = non_empty(args, "appName")?;
    let customer_key = non_empty(args, "customerKey")?;

    let mut configurations = Vec::new();

    let network = match args.object("networkConfig")? {
        Some(network) => Some(network_setup(network)?),
        None => None,
    };

    let tracker = tracker_configuration(&app_name, args.object("trackerConfig")?)?;
    configurations.push(Configuration::Tracker(tracker));

    if let Some(session) = args.object("sessionConfig")? {
        configurations.push(Configuration::Session(session_configuration(session)?));
    }
    if let Some(emitter) = args.object("emitterConfig")? {
        configurations.push(Configuration::Emitter(emitter_configuration(emitter)?));
    }
    if let Some(subject) = args.object("subjectConfig")? {
        configurations.push(Configuration::Subject(subject_configuration(subject)?));
    }
    if let Some(gdpr) = args.object("gdprConfig")? {
        configurations.push(Configuration::Gdpr(gdpr_configuration(gdpr)?));
    }
    if let Some(gc) = args.array("gcConfig")? {
        configurations.push(Configuration::GlobalContexts(global_contexts_configuration(gc)?));
    }

    let remote = match args.object("remoteConfig")? {
        Some(remote) => Some(remote),
        None => args.object("remoteConfiguration")?,
    };
    if let Some(remote) = remote {
        configurations.push(Configuration::Remote(remote_configuration(
            remote,
            &config.remote.default_endpoint,
        )?));
    }

    // Built last: a failed translation must not leave a cookie jar on disk.
    if let Some(network) = network {
        configurations.insert(0, Configuration::Network(network.build(transport)?));
    }

    Ok(TrackerSetup {
        app_name,
        customer_key,
        configurations,
    })
}

fn non_empty(args: Input<'_>, key: &str) -> Result<String> {
    let value = args.required_string(key)?;
    if value.is_empty() {
        return Err(TranslationError::invalid_value(args.domain(), key, "must not be empty"));
    }
    Ok(value)
}

/// Always produced; `input` may be absent.
pub fn tracker_configuration(app_name: &str, input: Option<Input<'_>>) -> Result<TrackerConfiguration> {
    let mut config = TrackerConfiguration::new(app_name);
    let Some(input) = input else {
        return Ok(config);
    };

    if let Some(token) = input.str("devicePlatform")? {
        config.device_platform = DevicePlatform::from_token(token);
    }
    if let Some(token) = input.str("logLevel")? {
        config.log_level = LogLevel::from_token(token);
    }
    for key in TrackerConfiguration::TOGGLE_KEYS {
        if let Some(flag) = input.bool(key)? {
            if let Some(slot) = config.toggle_mut(key) {
                *slot = Some(flag);
            }
        }
    }
    config.periodic_heartbeat_interval_secs = input.u32("periodicHeartbeatIntervalInSec")?;
    config.periodic_heartbeat_delay_secs = input.u32("periodicHeartbeatDelayInSec")?;
    Ok(config)
}

pub fn session_configuration(input: Input<'_>) -> Result<SessionConfiguration> {
    let foreground = input.required_u64("foregroundTimeout")?;
    let background = input.required_u64("backgroundTimeout")?;
    Ok(SessionConfiguration::from_secs(foreground, background))
}

pub fn emitter_configuration(input: Input<'_>) -> Result<EmitterConfiguration> {
    Ok(EmitterConfiguration {
        buffer_option: input.str("bufferOption")?.map(BufferOption::from_token),
        emit_range: input.u32("emitRange")?,
        thread_pool_size: input.u32("threadPoolSize")?,
        byte_limit_post: input.u64("byteLimitPost")?,
        byte_limit_get: input.u64("byteLimitGet")?,
        server_anonymisation: input.bool("serverAnonymisation")?,
        disable_event_caching: input.bool("disableEventCaching")?,
    })
}

pub fn subject_configuration(input: Input<'_>) -> Result<SubjectConfiguration> {
    Ok(SubjectConfiguration {
        user_id: input.string_update("userId")?,
        network_user_id: input.string_update("networkUserId")?,
        domain_user_id: input.string_update("domainUserId")?,
        useragent: input.string_update("useragent")?,
        ip_address: input.string_update("ipAddress")?,
        timezone: input.string_update("timezone")?,
        language: input.string_update("language")?,
        screen_resolution: screen_size_update(input, "screenResolution")?,
        screen_viewport: screen_size_update(input, "screenViewport")?,
        color_depth: input.u32_update("colorDepth")?,
    })
}

/// `[width, height]`, absent, or null.
pub fn screen_size_update(input: Input<'_>, key: &str) -> Result<FieldUpdate<ScreenSize>> {
    if !input.has(key) {
        return Ok(FieldUpdate::Unchanged);
    }
    let Some(value) = input.raw(key) else {
        return Ok(FieldUpdate::Clear);
    };
    screen_size(value)
        .map(FieldUpdate::Set)
        .ok_or_else(|| TranslationError::invalid_type(input.domain(), key, "a [width, height] array"))
}

/// First two numbers of an array, truncated.
pub fn screen_size(value: &Value) -> Option<ScreenSize> {
    let items = value.as_array()?;
    let width = items.first()?.as_f64()?;
    let height = items.get(1)?.as_f64()?;
    Some(ScreenSize::new(width as u32, height as u32))
}

/// All four fields are required together.
pub fn gdpr_configuration(input: Input<'_>) -> Result<GdprConfiguration> {
    Ok(GdprConfiguration {
        basis_for_processing: Basis::from_token(input.required_str("basisForProcessing")?),
        document_id: input.required_string("documentId")?,
        document_version: input.required_string("documentVersion")?,
        document_description: input.required_string("documentDescription")?,
    })
}

/// `[{ tag, globalContexts: [{ schema, data }] }]`. The first entry for a tag wins.
pub fn global_contexts_configuration(entries: &[Value]) -> Result<GlobalContextsConfiguration> {
    let mut config = GlobalContextsConfiguration::new();
    for (i, entry) in entries.iter().enumerate() {
        let domain = format!("gcConfig[{i}]");
        let entry = Input::from_value(&domain, entry)?;
        let tag = entry.required_str("tag")?;
        let contexts = entry
            .required_array("globalContexts")?
            .iter()
            .enumerate()
            .map(|(j, ctx)| {
                let ctx_domain = format!("{domain}.globalContexts[{j}]");
                self_describing(Input::from_value(&ctx_domain, ctx)?)
            })
            .collect::<Result<Vec<_>>>()?;
        config.add(tag, GlobalContext::new(contexts));
    }
    Ok(config)
}

/// Endpoint falls back to `default_endpoint`; method decodes like the network one.
pub fn remote_configuration(input: Input<'_>, default_endpoint: &str) -> Result<RemoteConfiguration> {
    let endpoint = input.str("endpoint")?.unwrap_or(default_endpoint);
    let method = input
        .str("method")?
        .map(HttpMethod::from_token)
        .unwrap_or_default();
    Ok(RemoteConfiguration::new(endpoint, method))
}
