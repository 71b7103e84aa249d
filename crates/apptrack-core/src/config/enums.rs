//! Enum vocabularies accepted from the host.
//!
//! Decoding is permissive: `from_token` never fails. A token outside the
//! vocabulary resolves to the enum's default and is logged at debug level.
//! `TOKENS` lists every token the strict validator accepts, including the
//! explicit spelling of the default.

fn fallback<T: std::fmt::Debug + Default>(domain: &str, token: &str) -> T {
    let value = T::default();
    tracing::debug!(domain, token, fallback = ?value, "unrecognized token, using default");
    value
}

/// Platform the tracker reports itself as running on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DevicePlatform {
    Web,
    #[default]
    Mobile,
    ServerSideApp,
    Desktop,
    General,
    ConnectedTV,
    GameConsole,
    InternetOfThings,
}

impl DevicePlatform {
    pub const TOKENS: &'static [&'static str] =
        &["web", "mob", "srv", "pc", "app", "tv", "cnsl", "iot"];

    pub fn from_token(token: &str) -> Self {
        match token {
            "web" => Self::Web,
            "srv" => Self::ServerSideApp,
            "pc" => Self::Desktop,
            "app" => Self::General,
            "tv" => Self::ConnectedTV,
            "cnsl" => Self::GameConsole,
            "iot" => Self::InternetOfThings,
            other => fallback("devicePlatform", other),
        }
    }
}

/// Verbosity of the engine's own diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LogLevel {
    #[default]
    Off,
    Error,
    Debug,
    Verbose,
}

impl LogLevel {
    pub const TOKENS: &'static [&'static str] = &["off", "error", "debug", "verbose"];

    pub fn from_token(token: &str) -> Self {
        match token {
            "error" => Self::Error,
            "debug" => Self::Debug,
            "verbose" => Self::Verbose,
            other => fallback("logLevel", other),
        }
    }
}

/// Emitter buffer grouping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum BufferOption {
    #[default]
    Single,
    DefaultGroup,
    HeavyGroup,
}

impl BufferOption {
    pub const TOKENS: &'static [&'static str] = &["single", "default", "heavy"];

    pub fn from_token(token: &str) -> Self {
        match token {
            "default" => Self::DefaultGroup,
            "heavy" => Self::HeavyGroup,
            other => fallback("bufferOption", other),
        }
    }
}

/// Legal basis for processing personal data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Basis {
    #[default]
    Consent,
    Contract,
    LegalObligation,
    LegitimateInterests,
    PublicTask,
    VitalInterests,
}

impl Basis {
    pub const TOKENS: &'static [&'static str] = &[
        "consent",
        "contract",
        "legal_obligation",
        "legitimate_interests",
        "public_task",
        "vital_interests",
    ];

    pub fn from_token(token: &str) -> Self {
        match token {
            "contract" => Self::Contract,
            "legal_obligation" => Self::LegalObligation,
            "legitimate_interests" => Self::LegitimateInterests,
            "public_task" => Self::PublicTask,
            "vital_interests" => Self::VitalInterests,
            other => fallback("basisForProcessing", other),
        }
    }
}

/// HTTP method used to submit events to the collector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    #[default]
    Post,
}

impl HttpMethod {
    pub const TOKENS: &'static [&'static str] = &["get", "post"];

    /// Case-insensitive: only `get` selects GET, anything else is POST.
    pub fn from_token(token: &str) -> Self {
        if token.eq_ignore_ascii_case("get") {
            Self::Get
        } else {
            Self::Post
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

/// What raised a message notification. Unlike the configuration enums this
/// one is strict: an unknown trigger is a malformed event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigger {
    Push,
    Location,
    Calendar,
    TimeInterval,
    Other,
}

impl Trigger {
    pub const TOKENS: &'static [&'static str] =
        &["push", "location", "calendar", "timeInterval", "other"];

    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "push" => Some(Self::Push),
            "location" => Some(Self::Location),
            "calendar" => Some(Self::Calendar),
            "timeInterval" => Some(Self::TimeInterval),
            "other" => Some(Self::Other),
            _ => None,
        }
    }
}
