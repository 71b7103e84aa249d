//! Typed configuration model consumed by the tracking engine at creation time,
//! plus the bridge's own runtime configuration.

pub mod bridge_config;
pub mod defaults;
pub mod emitter;
pub mod enums;
pub mod gdpr;
pub mod global_contexts;
pub mod network;
pub mod remote;
pub mod session;
pub mod subject;
pub mod tracker;

pub use bridge_config::{
    BridgeConfig, ConfigIssue, ObservabilityConfig, RemoteDefaults, StorageConfig,
    ValidationConfig,
};
pub use emitter::EmitterConfiguration;
pub use enums::{Basis, BufferOption, DevicePlatform, HttpMethod, LogLevel, Trigger};
pub use gdpr::GdprConfiguration;
pub use global_contexts::{GlobalContext, GlobalContextsConfiguration};
pub use network::NetworkConfiguration;
pub use remote::RemoteConfiguration;
pub use session::SessionConfiguration;
pub use subject::{FieldUpdate, ScreenSize, SubjectApplyReport, SubjectConfiguration};
pub use tracker::TrackerConfiguration;

/// One configuration domain handed to the engine's creation routine.
///
/// Immutable after construction and consumed exactly once; later changes to a
/// live tracker go through `TrackerController`, never through these records.
#[derive(Debug, Clone)]
pub enum Configuration {
    Network(NetworkConfiguration),
    Tracker(TrackerConfiguration),
    Session(SessionConfiguration),
    Emitter(EmitterConfiguration),
    Subject(SubjectConfiguration),
    Gdpr(GdprConfiguration),
    GlobalContexts(GlobalContextsConfiguration),
    Remote(RemoteConfiguration),
}

impl Configuration {
    /// Host-facing name of the domain this record came from.
    pub fn domain(&self) -> &'static str {
        match self {
            Self::Network(_) => "networkConfig",
            Self::Tracker(_) => "trackerConfig",
            Self::Session(_) => "sessionConfig",
            Self::Emitter(_) => "emitterConfig",
            Self::Subject(_) => "subjectConfig",
            Self::Gdpr(_) => "gdprConfig",
            Self::GlobalContexts(_) => "gcConfig",
            Self::Remote(_) => "remoteConfig",
        }
    }
}
