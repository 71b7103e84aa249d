use super::enums::BufferOption;

/// Emitter buffering. Every field is optional; `None` keeps the engine default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmitterConfiguration {
    pub buffer_option: Option<BufferOption>,
    /// Number of events sent per emit batch.
    pub emit_range: Option<u32>,
    pub thread_pool_size: Option<u32>,
    pub byte_limit_post: Option<u64>,
    pub byte_limit_get: Option<u64>,
    pub server_anonymisation: Option<bool>,
    pub disable_event_caching: Option<bool>,
}
