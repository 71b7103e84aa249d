/// Tracker resolution failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("no tracker registered under namespace '{namespace}'")]
    TrackerNotFound { namespace: String },

    #[error("no default tracker has been created")]
    NoDefaultTracker,
}

impl LookupError {
    /// Build the error for a namespace that may be absent (default lookup).
    pub fn for_namespace(namespace: Option<&str>) -> Self {
        match namespace {
            Some(ns) => Self::TrackerNotFound {
                namespace: ns.to_string(),
            },
            None => Self::NoDefaultTracker,
        }
    }
}
