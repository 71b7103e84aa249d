/// Failures raised by the external tracking engine or its transport.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("tracker creation failed for '{namespace}': {reason}")]
    CreationFailed { namespace: String, reason: String },

    #[error("tracker '{namespace}' rejected {operation}: {reason}")]
    OperationFailed {
        namespace: String,
        operation: String,
        reason: String,
    },

    #[error("engine panicked during {operation}: {reason}")]
    Panicked { operation: String, reason: String },

    #[error("transport error: {reason}")]
    Transport { reason: String },
}

impl EngineError {
    pub fn operation(
        namespace: impl Into<String>,
        operation: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::OperationFailed {
            namespace: namespace.into(),
            operation: operation.into(),
            reason: reason.into(),
        }
    }

    pub fn transport(reason: impl std::fmt::Display) -> Self {
        Self::Transport {
            reason: reason.to_string(),
        }
    }
}

pub type EngineResult<T> = Result<T, EngineError>;
