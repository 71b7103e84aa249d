/// Failures turning untyped host input into typed configuration or events.
///
/// `domain` names the configuration domain or event kind (`sessionConfig`,
/// `structured`, ...); `field` names the offending key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TranslationError {
    #[error("{domain}: required field '{field}' is missing")]
    MissingField { domain: String, field: String },

    #[error("{domain}: field '{field}' must be {expected}")]
    InvalidType {
        domain: String,
        field: String,
        expected: &'static str,
    },

    #[error("{domain}: field '{field}' is invalid: {reason}")]
    InvalidValue {
        domain: String,
        field: String,
        reason: String,
    },

    #[error("{domain}: input must be an object")]
    NotAnObject { domain: String },

    #[error("unknown bridge method '{method}'")]
    UnknownMethod { method: String },

    #[error("validation failed: {}", issues.join("; "))]
    Validation { issues: Vec<String> },
}

impl TranslationError {
    pub fn missing(domain: impl Into<String>, field: impl Into<String>) -> Self {
        Self::MissingField {
            domain: domain.into(),
            field: field.into(),
        }
    }

    pub fn invalid_type(
        domain: impl Into<String>,
        field: impl Into<String>,
        expected: &'static str,
    ) -> Self {
        Self::InvalidType {
            domain: domain.into(),
            field: field.into(),
            expected,
        }
    }

    pub fn invalid_value(
        domain: impl Into<String>,
        field: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidValue {
            domain: domain.into(),
            field: field.into(),
            reason: reason.into(),
        }
    }
}
