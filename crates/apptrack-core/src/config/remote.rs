use super::enums::HttpMethod;

/// Where the engine fetches remote configuration from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteConfiguration {
    pub endpoint: String,
    pub method: HttpMethod,
}

impl RemoteConfiguration {
    pub fn new(endpoint: impl Into<String>, method: HttpMethod) -> Self {
        Self {
            endpoint: endpoint.into(),
            method,
        }
    }
}
