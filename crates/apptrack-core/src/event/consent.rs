#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConsentGranted {
    pub expiry: String,
    pub document_id: String,
    pub version: String,
    pub name: Option<String>,
    pub document_description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConsentWithdrawn {
    /// Whether every previously granted consent is withdrawn.
    pub all: bool,
    pub document_id: String,
    pub version: String,
    pub name: Option<String>,
    pub document_description: Option<String>,
}
