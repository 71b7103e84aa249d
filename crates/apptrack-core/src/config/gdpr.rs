use super::enums::Basis;

/// One consent record. All four fields are supplied together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GdprConfiguration {
    pub basis_for_processing: Basis,
    pub document_id: String,
    pub document_version: String,
    pub document_description: String,
}
