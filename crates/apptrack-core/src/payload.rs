//! Self-describing payloads: a schema identifier plus a data object.

use serde::{Deserialize, Serialize};

/// A context or event body tagged with the schema it conforms to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelfDescribingJson {
    pub schema: String,
    pub data: serde_json::Value,
}

impl SelfDescribingJson {
    pub fn new(schema: impl Into<String>, data: serde_json::Value) -> Self {
        Self {
            schema: schema.into(),
            data,
        }
    }
}
