use serde_json::{Map, Value};

/// Category/action event with optional label, property and value.
#[derive(Debug, Clone, PartialEq)]
pub struct Structured {
    pub category: String,
    pub action: String,
    pub label: Option<String>,
    pub property: Option<String>,
    pub value: Option<f64>,
}

impl Structured {
    pub fn new(category: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            action: action.into(),
            label: None,
            property: None,
            value: None,
        }
    }
}

/// User timing measurement. `timing` is in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timing {
    pub category: String,
    pub variable: String,
    pub timing: i64,
    pub label: Option<String>,
}

/// Attributes captured from a button click. Never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonClick {
    pub attributes: Map<String, Value>,
}

/// Free-form event submitted under a caller-chosen name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomEvent {
    pub name: String,
    /// The event data encoded as JSON text.
    pub payload_json: String,
}
