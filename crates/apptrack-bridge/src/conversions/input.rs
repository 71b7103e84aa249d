//! Typed accessors over an untyped host object.
//!
//! Presence and null are kept distinct: `has` is true for a key mapped to
//! null, while the optional getters return `None` for both absent and null.
//! Numbers arrive as JSON numbers and are narrowed by truncation.

use apptrack_core::config::FieldUpdate;
use apptrack_core::errors::TranslationError;
use serde_json::{Map, Value};

type Result<T> = std::result::Result<T, TranslationError>;

/// A borrowed JSON object tagged with the domain it is being read as.
#[derive(Debug, Clone, Copy)]
pub struct Input<'a> {
    domain: &'a str,
    map: &'a Map<String, Value>,
}

impl<'a> Input<'a> {
    pub fn new(domain: &'a str, map: &'a Map<String, Value>) -> Self {
        Self { domain, map }
    }

    pub fn from_value(domain: &'a str, value: &'a Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Self::new(domain, map)),
            _ => Err(TranslationError::NotAnObject {
                domain: domain.to_string(),
            }),
        }
    }

    pub fn domain(&self) -> &'a str {
        self.domain
    }

    pub fn map(&self) -> &'a Map<String, Value> {
        self.map
    }

    pub fn has(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    /// Present and not null.
    pub fn has_value(&self, key: &str) -> bool {
        self.raw(key).is_some()
    }

    /// The value under `key`, treating null as absent.
    pub fn raw(&self, key: &str) -> Option<&'a Value> {
        self.map.get(key).filter(|v| !v.is_null())
    }

    fn invalid(&self, key: &str, expected: &'static str) -> TranslationError {
        TranslationError::invalid_type(self.domain, key, expected)
    }

    fn missing(&self, key: &str) -> TranslationError {
        TranslationError::missing(self.domain, key)
    }

    pub fn str(&self, key: &str) -> Result<Option<&'a str>> {
        match self.raw(key) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.as_str())),
            Some(_) => Err(self.invalid(key, "a string")),
        }
    }

    pub fn required_str(&self, key: &str) -> Result<&'a str> {
        self.str(key)?.ok_or_else(|| self.missing(key))
    }

    pub fn string(&self, key: &str) -> Result<Option<String>> {
        Ok(self.str(key)?.map(str::to_string))
    }

    pub fn required_string(&self, key: &str) -> Result<String> {
        self.required_str(key).map(str::to_string)
    }

    pub fn bool(&self, key: &str) -> Result<Option<bool>> {
        match self.raw(key) {
            None => Ok(None),
            Some(Value::Bool(b)) => Ok(Some(*b)),
            Some(_) => Err(self.invalid(key, "a boolean")),
        }
    }

    pub fn required_bool(&self, key: &str) -> Result<bool> {
        self.bool(key)?.ok_or_else(|| self.missing(key))
    }

    pub fn f64(&self, key: &str) -> Result<Option<f64>> {
        match self.raw(key) {
            None => Ok(None),
            Some(v) => v.as_f64().map(Some).ok_or_else(|| self.invalid(key, "a number")),
        }
    }

    pub fn required_f64(&self, key: &str) -> Result<f64> {
        self.f64(key)?.ok_or_else(|| self.missing(key))
    }

    /// Number truncated toward zero.
    pub fn i64(&self, key: &str) -> Result<Option<i64>> {
        Ok(self.f64(key)?.map(|n| n as i64))
    }

    pub fn required_i64(&self, key: &str) -> Result<i64> {
        self.i64(key)?.ok_or_else(|| self.missing(key))
    }

    /// Number truncated toward zero, saturating at the `u32` bounds.
    pub fn u32(&self, key: &str) -> Result<Option<u32>> {
        Ok(self.f64(key)?.map(|n| n as u32))
    }

    pub fn u64(&self, key: &str) -> Result<Option<u64>> {
        Ok(self.f64(key)?.map(|n| n as u64))
    }

    pub fn required_u64(&self, key: &str) -> Result<u64> {
        self.u64(key)?.ok_or_else(|| self.missing(key))
    }

    pub fn array(&self, key: &str) -> Result<Option<&'a [Value]>> {
        match self.raw(key) {
            None => Ok(None),
            Some(Value::Array(items)) => Ok(Some(items.as_slice())),
            Some(_) => Err(self.invalid(key, "an array")),
        }
    }

    pub fn required_array(&self, key: &str) -> Result<&'a [Value]> {
        self.array(key)?.ok_or_else(|| self.missing(key))
    }

    /// Nested object under `key`, read as its own domain.
    pub fn object(&self, key: &'a str) -> Result<Option<Input<'a>>> {
        match self.raw(key) {
            None => Ok(None),
            Some(Value::Object(map)) => Ok(Some(Input::new(key, map))),
            Some(_) => Err(self.invalid(key, "an object")),
        }
    }

    pub fn required_object(&self, key: &'a str) -> Result<Input<'a>> {
        self.object(key)?.ok_or_else(|| self.missing(key))
    }

    /// Object under `key` as an owned map, for payloads passed through as-is.
    pub fn owned_map(&self, key: &str) -> Result<Option<Map<String, Value>>> {
        match self.raw(key) {
            None => Ok(None),
            Some(Value::Object(map)) => Ok(Some(map.clone())),
            Some(_) => Err(self.invalid(key, "an object")),
        }
    }

    /// Array of strings; absent or null yields an empty list.
    pub fn string_list(&self, key: &str) -> Result<Vec<String>> {
        let Some(items) = self.array(key)? else {
            return Ok(Vec::new());
        };
        items
            .iter()
            .map(|item| {
                item.as_str()
                    .map(str::to_string)
                    .ok_or_else(|| self.invalid(key, "an array of strings"))
            })
            .collect()
    }

    /// Tri-state string: absent keeps, null clears, string sets.
    pub fn string_update(&self, key: &str) -> Result<FieldUpdate<String>> {
        if !self.has(key) {
            return Ok(FieldUpdate::Unchanged);
        }
        match self.string(key)? {
            None => Ok(FieldUpdate::Clear),
            Some(s) => Ok(FieldUpdate::Set(s)),
        }
    }

    /// Tri-state number, truncated.
    pub fn u32_update(&self, key: &str) -> Result<FieldUpdate<u32>> {
        if !self.has(key) {
            return Ok(FieldUpdate::Unchanged);
        }
        match self.u32(key)? {
            None => Ok(FieldUpdate::Clear),
            Some(n) => Ok(FieldUpdate::Set(n)),
        }
    }
}
