//! Loosely-typed webhook payload.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// Flat JSON object as delivered by the intake form webhook.
///
/// Values are usually strings, sometimes numbers. Boolean-like answers are
/// `"yes"` in any casing; anything else means no.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = Object)]
pub struct RawIntake(Map<String, Value>);

impl RawIntake {
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Builder used by fixtures and callers that assemble payloads by hand.
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.0.insert(key.to_string(), value.into());
        self
    }

    pub fn value(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Trimmed text for strings and numbers; `None` when missing, null or blank.
    pub fn text(&self, key: &str) -> Option<String> {
        match self.0.get(key)? {
            Value::String(s) => {
                let trimmed = s.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            }
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    /// Text with an empty-string default.
    pub fn text_or_empty(&self, key: &str) -> String {
        self.text(key).unwrap_or_default()
    }

    /// `true` for JSON `true` or a `"yes"` answer in any casing.
    pub fn flag(&self, key: &str) -> bool {
        match self.0.get(key) {
            Some(Value::Bool(b)) => *b,
            Some(Value::String(s)) => s.trim().eq_ignore_ascii_case("yes"),
            _ => false,
        }
    }

    /// No usable text: absent, null, whitespace-only, or an array or object.
    pub fn is_blank(&self, key: &str) -> bool {
        self.text(key).is_none()
    }

    /// Absent or null. Empty strings count as present.
    pub fn is_absent(&self, key: &str) -> bool {
        matches!(self.0.get(key), None | Some(Value::Null))
    }
}

impl From<Map<String, Value>> for RawIntake {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}
