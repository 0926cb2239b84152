//! Client JSON payloads and typed field extraction.
//!
//! Request bodies are accepted as free-form JSON objects and read field by
//! field, so the order in which required fields are checked stays under the
//! control of the caller.

use serde_json::{Map, Value};

use crate::error::ValidationError;

/// A JSON object supplied by a client.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Payload(Map<String, Value>);

impl Payload {
    /// Parse a raw request body.
    ///
    /// Returns `None` when the body is empty, is not valid JSON, or is valid
    /// JSON that is not an object.
    #[must_use]
    pub fn from_slice(bytes: &[u8]) -> Option<Self> {
        match serde_json::from_slice(bytes) {
            Ok(Value::Object(map)) => Some(Self(map)),
            _ => None,
        }
    }

    /// Turn an optional body into a payload, or reject it as "Not a JSON".
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NotAJson`] when `body` is `None`.
    pub fn require(body: Option<Self>) -> Result<Self, ValidationError> {
        body.ok_or(ValidationError::NotAJson)
    }

    /// Raw access to a field.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Iterate over every `(key, value)` pair in the body.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Read a required, non-empty string field.
    ///
    /// # Errors
    ///
    /// [`ValidationError::Missing`] when the field is absent, `null` or
    /// empty; [`ValidationError::Invalid`] when it is not a string.
    pub fn required_str(&self, field: &'static str) -> Result<String, ValidationError> {
        match self.0.get(field) {
            None => Err(ValidationError::Missing(field)),
            Some(value) => required_string(field, value),
        }
    }

    /// Read an optional string field.
    ///
    /// # Errors
    ///
    /// [`ValidationError::Invalid`] when present and neither a string nor `null`.
    pub fn optional_str(&self, field: &'static str) -> Result<Option<String>, ValidationError> {
        self.0
            .get(field)
            .map_or(Ok(None), |value| optional_string(field, value))
    }

    /// Read an optional count, defaulting to `0`.
    ///
    /// # Errors
    ///
    /// [`ValidationError::Invalid`] when present and not a non-negative integer.
    pub fn count_or_zero(&self, field: &'static str) -> Result<u32, ValidationError> {
        self.0.get(field).map_or(Ok(0), |value| count(field, value))
    }

    /// Read an optional floating-point field.
    ///
    /// # Errors
    ///
    /// [`ValidationError::Invalid`] when present and neither a number nor `null`.
    pub fn optional_f64(&self, field: &'static str) -> Result<Option<f64>, ValidationError> {
        self.0
            .get(field)
            .map_or(Ok(None), |value| optional_number(field, value))
    }
}

impl From<Map<String, Value>> for Payload {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Convert a value assigned to a required string field.
///
/// # Errors
///
/// Same rules as [`Payload::required_str`].
pub fn required_string(field: &'static str, value: &Value) -> Result<String, ValidationError> {
    match value {
        Value::Null => Err(ValidationError::Missing(field)),
        Value::String(s) if s.is_empty() => Err(ValidationError::Missing(field)),
        Value::String(s) => Ok(s.clone()),
        _ => Err(ValidationError::Invalid(field)),
    }
}

/// Convert a value assigned to a nullable string field.
///
/// # Errors
///
/// [`ValidationError::Invalid`] when neither a string nor `null`.
pub fn optional_string(
    field: &'static str,
    value: &Value,
) -> Result<Option<String>, ValidationError> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        _ => Err(ValidationError::Invalid(field)),
    }
}

/// Convert a value assigned to a count field.
///
/// # Errors
///
/// [`ValidationError::Invalid`] when not an integer in `0..=u32::MAX`.
pub fn count(field: &'static str, value: &Value) -> Result<u32, ValidationError> {
    value
        .as_u64()
        .and_then(|n| u32::try_from(n).ok())
        .ok_or(ValidationError::Invalid(field))
}

/// Convert a value assigned to a nullable number field.
///
/// # Errors
///
/// [`ValidationError::Invalid`] when neither a number nor `null`.
pub fn optional_number(field: &'static str, value: &Value) -> Result<Option<f64>, ValidationError> {
    match value {
        Value::Null => Ok(None),
        other => other
            .as_f64()
            .map(Some)
            .ok_or(ValidationError::Invalid(field)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: Value) -> Payload {
        match value {
            Value::Object(map) => Payload::from(map),
            _ => unreachable!("test payloads are objects"),
        }
    }

    #[test]
    fn should_reject_empty_body() {
        assert!(Payload::from_slice(b"").is_none());
    }

    #[test]
    fn should_reject_malformed_body() {
        assert!(Payload::from_slice(b"{\"name\": ").is_none());
        assert!(Payload::from_slice(b"name=California").is_none());
    }

    #[test]
    fn should_reject_non_object_json() {
        assert!(Payload::from_slice(b"[1, 2]").is_none());
        assert!(Payload::from_slice(b"\"name\"").is_none());
        assert!(Payload::from_slice(b"null").is_none());
    }

    #[test]
    fn should_accept_empty_object() {
        let parsed = Payload::from_slice(b"{}").unwrap();
        assert_eq!(parsed.iter().count(), 0);
    }

    #[test]
    fn should_map_absent_body_to_not_a_json() {
        assert_eq!(Payload::require(None), Err(ValidationError::NotAJson));
    }

    #[test]
    fn should_read_required_string() {
        let p = payload(json!({"name": "California"}));
        assert_eq!(p.required_str("name").unwrap(), "California");
    }

    #[test]
    fn should_report_missing_when_required_string_absent_null_or_empty() {
        for body in [json!({}), json!({"name": null}), json!({"name": ""})] {
            assert_eq!(
                payload(body).required_str("name"),
                Err(ValidationError::Missing("name"))
            );
        }
    }

    #[test]
    fn should_report_invalid_when_required_string_has_wrong_type() {
        let p = payload(json!({"name": 42}));
        assert_eq!(p.required_str("name"), Err(ValidationError::Invalid("name")));
    }

    #[test]
    fn should_default_count_to_zero() {
        let p = payload(json!({}));
        assert_eq!(p.count_or_zero("max_guest").unwrap(), 0);
    }

    #[test]
    fn should_reject_negative_or_fractional_count() {
        for body in [json!({"max_guest": -1}), json!({"max_guest": 1.5})] {
            assert_eq!(
                payload(body).count_or_zero("max_guest"),
                Err(ValidationError::Invalid("max_guest"))
            );
        }
    }

    #[test]
    fn should_accept_integer_as_float() {
        let p = payload(json!({"latitude": 37}));
        assert_eq!(p.optional_f64("latitude").unwrap(), Some(37.0));
    }

    #[test]
    fn should_read_null_optional_string_as_none() {
        let p = payload(json!({"description": null}));
        assert_eq!(p.optional_str("description").unwrap(), None);
    }
}
