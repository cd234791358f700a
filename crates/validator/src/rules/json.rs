//! JSON string rule.
//!
//! Validates that the string form of a value parses as JSON. The parse
//! failure never escapes: it becomes an ordinary [`ValidationError`] whose
//! `reason` param carries the parser's message.

use serde::de::IgnoredAny;

use crate::foundation::{Validate, ValidationError, Value};
use crate::rules::Rule;

/// Validates JSON text.
///
/// Any JSON value is accepted, primitives included, so the number `18`
/// (string form `"18"`) is valid JSON. Absent values are rejected.
///
/// # Examples
///
/// ```
/// use chainval::foundation::{Validate, Value};
/// use chainval::rules::is_json;
///
/// assert!(is_json().validate(&Value::from(r#"{"name": "John"}"#)).is_ok());
/// assert!(is_json().validate(&Value::from("[1, 2, 3]")).is_ok());
/// assert!(is_json().validate(&Value::from("true")).is_ok());
///
/// let error = is_json().validate(&Value::from(r#"{"name": "John""#)).unwrap_err();
/// assert!(error.param("reason").is_some());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IsJson;

impl Validate for IsJson {
    type Input = Value;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        let Some(text) = input.as_text() else {
            return Err(ValidationError::new(Rule::Json));
        };

        match serde_json::from_str::<IgnoredAny>(&text) {
            Ok(_) => Ok(()),
            Err(e) => Err(ValidationError::new(Rule::Json).with_param("reason", e.to_string())),
        }
    }
}

#[must_use]
pub const fn is_json() -> IsJson {
    IsJson
}
