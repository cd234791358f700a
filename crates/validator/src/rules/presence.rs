//! Presence rules

use crate::foundation::{ValidationError, Value};
use crate::rules::Rule;

crate::validator! {
    /// Validates that a value is present and not an empty string.
    ///
    /// Zero and whitespace-only strings count as present.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainval::foundation::{Validate, Value};
    /// use chainval::rules::required;
    ///
    /// assert!(required().validate(&Value::from("x")).is_ok());
    /// assert!(required().validate(&Value::from(0)).is_ok());
    /// assert!(required().validate(&Value::from("")).is_err());
    /// assert!(required().validate(&Value::Absent).is_err());
    /// ```
    pub Required for Value;
    rule(input) { !input.is_empty() }
    error(input) { ValidationError::new(Rule::Required) }
    fn required();
}
