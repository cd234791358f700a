//! Numeric range rules
//!
//! These compare the numeric reading of a value ([`Value::as_number`]).
//! A value with no numeric reading (absent, or text that is not a number)
//! can satisfy no bound, so it always fails.

use crate::foundation::{ValidationError, Value};
use crate::rules::{Rule, display_number};

fn bound_error(rule: Rule, bound: f64, input: &Value) -> ValidationError {
    let error = ValidationError::new(rule).with_argument(display_number(bound));
    match input.as_number() {
        Some(actual) => error.with_param("actual", display_number(actual)),
        None => error,
    }
}

crate::validator! {
    /// Validates that a value is at least a minimum.
    #[derive(Copy, PartialEq)]
    pub Min { min: f64 } for Value;
    rule(self, input) { input.as_number().is_some_and(|n| n >= self.min) }
    error(self, input) { bound_error(Rule::Min, self.min, input) }
    new(min: impl Into<f64>) { Self { min: min.into() } }
    fn min(min: impl Into<f64>);
}

crate::validator! {
    /// Validates that a value does not exceed a maximum.
    #[derive(Copy, PartialEq)]
    pub Max { max: f64 } for Value;
    rule(self, input) { input.as_number().is_some_and(|n| n <= self.max) }
    error(self, input) { bound_error(Rule::Max, self.max, input) }
    new(max: impl Into<f64>) { Self { max: max.into() } }
    fn max(max: impl Into<f64>);
}

crate::validator! {
    /// Validates that a value equals a number.
    ///
    /// Text is compared through its numeric reading, so `"18"` is exactly 18.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainval::foundation::{Validate, Value};
    /// use chainval::rules::exact;
    ///
    /// assert!(exact(18).validate(&Value::from(18)).is_ok());
    /// assert!(exact(18).validate(&Value::from("18")).is_ok());
    /// assert!(exact(18).validate(&Value::from(19)).is_err());
    /// ```
    #[derive(Copy, PartialEq)]
    pub Exact { target: f64 } for Value;
    rule(self, input) { input.as_number().is_some_and(|n| n == self.target) }
    error(self, input) { bound_error(Rule::Exact, self.target, input) }
    new(target: impl Into<f64>) { Self { target: target.into() } }
    fn exact(target: impl Into<f64>);
}

// ============================================================================
// TESTS
// ============================================================================
