//! Length rules
//!
//! Length is measured on the string form of the value, in Unicode scalar
//! values (chars), so the number `18` has length 2. An absent value has no
//! length and fails every length rule.

use crate::foundation::{ValidationError, Value};
use crate::rules::Rule;

fn length_error(rule: Rule, limit: usize, input: &Value) -> ValidationError {
    let error = ValidationError::new(rule).with_argument(limit.to_string());
    match input.char_len() {
        Some(actual) => error.with_param("actual", actual.to_string()),
        None => error,
    }
}

crate::validator! {
    /// Validates that a value has at least a minimum length.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MinLength { min: usize } for Value;
    rule(self, input) { input.char_len().is_some_and(|len| len >= self.min) }
    error(self, input) { length_error(Rule::MinLength, self.min, input) }
    fn min_length(min: usize);
}

crate::validator! {
    /// Validates that a value does not exceed a maximum length.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MaxLength { max: usize } for Value;
    rule(self, input) { input.char_len().is_some_and(|len| len <= self.max) }
    error(self, input) { length_error(Rule::MaxLength, self.max, input) }
    fn max_length(max: usize);
}

crate::validator! {
    /// Validates that a value has exactly the given length.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub ExactLength { length: usize } for Value;
    rule(self, input) { input.char_len() == Some(self.length) }
    error(self, input) { length_error(Rule::ExactLength, self.length, input) }
    fn exact_length(length: usize);
}
