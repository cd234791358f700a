//! Character-class pattern rules
//!
//! Each rule matches the string form of the value against an anchored
//! pattern. Letter and digit classes are ASCII-only. An absent value has no
//! string form and fails every rule here.

use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::{ValidationError, Value};
use crate::rules::Rule;

static ALPHA: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i-u)^[a-z]+$").unwrap());

static NUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?[0-9]*\.?[0-9]+$").unwrap());

static ALPHA_NUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i-u)^[a-z0-9]+$").unwrap());

static ALPHA_DASH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i-u)^[a-z0-9_-]+$").unwrap());

static INTEGER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^-?[0-9]+$").unwrap());

static HEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i-u)^[a-f0-9]+$").unwrap());

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s").unwrap());

/// Returns true if the value has a string form and `pattern` matches it.
pub(crate) fn text_matches(pattern: &Regex, input: &Value) -> bool {
    input
        .as_text()
        .is_some_and(|text| pattern.is_match(&text))
}

crate::validator! {
    /// Validates that a value contains only ASCII letters.
    pub IsAlpha for Value;
    rule(input) { text_matches(&ALPHA, input) }
    error(input) { ValidationError::new(Rule::Alpha) }
    fn is_alpha();
}

crate::validator! {
    /// Validates that a value is a decimal number: optional leading minus,
    /// digits, at most one decimal point, and at least one trailing digit.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainval::foundation::{Validate, Value};
    /// use chainval::rules::is_numeric;
    ///
    /// assert!(is_numeric().validate(&Value::from("-12.5")).is_ok());
    /// assert!(is_numeric().validate(&Value::from(".5")).is_ok());
    /// assert!(is_numeric().validate(&Value::from("5.")).is_err());
    /// ```
    pub IsNumeric for Value;
    rule(input) { text_matches(&NUMERIC, input) }
    error(input) { ValidationError::new(Rule::Numeric) }
    fn is_numeric();
}

crate::validator! {
    /// Validates that a value contains only ASCII letters and digits.
    pub IsAlphaNumeric for Value;
    rule(input) { text_matches(&ALPHA_NUMERIC, input) }
    error(input) { ValidationError::new(Rule::AlphaNumeric) }
    fn is_alpha_numeric();
}

crate::validator! {
    /// Validates that a value contains only ASCII letters, digits,
    /// underscores and dashes.
    pub IsAlphaDash for Value;
    rule(input) { text_matches(&ALPHA_DASH, input) }
    error(input) { ValidationError::new(Rule::AlphaDash) }
    fn is_alpha_dash();
}

crate::validator! {
    /// Validates that a value is an integer with an optional leading minus.
    pub IsInteger for Value;
    rule(input) { text_matches(&INTEGER, input) }
    error(input) { ValidationError::new(Rule::Integer) }
    fn is_integer();
}

crate::validator! {
    /// Validates that a value contains only hex digits (no `0x` prefix).
    pub IsHex for Value;
    rule(input) { text_matches(&HEX, input) }
    error(input) { ValidationError::new(Rule::Hex) }
    fn is_hex();
}

crate::validator! {
    /// Validates that a value is present and contains no whitespace.
    pub NoWhitespace for Value;
    rule(input) { input.as_text().is_some_and(|text| !WHITESPACE.is_match(&text)) }
    error(input) { ValidationError::new(Rule::NoWhitespace) }
    fn no_whitespace();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;

    fn ok(rule: &impl Validate<Input = Value>, value: impl Into<Value>) -> bool {
        rule.validate(&value.into()).is_ok()
    }

    #[test]
    fn test_alpha() {
        assert!(ok(&is_alpha(), "superuser"));
        assert!(ok(&is_alpha(), "SuperUser"));
        assert!(!ok(&is_alpha(), "ABC001"));
        assert!(!ok(&is_alpha(), ""));
        assert!(!ok(&is_alpha(), "é"));
        assert!(!ok(&is_alpha(), Value::Absent));
    }

    #[test]
    fn test_numeric() {
        assert!(ok(&is_numeric(), "359882205366"));
        assert!(ok(&is_numeric(), 18));
        assert!(ok(&is_numeric(), -3.25));
        assert!(!ok(&is_numeric(), "1.2.3"));
        assert!(!ok(&is_numeric(), "--1"));
        assert!(!ok(&is_numeric(), ""));
        assert!(!ok(&is_numeric(), Value::Absent));
    }

    #[test]
    fn test_alpha_numeric() {
        assert!(ok(&is_alpha_numeric(), "ABC001"));
        assert!(ok(&is_alpha_numeric(), "359882205366"));
        assert!(!ok(&is_alpha_numeric(), "192.168.0.13"));
        assert!(!ok(&is_alpha_numeric(), Value::Absent));
    }

    #[test]
    fn test_alpha_dash() {
        assert!(ok(&is_alpha_dash(), "my_slug-01"));
        assert!(!ok(&is_alpha_dash(), "192.168.0.13"));
        assert!(!ok(&is_alpha_dash(), "with space"));
    }

    #[test]
    fn test_integer() {
        assert!(ok(&is_integer(), 18));
        assert!(ok(&is_integer(), "-42"));
        assert!(!ok(&is_integer(), "4.2"));
        assert!(!ok(&is_integer(), 4.2));
    }

    #[test]
    fn test_hex() {
        assert!(ok(&is_hex(), "DeadBeef01"));
        assert!(!ok(&is_hex(), "0x1f"));
        assert!(!ok(&is_hex(), "g"));
        assert!(!ok(&is_hex(), Value::Absent));
    }

    #[test]
    fn test_no_whitespace() {
        assert!(ok(&no_whitespace(), "http:Ma$|er$B^|^@s^|^er$$(+_+)"));
        assert!(!ok(&no_whitespace(), "Thomas Moser"));
        assert!(!ok(&no_whitespace(), "tab\there"));
        assert!(!ok(&no_whitespace(), Value::Absent));
        assert!(ok(&no_whitespace(), ""));
    }
}
