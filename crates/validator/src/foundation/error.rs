//! Error types for validation failures
//!
//! A failed check produces a [`ValidationError`]; the errors recorded during
//! one chain form a [`ValidationErrors`] batch. Faults in configuring a
//! validator (an unknown rule name, a malformed template table) are reported
//! through [`Error`] instead, since they are not validation outcomes.
//!
//! String fields use `Cow<'static, str>` so static codes and templates never
//! allocate.

use std::borrow::Cow;
use std::fmt;

use crate::rules::Rule;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// One failed check.
///
/// The `argument` is what a template's `{0}` placeholder receives; the
/// `field` (the chain's label) fills `{1}`. `params` carry named details
/// such as the actual length, for callers that want more than the message.
///
/// # Examples
///
/// ```
/// use chainval::foundation::ValidationError;
/// use chainval::rules::Rule;
///
/// let error = ValidationError::new(Rule::MinLength)
///     .with_argument("8")
///     .with_param("actual", "5");
///
/// assert_eq!(error.rule, Rule::MinLength);
/// assert_eq!(error.param("actual"), Some("5"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The rule that failed.
    pub rule: Rule,

    /// The check's argument in display form (threshold, pattern, target).
    pub argument: Option<Cow<'static, str>>,

    /// The label of the value being validated.
    pub field: Option<Cow<'static, str>>,

    /// Named details about the failure, in insertion order.
    pub params: Vec<(Cow<'static, str>, Cow<'static, str>)>,

    /// Human-readable message.
    ///
    /// Starts out as the rule's unrendered default template and is replaced
    /// by [`render`](Self::render).
    pub message: Cow<'static, str>,
}

impl ValidationError {
    /// Creates an error for `rule` with its default template as the message.
    #[must_use]
    pub fn new(rule: Rule) -> Self {
        Self {
            rule,
            argument: None,
            field: None,
            params: Vec::new(),
            message: Cow::Borrowed(rule.default_template()),
        }
    }

    /// Sets the positional argument.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_argument(mut self, argument: impl Into<Cow<'static, str>>) -> Self {
        self.argument = Some(argument.into());
        self
    }

    /// Sets the field label.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Adds a named parameter.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Replaces the message by rendering `template` with this error's
    /// argument and field.
    #[must_use = "builder methods must be chained or built"]
    pub fn render(mut self, template: &str) -> Self {
        let rendered = crate::foundation::format_message(
            template,
            &[self.argument.as_deref(), self.field.as_deref()],
        );
        self.message = Cow::Owned(rendered);
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// ERROR BATCH
// ============================================================================

/// The errors recorded during one validation chain, in check order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Creates an empty batch.
    #[must_use]
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Appends an error.
    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Returns true if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns the number of errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns all errors.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Returns the rendered messages in order.
    #[must_use]
    pub fn messages(&self) -> Vec<&str> {
        self.errors.iter().map(|e| e.message.as_ref()).collect()
    }

    /// Returns true if any error was recorded by `rule`.
    #[must_use]
    pub fn contains_rule(&self, rule: Rule) -> bool {
        self.errors.iter().any(|e| e.rule == rule)
    }

    /// Converts to a Result.
    #[must_use = "result must be used"]
    pub fn into_result<T>(self, ok_value: T) -> Result<T, ValidationErrors> {
        if self.is_empty() {
            Ok(ok_value)
        } else {
            Err(self)
        }
    }
}

impl From<Vec<ValidationError>> for ValidationErrors {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self { errors }
    }
}

impl FromIterator<ValidationError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation failed with {} error(s):", self.errors.len())?;
        for (i, error) in self.errors.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

// ============================================================================
// CONFIGURATION ERRORS
// ============================================================================

/// Faults raised while configuring a validator.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A rule name did not match any known rule.
    #[error("unknown rule name: '{0}'")]
    UnknownRule(String),

    /// A message template table could not be parsed.
    #[error("invalid message template table: {0}")]
    InvalidTemplates(#[from] serde_json::Error),
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_default_template() {
        let error = ValidationError::new(Rule::Required);
        assert_eq!(error.message, "required {1} is empty or undefined");
        assert!(matches!(error.message, Cow::Borrowed(_)));
    }

    #[test]
    fn test_render_fills_argument_and_field() {
        let error = ValidationError::new(Rule::MinLength)
            .with_argument("8")
            .with_field("user")
            .render(Rule::MinLength.default_template());
        assert_eq!(error.message, "user must be at least 8 characters in length");
        assert_eq!(error.to_string(), error.message);
    }

    #[test]
    fn test_render_without_argument_keeps_placeholder() {
        let error = ValidationError::new(Rule::Alpha)
            .with_field("name")
            .render("{1} rejected {0}");
        assert_eq!(error.message, "name rejected {0}");
    }

    #[test]
    fn test_error_with_params() {
        let error = ValidationError::new(Rule::MaxLength)
            .with_param("max", "5")
            .with_param("actual", "7");

        assert_eq!(error.param("max"), Some("5"));
        assert_eq!(error.param("actual"), Some("7"));
        assert_eq!(error.param("min"), None);
    }

    #[test]
    fn test_error_collection() {
        let mut errors = ValidationErrors::new();
        assert!(!errors.has_errors());
        errors.add(ValidationError::new(Rule::Numeric));
        errors.add(ValidationError::new(Rule::Min));

        assert_eq!(errors.len(), 2);
        assert!(errors.contains_rule(Rule::Min));
        assert!(!errors.contains_rule(Rule::Max));
        assert!(errors.clone().into_result(()).is_err());
        assert!(ValidationErrors::new().into_result(()).is_ok());
    }

    #[test]
    fn test_collection_display_numbers_entries() {
        let errors: ValidationErrors = [
            ValidationError::new(Rule::Ip).with_field("host").render("{1} bad"),
            ValidationError::new(Rule::Url).with_field("page").render("{1} worse"),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            errors.to_string(),
            "Validation failed with 2 error(s):\n  1. host bad\n  2. page worse\n"
        );
    }

    #[test]
    fn test_unknown_rule_display() {
        let error = Error::UnknownRule("isFoo".into());
        assert_eq!(error.to_string(), "unknown rule name: 'isFoo'");
    }
}
