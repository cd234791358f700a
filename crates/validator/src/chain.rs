//! The fluent validator.
//!
//! A [`Validator`] holds one subject value at a time. [`validate`] sets the
//! subject, each check method runs one rule against it and records a
//! rendered message on failure, and [`is_valid`] closes the chain:
//!
//! ```
//! use chainval::Validator;
//!
//! let mut v = Validator::new();
//!
//! assert!(v.validate(18).min(16).max(56).is_valid());
//! assert!(!v.validate_as(18, "age").min(21).is_valid());
//! assert_eq!(v.get_errors(), Some(vec!["age integer value must be at least 21"]));
//! ```
//!
//! # Lifecycle
//!
//! - Checks only ever append to the working batch, and always return the
//!   same validator so calls can be chained.
//! - [`is_valid`] (or [`finish`]) moves the working batch into the "last
//!   errors" slot and resets the subject and label. The validator is then
//!   ready for the next [`validate`] call.
//! - [`validate`] always starts a clean chain; errors from a chain that was
//!   never closed are dropped.
//! - Closing a chain twice yields `true` the second time: the first call
//!   already drained the batch.
//!
//! # Concurrency
//!
//! Checks take `&mut self`. Share a validator across threads only behind a
//! lock, or give each chain its own instance.
//!
//! [`validate`]: Validator::validate
//! [`is_valid`]: Validator::is_valid
//! [`finish`]: Validator::finish

use std::borrow::Cow;

use crate::foundation::{
    Error, MessageTemplates, Validate, ValidationError, ValidationErrors, Value,
};
use crate::rules::{self, Expected, Rule};

/// Label used in messages when none is given.
pub const DEFAULT_LABEL: &str = "field";

// ============================================================================
// VALIDATOR
// ============================================================================

/// Chainable single-value validator.
///
/// See the [module documentation](self) for the lifecycle.
#[derive(Debug, Clone)]
pub struct Validator {
    value: Value,
    label: Option<Cow<'static, str>>,
    errors: Vec<ValidationError>,
    last_errors: ValidationErrors,
    messages: MessageTemplates,
    default_label: Cow<'static, str>,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator {
    /// Creates a validator with the built-in message templates.
    #[must_use]
    pub fn new() -> Self {
        Self {
            value: Value::Absent,
            label: None,
            errors: Vec::new(),
            last_errors: ValidationErrors::new(),
            messages: MessageTemplates::new(),
            default_label: Cow::Borrowed(DEFAULT_LABEL),
        }
    }

    /// Starts configuring a validator.
    #[must_use]
    pub fn builder() -> ValidatorBuilder {
        ValidatorBuilder::default()
    }

    // ------------------------------------------------------------------------
    // State
    // ------------------------------------------------------------------------

    /// Sets the subject value and starts a new chain with the default label.
    pub fn validate(&mut self, value: impl Into<Value>) -> &mut Self {
        self.start(value.into(), None)
    }

    /// Sets the subject value and its label, starting a new chain.
    ///
    /// An empty label falls back to the default.
    pub fn validate_as(
        &mut self,
        value: impl Into<Value>,
        label: impl Into<Cow<'static, str>>,
    ) -> &mut Self {
        let label = label.into();
        let label = if label.is_empty() { None } else { Some(label) };
        self.start(value.into(), label)
    }

    fn start(&mut self, value: Value, label: Option<Cow<'static, str>>) -> &mut Self {
        if !self.errors.is_empty() {
            tracing::trace!(
                field = %self.label(),
                dropped = self.errors.len(),
                "discarding errors from an unfinished chain"
            );
            self.errors.clear();
        }
        self.value = value;
        self.label = label;
        self
    }

    /// The current subject value.
    #[must_use]
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// The label used in messages for the current chain.
    #[must_use]
    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.default_label)
    }

    /// The template table of this validator.
    #[must_use]
    pub fn templates(&self) -> &MessageTemplates {
        &self.messages
    }

    /// Overrides the message template for `rule`.
    ///
    /// Applies to checks run after this call; recorded errors keep the
    /// message they were rendered with.
    pub fn set_msg(&mut self, rule: Rule, template: impl Into<Cow<'static, str>>) {
        self.messages.set(rule, template);
    }

    /// Overrides a message template by rule name.
    ///
    /// Accepts the snake_case rule name (`min_length`) or the camelCase
    /// check name (`minLength`).
    pub fn set_msg_by_name(
        &mut self,
        name: &str,
        template: impl Into<Cow<'static, str>>,
    ) -> Result<(), Error> {
        let rule = name.parse::<Rule>()?;
        self.set_msg(rule, template);
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Terminal operations
    // ------------------------------------------------------------------------

    /// Closes the chain and returns true if no check failed.
    ///
    /// The chain's errors become available through [`get_errors`](Self::get_errors)
    /// and [`last_errors`](Self::last_errors); the subject and label reset.
    pub fn is_valid(&mut self) -> bool {
        self.close().is_empty()
    }

    /// Closes the chain like [`is_valid`](Self::is_valid), returning the
    /// chain's errors as `Err` if any check failed.
    pub fn finish(&mut self) -> Result<(), ValidationErrors> {
        self.close().clone().into_result(())
    }

    fn close(&mut self) -> &ValidationErrors {
        let batch = ValidationErrors::from(std::mem::take(&mut self.errors));
        tracing::debug!(
            field = %self.label(),
            errors = batch.len(),
            valid = batch.is_empty(),
            "validation chain finished"
        );
        self.last_errors = batch;
        self.value = Value::Absent;
        self.label = None;
        &self.last_errors
    }

    /// Messages of the last closed chain, or `None` if it had no errors.
    #[must_use]
    pub fn get_errors(&self) -> Option<Vec<&str>> {
        if self.last_errors.is_empty() {
            None
        } else {
            Some(self.last_errors.messages())
        }
    }

    /// Structured errors of the last closed chain.
    #[must_use]
    pub fn last_errors(&self) -> &ValidationErrors {
        &self.last_errors
    }

    /// Errors recorded so far in the current chain.
    #[must_use]
    pub fn pending(&self) -> &[ValidationError] {
        &self.errors
    }

    // ------------------------------------------------------------------------
    // Running rules
    // ------------------------------------------------------------------------

    /// Runs any rule against the current subject.
    ///
    /// Every check method is a shorthand for this with a built-in rule.
    ///
    /// ```
    /// use chainval::Validator;
    /// use chainval::rules::{is_alpha, min_length};
    ///
    /// let mut v = Validator::new();
    /// assert!(v.validate("superuser").check(&min_length(8)).check(&is_alpha()).is_valid());
    /// ```
    pub fn check<V>(&mut self, rule: &V) -> &mut Self
    where
        V: Validate<Input = Value> + ?Sized,
    {
        if let Err(error) = rule.validate(&self.value) {
            self.record(error);
        }
        self
    }

    fn record(&mut self, error: ValidationError) {
        let label = self.label().to_owned();
        let template = self.messages.get(error.rule);
        let error = error.with_field(label).render(template);
        tracing::trace!(
            rule = %error.rule,
            field = error.field.as_deref().unwrap_or_default(),
            message = %error.message,
            "check failed"
        );
        self.errors.push(error);
    }

    // ------------------------------------------------------------------------
    // Checks: range
    // ------------------------------------------------------------------------

    /// Value must be numeric and at least `n`.
    ///
    /// Runs [`is_numeric`](Self::is_numeric) first, so a non-numeric value
    /// records two errors.
    pub fn min(&mut self, n: impl Into<f64>) -> &mut Self {
        self.is_numeric().check(&rules::min(n))
    }

    /// Value must be numeric and at most `n`.
    ///
    /// Runs [`is_numeric`](Self::is_numeric) first, so a non-numeric value
    /// records two errors.
    pub fn max(&mut self, n: impl Into<f64>) -> &mut Self {
        self.is_numeric().check(&rules::max(n))
    }

    /// Value must be numeric and equal to `n`.
    pub fn exact(&mut self, n: impl Into<f64>) -> &mut Self {
        self.is_numeric().check(&rules::exact(n))
    }

    // ------------------------------------------------------------------------
    // Checks: length
    // ------------------------------------------------------------------------

    /// Value must be present with at least `n` characters.
    pub fn min_length(&mut self, n: usize) -> &mut Self {
        self.check(&rules::min_length(n))
    }

    /// Value must be present with at most `n` characters.
    pub fn max_length(&mut self, n: usize) -> &mut Self {
        self.check(&rules::max_length(n))
    }

    /// Value must be present with exactly `n` characters.
    pub fn exact_length(&mut self, n: usize) -> &mut Self {
        self.check(&rules::exact_length(n))
    }

    // ------------------------------------------------------------------------
    // Checks: presence and equality
    // ------------------------------------------------------------------------

    /// Value must be present and not an empty string.
    pub fn required(&mut self) -> &mut Self {
        self.check(&rules::required())
    }

    /// Value must equal `expected` (strictly), or be one of its members
    /// when given a list.
    ///
    /// ```
    /// use chainval::Validator;
    ///
    /// let mut v = Validator::new();
    /// assert!(v.validate("superuser").r#match("superuser").is_valid());
    /// assert!(v.validate("superuser").r#match(["superuser", "megauser"]).is_valid());
    /// assert!(!v.validate("18").r#match(18).is_valid());
    /// ```
    pub fn r#match(&mut self, expected: impl Into<Expected>) -> &mut Self {
        self.check(&rules::matches(expected))
    }

    /// Alias of [`r#match`](Self::r#match).
    #[inline]
    pub fn matches(&mut self, expected: impl Into<Expected>) -> &mut Self {
        self.r#match(expected)
    }

    /// Value must differ from `expected`, or be none of its members when
    /// given a list.
    pub fn no_match(&mut self, expected: impl Into<Expected>) -> &mut Self {
        self.check(&rules::no_match(expected))
    }

    // ------------------------------------------------------------------------
    // Checks: patterns and formats
    // ------------------------------------------------------------------------

    /// ASCII letters only.
    pub fn is_alpha(&mut self) -> &mut Self {
        self.check(&rules::is_alpha())
    }

    /// Decimal number (`-12`, `3.5`, `.5`).
    pub fn is_numeric(&mut self) -> &mut Self {
        self.check(&rules::is_numeric())
    }

    /// ASCII letters and digits only.
    pub fn is_alpha_numeric(&mut self) -> &mut Self {
        self.check(&rules::is_alpha_numeric())
    }

    /// ASCII letters, digits, underscores and dashes only.
    pub fn is_alpha_dash(&mut self) -> &mut Self {
        self.check(&rules::is_alpha_dash())
    }

    /// Integer with an optional leading minus.
    pub fn is_integer(&mut self) -> &mut Self {
        self.check(&rules::is_integer())
    }

    /// Hex digits only.
    pub fn is_hex(&mut self) -> &mut Self {
        self.check(&rules::is_hex())
    }

    /// Padded base64 text.
    pub fn is_base64(&mut self) -> &mut Self {
        self.check(&rules::is_base64())
    }

    /// Dotted-quad IPv4 address.
    pub fn is_ip(&mut self) -> &mut Self {
        self.check(&rules::is_ip())
    }

    /// `local@domain.tld` email address.
    pub fn is_email(&mut self) -> &mut Self {
        self.check(&rules::is_email())
    }

    /// `http(s)://` URL or bare path.
    pub fn is_url(&mut self) -> &mut Self {
        self.check(&rules::is_url())
    }

    /// Present and free of whitespace.
    pub fn no_whitespace(&mut self) -> &mut Self {
        self.check(&rules::no_whitespace())
    }

    /// Well-formed JSON text.
    pub fn is_json(&mut self) -> &mut Self {
        self.check(&rules::is_json())
    }
}

// ============================================================================
// BUILDER
// ============================================================================

/// Builder for a [`Validator`] with a custom default label or templates.
///
/// ```
/// use chainval::Validator;
/// use chainval::rules::Rule;
///
/// let mut v = Validator::builder()
///     .default_label("value")
///     .message(Rule::Required, "{1} is required")
///     .build();
///
/// assert!(!v.validate(None::<&str>).required().is_valid());
/// assert_eq!(v.get_errors(), Some(vec!["value is required"]));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ValidatorBuilder {
    default_label: Option<Cow<'static, str>>,
    templates: MessageTemplates,
}

impl ValidatorBuilder {
    /// Label used when a chain is started without one.
    #[must_use = "builder methods must be chained or built"]
    pub fn default_label(mut self, label: impl Into<Cow<'static, str>>) -> Self {
        self.default_label = Some(label.into());
        self
    }

    /// Merges a template table (for example one loaded from JSON).
    #[must_use = "builder methods must be chained or built"]
    pub fn templates(mut self, templates: MessageTemplates) -> Self {
        self.templates.extend(templates);
        self
    }

    /// Overrides a single template.
    #[must_use = "builder methods must be chained or built"]
    pub fn message(mut self, rule: Rule, template: impl Into<Cow<'static, str>>) -> Self {
        self.templates.set(rule, template);
        self
    }

    /// Builds the validator.
    #[must_use]
    pub fn build(self) -> Validator {
        let default_label = self
            .default_label
            .filter(|label| !label.is_empty())
            .unwrap_or(Cow::Borrowed(DEFAULT_LABEL));

        Validator {
            messages: self.templates,
            default_label,
            ..Validator::new()
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
