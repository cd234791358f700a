//! Core traits for the validation system
//!
//! This module defines the trait that every rule implements.

use crate::foundation::ValidationError;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// A pure predicate over an input, reporting failure as a [`ValidationError`].
///
/// Every built-in rule implements this with `Input = Value`; the fluent
/// [`Validator`](crate::chain::Validator) runs rules against its subject and
/// renders the errors they return.
///
/// # Examples
///
/// ```
/// use chainval::foundation::{Validate, ValidationError, Value};
/// use chainval::rules::Rule;
///
/// struct NotZero;
///
/// impl Validate for NotZero {
///     type Input = Value;
///
///     fn validate(&self, input: &Value) -> Result<(), ValidationError> {
///         if input.as_number() == Some(0.0) {
///             Err(ValidationError::new(Rule::Min).with_argument("non-zero"))
///         } else {
///             Ok(())
///         }
///     }
/// }
///
/// assert!(NotZero.validate(&Value::from(3)).is_ok());
/// assert!(NotZero.validate(&Value::from(0)).is_err());
/// ```
pub trait Validate {
    /// The type of input being validated.
    type Input: ?Sized;

    /// Validates the input value.
    ///
    /// Returns `Ok(())` on success; on failure returns an error carrying the
    /// rule, its positional argument and any named details.
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;

    /// Returns true if `input` passes.
    fn is_satisfied_by(&self, input: &Self::Input) -> bool {
        self.validate(input).is_ok()
    }
}

impl<V: Validate + ?Sized> Validate for &V {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }
}
