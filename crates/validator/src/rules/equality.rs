//! Equality and membership rules
//!
//! [`Matches`] and [`NoMatch`] compare the subject against an [`Expected`]
//! target: either a single value (strict equality, shape and content) or a
//! list of candidates (membership).
//!
//! ```
//! use chainval::foundation::{Validate, Value};
//! use chainval::rules::{matches, no_match};
//!
//! let user = Value::from("superuser");
//! assert!(matches("superuser").validate(&user).is_ok());
//! assert!(matches(["superuser", "megauser"]).validate(&user).is_ok());
//! assert!(no_match(["root", "admin"]).validate(&user).is_ok());
//!
//! // strict: text "18" is not the number 18
//! assert!(matches(18).validate(&Value::from("18")).is_err());
//! ```

use std::fmt;

use crate::foundation::{ValidationError, Value};
use crate::rules::Rule;

// ============================================================================
// EXPECTED
// ============================================================================

/// The target of an equality rule.
#[derive(Debug, Clone, PartialEq)]
pub enum Expected {
    /// A single value, compared with strict equality.
    One(Value),
    /// A list of values; the subject must (or must not) be one of them.
    AnyOf(Vec<Value>),
}

impl Expected {
    /// Returns true if `value` equals the target or is one of its members.
    #[must_use]
    pub fn is_hit(&self, value: &Value) -> bool {
        match self {
            Self::One(expected) => expected == value,
            Self::AnyOf(candidates) => candidates.contains(value),
        }
    }

    fn is_list(&self) -> bool {
        matches!(self, Self::AnyOf(_))
    }
}

/// Lists render their members joined by `,`, absent members as nothing.
impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::One(value) => write!(f, "{value}"),
            Self::AnyOf(candidates) => {
                for (i, candidate) in candidates.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    if !candidate.is_absent() {
                        write!(f, "{candidate}")?;
                    }
                }
                Ok(())
            }
        }
    }
}

impl From<Value> for Expected {
    fn from(value: Value) -> Self {
        Self::One(value)
    }
}

impl From<Vec<Value>> for Expected {
    fn from(values: Vec<Value>) -> Self {
        Self::AnyOf(values)
    }
}

macro_rules! expected_from {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl From<$ty> for Expected {
                fn from(value: $ty) -> Self {
                    Self::One(value.into())
                }
            }

            impl From<Vec<$ty>> for Expected {
                fn from(values: Vec<$ty>) -> Self {
                    Self::AnyOf(values.into_iter().map(Into::into).collect())
                }
            }

            impl<const N: usize> From<[$ty; N]> for Expected {
                fn from(values: [$ty; N]) -> Self {
                    Self::AnyOf(values.into_iter().map(Into::into).collect())
                }
            }
        )+
    };
}

expected_from!(&str, String, f64, i32, i64, u32, u64, usize);

impl From<&[&str]> for Expected {
    fn from(values: &[&str]) -> Self {
        Self::AnyOf(values.iter().copied().map(Value::from).collect())
    }
}

// ============================================================================
// RULES
// ============================================================================

crate::validator! {
    /// Validates that a value equals the target, or is one of its members.
    pub Matches { expected: Expected } for Value;
    rule(self, input) { self.expected.is_hit(input) }
    error(self, input) {
        let rule = if self.expected.is_list() { Rule::MatchAny } else { Rule::Match };
        ValidationError::new(rule).with_argument(self.expected.to_string())
    }
    new(expected: impl Into<Expected>) { Self { expected: expected.into() } }
    fn matches(expected: impl Into<Expected>);
}

crate::validator! {
    /// Validates that a value differs from the target, or is none of its members.
    pub NoMatch { expected: Expected } for Value;
    rule(self, input) { !self.expected.is_hit(input) }
    error(self, input) {
        let rule = if self.expected.is_list() { Rule::NoMatchAny } else { Rule::NoMatch };
        ValidationError::new(rule).with_argument(self.expected.to_string())
    }
    new(expected: impl Into<Expected>) { Self { expected: expected.into() } }
    fn no_match(expected: impl Into<Expected>);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;

    #[test]
    fn test_scalar_match() {
        let user = Value::from("superuser");
        assert!(matches("superuser").validate(&user).is_ok());
        assert!(matches("megauser").validate(&user).is_err());
        assert!(matches(String::from("superuser")).validate(&user).is_ok());
    }

    #[test]
    fn test_scalar_no_match() {
        let user = Value::from("superuser");
        assert!(no_match("superuserX").validate(&user).is_ok());
        assert!(no_match("superuser").validate(&user).is_err());
    }

    #[test]
    fn test_list_membership() {
        let user = Value::from("superuser");
        assert!(matches(vec!["superuser", "megauser"]).validate(&user).is_ok());
        assert!(matches(["a", "b"]).validate(&user).is_err());
        assert!(no_match(["superuserX", "megauser"]).validate(&user).is_ok());
        assert!(no_match(["superuser", "megauser"]).validate(&user).is_err());
    }

    #[test]
    fn test_strictness_across_shapes() {
        assert!(matches(18).validate(&Value::from(18)).is_ok());
        assert!(matches(18).validate(&Value::from("18")).is_err());
        assert!(matches(Value::Absent).validate(&Value::Absent).is_ok());
        assert!(matches([1, 2, 3]).validate(&Value::from("2")).is_err());
    }

    #[test]
    fn test_error_rule_depends_on_target_shape() {
        let user = Value::from("superuser");

        let error = matches("megauser").validate(&user).unwrap_err();
        assert_eq!(error.rule, Rule::Match);
        assert_eq!(error.argument.as_deref(), Some("megauser"));

        let error = no_match(["superuser", "megauser"]).validate(&user).unwrap_err();
        assert_eq!(error.rule, Rule::NoMatchAny);
        assert_eq!(error.argument.as_deref(), Some("superuser,megauser"));
    }

    #[test]
    fn test_list_display_skips_absent() {
        let expected = Expected::AnyOf(vec![Value::from("a"), Value::Absent, Value::from(2)]);
        assert_eq!(expected.to_string(), "a,,2");
    }
}
