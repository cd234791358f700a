//! The subject type every check reads.
//!
//! A [`Value`] is one of three shapes: text, a number, or nothing at all.
//! Checks see the value through two lenses:
//!
//! - [`Value::as_text`]: the string form used by length and pattern checks.
//! - [`Value::as_number`]: the numeric reading used by range checks.
//!
//! Conversions exist for the common scalar types and for `Option<T>`,
//! so callers rarely construct a `Value` by hand:
//!
//! ```
//! use chainval::foundation::Value;
//!
//! assert_eq!(Value::from("18"), Value::Text("18".into()));
//! assert_eq!(Value::from(18), Value::Number(18.0));
//! assert_eq!(Value::from(None::<&str>), Value::Absent);
//! ```

use std::borrow::Cow;
use std::fmt;

/// A single subject value.
///
/// Equality is strict: both the shape and the content must agree, so
/// `Text("18")` never equals `Number(18.0)`, and `NaN` equals nothing.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// No value was supplied.
    #[default]
    Absent,
    /// A string value.
    Text(String),
    /// A numeric value.
    Number(f64),
}

impl Value {
    /// Returns true if no value was supplied.
    #[must_use]
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Returns true for absent values and empty strings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Absent => true,
            Self::Text(text) => text.is_empty(),
            Self::Number(_) => false,
        }
    }

    /// Returns the string form of the value, or `None` when absent.
    ///
    /// Numbers use the shortest representation that round-trips, so
    /// `18.0` becomes `"18"` and `1.5` becomes `"1.5"`.
    #[must_use]
    pub fn as_text(&self) -> Option<Cow<'_, str>> {
        match self {
            Self::Absent => None,
            Self::Text(text) => Some(Cow::Borrowed(text)),
            Self::Number(n) => Some(Cow::Owned(n.to_string())),
        }
    }

    /// Returns the numeric reading of the value.
    ///
    /// Text is parsed as a finite `f64` (surrounding whitespace is not
    /// trimmed); anything else has no numeric reading.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Absent => None,
            Self::Number(n) => Some(*n),
            Self::Text(text) => text.parse::<f64>().ok().filter(|n| n.is_finite()),
        }
    }

    /// Length of the string form in characters, or `None` when absent.
    #[must_use]
    pub fn char_len(&self) -> Option<usize> {
        self.as_text().map(|text| text.chars().count())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absent => f.write_str("null"),
            Self::Text(text) => f.write_str(text),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

// ============================================================================
// CONVERSIONS
// ============================================================================

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<Cow<'_, str>> for Value {
    fn from(value: Cow<'_, str>) -> Self {
        Self::Text(value.into_owned())
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

macro_rules! number_from {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Self::Number(value as f64)
                }
            }
        )+
    };
}

number_from!(f32, i8, i16, i32, i64, u8, u16, u32, u64, usize, isize);

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_form_of_numbers() {
        assert_eq!(Value::from(18).as_text().as_deref(), Some("18"));
        assert_eq!(Value::from(1.5).as_text().as_deref(), Some("1.5"));
        assert_eq!(Value::from(-3).as_text().as_deref(), Some("-3"));
        assert_eq!(Value::Absent.as_text(), None);
    }

    #[test]
    fn test_numeric_reading() {
        assert_eq!(Value::from("42").as_number(), Some(42.0));
        assert_eq!(Value::from("-0.5").as_number(), Some(-0.5));
        assert_eq!(Value::from("abc").as_number(), None);
        assert_eq!(Value::from("").as_number(), None);
        assert_eq!(Value::from("inf").as_number(), None);
        assert_eq!(Value::Absent.as_number(), None);
    }

    #[test]
    fn test_strict_equality() {
        assert_ne!(Value::from("18"), Value::from(18));
        assert_ne!(Value::from(f64::NAN), Value::from(f64::NAN));
        assert_eq!(Value::Absent, Value::from(None::<i32>));
        assert_eq!(Value::from("a"), Value::from(String::from("a")));
    }

    #[test]
    fn test_emptiness() {
        assert!(Value::Absent.is_empty());
        assert!(Value::from("").is_empty());
        assert!(!Value::from(0).is_empty());
        assert!(!Value::from(" ").is_empty());
    }

    #[test]
    fn test_char_len_counts_chars() {
        assert_eq!(Value::from("héllo").char_len(), Some(5));
        assert_eq!(Value::from(123).char_len(), Some(3));
        assert_eq!(Value::Absent.char_len(), None);
    }
}
