//! Built-in rules
//!
//! Every check the fluent [`Validator`](crate::chain::Validator) offers is
//! backed by a rule struct in this module, and every rule is named by a
//! [`Rule`] key. The key selects the message template and identifies the
//! failure in a [`ValidationError`](crate::foundation::ValidationError).
//!
//! # Categories
//!
//! - **Range**: [`Min`], [`Max`], [`Exact`]
//! - **Length**: [`MinLength`], [`MaxLength`], [`ExactLength`]
//! - **Presence**: [`Required`]
//! - **Equality**: [`Matches`], [`NoMatch`]
//! - **Pattern**: [`IsAlpha`], [`IsNumeric`], [`IsAlphaNumeric`],
//!   [`IsAlphaDash`], [`IsInteger`], [`IsHex`], [`NoWhitespace`]
//! - **Format**: [`IsBase64`], [`IsIp`], [`IsEmail`], [`IsUrl`], [`IsJson`]
//!
//! # Examples
//!
//! ```
//! use chainval::foundation::{Validate, Value};
//! use chainval::rules::{Rule, is_ip, min};
//!
//! assert!(min(16).validate(&Value::from(18)).is_ok());
//!
//! let error = is_ip().validate(&Value::from("359882205366")).unwrap_err();
//! assert_eq!(error.rule, Rule::Ip);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::foundation::Error;

pub mod equality;
pub mod format;
pub mod json;
pub mod length;
pub mod pattern;
pub mod presence;
pub mod range;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use equality::{Expected, Matches, NoMatch, matches, no_match};
pub use format::{IsBase64, IsEmail, IsIp, IsUrl, is_base64, is_email, is_ip, is_url};
pub use json::{IsJson, is_json};
pub use length::{ExactLength, MaxLength, MinLength, exact_length, max_length, min_length};
pub use pattern::{
    IsAlpha, IsAlphaDash, IsAlphaNumeric, IsHex, IsInteger, IsNumeric, NoWhitespace, is_alpha,
    is_alpha_dash, is_alpha_numeric, is_hex, is_integer, is_numeric, no_whitespace,
};
pub use presence::{Required, required};
pub use range::{Exact, Max, Min, exact, max, min};

// ============================================================================
// RULE REGISTRY
// ============================================================================

/// Names every built-in rule.
///
/// The canonical name is snake_case ([`name`](Self::name)); parsing also
/// accepts the camelCase check name ([`check_name`](Self::check_name)), so
/// `"min_length"` and `"minLength"` both resolve to [`Rule::MinLength`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Rule {
    Min,
    Max,
    Exact,
    MinLength,
    MaxLength,
    ExactLength,
    Required,
    /// Scalar equality.
    Match,
    /// Membership in a list.
    MatchAny,
    NoMatch,
    NoMatchAny,
    Alpha,
    Numeric,
    AlphaNumeric,
    AlphaDash,
    Integer,
    Hex,
    Base64,
    Ip,
    Email,
    Url,
    NoWhitespace,
    Json,
}

impl Rule {
    /// Every rule, in declaration order.
    pub const ALL: [Rule; 23] = [
        Rule::Min,
        Rule::Max,
        Rule::Exact,
        Rule::MinLength,
        Rule::MaxLength,
        Rule::ExactLength,
        Rule::Required,
        Rule::Match,
        Rule::MatchAny,
        Rule::NoMatch,
        Rule::NoMatchAny,
        Rule::Alpha,
        Rule::Numeric,
        Rule::AlphaNumeric,
        Rule::AlphaDash,
        Rule::Integer,
        Rule::Hex,
        Rule::Base64,
        Rule::Ip,
        Rule::Email,
        Rule::Url,
        Rule::NoWhitespace,
        Rule::Json,
    ];

    /// Canonical snake_case name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Rule::Min => "min",
            Rule::Max => "max",
            Rule::Exact => "exact",
            Rule::MinLength => "min_length",
            Rule::MaxLength => "max_length",
            Rule::ExactLength => "exact_length",
            Rule::Required => "required",
            Rule::Match => "match",
            Rule::MatchAny => "match_any",
            Rule::NoMatch => "no_match",
            Rule::NoMatchAny => "no_match_any",
            Rule::Alpha => "alpha",
            Rule::Numeric => "numeric",
            Rule::AlphaNumeric => "alpha_numeric",
            Rule::AlphaDash => "alpha_dash",
            Rule::Integer => "integer",
            Rule::Hex => "hex",
            Rule::Base64 => "base64",
            Rule::Ip => "ip",
            Rule::Email => "email",
            Rule::Url => "url",
            Rule::NoWhitespace => "no_whitespace",
            Rule::Json => "json",
        }
    }

    /// camelCase name of the check that records this rule.
    #[must_use]
    pub const fn check_name(self) -> &'static str {
        match self {
            Rule::Min => "min",
            Rule::Max => "max",
            Rule::Exact => "exact",
            Rule::MinLength => "minLength",
            Rule::MaxLength => "maxLength",
            Rule::ExactLength => "exactLength",
            Rule::Required => "required",
            Rule::Match => "match",
            Rule::MatchAny => "matchArray",
            Rule::NoMatch => "noMatch",
            Rule::NoMatchAny => "noMatchArray",
            Rule::Alpha => "isAlpha",
            Rule::Numeric => "isNumeric",
            Rule::AlphaNumeric => "isAlphaNumeric",
            Rule::AlphaDash => "isAlphaDash",
            Rule::Integer => "isInteger",
            Rule::Hex => "isHex",
            Rule::Base64 => "isBase64",
            Rule::Ip => "isIP",
            Rule::Email => "isEmail",
            Rule::Url => "isUrl",
            Rule::NoWhitespace => "noWhitespace",
            Rule::Json => "isJson",
        }
    }

    /// Built-in message template. `{0}` is the argument, `{1}` the label.
    #[must_use]
    pub const fn default_template(self) -> &'static str {
        match self {
            Rule::Max => "{1} integer value must not exceed {0}",
            Rule::Min => "{1} integer value must be at least {0}",
            Rule::Exact => "{1} integer value must be exactly {0}",
            Rule::MaxLength => "{1} must not exceed {0} characters in length",
            Rule::MinLength => "{1} must be at least {0} characters in length",
            Rule::ExactLength => "{1} must be exactly {0} characters in length",
            Rule::Required => "required {1} is empty or undefined",
            Rule::Match => "{1} does not match: {0}",
            Rule::MatchAny => "{1} does not match any of: {0}",
            Rule::NoMatch => "{1} must not match: {0}",
            Rule::NoMatchAny => "{1} must not match any of: {0}",
            Rule::Alpha => "{1} must contain only alphabetical characters",
            Rule::Numeric => "{1} must contain only numbers",
            Rule::AlphaNumeric => "{1} must contain only alpha-numeric characters",
            Rule::AlphaDash => {
                "{1} must contain only alpha-numeric characters, underscores, and dashes"
            }
            Rule::Integer => "{1} must contain an integer",
            Rule::Hex => "{1} must contain a valid hex value",
            Rule::Base64 => "{1} must contain a base64 string",
            Rule::Ip => "{1} must contain a valid IP",
            Rule::Email => "{1} must contain a valid email address",
            Rule::Url => "{1} must contain a valid URL",
            Rule::NoWhitespace => "must not use whitespace character in {1}",
            Rule::Json => "{1} is not a valid JSON string",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Rule {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // "hexRegex" is the historical template key for the hex check
        if s == "hexRegex" {
            return Ok(Rule::Hex);
        }
        Rule::ALL
            .into_iter()
            .find(|rule| rule.name() == s || rule.check_name() == s)
            .ok_or_else(|| Error::UnknownRule(s.to_owned()))
    }
}

impl TryFrom<String> for Rule {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rule> for &'static str {
    fn from(rule: Rule) -> Self {
        rule.name()
    }
}

// ============================================================================
// SHARED HELPERS
// ============================================================================

/// Formats a numeric threshold the way values are stringified.
pub(crate) fn display_number(n: f64) -> String {
    n.to_string()
}
