//! Message templates
//!
//! Templates use positional placeholders: `{0}` receives the check's
//! argument and `{1}` the label of the value. A placeholder with no matching
//! argument is left in the output untouched.
//!
//! ```
//! use chainval::foundation::format_message;
//!
//! let text = format_message("{1} must be at least {0}", &[Some("16"), Some("age")]);
//! assert_eq!(text, "age must be at least 16");
//!
//! let text = format_message("{1} is odd {0} {7}", &[None, Some("x")]);
//! assert_eq!(text, "x is odd {0} {7}");
//! ```

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

use crate::foundation::Error;
use crate::rules::Rule;

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([0-9]+)\}").expect("placeholder pattern is valid"));

/// Substitutes `{N}` placeholders with `args[N]`.
///
/// Placeholders whose index is out of range, or whose argument is `None`,
/// are kept literally.
#[must_use]
pub fn format_message(template: &str, args: &[Option<&str>]) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures<'_>| {
            caps[1]
                .parse::<usize>()
                .ok()
                .and_then(|index| args.get(index).copied().flatten())
                .unwrap_or(&caps[0])
                .to_owned()
        })
        .into_owned()
}

// ============================================================================
// TEMPLATE TABLE
// ============================================================================

/// Per-validator table of message templates.
///
/// Holds only the overridden entries; every other rule falls back to its
/// built-in [`Rule::default_template`]. Serializes as a map from rule name
/// to template, so a partial table can be kept in a config file:
///
/// ```
/// use chainval::foundation::MessageTemplates;
/// use chainval::rules::Rule;
///
/// let templates = MessageTemplates::from_json(r#"{ "min_length": "{1} is too short" }"#)?;
/// assert_eq!(templates.get(Rule::MinLength), "{1} is too short");
/// assert_eq!(templates.get(Rule::MaxLength), Rule::MaxLength.default_template());
/// # Ok::<(), chainval::foundation::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageTemplates {
    overrides: BTreeMap<Rule, Cow<'static, str>>,
}

impl MessageTemplates {
    /// Creates a table with only the built-in templates.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a JSON object of rule name → template overrides.
    ///
    /// Rule names may be given in snake_case (`min_length`) or as the
    /// camelCase check name (`minLength`).
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }

    /// Returns the template in effect for `rule`.
    #[must_use]
    pub fn get(&self, rule: Rule) -> &str {
        self.overrides
            .get(&rule)
            .map_or(rule.default_template(), AsRef::as_ref)
    }

    /// Overrides the template for `rule`.
    pub fn set(&mut self, rule: Rule, template: impl Into<Cow<'static, str>>) {
        self.overrides.insert(rule, template.into());
    }

    /// Drops an override, restoring the built-in template.
    pub fn reset(&mut self, rule: Rule) {
        self.overrides.remove(&rule);
    }

    /// Returns true if `rule` has an override.
    #[must_use]
    pub fn is_overridden(&self, rule: Rule) -> bool {
        self.overrides.contains_key(&rule)
    }

    /// Merges `other` into this table; entries in `other` win.
    pub fn extend(&mut self, other: MessageTemplates) {
        self.overrides.extend(other.overrides);
    }
}
