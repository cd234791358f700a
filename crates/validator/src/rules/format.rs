//! Format rules: base64, IPv4, email and URL
//!
//! These are practical patterns, not full RFC grammars. IPv6 addresses are
//! not recognised by [`IsIp`].

use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::{ValidationError, Value};
use crate::rules::Rule;
use crate::rules::pattern::text_matches;

static BASE64: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[A-Za-z0-9+/]{4})*(?:[A-Za-z0-9+/]{2}==|[A-Za-z0-9+/]{3}=)?$").unwrap()
});

static IPV4: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:(?:25[0-5]|2[0-4][0-9]|1[0-9]{2}|[0-9]{1,2})\.){3}(?:25[0-5]|2[0-4][0-9]|1[0-9]{2}|[0-9]{1,2})$",
    )
    .unwrap()
});

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i-u)^[a-z0-9_-]+(?:\.[a-z0-9_-]+)*@(?:[a-z0-9_-]+\.)*[a-z0-9_][a-z0-9_-]{0,66}\.[a-z]{2,6}(?:\.[a-z]{2})?$",
    )
    .unwrap()
});

// The empty alternative lets bare paths through ("/", "/x").
static URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:https?://(?:[A-Za-z0-9_]+:?[A-Za-z0-9_]*@)?\S+|)(?::[0-9]+)?(?:/|/[A-Za-z0-9_#!:.?+=&%@/-])?$",
    )
    .unwrap()
});

crate::validator! {
    /// Validates base64 text: groups of four characters from the standard
    /// alphabet, with `=` or `==` padding allowed only in the last group.
    ///
    /// The empty string is rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainval::foundation::{Validate, Value};
    /// use chainval::rules::is_base64;
    ///
    /// assert!(is_base64().validate(&Value::from("aGVsbG8=")).is_ok());
    /// assert!(is_base64().validate(&Value::from("aGVsbG8")).is_err());
    /// assert!(is_base64().validate(&Value::from("")).is_err());
    /// ```
    pub IsBase64 for Value;
    rule(input) { !input.is_empty() && text_matches(&BASE64, input) }
    error(input) { ValidationError::new(Rule::Base64) }
    fn is_base64();
}

crate::validator! {
    /// Validates a dotted-quad IPv4 address with octets in 0-255.
    pub IsIp for Value;
    rule(input) { text_matches(&IPV4, input) }
    error(input) { ValidationError::new(Rule::Ip) }
    fn is_ip();
}

crate::validator! {
    /// Validates a `local@domain.tld` email address.
    ///
    /// The local part and domain labels allow ASCII word characters, dashes
    /// and dots; the top-level domain is 2 to 6 letters, optionally followed
    /// by a two-letter suffix (`.co.uk`).
    pub IsEmail for Value;
    rule(input) { text_matches(&EMAIL, input) }
    error(input) { ValidationError::new(Rule::Email) }
    fn is_email();
}

crate::validator! {
    /// Validates an `http(s)://[user[:pass]@]host[:port][/path]` URL.
    ///
    /// The pattern is permissive: anything without whitespace after the
    /// scheme is accepted as host and path, and a bare `/` path passes.
    pub IsUrl for Value;
    rule(input) { text_matches(&URL, input) }
    error(input) { ValidationError::new(Rule::Url) }
    fn is_url();
}
