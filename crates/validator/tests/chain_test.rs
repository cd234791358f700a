//! End-to-end chains over the fixture values.

use chainval::{Rule, Validator, Value};
use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};

const NAME: &str = "Thomas Moser";
const USER: &str = "superuser";
const PASS: &str = "Str0ngP@ss";
const EMAIL: &str = "info@donvercety.biz";
const AGE: i32 = 18;
const CRAZY: &str = "http:Ma$|er$B^|^@s^|^er$$(+_+)";
const IP: &str = "192.168.0.13";
const PAGE: &str = "https://my-page.com";
const PHONE: &str = "359882205366";
const ID: &str = "ABC001";
const HELLO: &str = "aGVsbG8=";

#[fixture]
fn v() -> Validator {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
    Validator::new()
}

// ============================================================================
// RANGE
// ============================================================================

#[rstest]
#[case::above_min(16, true)]
#[case::at_min(18, true)]
#[case::below_min(21, false)]
fn min(mut v: Validator, #[case] bound: i32, #[case] valid: bool) {
    assert_eq!(v.validate(AGE).min(bound).is_valid(), valid);
}

#[rstest]
#[case::below_max(56, true)]
#[case::at_max(18, true)]
#[case::above_max(11, false)]
fn max(mut v: Validator, #[case] bound: i32, #[case] valid: bool) {
    assert_eq!(v.validate(AGE).max(bound).is_valid(), valid);
}

#[rstest]
fn exact(mut v: Validator) {
    assert!(v.validate(AGE).exact(18).is_valid());
    assert!(v.validate("18").exact(18).is_valid());
    assert!(!v.validate(AGE).exact(19).is_valid());
}

#[rstest]
fn min_and_max_on_text_report_numeric_first(mut v: Validator) {
    assert!(!v.validate_as(USER, "user").min(1).max(100).is_valid());
    assert_eq!(
        v.get_errors(),
        Some(vec![
            "user must contain only numbers",
            "user integer value must be at least 1",
            "user must contain only numbers",
            "user integer value must not exceed 100",
        ])
    );
}

// ============================================================================
// LENGTH
// ============================================================================

#[rstest]
#[case::user_min(Value::from(USER), Rule::MinLength, 8, true)]
#[case::page_max(Value::from(PAGE), Rule::MaxLength, 50, true)]
#[case::id_exact(Value::from(ID), Rule::ExactLength, 6, true)]
#[case::user_min_too_long(Value::from(USER), Rule::MinLength, 18, false)]
#[case::crazy_max(Value::from(CRAZY), Rule::MaxLength, 11, false)]
#[case::phone_exact(Value::from(PHONE), Rule::ExactLength, 6, false)]
#[case::absent_min_zero(Value::Absent, Rule::MinLength, 0, false)]
fn length(
    mut v: Validator,
    #[case] value: Value,
    #[case] rule: Rule,
    #[case] n: usize,
    #[case] valid: bool,
) {
    v.validate(value);
    match rule {
        Rule::MinLength => v.min_length(n),
        Rule::MaxLength => v.max_length(n),
        Rule::ExactLength => v.exact_length(n),
        other => panic!("not a length rule: {other}"),
    };
    assert_eq!(v.is_valid(), valid);
}

#[rstest]
fn length_counts_characters(mut v: Validator) {
    assert!(v.validate("héllo").exact_length(5).is_valid());
}

// ============================================================================
// EQUALITY
// ============================================================================

#[rstest]
fn match_scalar(mut v: Validator) {
    assert!(v.validate(USER).r#match("superuser").is_valid());
    assert!(!v.validate(USER).r#match("megauser").is_valid());
}

#[rstest]
fn matches_is_an_alias(mut v: Validator) {
    assert!(v.validate(USER).matches("superuser").is_valid());
    assert!(!v.validate(USER).matches("megauser").is_valid());
    assert!(v.validate(USER).matches(["superuser", "megauser"]).is_valid());
}

#[rstest]
fn no_match(mut v: Validator) {
    assert!(v.validate(USER).no_match("superuserX").is_valid());
    assert!(!v.validate(USER).no_match("superuser").is_valid());
    assert!(v.validate(USER).no_match(["superuserX", "megauser"]).is_valid());
    assert!(!v.validate(USER).no_match(vec!["superuser", "megauser"]).is_valid());
}

#[rstest]
fn match_is_strict(mut v: Validator) {
    assert!(!v.validate("18").r#match(18).is_valid());
    assert!(v.validate(AGE).r#match(18).is_valid());
}

#[rstest]
fn equality_messages(mut v: Validator) {
    v.validate(USER).no_match("superuser").is_valid();
    assert_eq!(v.get_errors(), Some(vec!["field must not match: superuser"]));

    v.validate(USER).no_match(["superuser", "megauser"]).is_valid();
    assert_eq!(
        v.get_errors(),
        Some(vec!["field must not match any of: superuser,megauser"])
    );

    v.validate(USER).r#match(["root", "admin"]).is_valid();
    assert_eq!(
        v.get_errors(),
        Some(vec!["field does not match any of: root,admin"])
    );
}

// ============================================================================
// PATTERNS AND FORMATS
// ============================================================================

#[rstest]
fn character_classes(mut v: Validator) {
    assert!(v.validate(USER).is_alpha().is_valid());
    assert!(v.validate(PHONE).is_numeric().is_valid());
    assert!(v.validate(ID).is_alpha_numeric().is_valid());
    assert!(v.validate(PHONE).is_alpha_numeric().is_valid());
    assert!(v.validate(AGE).is_integer().is_valid());
    assert!(v.validate("c0ffee").is_hex().is_valid());

    assert!(!v.validate(ID).is_alpha().is_valid());
    assert!(!v.validate(IP).is_alpha_numeric().is_valid());
    assert!(!v.validate(IP).is_alpha_dash().is_valid());
}

#[rstest]
#[case::hello(HELLO, true)]
#[case::big(
    "QmFzZTY0IGlzIGEgZ2VuZXJpYyB0ZXJtIGZvciBhIG51bWJlciBvZiBzaW1pbGFyIGVuY29kaW5nIHNjaGVtZXMgdGhhdCBlbmNvZGUgYmluYXJ5IGRhdGEgYnkgdHJlYXRpbmcgaXQgbnVtZXJpY2FsbHkgYW5kIHRyYW5zbGF0aW5nIGl0IGludG8gYSBiYXNlIDY0IHJlcHJlc2VudGF0aW9uLiBUaGUgQmFzZTY0IHRlcm0gb3JpZ2luYXRlcyBmcm9tIGEgc3BlY2lmaWMgTUlNRSBjb250ZW50IHRyYW5zZmVyIGVuY29kaW5nLg==",
    true
)]
#[case::crazy(CRAZY, false)]
#[case::page(PAGE, false)]
#[case::space(" ", false)]
fn base64(mut v: Validator, #[case] value: &str, #[case] valid: bool) {
    assert_eq!(v.validate(value).is_base64().is_valid(), valid);
}

#[rstest]
fn formats(mut v: Validator) {
    assert!(v.validate(IP).is_ip().is_valid());
    assert!(v.validate(EMAIL).is_email().is_valid());
    assert!(v.validate(PAGE).is_url().is_valid());
    assert!(v.validate(CRAZY).no_whitespace().is_valid());

    assert!(!v.validate(PHONE).is_ip().is_valid());
    assert!(!v.validate(PASS).is_email().is_valid());
    assert!(!v.validate(EMAIL).is_url().is_valid());
    assert!(!v.validate(CRAZY).is_url().is_valid());
    assert!(!v.validate(NAME).no_whitespace().is_valid());
    assert!(!v.validate(PAGE).is_email().is_valid());
    assert!(!v.validate("n@ai").is_email().is_valid());
}

#[rstest]
fn json(mut v: Validator) {
    assert!(v.validate(r#"{"user": "superuser", "age": 18}"#).is_json().is_valid());
    assert!(!v.validate_as("{user: superuser}", "payload").is_json().is_valid());
    assert_eq!(v.get_errors(), Some(vec!["payload is not a valid JSON string"]));
}

// ============================================================================
// LIFECYCLE
// ============================================================================

#[rstest]
fn full_registration_form(mut v: Validator) {
    assert!(
        v.validate_as(USER, "user")
            .required()
            .min_length(8)
            .max_length(20)
            .is_alpha_dash()
            .is_valid()
    );
    assert!(v.validate_as(EMAIL, "email").required().is_email().is_valid());
    assert!(
        v.validate_as(AGE, "age")
            .required()
            .is_integer()
            .min(16)
            .max(56)
            .is_valid()
    );
    assert!(v.validate_as(HELLO, "avatar").is_base64().is_valid());
}

#[rstest]
fn errors_accumulate_in_check_order(mut v: Validator) {
    let valid = v
        .validate_as(NAME, "name")
        .is_alpha()
        .no_whitespace()
        .max_length(5)
        .required()
        .is_valid();

    assert!(!valid);
    assert_eq!(
        v.get_errors(),
        Some(vec![
            "name must contain only alphabetical characters",
            "must not use whitespace character in name",
            "name must not exceed 5 characters in length",
        ])
    );
}

#[rstest]
fn required_rejects_absent_and_empty(mut v: Validator) {
    assert!(!v.validate(None::<&str>).required().is_valid());
    assert!(!v.validate("").required().is_valid());
    assert!(v.validate(0).required().is_valid());
    assert!(v.validate(" ").required().is_valid());
}

#[rstest]
fn absent_value_fails_format_checks(mut v: Validator) {
    assert!(!v.validate(Value::Absent).is_numeric().is_valid());
    assert!(!v.validate(Value::Absent).is_base64().is_valid());
    assert!(!v.validate(Value::Absent).is_json().is_valid());
    assert!(!v.validate(Value::Absent).no_whitespace().is_valid());
}

#[rstest]
fn errors_survive_until_next_close(mut v: Validator) {
    assert!(!v.validate(PHONE).is_ip().is_valid());
    v.validate(IP).is_ip();
    assert_eq!(v.get_errors(), Some(vec!["field must contain a valid IP"]));

    assert!(v.is_valid());
    assert_eq!(v.get_errors(), None);
}

#[rstest]
fn unfinished_chain_does_not_leak(mut v: Validator) {
    v.validate(PHONE).is_ip().is_email();
    assert_eq!(v.pending().len(), 2);

    assert!(v.validate(IP).is_ip().is_valid());
    assert!(v.last_errors().is_empty());
}
