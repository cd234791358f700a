//! Basic usage example for chainval

use chainval::Validator;

fn main() -> Result<(), chainval::Error> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut v = Validator::new();

    // Valid input
    if v
        .validate_as("superuser", "user")
        .required()
        .min_length(8)
        .is_alpha()
        .is_valid()
    {
        println!("✓ 'superuser' is a valid user name");
    }

    // Invalid input
    if !v.validate_as("Str0ngP@ss", "email").required().is_email().is_valid() {
        for message in v.get_errors().unwrap_or_default() {
            println!("✗ {message}");
        }
    }

    // Custom message
    v.set_msg_by_name("min", "{1} must be {0} or older")?;
    if let Err(errors) = v.validate_as(15, "age").min(16).finish() {
        println!("✗ {errors}");
    }

    Ok(())
}
