//! Core validation types and traits
//!
//! This module contains the building blocks the fluent validator is made of:
//!
//! - **Value**: [`Value`], the text / number / absent subject of a chain
//! - **Traits**: [`Validate`], implemented by every rule
//! - **Errors**: [`ValidationError`], [`ValidationErrors`], [`Error`]
//! - **Messages**: [`format_message`], [`MessageTemplates`]
//!
//! # Architecture
//!
//! ## 1. Rules are pure
//!
//! A rule looks at a [`Value`] and either passes or returns a
//! [`ValidationError`] naming itself and its argument. It knows nothing
//! about labels or message tables:
//!
//! ```
//! use chainval::foundation::{Validate, Value};
//! use chainval::rules::min_length;
//!
//! let error = min_length(8).validate(&Value::from("alice")).unwrap_err();
//! assert_eq!(error.argument.as_deref(), Some("8"));
//! assert_eq!(error.param("actual"), Some("5"));
//! ```
//!
//! ## 2. Messages are rendered late
//!
//! The chain attaches the label and renders the error through its own
//! template table, so two validators can word the same rule differently:
//!
//! ```
//! use chainval::foundation::{MessageTemplates, ValidationError};
//! use chainval::rules::Rule;
//!
//! let mut templates = MessageTemplates::new();
//! templates.set(Rule::MinLength, "{1}: {0}+ chars please");
//!
//! let error = ValidationError::new(Rule::MinLength)
//!     .with_argument("8")
//!     .with_field("password")
//!     .render(templates.get(Rule::MinLength));
//! assert_eq!(error.message, "password: 8+ chars please");
//! ```

// Module declarations
pub mod error;
pub mod message;
pub mod traits;
pub mod value;

// Re-export everything at the foundation level for convenience
pub use error::{Error, ValidationError, ValidationErrors};
pub use message::{MessageTemplates, format_message};
pub use traits::Validate;
pub use value::Value;

