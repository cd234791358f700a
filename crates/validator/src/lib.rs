//! # chainval
//!
//! A fluent, chainable validator for single input values.
//!
//! ## Quick Start
//!
//! ```rust
//! use chainval::prelude::*;
//!
//! let mut v = Validator::new();
//!
//! assert!(v.validate_as("superuser", "user").required().min_length(8).is_alpha().is_valid());
//!
//! assert!(!v.validate_as("192.168.0.13", "page").is_url().is_valid());
//! assert_eq!(v.get_errors(), Some(vec!["page must contain a valid URL"]));
//! ```
//!
//! ## How it fits together
//!
//! - [`Validator`] holds the subject value, its label and the pending
//!   errors of the current chain.
//! - Each check runs a rule from [`rules`]. Rules implement
//!   [`Validate`](foundation::Validate) and are also usable on their own.
//! - Failures are rendered through a per-validator
//!   [`MessageTemplates`](foundation::MessageTemplates) table, keyed by
//!   [`Rule`](rules::Rule). `{0}` is the check's argument, `{1}` the label.
//!
//! ## Custom rules
//!
//! Use the [`validator!`] macro, or implement
//! [`Validate`](foundation::Validate) by hand, then run the rule with
//! [`Validator::check`].

// ValidationError is returned by value from every rule; boxing it would add
// an allocation to each failed check.
#![allow(clippy::result_large_err)]

pub mod chain;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod rules;

pub use chain::{Validator, ValidatorBuilder};
pub use foundation::{Error, ValidationError, ValidationErrors, Value};
pub use rules::Rule;
