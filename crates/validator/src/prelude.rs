//! Prelude module for convenient imports.
//!
//! Provides a single `use chainval::prelude::*;` import that brings in the
//! validator, its error types, the rule registry and every rule factory.
//!
//! # Examples
//!
//! ```rust
//! use chainval::prelude::*;
//!
//! let mut v = Validator::new();
//! assert!(v.validate(18).check(&min(16)).check(&max(56)).is_valid());
//! ```

// ============================================================================
// CHAIN: The fluent validator
// ============================================================================

pub use crate::chain::{Validator, ValidatorBuilder};

// ============================================================================
// FOUNDATION: Traits, values, errors, messages
// ============================================================================

pub use crate::foundation::{
    Error, MessageTemplates, Validate, ValidationError, ValidationErrors, Value,
};

// ============================================================================
// RULES: Registry and built-in rules
// ============================================================================

#[allow(clippy::wildcard_imports)]
pub use crate::rules::*;
