//! Error types for validation failures.
//!
//! This module provides field-scoped error values carrying the property name,
//! message, machine code and the value that was attempted.

mod field_error;

pub use field_error::{FieldError, FieldErrors};
