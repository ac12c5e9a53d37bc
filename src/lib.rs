//! # vbapi
//!
//! An HTTP API that accepts employee and staff records and validates them
//! against business rules, reporting ALL rule violations in a single response
//! rather than the first one found.
//!
//! ## Overview
//!
//! Each record type has a validator built from per-property rule chains plus
//! any cross-field checks. Rule chains accumulate failures through
//! stillwater's `Validation` type, so a caller can fix every problem in one
//! round-trip.
//!
//! ## Core Types
//!
//! - [`FieldError`]: a single rule failure (property, message, code, attempted value)
//! - [`FieldErrors`]: a non-empty, ordered collection of failures
//! - [`rules::TextRules`] / [`rules::NumberRules`]: per-property rule chains
//! - [`rules::Validator`]: the seam the HTTP layer depends on
//! - [`employee::EmployeeValidator`] / [`staff::StaffValidator`]: the two record validators
//!
//! ## Example
//!
//! ```rust
//! use vbapi::rules::Validator;
//! use vbapi::staff::{Staff, StaffValidator};
//!
//! let validator = StaffValidator::new().unwrap();
//!
//! let errors = validator.errors(&Staff {
//!     name: Some("Short".into()),
//!     ..Staff::default()
//! });
//!
//! // Name is too short; Email, Phone and HourlySalary are missing.
//! assert_eq!(errors.len(), 4);
//! ```

pub mod api;
pub mod clock;
pub mod config;
pub mod employee;
pub mod error;
pub mod rules;
pub mod staff;
pub mod wire;

pub use error::{FieldError, FieldErrors};

/// Type alias for validation results using FieldErrors
pub type ValidationResult<T> = stillwater::Validation<T, FieldErrors>;
