//! Field-scoped validation error types.
//!
//! This module provides [`FieldError`] for a single rule failure and
//! [`FieldErrors`] for accumulating every failure of a record.

use std::fmt::{self, Display};

use serde::Serialize;
use stillwater::prelude::*;

/// A single rule failure on one property of a record.
///
/// `FieldError` captures everything a caller needs to fix the input:
/// - **field**: the property name as exposed to clients (e.g. `HourlySalary`)
/// - **message**: human-readable description of the failure
/// - **attempted**: the rejected value rendered as text, if one was supplied
/// - **code**: machine-readable rule code (`required`, `length`, `format`, ...)
///
/// The serialized form uses the property names API clients already consume:
/// `propertyName`, `errorMessage`, `attemptedValue` and `errorCode`.
///
/// # Example
///
/// ```rust
/// use vbapi::FieldError;
///
/// let error = FieldError::new("Email", "Email address is not valid.")
///     .with_code("format")
///     .with_attempted("not-an-email");
///
/// assert_eq!(error.code, "format");
/// assert_eq!(error.attempted.as_deref(), Some("not-an-email"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    /// The property that failed validation.
    #[serde(rename = "propertyName")]
    pub field: String,
    /// Human-readable error message.
    #[serde(rename = "errorMessage")]
    pub message: String,
    /// The value that was received, formatted as a string.
    #[serde(rename = "attemptedValue")]
    pub attempted: Option<String>,
    /// Machine-readable rule code.
    #[serde(rename = "errorCode")]
    pub code: String,
}

impl FieldError {
    /// Creates a new field error with the given property name and message.
    ///
    /// The code defaults to "validation_error". Use `with_code` to set the
    /// code of the rule that failed.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            attempted: None,
            code: "validation_error".to_string(),
        }
    }

    /// Sets the error code and returns self for chaining.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    /// Sets the attempted value and returns self for chaining.
    pub fn with_attempted(mut self, attempted: impl Into<String>) -> Self {
        self.attempted = Some(attempted.into());
        self
    }
}

impl Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)?;
        if let Some(ref attempted) = self.attempted {
            write!(f, " (got: {})", attempted)?;
        }
        Ok(())
    }
}

impl std::error::Error for FieldError {}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<FieldError>();
    assert_sync::<FieldError>();
};

/// A non-empty, ordered collection of field errors.
///
/// `FieldErrors` wraps a `NonEmptyVec<FieldError>` so a failed validation
/// always carries at least one error. It implements `Semigroup`, which is how
/// the per-field results of a validator are merged without losing order.
///
/// ```rust
/// use vbapi::{FieldError, FieldErrors};
/// use stillwater::prelude::*;
///
/// let name = FieldErrors::single(FieldError::new("Name", "Name is required."));
/// let email = FieldErrors::single(FieldError::new("Email", "Email is required."));
///
/// let combined = name.combine(email);
/// assert_eq!(combined.len(), 2);
/// assert_eq!(combined.first().field, "Name");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FieldErrors(NonEmptyVec<FieldError>);

impl FieldErrors {
    /// Creates a `FieldErrors` containing a single error.
    pub fn single(error: FieldError) -> Self {
        Self(NonEmptyVec::singleton(error))
    }

    /// Creates a `FieldErrors` from a `Vec`, or `None` if the vec is empty.
    pub fn from_vec(errors: Vec<FieldError>) -> Option<Self> {
        let mut iter = errors.into_iter();
        let head = Self::single(iter.next()?);
        Some(iter.fold(head, |acc, e| acc.combine(Self::single(e))))
    }

    /// Returns the number of errors in this collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; the collection is non-empty by construction.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns an iterator over the contained errors.
    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    /// Returns the first error in the collection.
    pub fn first(&self) -> &FieldError {
        self.0.head()
    }

    /// Returns all errors reported for `field`.
    pub fn for_field(&self, field: &str) -> Vec<&FieldError> {
        self.0.iter().filter(|e| e.field == field).collect()
    }

    /// Returns all errors with the given rule code.
    pub fn with_code(&self, code: &str) -> Vec<&FieldError> {
        self.0.iter().filter(|e| e.code == code).collect()
    }

    /// Returns just the messages, in order.
    pub fn messages(&self) -> Vec<String> {
        self.0.iter().map(|e| e.message.clone()).collect()
    }

    /// Converts this collection into a `Vec<FieldError>`.
    pub fn into_vec(self) -> Vec<FieldError> {
        self.0.into_vec()
    }
}

impl Semigroup for FieldErrors {
    fn combine(self, other: Self) -> Self {
        FieldErrors(self.0.combine(other.0))
    }
}

impl Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation failed with {} error(s):", self.len())?;
        for (i, error) in self.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

impl Serialize for FieldErrors {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.iter())
    }
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<FieldErrors>();
    assert_sync::<FieldErrors>();
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_error_creation() {
        let error = FieldError::new("Name", "Name is required.");

        assert_eq!(error.field, "Name");
        assert_eq!(error.message, "Name is required.");
        assert_eq!(error.code, "validation_error");
        assert!(error.attempted.is_none());
    }

    #[test]
    fn test_field_error_builder() {
        let error = FieldError::new("HourlySalary", "out of range")
            .with_code("range")
            .with_attempted("10");

        assert_eq!(error.code, "range");
        assert_eq!(error.attempted, Some("10".to_string()));
    }

    #[test]
    fn test_field_error_display() {
        let error = FieldError::new("Phone", "Phone is not valid.").with_attempted("123");
        assert_eq!(error.to_string(), "Phone: Phone is not valid. (got: 123)");
    }

    #[test]
    fn test_field_error_serializes_client_names() {
        let error = FieldError::new("Email", "Email. address is not valid")
            .with_code("format")
            .with_attempted("bad");

        let value = serde_json::to_value(&error).unwrap();
        assert_eq!(value["propertyName"], "Email");
        assert_eq!(value["errorMessage"], "Email. address is not valid");
        assert_eq!(value["attemptedValue"], "bad");
        assert_eq!(value["errorCode"], "format");
    }

    #[test]
    fn test_from_vec_empty_is_none() {
        assert!(FieldErrors::from_vec(Vec::new()).is_none());
    }

    #[test]
    fn test_combine_preserves_order() {
        let errors = FieldErrors::single(FieldError::new("Name", "1"))
            .combine(FieldErrors::single(FieldError::new("Email", "2")))
            .combine(FieldErrors::single(FieldError::new("Phone", "3")));

        assert_eq!(errors.messages(), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_for_field_and_with_code() {
        let errors = FieldErrors::single(
            FieldError::new("Name", "Name is required").with_code("required"),
        )
        .combine(FieldErrors::single(
            FieldError::new("Name", "Name must be 10 and 250 characters").with_code("length"),
        ))
        .combine(FieldErrors::single(
            FieldError::new("Email", "Emailis required").with_code("required"),
        ));

        assert_eq!(errors.for_field("Name").len(), 2);
        assert_eq!(errors.with_code("required").len(), 2);
        assert_eq!(errors.with_code("length").len(), 1);
    }

    #[test]
    fn test_field_errors_serialize_as_array() {
        let errors = FieldErrors::single(FieldError::new("Name", "a"))
            .combine(FieldErrors::single(FieldError::new("Email", "b")));

        let value = serde_json::to_value(&errors).unwrap();
        assert_eq!(value.as_array().map(|a| a.len()), Some(2));
        assert_eq!(value[1]["propertyName"], "Email");
    }

    #[test]
    fn test_field_errors_display() {
        let errors = FieldErrors::single(FieldError::new("Name", "required"))
            .combine(FieldErrors::single(FieldError::new("Email", "invalid")));
        let display = errors.to_string();

        assert!(display.contains("2 error(s)"));
        assert!(display.contains("Name: required"));
        assert!(display.contains("Email: invalid"));
    }
}
