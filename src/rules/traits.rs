//! The validator seam.
//!
//! [`Validator`] is what the HTTP layer depends on. Concrete validators are
//! built once and shared behind `Arc<dyn Validator<T>>`.

use stillwater::Validation;

use crate::error::FieldError;
use crate::ValidationResult;

/// A pure mapping from a record to its field-level errors.
///
/// Implementations must evaluate every rule on every call and must not keep
/// mutable state, so a single instance can serve concurrent requests. The
/// `Send + Sync` bounds let it live in shared router state.
///
/// # Example
///
/// ```rust
/// use vbapi::rules::{Rules, TextRules, Validator};
/// use vbapi::ValidationResult;
///
/// struct Badge {
///     code: Option<String>,
/// }
///
/// struct BadgeValidator {
///     code: TextRules,
/// }
///
/// impl Validator<Badge> for BadgeValidator {
///     fn validate(&self, badge: &Badge) -> ValidationResult<()> {
///         self.code.validate(badge.code.as_deref())
///     }
/// }
///
/// let validator = BadgeValidator { code: Rules::text("Code").not_empty() };
/// assert_eq!(validator.errors(&Badge { code: None }).len(), 1);
/// ```
pub trait Validator<T>: Send + Sync {
    /// Validates `record`, accumulating every failure.
    fn validate(&self, record: &T) -> ValidationResult<()>;

    /// Returns the failures as a plain list; empty means valid.
    fn errors(&self, record: &T) -> Vec<FieldError> {
        match self.validate(record) {
            Validation::Success(()) => Vec::new(),
            Validation::Failure(errors) => errors.into_vec(),
        }
    }

    /// Returns true when `record` passes every rule.
    fn is_valid(&self, record: &T) -> bool {
        self.validate(record).is_success()
    }
}
