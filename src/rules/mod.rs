//! Rule chains for record validation.
//!
//! A validator is built from one rule chain per property plus any cross-field
//! checks. Each chain evaluates all of its rules and accumulates every failure
//! rather than stopping at the first one, and [`accumulate`] merges the
//! per-property results in order.
//!
//! # Example
//!
//! ```rust
//! use vbapi::rules::{accumulate, Rules};
//!
//! let name = Rules::text("Name").not_empty().length(10, 250);
//! let phone = Rules::text("Phone").not_empty().phone().unwrap();
//!
//! let result = accumulate([name.validate(Some("Short")), phone.validate(Some("123"))]);
//! assert_eq!(result.into_result().unwrap_err().len(), 2);
//! ```

mod number;
mod text;
mod traits;

pub use number::NumberRules;
pub use text::TextRules;
pub use traits::Validator;

use std::fmt::Display;

use stillwater::prelude::*;
use stillwater::Validation;

use crate::ValidationResult;

/// Email grammar: a local part, a single `@`, and a dotted domain, with no
/// whitespace anywhere.
pub const EMAIL_PATTERN: &str = r"^[^@\s]+@[^@\s]+\.[^@\s]+$";

/// International phone grammar: `+` then 7 to 15 digits, optionally separated
/// by single spaces.
pub const PHONE_PATTERN: &str = r"^\+(?:[0-9] ?){6,14}[0-9]$";

/// Entry point for creating rule chains.
pub struct Rules;

impl Rules {
    /// Creates a rule chain for a text property.
    pub fn text(field: impl Into<String>) -> TextRules {
        TextRules::new(field)
    }

    /// Creates a rule chain for a numeric property.
    pub fn number<N>(field: impl Into<String>) -> NumberRules<N>
    where
        N: PartialOrd + Copy + Display,
    {
        NumberRules::new(field)
    }
}

/// Merges validation results, keeping every failure in iteration order.
pub fn accumulate<I>(results: I) -> ValidationResult<()>
where
    I: IntoIterator<Item = ValidationResult<()>>,
{
    results
        .into_iter()
        .fold(Validation::Success(()), |acc, next| match (acc, next) {
            (Validation::Success(()), next) => next,
            (failure @ Validation::Failure(_), Validation::Success(())) => failure,
            (Validation::Failure(a), Validation::Failure(b)) => Validation::Failure(a.combine(b)),
        })
}

/// Splits a PascalCase property name into words: `HourlySalary` becomes
/// `Hourly Salary`.
pub(crate) fn display_name(field: &str) -> String {
    let mut out = String::with_capacity(field.len() + 4);
    let mut prev_lower = false;
    for c in field.chars() {
        if c.is_uppercase() && prev_lower {
            out.push(' ');
        }
        prev_lower = c.is_lowercase() || c.is_ascii_digit();
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{FieldError, FieldErrors};

    fn fail(field: &str) -> ValidationResult<()> {
        Validation::Failure(FieldErrors::single(FieldError::new(field, "bad")))
    }

    #[test]
    fn test_accumulate_empty_is_success() {
        assert!(accumulate(Vec::<ValidationResult<()>>::new()).is_success());
    }

    #[test]
    fn test_accumulate_keeps_all_failures_in_order() {
        let result = accumulate([
            fail("Name"),
            Validation::Success(()),
            fail("Email"),
            fail("Phone"),
        ]);

        let errors = result.into_result().unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["Name", "Email", "Phone"]);
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name("Name"), "Name");
        assert_eq!(display_name("HourlySalary"), "Hourly Salary");
        assert_eq!(display_name("DateOfBirth"), "Date Of Birth");
        assert_eq!(display_name("URL"), "URL");
    }
}
