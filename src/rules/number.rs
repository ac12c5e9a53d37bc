//! Numeric rule chains.
//!
//! This module provides [`NumberRules`] for validating optional numeric
//! properties, generic over any ordered, displayable number type (`f64`,
//! `rust_decimal::Decimal`, integers).

use std::fmt::Display;

use stillwater::Validation;

use crate::error::{FieldError, FieldErrors};
use crate::ValidationResult;

use super::display_name;

/// A constraint applied to a numeric property.
#[derive(Clone)]
enum NumberConstraint<N> {
    Required { message: Option<String> },
    Between { min: N, max: N, message: Option<String> },
}

/// An ordered chain of rules for one numeric property.
///
/// ```rust
/// use rust_decimal::Decimal;
/// use vbapi::rules::Rules;
///
/// let rules = Rules::number::<Decimal>("HourlySalary")
///     .required()
///     .inclusive_between(Decimal::from(30), Decimal::from(400));
///
/// assert!(rules.validate(Some(Decimal::from(30))).is_success());
///
/// // Absence is a `required` failure, never a range failure.
/// let errors = rules.validate(None).into_result().unwrap_err();
/// assert_eq!(errors.len(), 1);
/// assert_eq!(errors.first().code, "required");
/// ```
#[derive(Clone)]
pub struct NumberRules<N> {
    field: String,
    constraints: Vec<NumberConstraint<N>>,
}

impl<N> NumberRules<N>
where
    N: PartialOrd + Copy + Display,
{
    /// Creates an empty rule chain for the named property.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            constraints: Vec::new(),
        }
    }

    /// Returns the property name errors are reported against.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Fails when the value is absent.
    pub fn required(mut self) -> Self {
        self.constraints
            .push(NumberConstraint::Required { message: None });
        self
    }

    /// Requires a present value to lie within `min..=max`.
    pub fn inclusive_between(mut self, min: N, max: N) -> Self {
        self.constraints.push(NumberConstraint::Between {
            min,
            max,
            message: None,
        });
        self
    }

    /// Replaces the message of the most recently added rule.
    pub fn error(mut self, message: impl Into<String>) -> Self {
        if let Some(last) = self.constraints.last_mut() {
            match last {
                NumberConstraint::Required { message: m } => *m = Some(message.into()),
                NumberConstraint::Between { message: m, .. } => *m = Some(message.into()),
            }
        }
        self
    }

    /// Runs every rule against `value`.
    pub fn validate(&self, value: Option<N>) -> ValidationResult<()> {
        let errors: Vec<FieldError> = self
            .constraints
            .iter()
            .filter_map(|c| self.check(c, value))
            .collect();

        match FieldErrors::from_vec(errors) {
            None => Validation::Success(()),
            Some(errors) => Validation::Failure(errors),
        }
    }

    fn check(&self, constraint: &NumberConstraint<N>, value: Option<N>) -> Option<FieldError> {
        match constraint {
            NumberConstraint::Required { message } => {
                if value.is_some() {
                    return None;
                }
                let msg = message
                    .clone()
                    .unwrap_or_else(|| format!("'{}' must not be empty.", display_name(&self.field)));
                Some(FieldError::new(&self.field, msg).with_code("required"))
            }
            NumberConstraint::Between { min, max, message } => {
                let n = value?;
                if *min <= n && n <= *max {
                    return None;
                }
                let msg = message.clone().unwrap_or_else(|| {
                    format!(
                        "'{}' must be between {} and {}. You entered {}.",
                        display_name(&self.field),
                        min,
                        max,
                        n
                    )
                });
                Some(
                    FieldError::new(&self.field, msg)
                        .with_code("range")
                        .with_attempted(n.to_string()),
                )
            }
        }
    }
}
