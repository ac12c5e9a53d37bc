//! Text rule chains.
//!
//! This module provides [`TextRules`] for validating optional string
//! properties with required, length and pattern constraints.

use regex::Regex;
use stillwater::Validation;

use crate::error::{FieldError, FieldErrors};
use crate::ValidationResult;

use super::{display_name, EMAIL_PATTERN, PHONE_PATTERN};

/// A constraint applied to a text property.
#[derive(Clone)]
enum TextConstraint {
    NotEmpty {
        message: Option<String>,
    },
    Length {
        min: usize,
        max: usize,
        message: Option<String>,
    },
    Pattern {
        regex: Regex,
        kind: PatternKind,
        message: Option<String>,
    },
}

/// What a pattern constraint checks, used for its default message.
#[derive(Clone, Copy, PartialEq, Eq)]
enum PatternKind {
    Email,
    Phone,
    Custom,
}

/// An ordered chain of rules for one text property.
///
/// Every rule runs on every call; failures are accumulated in the order the
/// rules were added. `not_empty` is the only rule that looks at absent values.
/// The others skip `None` and treat any present string, including `""`, as
/// input to check.
///
/// # Example
///
/// ```rust
/// use vbapi::rules::Rules;
///
/// let rules = Rules::text("Name")
///     .not_empty()
///     .error("Name is required.")
///     .length(10, 250)
///     .error("Name must be between 10 and 250 characters.");
///
/// // An empty string is present but blank: both rules fail.
/// let result = rules.validate(Some(""));
/// assert_eq!(result.into_result().unwrap_err().len(), 2);
///
/// // An absent value only fails `not_empty`.
/// let result = rules.validate(None);
/// assert_eq!(result.into_result().unwrap_err().len(), 1);
/// ```
#[derive(Clone)]
pub struct TextRules {
    field: String,
    constraints: Vec<TextConstraint>,
}

impl TextRules {
    /// Creates an empty rule chain for the named property.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            constraints: Vec::new(),
        }
    }

    /// Fails when the value is absent, empty, or whitespace only.
    pub fn not_empty(mut self) -> Self {
        self.constraints
            .push(TextConstraint::NotEmpty { message: None });
        self
    }

    /// Requires the length in characters to lie within `min..=max`.
    pub fn length(mut self, min: usize, max: usize) -> Self {
        self.constraints.push(TextConstraint::Length {
            min,
            max,
            message: None,
        });
        self
    }

    /// Requires the value to match `pattern`.
    ///
    /// Returns an error if the regex pattern is invalid.
    ///
    /// ```rust
    /// use vbapi::rules::Rules;
    ///
    /// let rules = Rules::text("Code").pattern(r"^[A-Z]{3}$").unwrap();
    /// assert!(rules.validate(Some("ABC")).is_success());
    /// assert!(rules.validate(Some("abc")).is_failure());
    /// ```
    pub fn pattern(self, pattern: &str) -> Result<Self, regex::Error> {
        self.push_pattern(pattern, PatternKind::Custom)
    }

    /// Requires a well-formed email address.
    pub fn email(self) -> Result<Self, regex::Error> {
        self.push_pattern(EMAIL_PATTERN, PatternKind::Email)
    }

    /// Requires an international phone number such as `+90 555 123 4567`.
    pub fn phone(self) -> Result<Self, regex::Error> {
        self.push_pattern(PHONE_PATTERN, PatternKind::Phone)
    }

    fn push_pattern(mut self, pattern: &str, kind: PatternKind) -> Result<Self, regex::Error> {
        let regex = Regex::new(pattern)?;
        self.constraints.push(TextConstraint::Pattern {
            regex,
            kind,
            message: None,
        });
        Ok(self)
    }

    /// Replaces the message of the most recently added rule.
    ///
    /// Has no effect when the chain is still empty.
    pub fn error(mut self, message: impl Into<String>) -> Self {
        if let Some(last) = self.constraints.last_mut() {
            match last {
                TextConstraint::NotEmpty { message: m } => *m = Some(message.into()),
                TextConstraint::Length { message: m, .. } => *m = Some(message.into()),
                TextConstraint::Pattern { message: m, .. } => *m = Some(message.into()),
            }
        }
        self
    }

    /// Runs every rule against `value`.
    pub fn validate(&self, value: Option<&str>) -> ValidationResult<()> {
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

    fn check(&self, constraint: &TextConstraint, value: Option<&str>) -> Option<FieldError> {
        match constraint {
            TextConstraint::NotEmpty { message } => {
                if value.is_some_and(|s| !s.trim().is_empty()) {
                    return None;
                }
                let msg = message
                    .clone()
                    .unwrap_or_else(|| format!("'{}' must not be empty.", display_name(&self.field)));
                let error = FieldError::new(&self.field, msg).with_code("required");
                Some(match value {
                    Some(s) => error.with_attempted(s),
                    None => error,
                })
            }
            TextConstraint::Length { min, max, message } => {
                let s = value?;
                let len = s.chars().count();
                if (*min..=*max).contains(&len) {
                    return None;
                }
                let msg = message.clone().unwrap_or_else(|| {
                    format!(
                        "'{}' must be between {} and {} characters. You entered {} characters.",
                        display_name(&self.field),
                        min,
                        max,
                        len
                    )
                });
                Some(
                    FieldError::new(&self.field, msg)
                        .with_code("length")
                        .with_attempted(s),
                )
            }
            TextConstraint::Pattern {
                regex,
                kind,
                message,
            } => {
                let s = value?;
                if regex.is_match(s) {
                    return None;
                }
                let msg = message.clone().unwrap_or_else(|| {
                    let name = display_name(&self.field);
                    match kind {
                        PatternKind::Email => format!("'{}' is not a valid email address.", name),
                        PatternKind::Phone | PatternKind::Custom => {
                            format!("'{}' is not in the correct format.", name)
                        }
                    }
                });
                Some(
                    FieldError::new(&self.field, msg)
                        .with_code("format")
                        .with_attempted(s),
                )
            }
        }
    }
}
