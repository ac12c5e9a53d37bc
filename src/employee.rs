//! Employee records and their validator.
//!
//! Besides the per-property rule chains, an employee is subject to two
//! date-relative checks that read the whole record:
//! - a minimum hourly salary that depends on age (senior at 30 or older)
//! - a birth date no earlier than 65 years before today

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use stillwater::Validation;

use crate::clock::{years_before, Clock, SystemClock};
use crate::error::{FieldError, FieldErrors};
use crate::rules::{accumulate, NumberRules, Rules, TextRules, Validator};
use crate::wire::{self, null_as_default};
use crate::ValidationResult;

/// Age from which the senior salary minimum applies.
pub const SENIOR_AGE: u32 = 30;

/// Birth dates earlier than this many years before today are rejected.
pub const MAX_AGE: u32 = 65;

/// An employee submitted for acceptance.
///
/// Every property is always present. Keys missing from the JSON body (or sent
/// as `null`) take their default value, so the validator reports them instead
/// of the request failing to parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Employee {
    #[serde(alias = "Name", deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(alias = "DateOfBirth", with = "wire::date_time")]
    pub date_of_birth: NaiveDateTime,
    #[serde(alias = "Email", deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(alias = "Phone", deserialize_with = "null_as_default")]
    pub phone: String,
    #[serde(alias = "HourlySalary", deserialize_with = "null_as_default")]
    pub hourly_salary: f64,
}

impl Default for Employee {
    fn default() -> Self {
        Self {
            name: String::new(),
            date_of_birth: NaiveDateTime::MIN,
            email: String::new(),
            phone: String::new(),
            hourly_salary: 0.0,
        }
    }
}

/// Minimum hourly salaries by age tier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinimumSalary {
    /// Minimum below [`SENIOR_AGE`].
    pub junior: f64,
    /// Minimum at or above [`SENIOR_AGE`].
    pub senior: f64,
}

impl Default for MinimumSalary {
    fn default() -> Self {
        Self {
            junior: 50.0,
            senior: 200.0,
        }
    }
}

/// Validates [`Employee`] records.
///
/// Errors are reported in property order: Name, Email, Phone, HourlySalary,
/// DateOfBirth.
///
/// # Example
///
/// ```rust
/// use chrono::NaiveDate;
/// use vbapi::clock::FixedClock;
/// use vbapi::employee::{Employee, EmployeeValidator};
/// use vbapi::rules::Validator;
///
/// let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
/// let validator = EmployeeValidator::with_clock(FixedClock(today)).unwrap();
///
/// let employee = Employee {
///     name: "Ayse Yilmaz Demir".into(),
///     date_of_birth: NaiveDate::from_ymd_opt(1990, 3, 1).unwrap().and_hms_opt(0, 0, 0).unwrap(),
///     email: "ayse@example.com".into(),
///     phone: "+90 555 123 4567".into(),
///     hourly_salary: 250.0,
/// };
/// assert!(validator.is_valid(&employee));
/// ```
pub struct EmployeeValidator<C = SystemClock> {
    name: TextRules,
    email: TextRules,
    phone: TextRules,
    hourly_salary: NumberRules<f64>,
    minimum_salary: MinimumSalary,
    clock: C,
}

impl EmployeeValidator<SystemClock> {
    /// Creates a validator that reads today's date from the system clock.
    pub fn new() -> Result<Self, regex::Error> {
        Self::with_clock(SystemClock)
    }
}

impl<C: Clock> EmployeeValidator<C> {
    /// Creates a validator that reads today's date from `clock`.
    pub fn with_clock(clock: C) -> Result<Self, regex::Error> {
        Ok(Self {
            name: Rules::text("Name")
                .not_empty()
                .error("Name is required")
                .length(10, 250)
                .error("Name must be 10 and 250 characters"),
            email: Rules::text("Email")
                .not_empty()
                .error("Emailis required")
                .email()?
                .error("Email. address is not valid"),
            phone: Rules::text("Phone")
                .not_empty()
                .error("Phone is required")
                .phone()?
                .error("Phone is not valid."),
            hourly_salary: Rules::number("HourlySalary").inclusive_between(50.0, 400.0),
            minimum_salary: MinimumSalary::default(),
            clock,
        })
    }

    /// Overrides the age-tiered salary minimums.
    pub fn with_minimum_salary(mut self, minimum_salary: MinimumSalary) -> Self {
        self.minimum_salary = minimum_salary;
        self
    }
}

impl<C: Clock> Validator<Employee> for EmployeeValidator<C> {
    fn validate(&self, employee: &Employee) -> ValidationResult<()> {
        let today = self.clock.today();
        accumulate([
            self.name.validate(Some(&employee.name)),
            self.email.validate(Some(&employee.email)),
            self.phone.validate(Some(&employee.phone)),
            self.hourly_salary.validate(Some(employee.hourly_salary)),
            minimum_salary_for_age(
                self.hourly_salary.field(),
                employee,
                years_before(today, SENIOR_AGE),
                self.minimum_salary,
            ),
            birth_date_within_limit(employee, years_before(today, MAX_AGE)),
        ])
    }
}

/// Seniors are those born on or before `senior_cutoff`.
fn minimum_salary_for_age(
    field: &str,
    employee: &Employee,
    senior_cutoff: NaiveDateTime,
    minimum: MinimumSalary,
) -> ValidationResult<()> {
    let required = if employee.date_of_birth <= senior_cutoff {
        minimum.senior
    } else {
        minimum.junior
    };

    if employee.hourly_salary >= required {
        return Validation::Success(());
    }
    Validation::Failure(FieldErrors::single(
        FieldError::new(field, "Minimum hourly salary is not valid.")
            .with_code("minimum-for-age")
            .with_attempted(employee.hourly_salary.to_string()),
    ))
}

/// Passes when `earliest <= date_of_birth`.
fn birth_date_within_limit(employee: &Employee, earliest: NaiveDateTime) -> ValidationResult<()> {
    if earliest <= employee.date_of_birth {
        return Validation::Success(());
    }
    Validation::Failure(FieldErrors::single(
        FieldError::new("DateOfBirth", "Birthdate is not valid.")
            .with_code("birthdate")
            .with_attempted(employee.date_of_birth.format("%Y-%m-%dT%H:%M:%S").to_string()),
    ))
}
