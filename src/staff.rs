//! Staff records and their validator.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::rules::{accumulate, NumberRules, Rules, TextRules, Validator};
use crate::ValidationResult;

/// A staff member submitted for acceptance.
///
/// Every property is optional on the wire. `None` means the client did not
/// send a value, which the validator reports as a `required` failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Staff {
    #[serde(alias = "Name")]
    pub name: Option<String>,
    #[serde(alias = "Email")]
    pub email: Option<String>,
    #[serde(alias = "Phone")]
    pub phone: Option<String>,
    #[serde(alias = "HourlySalary")]
    pub hourly_salary: Option<Decimal>,
}

/// Validates [`Staff`] records.
///
/// Errors are reported in property order: Name, Email, Phone, HourlySalary.
pub struct StaffValidator {
    name: TextRules,
    email: TextRules,
    phone: TextRules,
    hourly_salary: NumberRules<Decimal>,
}

impl StaffValidator {
    /// Creates a validator with the staff messages and the 30 to 400 salary range.
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            name: Rules::text("Name")
                .not_empty()
                .error("Name is required.")
                .length(10, 250)
                .error("Name must be between 10 and 250 characters."),
            email: Rules::text("Email")
                .not_empty()
                .error("Email is required.")
                .email()?
                .error("Email address is not valid."),
            phone: Rules::text("Phone")
                .not_empty()
                .error("Phone is required.")
                .phone()?
                .error("Phone is not valid."),
            hourly_salary: Rules::number("HourlySalary")
                .required()
                .error("Hourly salary is required.")
                .inclusive_between(Decimal::from(30), Decimal::from(400))
                .error("Hourly salary must be between 30 and 400."),
        })
    }
}

impl Validator<Staff> for StaffValidator {
    fn validate(&self, staff: &Staff) -> ValidationResult<()> {
        accumulate([
            self.name.validate(staff.name.as_deref()),
            self.email.validate(staff.email.as_deref()),
            self.phone.validate(staff.phone.as_deref()),
            self.hourly_salary.validate(staff.hourly_salary),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_staff() -> Staff {
        Staff {
            name: Some("Mehmet Kaya Ozturk".to_string()),
            email: Some("mehmet@example.com".to_string()),
            phone: Some("+905321112233".to_string()),
            hourly_salary: Some(Decimal::from(45)),
        }
    }

    #[test]
    fn test_valid_staff_has_no_errors() {
        let validator = StaffValidator::new().unwrap();
        assert!(validator.errors(&valid_staff()).is_empty());
    }

    #[test]
    fn test_empty_record_reports_required_only() {
        let validator = StaffValidator::new().unwrap();
        let errors = validator.errors(&Staff::default());

        let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["Name", "Email", "Phone", "HourlySalary"]);
        assert!(errors.iter().all(|e| e.code == "required"));
    }

    #[test]
    fn test_empty_strings_fail_required_and_shape() {
        let validator = StaffValidator::new().unwrap();
        let staff = Staff {
            name: Some(String::new()),
            email: Some(String::new()),
            phone: Some(String::new()),
            ..valid_staff()
        };

        let messages: Vec<_> = validator
            .errors(&staff)
            .into_iter()
            .map(|e| e.message)
            .collect();
        assert_eq!(
            messages,
            vec![
                "Name is required.",
                "Name must be between 10 and 250 characters.",
                "Email is required.",
                "Email address is not valid.",
                "Phone is required.",
                "Phone is not valid.",
            ]
        );
    }

    #[test]
    fn test_salary_range_is_inclusive() {
        let validator = StaffValidator::new().unwrap();
        for ok in [Decimal::from(30), Decimal::from(400)] {
            let staff = Staff {
                hourly_salary: Some(ok),
                ..valid_staff()
            };
            assert!(validator.is_valid(&staff));
        }

        let staff = Staff {
            hourly_salary: Some(Decimal::new(40001, 2)),
            ..valid_staff()
        };
        let errors = validator.errors(&staff);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].code, "range");
    }

    #[test]
    fn test_json_null_and_missing_are_absent() {
        let staff: Staff = serde_json::from_str(r#"{"name": null, "hourlySalary": 35.5}"#).unwrap();
        assert_eq!(staff.name, None);
        assert_eq!(staff.email, None);
        assert_eq!(staff.hourly_salary, Some(Decimal::new(355, 1)));
    }

    #[test]
    fn test_pascal_case_keys_bind() {
        let staff: Staff = serde_json::from_str(
            r#"{"Name":"Mehmet Kaya Ozturk","Email":"mehmet@example.com","Phone":"+905321112233","HourlySalary":45}"#,
        )
        .unwrap();
        assert_eq!(staff, valid_staff());
        assert!(StaffValidator::new().unwrap().is_valid(&staff));
    }

    #[test]
    fn test_json_echo_keeps_nulls_and_numeric_salary() {
        let staff = Staff {
            email: None,
            ..valid_staff()
        };
        let json = serde_json::to_value(&staff).unwrap();
        assert!(json["email"].is_null());
        assert_eq!(json["hourlySalary"], 45.0);
    }
}
