//! # Application State
//!
//! Validators shared by all route handlers.

use std::sync::Arc;

use crate::employee::{Employee, EmployeeValidator};
use crate::rules::Validator;
use crate::staff::{Staff, StaffValidator};

/// Shared application state passed to all route handlers.
///
/// Validators are built once at startup. They hold no mutable state, so the
/// same instances serve every request concurrently.
#[derive(Clone)]
pub struct AppState {
    pub employees: Arc<dyn Validator<Employee>>,
    pub staff: Arc<dyn Validator<Staff>>,
}

impl AppState {
    /// Builds the production validators, reading today's date from the
    /// system clock.
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self::from_validators(
            EmployeeValidator::new()?,
            StaffValidator::new()?,
        ))
    }

    /// Wraps the given validators.
    pub fn from_validators(
        employees: impl Validator<Employee> + 'static,
        staff: impl Validator<Staff> + 'static,
    ) -> Self {
        Self {
            employees: Arc::new(employees),
            staff: Arc::new(staff),
        }
    }
}
