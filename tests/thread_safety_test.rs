//! Tests for sharing one validator across threads.

use std::sync::Arc;
use std::thread;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use vbapi::clock::FixedClock;
use vbapi::employee::{Employee, EmployeeValidator};
use vbapi::rules::Validator;
use vbapi::staff::{Staff, StaffValidator};

#[test]
fn test_concurrent_staff_validation() {
    let validator: Arc<dyn Validator<Staff>> = Arc::new(StaffValidator::new().unwrap());

    let handles: Vec<_> = (0..10)
        .map(|i| {
            let validator = Arc::clone(&validator);
            thread::spawn(move || {
                let staff = Staff {
                    name: Some(format!("Staff Member {i:04}")),
                    email: Some(format!("member{i}@example.com")),
                    phone: Some(format!("+9055500000{i:02}")),
                    hourly_salary: Some(Decimal::from(30 + i)),
                };
                assert!(validator.is_valid(&staff));
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn test_concurrent_results_are_identical() {
    let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let validator = Arc::new(EmployeeValidator::with_clock(FixedClock(today)).unwrap());
    let expected = validator.errors(&Employee::default());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let validator = Arc::clone(&validator);
            thread::spawn(move || validator.errors(&Employee::default()))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
