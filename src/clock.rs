//! Date source for rules that depend on "today".
//!
//! Validators never read the system clock directly; they ask a [`Clock`].
//! Production code uses [`SystemClock`], tests pin the date with
//! [`FixedClock`].

use chrono::{Local, Months, NaiveDate, NaiveDateTime};

/// Provides the current local date.
pub trait Clock: Send + Sync {
    /// Returns today's date.
    fn today(&self) -> NaiveDate;
}

/// Reads the local system date on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always returns the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Returns midnight on the date `years` calendar years before `date`.
///
/// Feb 29 maps to Feb 28 when the target year is not a leap year.
pub fn years_before(date: NaiveDate, years: u32) -> NaiveDateTime {
    date.checked_sub_months(Months::new(years.saturating_mul(12)))
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap_or(NaiveDateTime::MIN)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_years_before_is_midnight() {
        let cutoff = years_before(date(2024, 6, 15), 30);
        assert_eq!(cutoff, date(1994, 6, 15).and_hms_opt(0, 0, 0).unwrap());
    }

    #[test]
    fn test_years_before_leap_day_clamps() {
        let cutoff = years_before(date(2024, 2, 29), 30);
        assert_eq!(cutoff.date(), date(1994, 2, 28));

        let cutoff = years_before(date(2024, 2, 29), 4);
        assert_eq!(cutoff.date(), date(2020, 2, 29));
    }

    #[test]
    fn test_fixed_clock() {
        let clock = FixedClock(date(2000, 1, 1));
        assert_eq!(clock.today(), date(2000, 1, 1));
    }
}
