use thiserror::Error;
use time::Month;

/// Errors returned by the date-rule primitives.
///
/// # Examples
/// ```
/// use holidayboard_core::calendar::{DateRuleError, days_in_month};
///
/// let err = days_in_month(12, 2024).unwrap_err();
/// assert_eq!(err, DateRuleError::InvalidMonth { month: 12 });
/// assert!(err.to_string().contains("invalid month index"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateRuleError {
    #[error("invalid month index: {month} (expected 0..=11)")]
    InvalidMonth { month: u8 },
    #[error("invalid weekday index: {weekday} (expected 0..=6, Sunday = 0)")]
    InvalidWeekday { weekday: u8 },
    #[error("invalid occurrence: {occurrence} (must be non-zero)")]
    InvalidOccurrence { occurrence: i32 },
    #[error("invalid day of month: {month} {day}")]
    InvalidDayOfMonth { month: Month, day: u8 },
    #[error("date does not exist: {month} {day}, {year}")]
    NonexistentDate { year: i32, month: Month, day: u8 },
    #[error("year {year} is outside the Easter computus domain (>= {min})")]
    OutOfDomain { year: i32, min: i32 },
    #[error("date arithmetic out of range")]
    DateOutOfRange,
}
