//! Stateless date-rule primitives.
//!
//! Month and weekday indices follow the holiday-list convention: months are
//! numbered 0..=11 (January = 0) and weekdays 0..=6 (Sunday = 0). Indices are
//! converted to `time::Month` / `time::Weekday` once, at the boundary, and
//! everything below works on typed values.
//!
//! Every function here is pure; failures are returned, never logged.

pub mod easter;
pub mod error;
pub mod occurrence;

pub use easter::{EASTER_MIN_YEAR, easter_date};
pub use error::DateRuleError;
pub use occurrence::{nth_weekday_of_month, weekday_occurrence};

use time::{Date, Duration, Month, Weekday};

/// Gregorian leap-year rule.
pub fn is_leap_year(year: i32) -> bool {
    if year % 400 == 0 {
        true
    } else if year % 100 == 0 {
        false
    } else {
        year % 4 == 0
    }
}

/// Number of days in a 0-based month of `year`.
///
/// # Examples
/// ```
/// use holidayboard_core::calendar::days_in_month;
///
/// assert_eq!(days_in_month(1, 2024).unwrap(), 29);
/// assert_eq!(days_in_month(1, 1900).unwrap(), 28);
/// assert_eq!(days_in_month(11, 2023).unwrap(), 31);
/// ```
///
/// # Errors
/// Returns `DateRuleError::InvalidMonth` for indices outside 0..=11.
pub fn days_in_month(month: u8, year: i32) -> Result<u8, DateRuleError> {
    match month {
        0 | 2 | 4 | 6 | 7 | 9 | 11 => Ok(31),
        3 | 5 | 8 | 10 => Ok(30),
        1 => Ok(if is_leap_year(year) { 29 } else { 28 }),
        _ => Err(DateRuleError::InvalidMonth { month }),
    }
}

/// Convert a 0-based month index into a `time::Month`.
pub fn month_from_index(month: u8) -> Result<Month, DateRuleError> {
    month
        .checked_add(1)
        .and_then(|number| Month::try_from(number).ok())
        .ok_or(DateRuleError::InvalidMonth { month })
}

/// The 0-based index of `month`.
pub fn month_index(month: Month) -> u8 {
    u8::from(month) - 1
}

/// Convert a 0-based weekday index (Sunday = 0) into a `time::Weekday`.
pub fn weekday_from_index(weekday: u8) -> Result<Weekday, DateRuleError> {
    match weekday {
        0 => Ok(Weekday::Sunday),
        1 => Ok(Weekday::Monday),
        2 => Ok(Weekday::Tuesday),
        3 => Ok(Weekday::Wednesday),
        4 => Ok(Weekday::Thursday),
        5 => Ok(Weekday::Friday),
        6 => Ok(Weekday::Saturday),
        _ => Err(DateRuleError::InvalidWeekday { weekday }),
    }
}

/// Days forward from `from` to the next `target`; 0 when they are equal.
///
/// # Examples
/// ```
/// use holidayboard_core::calendar::next_weekday_offset;
/// use time::Weekday;
///
/// assert_eq!(next_weekday_offset(Weekday::Friday, Weekday::Thursday), 6);
/// assert_eq!(next_weekday_offset(Weekday::Sunday, Weekday::Sunday), 0);
/// ```
pub fn next_weekday_offset(from: Weekday, target: Weekday) -> u8 {
    let from = i16::from(from.number_days_from_sunday());
    let target = i16::from(target.number_days_from_sunday());
    (target - from).rem_euclid(7) as u8
}

/// Days backward from `from` to the previous `target`; 0 when they are equal.
pub fn previous_weekday_offset(from: Weekday, target: Weekday) -> u8 {
    next_weekday_offset(target, from)
}

/// Build a date, distinguishing a day that never exists in `month` from one
/// that only fails for this particular `year` (February 29).
pub fn date_from_parts(year: i32, month: Month, day: u8) -> Result<Date, DateRuleError> {
    let max_day = days_in_month(month_index(month), year)?;
    if day == 0 || day > max_day {
        return Err(DateRuleError::NonexistentDate { year, month, day });
    }
    Date::from_calendar_date(year, month, day).map_err(|_| DateRuleError::DateOutOfRange)
}

/// Shift `date` by a signed number of days.
pub fn shift_days(date: Date, days: i64) -> Result<Date, DateRuleError> {
    date.checked_add(Duration::days(days))
        .ok_or(DateRuleError::DateOutOfRange)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_year_rule() {
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2023));
        assert!(!is_leap_year(2100));
    }

    #[test]
    fn days_in_month_lengths() {
        let lengths: Vec<u8> = (0..12).map(|m| days_in_month(m, 2023).unwrap()).collect();
        assert_eq!(lengths, vec![31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31]);
        assert_eq!(days_in_month(1, 2000).unwrap(), 29);
    }

    #[test]
    fn days_in_month_rejects_month_twelve() {
        assert_eq!(
            days_in_month(12, 2024),
            Err(DateRuleError::InvalidMonth { month: 12 })
        );
    }

    #[test]
    fn month_index_round_trip() {
        assert_eq!(month_from_index(0).unwrap(), Month::January);
        assert_eq!(month_from_index(11).unwrap(), Month::December);
        assert_eq!(month_index(Month::May), 4);
        assert!(matches!(
            month_from_index(255),
            Err(DateRuleError::InvalidMonth { month: 255 })
        ));
    }

    #[test]
    fn weekday_index_sunday_first() {
        assert_eq!(weekday_from_index(0).unwrap(), Weekday::Sunday);
        assert_eq!(weekday_from_index(4).unwrap(), Weekday::Thursday);
        assert_eq!(
            weekday_from_index(7),
            Err(DateRuleError::InvalidWeekday { weekday: 7 })
        );
    }

    #[test]
    fn weekday_offsets_are_in_zero_to_six() {
        for from in 0..7 {
            for target in 0..7 {
                let from = weekday_from_index(from).unwrap();
                let target = weekday_from_index(target).unwrap();
                let next = next_weekday_offset(from, target);
                let previous = previous_weekday_offset(from, target);
                assert!(next < 7 && previous < 7);
                assert_eq!(next == 0, from == target);
                assert_eq!((next + previous) % 7, 0);
            }
        }
        assert_eq!(previous_weekday_offset(Weekday::Sunday, Weekday::Monday), 6);
        assert_eq!(previous_weekday_offset(Weekday::Saturday, Weekday::Monday), 5);
    }

    #[test]
    fn date_from_parts_leap_day() {
        assert!(date_from_parts(2024, Month::February, 29).is_ok());
        assert_eq!(
            date_from_parts(2023, Month::February, 29),
            Err(DateRuleError::NonexistentDate {
                year: 2023,
                month: Month::February,
                day: 29
            })
        );
    }

    #[test]
    fn shift_days_crosses_year_boundary() {
        let date = date_from_parts(2024, Month::December, 30).unwrap();
        let shifted = shift_days(date, 3).unwrap();
        assert_eq!(shifted, date_from_parts(2025, Month::January, 2).unwrap());
    }
}
