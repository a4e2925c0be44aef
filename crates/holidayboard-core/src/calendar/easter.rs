use time::{Date, Month};

use super::{DateRuleError, date_from_parts};

/// First year of the Gregorian computus.
pub const EASTER_MIN_YEAR: i32 = 1583;

/// Gregorian Easter Sunday for `year`.
///
/// Integer-only computus (the U.S. Naval Observatory formulation); every
/// division truncates.
///
/// # Examples
/// ```
/// use holidayboard_core::calendar::easter_date;
/// use time::{Date, Month};
///
/// let easter = easter_date(2024).unwrap();
/// assert_eq!(easter, Date::from_calendar_date(2024, Month::March, 31).unwrap());
/// ```
///
/// # Errors
/// Returns `DateRuleError::OutOfDomain` for years before 1583.
pub fn easter_date(year: i32) -> Result<Date, DateRuleError> {
    if year < EASTER_MIN_YEAR {
        return Err(DateRuleError::OutOfDomain {
            year,
            min: EASTER_MIN_YEAR,
        });
    }

    let c = year / 100;
    let n = year - 19 * (year / 19);
    let k = (c - 17) / 25;
    let mut i = c - c / 4 - (c - k) / 3 + 19 * n + 15;
    i -= 30 * (i / 30);
    i -= (i / 28) * (1 - (i / 28) * (29 / (i + 1)) * ((21 - n) / 11));
    let mut j = year + year / 4 + i + 2 - c + c / 4;
    j -= 7 * (j / 7);
    let l = i - j;
    let m = 3 + (l + 40) / 44;
    let d = l + 28 - 31 * (m / 4);

    let month = if m == 3 { Month::March } else { Month::April };
    let day = u8::try_from(d).map_err(|_| DateRuleError::DateOutOfRange)?;
    date_from_parts(year, month, day)
}
