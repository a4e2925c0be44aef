use time::{Date, Month, Weekday};

use super::{
    DateRuleError, date_from_parts, days_in_month, month_index, next_weekday_offset,
    previous_weekday_offset, shift_days,
};

/// The `occurrence`-th `weekday` counted from `anchor`.
///
/// Positive occurrences search forward, negative ones backward. When
/// `include_anchor` is false the anchor itself is stepped over first, so a
/// match on the anchor day does not count.
///
/// # Examples
/// ```
/// use holidayboard_core::calendar::weekday_occurrence;
/// use time::{Date, Month, Weekday};
///
/// // Victoria Day: the Monday before May 25.
/// let anchor = Date::from_calendar_date(2024, Month::May, 25).unwrap();
/// let day = weekday_occurrence(anchor, Weekday::Monday, -1, false).unwrap();
/// assert_eq!(day, Date::from_calendar_date(2024, Month::May, 20).unwrap());
/// ```
///
/// # Errors
/// Returns `DateRuleError::InvalidOccurrence` when `occurrence` is zero.
pub fn weekday_occurrence(
    anchor: Date,
    weekday: Weekday,
    occurrence: i32,
    include_anchor: bool,
) -> Result<Date, DateRuleError> {
    if occurrence == 0 {
        return Err(DateRuleError::InvalidOccurrence { occurrence });
    }

    let extra_weeks = (i64::from(occurrence).abs() - 1) * 7;
    if occurrence > 0 {
        let start = if include_anchor {
            anchor
        } else {
            shift_days(anchor, 1)?
        };
        let first = i64::from(next_weekday_offset(start.weekday(), weekday));
        shift_days(start, first + extra_weeks)
    } else {
        let start = if include_anchor {
            anchor
        } else {
            shift_days(anchor, -1)?
        };
        let first = i64::from(previous_weekday_offset(start.weekday(), weekday));
        shift_days(start, -(first + extra_weeks))
    }
}

/// The `occurrence`-th `weekday` of `month`, counting from the first day of
/// the month for positive occurrences and from the last day for negative ones.
///
/// Large occurrences are not clamped and may land in a neighbouring month.
///
/// # Examples
/// ```
/// use holidayboard_core::calendar::nth_weekday_of_month;
/// use time::{Date, Month, Weekday};
///
/// // Mother's Day: second Sunday of May.
/// let day = nth_weekday_of_month(2024, Month::May, Weekday::Sunday, 2).unwrap();
/// assert_eq!(day, Date::from_calendar_date(2024, Month::May, 12).unwrap());
/// ```
pub fn nth_weekday_of_month(
    year: i32,
    month: Month,
    weekday: Weekday,
    occurrence: i32,
) -> Result<Date, DateRuleError> {
    if occurrence == 0 {
        return Err(DateRuleError::InvalidOccurrence { occurrence });
    }
    let day = if occurrence > 0 {
        1
    } else {
        days_in_month(month_index(month), year)?
    };
    let anchor = date_from_parts(year, month, day)?;
    weekday_occurrence(anchor, weekday, occurrence, true)
}
