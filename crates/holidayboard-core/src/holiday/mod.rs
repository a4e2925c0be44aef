//! Holiday definitions and their date rules.
//!
//! A `Holiday` pairs display metadata (name, lead-in/lead-out days, pattern
//! handle) with a `HolidayRule`. Rules are a closed set of kinds resolved by a
//! single dispatch in `registry`; a rule that depends on another holiday holds
//! that holiday's `HolidayId`, never the holiday itself.
//!
//! Holidays are immutable once registered and carry no per-year cache.

pub mod error;
pub mod registry;
pub mod window;

pub use error::HolidayError;
pub use registry::HolidayRegistry;
pub use window::ActiveWindow;

use time::{Month, Weekday};

use crate::calendar::{self, DateRuleError};

/// Year used to validate fixed days so that February 29 is accepted.
const LEAP_REFERENCE_YEAR: i32 = 2000;

/// Stable identifier of a holiday inside a `HolidayRegistry`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HolidayId(usize);

impl HolidayId {
    pub const fn from_index(index: usize) -> Self {
        Self(index)
    }

    pub const fn index(self) -> usize {
        self.0
    }
}

/// Opaque handle to a display pattern owned by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PatternRef(usize);

impl PatternRef {
    pub const fn from_index(index: usize) -> Self {
        Self(index)
    }

    pub const fn index(self) -> usize {
        self.0
    }
}

/// How a holiday's date is derived for a given year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HolidayRule {
    /// Same month and day every year (Valentine's Day).
    Fixed { month: Month, day: u8 },
    /// Nth weekday counted from the start (positive) or end (negative) of a
    /// month (Mother's Day, Thanksgiving).
    NthWeekdayOfMonth {
        month: Month,
        weekday: Weekday,
        occurrence: i32,
    },
    /// Nth weekday before or after an anchor date (Victoria Day, the Monday
    /// before May 25).
    RelativeToDate {
        month: Month,
        day: u8,
        weekday: Weekday,
        occurrence: i32,
        include_anchor: bool,
    },
    /// A signed number of days from another holiday (Mardi Gras, Christmas Eve).
    OffsetFromHoliday { reference: HolidayId, offset_days: i32 },
    /// Gregorian Easter Sunday.
    Easter,
}

impl HolidayRule {
    /// Fixed date from a 0-based month index and a day of month.
    ///
    /// The day is checked against the longest form of the month; whether it
    /// exists in a given year is only known at resolution time.
    ///
    /// # Examples
    /// ```
    /// use holidayboard_core::holiday::HolidayRule;
    ///
    /// assert!(HolidayRule::fixed(1, 29).is_ok());
    /// assert!(HolidayRule::fixed(1, 30).is_err());
    /// ```
    pub fn fixed(month: u8, day: u8) -> Result<Self, DateRuleError> {
        let month = validated_day(month, day)?;
        Ok(HolidayRule::Fixed { month, day })
    }

    pub fn nth_weekday_of_month(
        month: u8,
        weekday: u8,
        occurrence: i32,
    ) -> Result<Self, DateRuleError> {
        let month = calendar::month_from_index(month)?;
        let weekday = calendar::weekday_from_index(weekday)?;
        validated_occurrence(occurrence)?;
        Ok(HolidayRule::NthWeekdayOfMonth {
            month,
            weekday,
            occurrence,
        })
    }

    pub fn relative_to_date(
        month: u8,
        day: u8,
        weekday: u8,
        occurrence: i32,
        include_anchor: bool,
    ) -> Result<Self, DateRuleError> {
        let month = validated_day(month, day)?;
        let weekday = calendar::weekday_from_index(weekday)?;
        validated_occurrence(occurrence)?;
        Ok(HolidayRule::RelativeToDate {
            month,
            day,
            weekday,
            occurrence,
            include_anchor,
        })
    }

    pub fn offset_from(reference: HolidayId, offset_days: i32) -> Self {
        HolidayRule::OffsetFromHoliday {
            reference,
            offset_days,
        }
    }

    pub fn easter() -> Self {
        HolidayRule::Easter
    }

    /// Stable kind label used in reports.
    pub fn kind(&self) -> &'static str {
        match self {
            HolidayRule::Fixed { .. } => "fixed",
            HolidayRule::NthWeekdayOfMonth { .. } => "nth_weekday_of_month",
            HolidayRule::RelativeToDate { .. } => "relative_to_date",
            HolidayRule::OffsetFromHoliday { .. } => "offset_from_holiday",
            HolidayRule::Easter => "easter",
        }
    }
}

fn validated_day(month: u8, day: u8) -> Result<Month, DateRuleError> {
    let max_day = calendar::days_in_month(month, LEAP_REFERENCE_YEAR)?;
    let month = calendar::month_from_index(month)?;
    if day == 0 || day > max_day {
        return Err(DateRuleError::InvalidDayOfMonth { month, day });
    }
    Ok(month)
}

fn validated_occurrence(occurrence: i32) -> Result<(), DateRuleError> {
    if occurrence == 0 {
        return Err(DateRuleError::InvalidOccurrence { occurrence });
    }
    Ok(())
}

/// A named holiday with its display window and date rule.
///
/// # Examples
/// ```
/// use holidayboard_core::holiday::{Holiday, HolidayRule, PatternRef};
///
/// let valentines = Holiday::new("Valentine's Day", HolidayRule::fixed(1, 14)?)
///     .with_lead_in(3)
///     .with_pattern(PatternRef::from_index(0));
/// assert_eq!(valentines.lead_in_days, 3);
/// assert_eq!(valentines.lead_out_days, 0);
/// # Ok::<(), holidayboard_core::calendar::DateRuleError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Holiday {
    pub name: String,
    pub pattern: Option<PatternRef>,
    pub lead_in_days: u32,
    pub lead_out_days: u32,
    pub rule: HolidayRule,
}

impl Holiday {
    pub fn new(name: impl Into<String>, rule: HolidayRule) -> Self {
        Self {
            name: name.into(),
            pattern: None,
            lead_in_days: 0,
            lead_out_days: 0,
            rule,
        }
    }

    pub fn with_lead_in(mut self, days: u32) -> Self {
        self.lead_in_days = days;
        self
    }

    pub fn with_lead_out(mut self, days: u32) -> Self {
        self.lead_out_days = days;
        self
    }

    pub fn with_pattern(mut self, pattern: PatternRef) -> Self {
        self.pattern = Some(pattern);
        self
    }
}
