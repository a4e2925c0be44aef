use std::collections::HashSet;

use time::Date;

use super::error::HolidayError;
use super::{Holiday, HolidayId, HolidayRule};
use crate::calendar;

/// Ordered set of holidays addressed by `HolidayId`.
///
/// Identifiers are positions in insertion order, so a caller that knows the
/// final order up front may create forward references with
/// `HolidayId::from_index`.
#[derive(Debug, Clone, Default)]
pub struct HolidayRegistry {
    holidays: Vec<Holiday>,
}

impl HolidayRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a holiday; names are unique within a registry.
    pub fn insert(&mut self, holiday: Holiday) -> Result<HolidayId, HolidayError> {
        if self.find(&holiday.name).is_some() {
            return Err(HolidayError::DuplicateName { name: holiday.name });
        }
        self.holidays.push(holiday);
        Ok(HolidayId::from_index(self.holidays.len() - 1))
    }

    pub fn get(&self, id: HolidayId) -> Option<&Holiday> {
        self.holidays.get(id.index())
    }

    pub fn find(&self, name: &str) -> Option<HolidayId> {
        self.holidays
            .iter()
            .position(|holiday| holiday.name == name)
            .map(HolidayId::from_index)
    }

    pub fn iter(&self) -> impl Iterator<Item = (HolidayId, &Holiday)> {
        self.holidays
            .iter()
            .enumerate()
            .map(|(index, holiday)| (HolidayId::from_index(index), holiday))
    }

    pub fn len(&self) -> usize {
        self.holidays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty()
    }

    /// Resolve the calendar date of holiday `id` in `year`.
    ///
    /// Offset chains are followed iteratively, accumulating their offsets; a
    /// holiday visited twice on the same walk is a cycle.
    ///
    /// # Examples
    /// ```
    /// use holidayboard_core::holiday::{Holiday, HolidayRegistry, HolidayRule};
    /// use time::{Date, Month};
    ///
    /// let mut registry = HolidayRegistry::new();
    /// let easter = registry.insert(Holiday::new("Easter", HolidayRule::easter()))?;
    /// let mardi_gras =
    ///     registry.insert(Holiday::new("Mardi Gras", HolidayRule::offset_from(easter, -47)))?;
    ///
    /// let date = registry.resolve(mardi_gras, 2024)?;
    /// assert_eq!(date, Date::from_calendar_date(2024, Month::February, 13).unwrap());
    /// # Ok::<(), holidayboard_core::holiday::HolidayError>(())
    /// ```
    ///
    /// # Errors
    /// `CyclicReference` for self-referencing offset chains, `UnknownHoliday`
    /// for dangling ids, and any `DateRuleError` raised by the base rule.
    pub fn resolve(&self, id: HolidayId, year: i32) -> Result<Date, HolidayError> {
        let mut visited = HashSet::new();
        let mut offset_days = 0i64;
        let mut current = id;

        loop {
            let holiday = self.holiday(current)?;
            if !visited.insert(current) {
                return Err(HolidayError::CyclicReference {
                    name: holiday.name.clone(),
                });
            }

            let base = match holiday.rule {
                HolidayRule::Fixed { month, day } => calendar::date_from_parts(year, month, day)?,
                HolidayRule::NthWeekdayOfMonth {
                    month,
                    weekday,
                    occurrence,
                } => calendar::nth_weekday_of_month(year, month, weekday, occurrence)?,
                HolidayRule::RelativeToDate {
                    month,
                    day,
                    weekday,
                    occurrence,
                    include_anchor,
                } => {
                    let anchor = calendar::date_from_parts(year, month, day)?;
                    calendar::weekday_occurrence(anchor, weekday, occurrence, include_anchor)?
                }
                HolidayRule::Easter => calendar::easter_date(year)?,
                HolidayRule::OffsetFromHoliday {
                    reference,
                    offset_days: step,
                } => {
                    offset_days += i64::from(step);
                    current = reference;
                    continue;
                }
            };

            return Ok(calendar::shift_days(base, offset_days)?);
        }
    }

    fn holiday(&self, id: HolidayId) -> Result<&Holiday, HolidayError> {
        self.get(id)
            .ok_or(HolidayError::UnknownHoliday { id: id.index() })
    }
}
