use time::Date;

use super::error::HolidayError;
use super::registry::HolidayRegistry;
use super::{Holiday, HolidayId};
use crate::calendar::{self, DateRuleError};

/// Display window of one holiday in one year.
///
/// The active span is the closed interval `[lead_in, lead_out]`; the lead-out
/// day stays active until the midnight that starts the following day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveWindow {
    pub lead_in: Date,
    pub date: Date,
    pub lead_out: Date,
}

impl ActiveWindow {
    /// Window around `date` for the given holiday's lead-in/lead-out days.
    pub fn around(date: Date, holiday: &Holiday) -> Result<Self, DateRuleError> {
        Ok(Self {
            lead_in: calendar::shift_days(date, -i64::from(holiday.lead_in_days))?,
            date,
            lead_out: calendar::shift_days(date, i64::from(holiday.lead_out_days))?,
        })
    }

    /// Date-only containment; time of day plays no part.
    pub fn contains(&self, day: Date) -> bool {
        self.lead_in <= day && day <= self.lead_out
    }
}

impl HolidayRegistry {
    /// Window of holiday `id` for `year`.
    ///
    /// # Examples
    /// ```
    /// use holidayboard_core::holiday::{Holiday, HolidayRegistry, HolidayRule};
    /// use time::{Date, Month};
    ///
    /// let mut registry = HolidayRegistry::new();
    /// let id = registry.insert(
    ///     Holiday::new("Valentine's Day", HolidayRule::fixed(1, 14)?)
    ///         .with_lead_in(3)
    ///         .with_lead_out(1),
    /// )?;
    /// let window = registry.window_for(id, 2024)?;
    /// assert_eq!(window.lead_in, Date::from_calendar_date(2024, Month::February, 11).unwrap());
    /// assert_eq!(window.lead_out, Date::from_calendar_date(2024, Month::February, 15).unwrap());
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn window_for(&self, id: HolidayId, year: i32) -> Result<ActiveWindow, HolidayError> {
        let holiday = self
            .get(id)
            .ok_or(HolidayError::UnknownHoliday { id: id.index() })?;
        let date = self.resolve(id, year)?;
        Ok(ActiveWindow::around(date, holiday)?)
    }

    /// Like `window_for`, but a holiday whose date does not exist in `year`
    /// (February 29 in a common year) yields `None` instead of an error.
    pub fn window_in_year(
        &self,
        id: HolidayId,
        year: i32,
    ) -> Result<Option<ActiveWindow>, HolidayError> {
        match self.window_for(id, year) {
            Ok(window) => Ok(Some(window)),
            Err(err) if err.is_nonexistent_date() => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Whether holiday `id`, as it falls in `year`, is active on `day`.
    pub fn is_active(&self, id: HolidayId, year: i32, day: Date) -> Result<bool, HolidayError> {
        Ok(self.window_for(id, year)?.contains(day))
    }

    /// Every holiday active on `day`, in registry order.
    ///
    /// Windows of the previous and next year are considered too, so a
    /// Christmas lead-out reaching into January or a New Year lead-in
    /// starting in December is found. No precedence is applied between
    /// overlapping holidays.
    pub fn active_on(&self, day: Date) -> Result<Vec<HolidayId>, HolidayError> {
        Ok(self
            .active_windows_on(day)?
            .into_iter()
            .map(|(id, _)| id)
            .collect())
    }

    /// Like `active_on`, paired with the window that contains `day`.
    pub fn active_windows_on(
        &self,
        day: Date,
    ) -> Result<Vec<(HolidayId, ActiveWindow)>, HolidayError> {
        let year = day.year();
        let mut active = Vec::new();
        for (id, _) in self.iter() {
            let own_year = self.window_in_year(id, year)?;
            // Adjacent years may fall outside a rule's domain (Easter before
            // 1583) or the representable range; only the day's own year counts
            // as an error then.
            let adjacent = [year - 1, year + 1].map(|candidate| {
                self.window_in_year(id, candidate)
                    .or_else(|err| match err {
                        HolidayError::DateRule(_) => Ok(None),
                        other => Err(other),
                    })
            });
            let [previous, next] = adjacent;
            let found = [own_year, previous?, next?]
                .into_iter()
                .flatten()
                .find(|window| window.contains(day));
            if let Some(window) = found {
                active.push((id, window));
            }
        }
        Ok(active)
    }
}
