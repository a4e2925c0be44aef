use std::path::Path;

use thiserror::Error;
use time::Date;
use time::macros::format_description;

use crate::config::{ConfigError, HolidayFile, LoadPolicy};
use crate::holiday::HolidayError;
use crate::{ActiveSummary, SkippedSummary, WindowReport, WindowSummary, make_stub_report};

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Holiday(#[from] HolidayError),
    #[error("date formatting error: {0}")]
    Format(#[from] time::error::Format),
    #[error("invalid date '{text}' (expected YYYY-MM-DD): {source}")]
    InvalidDate {
        text: String,
        #[source]
        source: time::error::Parse,
    },
}

/// Which year to lay out, and optionally which day to check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleQuery {
    pub year: i32,
    pub active_on: Option<Date>,
}

impl ScheduleQuery {
    pub fn for_year(year: i32) -> Self {
        Self {
            year,
            active_on: None,
        }
    }
}

/// Load a holiday list and build its window report.
///
/// # Errors
/// Returns `ScheduleError` when the file cannot be read or loaded, or when
/// a holiday cannot be resolved for the requested year.
pub fn analyze_holiday_file(
    path: &Path,
    query: &ScheduleQuery,
    policy: LoadPolicy,
) -> Result<WindowReport, ScheduleError> {
    let bytes = std::fs::metadata(path)?.len();
    let file = HolidayFile::open(path, policy)?;
    build_window_report(&path.display().to_string(), bytes, &file, query)
}

/// Window report for an already loaded holiday list.
///
/// Holidays without a date in the year (February 29 in a common year) are
/// left out. Windows are ordered by holiday date, then name.
pub fn build_window_report(
    input_path: &str,
    input_bytes: u64,
    file: &HolidayFile,
    query: &ScheduleQuery,
) -> Result<WindowReport, ScheduleError> {
    let mut report = make_stub_report(input_path, input_bytes, query.year);
    let registry = &file.registry;

    let mut windows = Vec::with_capacity(registry.len());
    for (id, holiday) in registry.iter() {
        let Some(window) = registry.window_in_year(id, query.year)? else {
            continue;
        };
        windows.push((window.date, holiday.name.as_str(), window, holiday));
    }
    windows.sort_by(|a, b| (a.0, a.1).cmp(&(b.0, b.1)));

    report.windows = windows
        .into_iter()
        .map(|(_, _, window, holiday)| {
            Ok(WindowSummary {
                name: holiday.name.clone(),
                kind: holiday.rule.kind().to_string(),
                pattern: holiday.pattern.map(|pattern| pattern.index()),
                lead_in: format_date(window.lead_in)?,
                date: format_date(window.date)?,
                lead_out: format_date(window.lead_out)?,
            })
        })
        .collect::<Result<_, ScheduleError>>()?;

    if let Some(day) = query.active_on {
        let holidays = registry
            .active_on(day)?
            .into_iter()
            .filter_map(|id| registry.get(id))
            .map(|holiday| holiday.name.clone())
            .collect();
        report.active = Some(ActiveSummary {
            date: format_date(day)?,
            holidays,
        });
    }

    report.skipped = file
        .skipped
        .iter()
        .map(|entry| SkippedSummary {
            index: entry.index,
            reason: entry.reason.clone(),
        })
        .collect();

    Ok(report)
}

/// ISO `YYYY-MM-DD`.
pub fn format_date(date: Date) -> Result<String, ScheduleError> {
    Ok(date.format(format_description!("[year]-[month]-[day]"))?)
}

/// Parse an ISO `YYYY-MM-DD` date.
///
/// # Examples
/// ```
/// use holidayboard_core::schedule::{format_date, parse_date};
///
/// let date = parse_date("2024-12-24")?;
/// assert_eq!(format_date(date)?, "2024-12-24");
/// assert!(parse_date("24/12/2024").is_err());
/// # Ok::<(), holidayboard_core::schedule::ScheduleError>(())
/// ```
pub fn parse_date(text: &str) -> Result<Date, ScheduleError> {
    Date::parse(text, format_description!("[year]-[month]-[day]")).map_err(|source| {
        ScheduleError::InvalidDate {
            text: text.to_string(),
            source,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOLIDAYS: &str = r##"{
        "pattern": [["#FF0000", "#FFFFFF"], ["#00FF00"]],
        "holiday": [
            { "name": "Christmas", "type": 0, "pattern": 0, "leadInDays": 24, "leadOutDays": 12,
              "month": 11, "date": 25 },
            { "name": "Leap Day", "type": 0, "month": 1, "date": 29 },
            { "name": "St. Patrick's Day", "type": 0, "pattern": 1, "leadInDays": 3,
              "month": 2, "date": 17 },
            { "name": "Bad", "type": 0, "month": 14, "date": 1 }
        ]
    }"##;

    fn load() -> HolidayFile {
        HolidayFile::from_json_str(HOLIDAYS, LoadPolicy::SkipInvalid).unwrap()
    }

    #[test]
    fn windows_are_sorted_and_leap_day_skipped_in_common_years() {
        let file = load();
        let report = build_window_report("holidays.json", 0, &file, &ScheduleQuery::for_year(2023))
            .unwrap();
        let names: Vec<&str> = report.windows.iter().map(|w| w.name.as_str()).collect();
        assert_eq!(names, vec!["St. Patrick's Day", "Christmas"]);
        assert_eq!(report.windows[1].lead_out, "2024-01-06");
        assert_eq!(report.windows[0].pattern, Some(1));

        let report = build_window_report("holidays.json", 0, &file, &ScheduleQuery::for_year(2024))
            .unwrap();
        assert_eq!(report.windows[0].name, "Leap Day");
        assert_eq!(report.windows[0].kind, "fixed");
    }

    #[test]
    fn active_day_and_skipped_entries_are_reported() {
        let file = load();
        let query = ScheduleQuery {
            year: 2024,
            active_on: Some(parse_date("2025-01-03").unwrap()),
        };
        let report = build_window_report("holidays.json", 0, &file, &query).unwrap();
        let active = report.active.unwrap();
        assert_eq!(active.date, "2025-01-03");
        assert_eq!(active.holidays, vec!["Christmas".to_string()]);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].index, 3);
        assert!(report.skipped[0].reason.contains("month"));
    }

    #[test]
    fn parse_date_rejects_other_formats() {
        assert!(matches!(
            parse_date("2024-13-01"),
            Err(ScheduleError::InvalidDate { .. })
        ));
        assert!(parse_date("").is_err());
    }
}
