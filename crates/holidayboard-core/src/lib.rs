//! Holiday Board core library.
//!
//! Two independent engines live here:
//! - the holiday occurrence engine (`calendar`, `holiday`): resolves fixed,
//!   weekday-based, offset and Easter holidays for a year and derives their
//!   lead-in/lead-out display windows;
//! - the RDM frame codec (`protocols::rdm`): parses device UIDs and assembles
//!   checksummed command frames for addressable lighting fixtures.
//!
//! `config` loads holiday lists from JSON and `schedule` turns a loaded list
//! into a deterministic, versioned `WindowReport`. Only `config` touches the
//! filesystem; everything else is pure and never logs.
//!
//! Invariants:
//! - Report outputs are deterministic: windows ordered by date, then name.
//! - Active windows are closed date intervals `[lead_in, lead_out]`.
//! - Frame checksums are the 16-bit wrapping sum of every preceding byte.
//!
//! # Examples
//! ```no_run
//! use std::path::Path;
//!
//! use holidayboard_core::analyze_holiday_file;
//! use holidayboard_core::config::LoadPolicy;
//! use holidayboard_core::schedule::ScheduleQuery;
//!
//! let report = analyze_holiday_file(
//!     Path::new("HolidayList.json"),
//!     &ScheduleQuery::for_year(2024),
//!     LoadPolicy::Strict,
//! )?;
//! println!("report version: {}", report.report_version);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use serde::{Deserialize, Serialize};

pub mod calendar;
pub mod config;
pub mod holiday;
pub mod protocols;
pub mod schedule;

pub use schedule::{ScheduleError, analyze_holiday_file, build_window_report};

/// Current report schema version.
pub const REPORT_VERSION: u32 = 1;

/// Display windows of every holiday in one year.
///
/// # Examples
/// ```
/// use holidayboard_core::make_stub_report;
///
/// let report = make_stub_report("HolidayList.json", 512, 2024);
/// assert_eq!(report.report_version, holidayboard_core::REPORT_VERSION);
/// assert!(report.windows.is_empty());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowReport {
    /// Report schema version (not the binary version).
    pub report_version: u32,
    /// Tool identification metadata.
    pub tool: ToolInfo,
    /// Holiday list metadata.
    pub input: InputInfo,
    /// Calendar year the windows were computed for.
    pub year: i32,
    /// Windows ordered by holiday date, then name.
    pub windows: Vec<WindowSummary>,
    /// Holidays active on the queried day, when one was given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<ActiveSummary>,
    /// Definitions dropped while loading, in file order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkippedSummary>,
}

/// Tool metadata embedded in reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInfo {
    /// Tool name (e.g., "holidayboard").
    pub name: String,
    /// Tool version (semver).
    pub version: String,
}

/// Holiday list metadata embedded in reports.
///
/// # Examples
/// ```
/// use holidayboard_core::InputInfo;
///
/// let input = InputInfo {
///     path: "HolidayList.json".to_string(),
///     bytes: 1024,
/// };
/// assert_eq!(input.bytes, 1024);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputInfo {
    /// Input path as provided to the loader.
    pub path: String,
    /// Input size in bytes.
    pub bytes: u64,
}

/// One holiday's window; dates are ISO `YYYY-MM-DD`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowSummary {
    pub name: String,
    /// Rule kind label (e.g., "fixed", "easter").
    pub kind: String,
    /// Index into the holiday list's `pattern` array.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<usize>,
    pub lead_in: String,
    pub date: String,
    pub lead_out: String,
}

/// Holidays whose window contains `date`, in definition order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActiveSummary {
    pub date: String,
    pub holidays: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkippedSummary {
    /// Position in the holiday list's `holiday` array.
    pub index: usize,
    pub reason: String,
}

/// Build a stub report with base fields filled and no windows.
pub fn make_stub_report(input_path: &str, input_bytes: u64, year: i32) -> WindowReport {
    WindowReport {
        report_version: REPORT_VERSION,
        tool: ToolInfo {
            name: "holidayboard".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        input: InputInfo {
            path: input_path.to_string(),
            bytes: input_bytes,
        },
        year,
        windows: Vec::new(),
        active: None,
        skipped: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stub_report_serializes_without_optional_sections() {
        let report = make_stub_report("HolidayList.json", 10, 2024);
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["tool"]["name"], "holidayboard");
        assert_eq!(value["year"], 2024);
        assert!(value.get("active").is_none());
        assert!(value.get("skipped").is_none());
    }

    #[test]
    fn report_round_trips_through_json() {
        let mut report = make_stub_report("HolidayList.json", 10, 2024);
        report.active = Some(ActiveSummary {
            date: "2024-12-24".to_string(),
            holidays: vec!["Christmas".to_string()],
        });
        let text = serde_json::to_string(&report).unwrap();
        let parsed: WindowReport = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed.active.unwrap().holidays, vec!["Christmas"]);
    }
}
