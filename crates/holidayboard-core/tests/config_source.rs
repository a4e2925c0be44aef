use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use holidayboard_core::config::{ConfigError, HolidayFile, LoadPolicy};
use holidayboard_core::holiday::HolidayError;
use holidayboard_core::schedule::{ScheduleQuery, build_window_report};
use holidayboard_core::{ScheduleError, calendar::DateRuleError};

fn repo_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
}

fn temp_file(contents: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    let unique = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    path.push(format!("holidayboard_config_{unique}.json"));
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn holiday_file_reads_fixture() {
    let path = repo_root()
        .join("tests")
        .join("golden")
        .join("holidays_2024")
        .join("input.json");
    let file = HolidayFile::open(&path, LoadPolicy::Strict).unwrap();

    assert_eq!(file.registry.len(), 8);
    assert_eq!(file.patterns.len(), 5);
    assert!(file.skipped.is_empty());

    let christmas = file.registry.find("Christmas").unwrap();
    let holiday = file.registry.get(christmas).unwrap();
    let pattern = file.pattern_for(holiday).unwrap();
    assert_eq!(pattern.color_at(0).to_hex(), "#FF0000");
    assert_eq!(pattern.color_at(3).to_hex(), "#FFFFFF");
}

#[test]
fn missing_file_is_io_error() {
    let path = repo_root().join("tests").join("golden").join("missing.json");
    let err = HolidayFile::open(&path, LoadPolicy::Strict).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn invalid_json_is_rejected() {
    let path = temp_file("{ \"holiday\": [");
    let err = HolidayFile::open(&path, LoadPolicy::SkipInvalid).unwrap_err();
    let _ = fs::remove_file(&path);
    assert!(matches!(err, ConfigError::Json(_)));
}

#[test]
fn missing_holiday_section_is_rejected() {
    let err = HolidayFile::from_json_str("{ \"pattern\": [] }", LoadPolicy::Strict).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::MissingSection { field: "holiday" }
    ));
}

#[test]
fn cyclic_offsets_load_but_fail_to_resolve() {
    let file = HolidayFile::from_json_str(
        r#"{ "holiday": [
            { "name": "A", "type": 2, "referenceHoliday": "B", "offset": 1 },
            { "name": "B", "type": 2, "referenceHoliday": "A", "offset": 1 }
        ] }"#,
        LoadPolicy::Strict,
    )
    .unwrap();

    let err = build_window_report("inline", 0, &file, &ScheduleQuery::for_year(2024)).unwrap_err();
    assert!(matches!(
        err,
        ScheduleError::Holiday(HolidayError::CyclicReference { .. })
    ));
}

#[test]
fn easter_before_gregorian_reform_is_out_of_domain() {
    let file = HolidayFile::from_json_str(r#"{ "holiday": [{ "type": 4 }] }"#, LoadPolicy::Strict)
        .unwrap();
    let err = build_window_report("inline", 0, &file, &ScheduleQuery::for_year(1582)).unwrap_err();
    assert!(matches!(
        err,
        ScheduleError::Holiday(HolidayError::DateRule(DateRuleError::OutOfDomain { year: 1582, .. }))
    ));
}
