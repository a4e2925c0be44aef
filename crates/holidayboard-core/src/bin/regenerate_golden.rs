use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use holidayboard_core::analyze_holiday_file;
use holidayboard_core::config::LoadPolicy;
use holidayboard_core::schedule::{ScheduleQuery, parse_date};
use serde::Deserialize;

#[derive(Deserialize)]
struct GoldenQuery {
    year: i32,
    #[serde(default)]
    active_on: Option<String>,
    #[serde(default)]
    skip_invalid: bool,
}

fn main() -> ExitCode {
    if let Err(err) = run() {
        eprintln!("error: {}", err);
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

fn run() -> Result<(), String> {
    let root = PathBuf::from("tests").join("golden");
    let entries =
        fs::read_dir(&root).map_err(|err| format!("failed to read {}: {}", root.display(), err))?;

    for entry in entries {
        let entry = entry.map_err(|err| format!("failed to read entry: {}", err))?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        let input = path.join("input.json");
        let query = path.join("query.json");
        if !input.exists() || !query.exists() {
            continue;
        }
        let output = path.join("expected_report.json");
        regenerate_one(&input, &query, &output)?;
    }

    Ok(())
}

fn regenerate_one(input: &Path, query: &Path, output: &Path) -> Result<(), String> {
    let query_json = fs::read_to_string(query)
        .map_err(|err| format!("failed to read {}: {}", query.display(), err))?;
    let query: GoldenQuery = serde_json::from_str(&query_json)
        .map_err(|err| format!("invalid query {}: {}", query.display(), err))?;

    let active_on = query
        .active_on
        .as_deref()
        .map(parse_date)
        .transpose()
        .map_err(|err| format!("invalid active_on: {}", err))?;
    let policy = if query.skip_invalid {
        LoadPolicy::SkipInvalid
    } else {
        LoadPolicy::Strict
    };

    let report = analyze_holiday_file(
        input,
        &ScheduleQuery {
            year: query.year,
            active_on,
        },
        policy,
    )
    .map_err(|err| format!("schedule failed for {}: {}", input.display(), err))?;
    let mut json = serde_json::to_string_pretty(&report)
        .map_err(|err| format!("JSON serialization failed: {}", err))?;
    json.push('\n');
    fs::write(output, json)
        .map_err(|err| format!("failed to write {}: {}", output.display(), err))?;
    Ok(())
}
