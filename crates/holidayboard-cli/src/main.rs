use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use glob::glob;
use holidayboard_core::config::{ConfigError, HolidayFile, LoadPolicy};
use holidayboard_core::protocols::rdm::{
    CommandClass, DeviceUid, RawRdmCommand, RdmCommand, RdmError, build_frame,
};
use holidayboard_core::schedule::{ScheduleError, ScheduleQuery, format_date, parse_date};
use holidayboard_core::{WindowReport, build_window_report};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (commit ",
    env!("HOLIDAYBOARD_BUILD_COMMIT"),
    ", ",
    env!("HOLIDAYBOARD_BUILD_DATE"),
    ")"
);

const EXAMPLES: &str = "Examples:\n  holidayboard holidays windows HolidayList.json --year 2024 -o windows.json\n  holidayboard holidays active HolidayList.json --date 2024-12-24\n  holidayboard rdm frame --dest 4c55:0000002a --src 0001:00000001 --transaction 0 --port 1 --command-class get --pid 0x0015";

#[derive(Parser, Debug)]
#[command(name = "holidayboard")]
#[command(version, long_version = LONG_VERSION)]
#[command(
    about = "Holiday display windows and RDM command frames for a holiday light board.",
    long_about = None,
    after_help = EXAMPLES
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Operations on holiday list files (JSON).
    Holidays {
        #[command(subcommand)]
        command: HolidayCommands,
    },
    /// RDM frame encoding helpers.
    Rdm {
        #[command(subcommand)]
        command: RdmCommands,
    },
}

#[derive(Subcommand, Debug)]
enum HolidayCommands {
    /// Compute every holiday window in a year and write a versioned JSON report.
    Windows {
        /// Path to a holiday list (.json); a glob must match exactly one file
        input: PathBuf,

        /// Calendar year to lay out
        #[arg(long)]
        year: i32,

        /// Also report the holidays active on this day (YYYY-MM-DD)
        #[arg(long)]
        active_on: Option<String>,

        /// Output report path (JSON)
        #[arg(short = 'o', long, required_unless_present = "stdout")]
        report: Option<PathBuf>,

        /// Write JSON report to stdout
        #[arg(long, conflicts_with = "report")]
        stdout: bool,

        /// Pretty-print JSON output
        #[arg(long, conflicts_with = "compact")]
        pretty: bool,

        /// Compact JSON output (default)
        #[arg(long)]
        compact: bool,

        /// Suppress non-error output
        #[arg(long)]
        quiet: bool,

        /// Skip malformed holiday definitions instead of failing
        #[arg(long)]
        skip_invalid: bool,
    },
    /// List the holidays active on one day, with their windows and colors.
    Active {
        /// Path to a holiday list (.json); a glob must match exactly one file
        input: PathBuf,

        /// Day to check (YYYY-MM-DD)
        #[arg(long)]
        date: String,

        /// Skip malformed holiday definitions instead of failing
        #[arg(long)]
        skip_invalid: bool,
    },
}

#[derive(Subcommand, Debug)]
enum RdmCommands {
    /// Build a command frame and print it as hexadecimal bytes.
    Frame {
        /// Destination UID (e.g. 4c55:0000002a)
        #[arg(long = "dest")]
        destination: String,

        /// Source UID
        #[arg(long = "src")]
        source: String,

        /// Transaction number (0-255)
        #[arg(long, value_parser = parse_number)]
        transaction: u32,

        /// Port ID (0-255)
        #[arg(long, value_parser = parse_number)]
        port: u32,

        /// Message count (0-255)
        #[arg(long, default_value = "0", value_parser = parse_number)]
        message_count: u32,

        /// Sub-device (0-65535, 0 = root)
        #[arg(long, default_value = "0", value_parser = parse_number)]
        sub_device: u32,

        /// discovery, get, set (or a numeric command class)
        #[arg(long, value_parser = parse_command_class)]
        command_class: u8,

        /// Parameter ID (decimal or 0x-prefixed hex)
        #[arg(long, value_parser = parse_number)]
        pid: u32,

        /// Parameter data as hex bytes (separators ignored)
        #[arg(long)]
        data: Option<String>,
    },
    /// Parse a UID and print its canonical form.
    Uid {
        /// UID text; non-hex characters are ignored
        text: String,
    },
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Holidays { command } => match command {
            HolidayCommands::Windows {
                input,
                year,
                active_on,
                report,
                stdout,
                pretty,
                compact,
                quiet,
                skip_invalid,
            } => cmd_holidays_windows(WindowsArgs {
                input,
                year,
                active_on,
                report,
                stdout,
                pretty,
                compact,
                quiet,
                skip_invalid,
            }),
            HolidayCommands::Active {
                input,
                date,
                skip_invalid,
            } => cmd_holidays_active(&input, &date, skip_invalid),
        },
        Commands::Rdm { command } => match command {
            RdmCommands::Frame {
                destination,
                source,
                transaction,
                port,
                message_count,
                sub_device,
                command_class,
                pid,
                data,
            } => cmd_rdm_frame(
                RawFrameArgs {
                    destination,
                    source,
                    transaction,
                    port,
                    message_count,
                    sub_device,
                    command_class,
                    pid,
                },
                data.as_deref(),
            ),
            RdmCommands::Uid { text } => cmd_rdm_uid(&text),
        },
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = err.hint {
                eprintln!("hint: {}", hint);
            }
            ExitCode::from(2)
        }
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| EnvFilter::new("holidayboard=info")),
        )
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

#[derive(Debug)]
struct CliError {
    message: String,
    hint: Option<String>,
}

impl CliError {
    fn new(message: impl Into<String>, hint: Option<String>) -> Self {
        Self {
            message: message.into(),
            hint,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::new(format!("{err:#}"), None)
    }
}

impl From<ScheduleError> for CliError {
    fn from(err: ScheduleError) -> Self {
        let hint = match &err {
            ScheduleError::Config(config @ ConfigError::MalformedDefinition { .. }) => {
                config.definition_index().map(|index| {
                    format!("fix holiday #{index}, or pass --skip-invalid to skip it")
                })
            }
            ScheduleError::Config(ConfigError::Json(_)) => {
                Some("the holiday list must be valid JSON".to_string())
            }
            ScheduleError::InvalidDate { .. } => Some("dates use the form 2024-12-24".to_string()),
            _ => None,
        };
        CliError::new(err.to_string(), hint)
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        ScheduleError::from(err).into()
    }
}

impl From<RdmError> for CliError {
    fn from(err: RdmError) -> Self {
        let hint = match &err {
            RdmError::EmptyInput { .. } => {
                Some("a UID is 12 hex digits, e.g. 4c55:0000002a".to_string())
            }
            RdmError::PayloadTooLarge { max, .. } => {
                Some(format!("parameter data is limited to {max} bytes"))
            }
            RdmError::UnknownCommandClass { .. } => {
                Some("use discovery, get or set".to_string())
            }
            RdmError::FieldOutOfRange { .. } => None,
        };
        CliError::new(err.to_string(), hint)
    }
}

struct WindowsArgs {
    input: PathBuf,
    year: i32,
    active_on: Option<String>,
    report: Option<PathBuf>,
    stdout: bool,
    pretty: bool,
    compact: bool,
    quiet: bool,
    skip_invalid: bool,
}

fn cmd_holidays_windows(args: WindowsArgs) -> Result<(), CliError> {
    let resolved_input = resolve_input_path(&args.input)?;
    validate_input_file(&resolved_input)?;
    let input_abs = fs::canonicalize(&resolved_input)
        .with_context(|| format!("Failed to resolve input path: {}", resolved_input.display()))?;
    let report = if args.stdout {
        None
    } else {
        Some(args.report.ok_or_else(|| {
            CliError::new(
                "missing output path",
                Some("use -o/--report or --stdout".to_string()),
            )
        })?)
    };

    if let Some(report_path) = report.as_ref() {
        ensure_distinct_output(report_path, &input_abs)?;
    }

    let query = ScheduleQuery {
        year: args.year,
        active_on: args.active_on.as_deref().map(parse_date).transpose()?,
    };
    let file = load_holiday_file(&resolved_input, args.skip_invalid)?;
    let meta = fs::metadata(&resolved_input)
        .with_context(|| format!("Failed to read input file: {}", resolved_input.display()))?;
    let rep = build_window_report(
        &resolved_input.display().to_string(),
        meta.len(),
        &file,
        &query,
    )?;
    let json = serialize_report(&rep, args.pretty, args.compact)?;

    let Some(report) = report else {
        print!("{}", json);
        return Ok(());
    };

    if let Some(parent) = report.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create output directory: {}", parent.display())
            })?;
        }
    }

    fs::write(&report, json)
        .with_context(|| format!("Failed to write report: {}", report.display()))?;

    if !args.quiet {
        eprintln!("OK: report written -> {}", report.display());
    }
    Ok(())
}

fn cmd_holidays_active(input: &Path, date: &str, skip_invalid: bool) -> Result<(), CliError> {
    let resolved_input = resolve_input_path(input)?;
    validate_input_file(&resolved_input)?;
    let day = parse_date(date)?;
    let file = load_holiday_file(&resolved_input, skip_invalid)?;

    let active = file
        .registry
        .active_windows_on(day)
        .map_err(ScheduleError::from)?;
    if active.is_empty() {
        println!("no holidays active on {}", format_date(day)?);
        return Ok(());
    }

    for (id, window) in active {
        let Some(holiday) = file.registry.get(id) else {
            continue;
        };
        let colors = file
            .pattern_for(holiday)
            .map(|pattern| {
                pattern
                    .colors()
                    .iter()
                    .map(|color| color.to_hex())
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{}\t{} .. {} (date {})\t{}",
            holiday.name,
            format_date(window.lead_in)?,
            format_date(window.lead_out)?,
            format_date(window.date)?,
            colors
        );
    }
    Ok(())
}

struct RawFrameArgs {
    destination: String,
    source: String,
    transaction: u32,
    port: u32,
    message_count: u32,
    sub_device: u32,
    command_class: u8,
    pid: u32,
}

fn cmd_rdm_frame(args: RawFrameArgs, data: Option<&str>) -> Result<(), CliError> {
    let raw = RawRdmCommand {
        destination: DeviceUid::parse(&args.destination)?,
        source: DeviceUid::parse(&args.source)?,
        transaction_number: args.transaction,
        port_id: args.port,
        message_count: args.message_count,
        sub_device: args.sub_device,
        command_class: args.command_class,
        parameter_id: args.pid,
        parameter_data: data.map(parse_hex_bytes).transpose()?.unwrap_or_default(),
    };
    let command = RdmCommand::try_from(&raw)?;
    let frame = build_frame(&command)?;
    debug!(
        destination = %command.destination,
        pid = command.parameter_id,
        bytes = frame.len(),
        "built RDM frame"
    );

    let hex = frame
        .iter()
        .map(|byte| format!("{byte:02X}"))
        .collect::<Vec<_>>()
        .join(" ");
    println!("{hex}");
    Ok(())
}

fn cmd_rdm_uid(text: &str) -> Result<(), CliError> {
    let uid = DeviceUid::parse(text)?;
    println!("uid: {uid}");
    println!("manufacturer_id: 0x{:04X}", uid.manufacturer_id());
    println!("device_id: 0x{:08X}", uid.device_id());
    if uid.is_broadcast() {
        println!("broadcast: yes");
    }
    Ok(())
}

fn load_holiday_file(path: &Path, skip_invalid: bool) -> Result<HolidayFile, CliError> {
    let policy = if skip_invalid {
        LoadPolicy::SkipInvalid
    } else {
        LoadPolicy::Strict
    };
    let file = HolidayFile::open(path, policy)?;
    for entry in &file.skipped {
        warn!(index = entry.index, "skipped holiday definition: {}", entry.reason);
    }
    Ok(file)
}

fn serialize_report(rep: &WindowReport, pretty: bool, compact: bool) -> Result<String, CliError> {
    if pretty && compact {
        return Err(CliError::new(
            "cannot use --pretty and --compact together",
            Some("choose one output format".to_string()),
        ));
    }
    if pretty {
        serde_json::to_string_pretty(rep)
            .context("JSON serialization failed")
            .map_err(Into::into)
    } else {
        serde_json::to_string(rep)
            .context("JSON serialization failed")
            .map_err(Into::into)
    }
}

fn ensure_distinct_output(report_path: &Path, input_abs: &Path) -> Result<(), CliError> {
    let parent = match report_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    // A directory that does not exist yet cannot hold the input.
    if !parent.exists() {
        return Ok(());
    }
    let report_dir = fs::canonicalize(parent)
        .with_context(|| format!("Failed to resolve output path: {}", report_path.display()))?;
    let report_target = report_dir.join(
        report_path
            .file_name()
            .ok_or_else(|| anyhow::anyhow!("Invalid report path"))?,
    );
    if report_target == input_abs {
        return Err(CliError::new(
            format!(
                "report path must differ from input: {}",
                report_path.display()
            ),
            Some("choose a different output path".to_string()),
        ));
    }
    Ok(())
}

fn validate_input_file(input: &Path) -> Result<(), CliError> {
    if !input.exists() {
        return Err(CliError::new(
            format!("input file not found: {}", input.display()),
            Some("pass a holiday list .json file".to_string()),
        ));
    }
    if !input.is_file() {
        return Err(CliError::new(
            format!("input is not a file: {}", input.display()),
            Some("pass a holiday list .json file".to_string()),
        ));
    }
    let ext = input
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();
    if ext != "json" {
        return Err(CliError::new(
            format!("unsupported input format '{}'", input.display()),
            Some("expected a .json holiday list".to_string()),
        ));
    }
    Ok(())
}

fn resolve_input_path(input: &Path) -> Result<PathBuf, CliError> {
    let pattern = input.to_string_lossy();
    if !is_glob_pattern(&pattern) {
        return Ok(input.to_path_buf());
    }

    let mut matches = Vec::new();
    let paths = glob(&pattern).map_err(|err| {
        CliError::new(
            format!("invalid input pattern '{}'", pattern),
            Some(format!("pattern error: {}", err.msg)),
        )
    })?;
    for entry in paths {
        let path = entry.map_err(|err| {
            CliError::new(
                format!("invalid input pattern '{}'", pattern),
                Some(format!("pattern error: {}", err)),
            )
        })?;
        if path.is_file() {
            matches.push(path);
        }
    }

    if matches.is_empty() {
        return Err(CliError::new(
            format!("no files match pattern '{}'", pattern),
            Some("check the path or quote the pattern; expected a .json file".to_string()),
        ));
    }
    if matches.len() > 1 {
        let hint = "pass a single holiday list, or run once per file".to_string();
        let listed = matches
            .iter()
            .take(3)
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        let more = if matches.len() > 3 { ", ..." } else { "" };
        let message = format!(
            "multiple files match pattern '{}' ({} matches); matches: {}{}",
            pattern,
            matches.len(),
            listed,
            more
        );
        return Err(CliError::new(message, Some(hint)));
    }

    Ok(matches.remove(0))
}

fn is_glob_pattern(input: &str) -> bool {
    input.contains('*') || input.contains('?') || input.contains('[')
}

/// Decimal or `0x`-prefixed hexadecimal.
fn parse_number(text: &str) -> Result<u32, String> {
    let parsed = match text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
    {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => text.parse::<u32>(),
    };
    parsed.map_err(|err| format!("'{text}' is not a number: {err}"))
}

fn parse_command_class(text: &str) -> Result<u8, String> {
    let class = match text.to_ascii_lowercase().as_str() {
        "discovery" => CommandClass::Discovery,
        "discovery-response" => CommandClass::DiscoveryResponse,
        "get" => CommandClass::Get,
        "get-response" => CommandClass::GetResponse,
        "set" => CommandClass::Set,
        "set-response" => CommandClass::SetResponse,
        _ => {
            let value = parse_number(text)?;
            return u8::try_from(value).map_err(|_| format!("'{text}' does not fit in a byte"));
        }
    };
    Ok(class.as_u8())
}

fn parse_hex_bytes(text: &str) -> Result<Vec<u8>, CliError> {
    let digits: Vec<u32> = text
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, ':' | '-' | ','))
        .map(|c| c.to_digit(16))
        .collect::<Option<_>>()
        .ok_or_else(|| {
            CliError::new(
                format!("invalid parameter data '{text}'"),
                Some("use hex bytes such as 'de ad be ef'".to_string()),
            )
        })?;
    if digits.len() % 2 != 0 {
        return Err(CliError::new(
            format!("parameter data '{text}' has an odd number of hex digits"),
            Some("every byte needs two hex digits".to_string()),
        ));
    }
    let bytes: Vec<u8> = digits
        .chunks(2)
        .map(|pair| ((pair[0] << 4) | pair[1]) as u8)
        .collect();
    Ok(bytes)
}
