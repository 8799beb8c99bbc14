use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use glob::glob;
use serde::Serialize;
use tracing_subscriber::EnvFilter;
use wirelens_core::{
    Envelope, LocationSettings, MessageFamily, Normalizer, encode_location_config,
    timestamp_to_rfc3339,
};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (commit ",
    env!("WIRELENS_BUILD_COMMIT"),
    ", ",
    env!("WIRELENS_BUILD_DATE"),
    ")"
);

const EXAMPLES: &str = "Examples:\n  wirelens decode node_list nodes.bin --stdout --pretty\n  wirelens header frame.bin --stdout\n  wirelens encode-location --latitude 41.39 --longitude 2.17 -o location.bin\n  wirelens families";

#[derive(Parser, Debug)]
#[command(name = "wirelens")]
#[command(version, long_version = LONG_VERSION)]
#[command(
    about = "Decode and normalize robot telemetry payloads (camera, network, daemon, weather).",
    long_about = None,
    after_help = EXAMPLES
)]
struct Cli {
    /// Log filter, e.g. "warn" or "wirelens_core=debug" (overrides RUST_LOG)
    #[arg(long, global = true, value_name = "FILTER")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Decode one message file into a JSON record.
    #[command(after_help = "Examples:\n  wirelens decode network_status status.bin -o status.json\n  wirelens decode telemetry.daemon.v1.NodeEvent 'events/*.bin' --stdout")]
    Decode {
        /// Message family: short name or protobuf type name (see `wirelens families`)
        family: String,

        /// Path (or glob matching exactly one file) of the encoded message
        input: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },
    /// Print the header envelope of any message that carries one.
    Header {
        /// Path (or glob matching exactly one file) of the encoded message
        input: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },
    /// Encode a weather location into wire bytes.
    #[command(after_help = "Examples:\n  wirelens encode-location --latitude -33.87 --longitude 151.21 --timezone Australia/Sydney -o location.bin\n  wirelens encode-location --config location.json -o location.bin")]
    EncodeLocation {
        /// Latitude in degrees
        #[arg(
            long,
            allow_negative_numbers = true,
            required_unless_present = "config",
            requires = "longitude"
        )]
        latitude: Option<f64>,

        /// Longitude in degrees
        #[arg(
            long,
            allow_negative_numbers = true,
            required_unless_present = "config",
            requires = "latitude"
        )]
        longitude: Option<f64>,

        /// IANA timezone name; omit to let the weather service decide
        #[arg(long)]
        timezone: Option<String>,

        /// JSON file with latitude, longitude and optional timezone
        #[arg(long, conflicts_with_all = ["latitude", "longitude", "timezone"])]
        config: Option<PathBuf>,

        /// Output path for the encoded bytes
        #[arg(short = 'o', long)]
        output: PathBuf,

        /// Suppress non-error output
        #[arg(long)]
        quiet: bool,
    },
    /// List known message families.
    Families,
}

#[derive(clap::Args, Debug)]
struct OutputArgs {
    /// Output path (JSON)
    #[arg(short = 'o', long = "output", required_unless_present = "stdout")]
    path: Option<PathBuf>,

    /// Write JSON to stdout
    #[arg(long, conflicts_with = "path")]
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
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = init_logging(cli.log_level.as_deref()).and_then(|()| match cli.command {
        Commands::Decode {
            family,
            input,
            output,
        } => cmd_decode(&family, &input, &output),
        Commands::Header { input, output } => cmd_header(&input, &output),
        Commands::EncodeLocation {
            latitude,
            longitude,
            timezone,
            config,
            output,
            quiet,
        } => cmd_encode_location(latitude, longitude, timezone, config, &output, quiet),
        Commands::Families => cmd_families(),
    });

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
        CliError::new(format!("{:#}", err), None)
    }
}

/// Diagnostics go to stderr so JSON on stdout stays clean.
fn init_logging(level: Option<&str>) -> Result<(), CliError> {
    let filter = match level {
        Some(level) => EnvFilter::try_new(level).map_err(|err| {
            CliError::new(
                format!("invalid log level '{}'", level),
                Some(format!("use error, warn, info, debug or trace ({})", err)),
            )
        })?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| CliError::new(format!("failed to initialize logging: {}", err), None))
}

fn cmd_decode(family: &str, input: &Path, output: &OutputArgs) -> Result<(), CliError> {
    let family: MessageFamily = family.parse().map_err(|err| {
        CliError::new(
            format!("{}", err),
            Some("run `wirelens families` to list known families".to_string()),
        )
    })?;
    let (resolved_input, payload) = read_input(input)?;
    tracing::debug!(%family, bytes = payload.len(), "decoding message");

    let record = Normalizer::new()
        .decode(family, &payload)
        .ok_or_else(|| {
            CliError::new(
                format!(
                    "failed to decode {} as {}",
                    resolved_input.display(),
                    family
                ),
                Some(format!(
                    "expected a single {} payload",
                    family.type_name()
                )),
            )
        })?;

    let json = serialize_json(&record, output.pretty, output.compact)?;
    write_json(&json, &resolved_input, output)
}

/// Envelope plus human-readable renderings of its timestamps.
#[derive(Debug, Serialize)]
struct HeaderView {
    #[serde(flatten)]
    envelope: Envelope,
    #[serde(skip_serializing_if = "Option::is_none")]
    acquisition_time_rfc3339: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    publish_time_rfc3339: Option<String>,
}

impl From<Envelope> for HeaderView {
    fn from(envelope: Envelope) -> Self {
        Self {
            acquisition_time_rfc3339: timestamp_to_rfc3339(envelope.acquisition_time),
            publish_time_rfc3339: timestamp_to_rfc3339(envelope.publish_time),
            envelope,
        }
    }
}

fn cmd_header(input: &Path, output: &OutputArgs) -> Result<(), CliError> {
    let (resolved_input, payload) = read_input(input)?;
    let envelope = Normalizer::new().header(&payload).ok_or_else(|| {
        CliError::new(
            format!("no header found in {}", resolved_input.display()),
            Some("the message must carry its header at field 1".to_string()),
        )
    })?;

    let json = serialize_json(&HeaderView::from(envelope), output.pretty, output.compact)?;
    write_json(&json, &resolved_input, output)
}

fn cmd_encode_location(
    latitude: Option<f64>,
    longitude: Option<f64>,
    timezone: Option<String>,
    config: Option<PathBuf>,
    output: &Path,
    quiet: bool,
) -> Result<(), CliError> {
    let settings = match (config, latitude, longitude) {
        (Some(config), _, _) => load_location_settings(&config)?,
        (None, Some(latitude), Some(longitude)) => LocationSettings {
            latitude,
            longitude,
            timezone,
        },
        _ => {
            return Err(CliError::new(
                "missing location",
                Some("use --latitude and --longitude, or --config".to_string()),
            ));
        }
    };

    let bytes = encode_location_config(&settings);
    tracing::debug!(bytes = bytes.len(), "encoded location config");
    create_parent_dir(output)?;
    fs::write(output, &bytes)
        .with_context(|| format!("Failed to write output: {}", output.display()))?;

    if !quiet {
        eprintln!(
            "OK: location config ({} bytes) written -> {}",
            bytes.len(),
            output.display()
        );
    }
    Ok(())
}

fn cmd_families() -> Result<(), CliError> {
    for family in MessageFamily::ALL {
        println!("{:<18}{}", family.name(), family.type_name());
    }
    Ok(())
}

fn load_location_settings(path: &Path) -> Result<LocationSettings, CliError> {
    let resolved = resolve_input_path(path)?;
    let text = fs::read_to_string(&resolved)
        .with_context(|| format!("Failed to read config file: {}", resolved.display()))?;
    LocationSettings::from_json(&text).map_err(|err| {
        CliError::new(
            format!("invalid location config {}: {}", resolved.display(), err),
            Some(
                r#"expected {"latitude": <deg>, "longitude": <deg>, "timezone": "<IANA name>"}"#
                    .to_string(),
            ),
        )
    })
}

fn read_input(input: &Path) -> Result<(PathBuf, Vec<u8>), CliError> {
    let resolved_input = resolve_input_path(input)?;
    validate_input_file(&resolved_input)?;
    let payload = fs::read(&resolved_input)
        .with_context(|| format!("Failed to read input file: {}", resolved_input.display()))?;
    Ok((resolved_input, payload))
}

fn serialize_json<T: Serialize>(value: &T, pretty: bool, compact: bool) -> Result<String, CliError> {
    if pretty && compact {
        return Err(CliError::new(
            "cannot use --pretty and --compact together",
            Some("choose one output format".to_string()),
        ));
    }
    if pretty {
        serde_json::to_string_pretty(value)
            .context("JSON serialization failed")
            .map_err(Into::into)
    } else {
        serde_json::to_string(value)
            .context("JSON serialization failed")
            .map_err(Into::into)
    }
}

fn write_json(json: &str, input: &Path, output: &OutputArgs) -> Result<(), CliError> {
    if output.stdout {
        println!("{}", json);
        return Ok(());
    }

    let path = output.path.as_ref().ok_or_else(|| {
        CliError::new(
            "missing output path",
            Some("use -o/--output or --stdout".to_string()),
        )
    })?;
    ensure_distinct_output(input, path)?;
    create_parent_dir(path)?;
    fs::write(path, json).with_context(|| format!("Failed to write output: {}", path.display()))?;

    if !output.quiet {
        eprintln!("OK: record written -> {}", path.display());
    }
    Ok(())
}

fn ensure_distinct_output(input: &Path, output: &Path) -> Result<(), CliError> {
    let input_abs = fs::canonicalize(input)
        .with_context(|| format!("Failed to resolve input path: {}", input.display()))?;
    let output_dir = match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let Ok(output_dir) = fs::canonicalize(output_dir) else {
        return Ok(());
    };
    let Some(file_name) = output.file_name() else {
        return Err(CliError::new(
            format!("invalid output path: {}", output.display()),
            Some("pass a file path, not a directory".to_string()),
        ));
    };
    if output_dir.join(file_name) == input_abs {
        return Err(CliError::new(
            format!("output path must differ from input: {}", output.display()),
            Some("choose a different output path".to_string()),
        ));
    }
    Ok(())
}

fn create_parent_dir(path: &Path) -> Result<(), CliError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create output directory: {}", parent.display())
            })?;
        }
    }
    Ok(())
}

fn validate_input_file(input: &Path) -> Result<(), CliError> {
    if !input.exists() {
        return Err(CliError::new(
            format!("input file not found: {}", input.display()),
            Some("pass the path of an encoded message file".to_string()),
        ));
    }
    if !input.is_file() {
        return Err(CliError::new(
            format!("input is not a file: {}", input.display()),
            Some("pass the path of an encoded message file".to_string()),
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
            Some("check the path or quote the pattern".to_string()),
        ));
    }
    if matches.len() > 1 {
        let listed = matches
            .iter()
            .take(3)
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        let more = if matches.len() > 3 { ", ..." } else { "" };
        return Err(CliError::new(
            format!(
                "multiple files match pattern '{}' ({} matches); matches: {}{}",
                pattern,
                matches.len(),
                listed,
                more
            ),
            Some("pass a single message file, or run once per file".to_string()),
        ));
    }

    Ok(matches.remove(0))
}

fn is_glob_pattern(input: &str) -> bool {
    input.contains('*') || input.contains('?') || input.contains('[')
}
