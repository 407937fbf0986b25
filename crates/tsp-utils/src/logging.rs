//! # Logging Utilities
//!
//! Logging for the launcher's own diagnostics, built on `tracing`.
//!
//! Everything is written to **stderr**: stdout belongs to gdb and to the
//! program being debugged. The default level is `warn`, so a normal launch
//! prints nothing.
//!
//! ## Environment Variables
//!
//! - `RUST_LOG`: Level filter (e.g. `RUST_LOG=debug`, `RUST_LOG=tsp_core=debug`)
//! - `TRACK_SHARED_PTRS_LOG_FORMAT`: `pretty` (default) or `json`
//! - `TRACK_SHARED_PTRS_LOG_FILE`: Optional file that receives a copy of every event
//!
//! None of these affect the debugger command line.
//!
//! ## Example
//!
//! ```rust,no_run
//! use tsp_utils::init_logging;
//!
//! let guard = init_logging().expect("Failed to initialize logging");
//! tracing::debug!("parsed arguments");
//! // Flush file output before handing the process over to gdb
//! drop(guard);
//! ```

use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::{env, io};

use chrono::Utc;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::fmt::{self};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

/// Environment variable selecting the output format.
pub const LOG_FORMAT_ENV: &str = "TRACK_SHARED_PTRS_LOG_FORMAT";

/// Environment variable naming an optional log file.
pub const LOG_FILE_ENV: &str = "TRACK_SHARED_PTRS_LOG_FILE";

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat
{
    /// Human-readable output (default)
    #[default]
    Pretty,
    /// One JSON object per event
    Json,
}

impl FromStr for LogFormat
{
    type Err = LoggingError;

    fn from_str(s: &str) -> Result<Self, Self::Err>
    {
        match s.to_lowercase().as_str() {
            "pretty" | "dev" | "development" => Ok(LogFormat::Pretty),
            "json" | "prod" | "production" => Ok(LogFormat::Json),
            _ => Err(LoggingError::InvalidFormat(s.to_string())),
        }
    }
}

/// Log level for the launcher itself.
///
/// This is unrelated to the `--log` flag, which is forwarded to the gdb
/// extension untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel
{
    /// Error level
    Error,
    /// Warning level (default)
    #[default]
    Warn,
    /// Info level
    Info,
    /// Debug level
    Debug,
    /// Trace level (most verbose)
    Trace,
}

impl From<LogLevel> for Level
{
    fn from(level: LogLevel) -> Self
    {
        match level {
            LogLevel::Error => Level::ERROR,
            LogLevel::Warn => Level::WARN,
            LogLevel::Info => Level::INFO,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Trace => Level::TRACE,
        }
    }
}

impl FromStr for LogLevel
{
    type Err = LoggingError;

    fn from_str(s: &str) -> Result<Self, Self::Err>
    {
        match s.to_lowercase().as_str() {
            "error" | "err" => Ok(LogLevel::Error),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" | "dbg" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            _ => Err(LoggingError::InvalidLevel(s.to_string())),
        }
    }
}

/// Keeps the background file writer alive.
///
/// Dropping the guard flushes pending file output. Drop it before replacing
/// the process image, otherwise buffered lines are lost.
#[must_use = "dropping the guard stops file logging"]
#[derive(Debug, Default)]
pub struct LoggingGuard
{
    file: Option<WorkerGuard>,
}

impl LoggingGuard
{
    /// Whether a file layer was installed.
    pub fn has_file(&self) -> bool
    {
        self.file.is_some()
    }
}

/// Initialize logging from the environment
///
/// Reads `TRACK_SHARED_PTRS_LOG_FORMAT` (unknown values fall back to pretty),
/// `TRACK_SHARED_PTRS_LOG_FILE` and `RUST_LOG`. Without `RUST_LOG` the level
/// is `warn`.
///
/// ## Errors
///
/// Returns an error if a global subscriber is already installed or the log
/// file directory cannot be created.
pub fn init_logging() -> Result<LoggingGuard, LoggingError>
{
    let format = env::var(LOG_FORMAT_ENV)
        .ok()
        .and_then(|s| LogFormat::from_str(&s).ok())
        .unwrap_or_default();

    let default_level = env::var("RUST_LOG")
        .ok()
        .and_then(|s| s.parse::<LogLevel>().ok())
        .unwrap_or_default();

    let log_file = env::var_os(LOG_FILE_ENV).map(PathBuf::from);

    init_logging_internal(format, default_level.into(), log_file.as_deref())
}

/// Initialize logging with explicit level and format, console only
///
/// `RUST_LOG` still refines the filter when it is set.
///
/// ## Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging_with_level(level: LogLevel, format: LogFormat) -> Result<LoggingGuard, LoggingError>
{
    init_logging_internal(format, level.into(), None)
}

fn build_filter(default_level: Level) -> EnvFilter
{
    // RUST_LOG can override the default level with more specific filters
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level.to_string()))
}

/// Resolve the configured log file.
///
/// A directory gets a dated file name, `YYYY-MM-DD-track-shared-ptrs.log`.
fn resolve_log_file(path: &Path) -> PathBuf
{
    if path.is_dir() {
        let today = Utc::now().format("%Y-%m-%d");
        path.join(format!("{today}-track-shared-ptrs.log"))
    } else {
        path.to_path_buf()
    }
}

fn file_writer(path: &Path) -> Result<(tracing_appender::non_blocking::NonBlocking, WorkerGuard), LoggingError>
{
    let path = resolve_log_file(path);
    let path = path.as_path();
    let file_name = path
        .file_name()
        .ok_or_else(|| LoggingError::InvalidFile(path.display().to_string()))?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    std::fs::create_dir_all(&dir)?;

    // The name is used as given; one launcher run never spans a rollover
    let appender = tracing_appender::rolling::never(dir, file_name);
    Ok(tracing_appender::non_blocking(appender))
}

fn init_logging_internal(
    format: LogFormat,
    default_level: Level,
    log_file: Option<&Path>,
) -> Result<LoggingGuard, LoggingError>
{
    let (file_sink, guard) = match log_file {
        Some(path) => {
            let (writer, guard) = file_writer(path)?;
            (Some(writer), Some(guard))
        }
        None => (None, None),
    };

    let result = match format {
        LogFormat::Pretty => {
            let console_layer = fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_timer(ChronoUtc::rfc_3339())
                .with_ansi(true)
                .with_writer(io::stderr)
                .with_filter(build_filter(default_level));

            let file_layer = file_sink.map(|writer| {
                fmt::layer()
                    .with_writer(writer)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(false) // No ANSI in files
                    .with_filter(build_filter(default_level))
            });

            Registry::default().with(console_layer).with(file_layer).try_init()
        }
        LogFormat::Json => {
            let console_layer = fmt::layer()
                .json()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_timer(ChronoUtc::rfc_3339())
                .with_current_span(true)
                .with_span_list(true)
                .with_writer(io::stderr)
                .with_filter(build_filter(default_level));

            let file_layer = file_sink.map(|writer| {
                fmt::layer()
                    .json()
                    .with_writer(writer)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_current_span(true)
                    .with_span_list(true)
                    .with_filter(build_filter(default_level))
            });

            Registry::default().with(console_layer).with(file_layer).try_init()
        }
    };

    result.map_err(|e| LoggingError::InitializationFailed(e.to_string()))?;

    Ok(LoggingGuard { file: guard })
}

/// Logging initialization error
#[derive(Debug, thiserror::Error)]
pub enum LoggingError
{
    /// Invalid log format
    #[error("Invalid log format: {0}. Use 'pretty' or 'json'")]
    InvalidFormat(String),

    /// Invalid log level
    #[error("Invalid log level: {0}. Use 'error', 'warn', 'info', 'debug', or 'trace'")]
    InvalidLevel(String),

    /// The log file path has no file name
    #[error("Invalid log file path: {0}")]
    InvalidFile(String),

    /// A global subscriber was already installed
    #[error("Failed to initialize logging: {0}")]
    InitializationFailed(String),

    /// File logging error
    #[error("File logging error: {0}")]
    FileError(#[from] io::Error),
}
