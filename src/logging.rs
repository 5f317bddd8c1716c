//! Process-wide logging initialization
//!
//! Installs a `tracing` subscriber that mirrors every event to an append-mode
//! log file and to standard output, using a bracketed line format:
//!
//! ```text
//! [2024-05-01 12:30:00.123: INFO: mlscaffold::config: yaml file loaded successfully: params.yaml]
//! ```
//!
//! Initialization is explicit: call [`init_logging`] once at process start
//! and hold the returned [`LogHandle`]. There is no module-load side effect;
//! if the log directory cannot be created or the file cannot be opened, the
//! error propagates to the caller and nothing is installed.
//!
//! # Example
//!
//! ```no_run
//! use mlscaffold::logging::{init_logging, LoggingConfig};
//!
//! let handle = init_logging(LoggingConfig::default()).expect("logging init failed");
//! tracing::info!("pipeline started, logging to {}", handle.log_path().display());
//! ```

use chrono::Local;
use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use thiserror::Error;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::{self, format::Writer, FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::EnvFilter;

/// Default directory for log output, relative to the working directory
const DEFAULT_LOG_DIR: &str = "logs";

/// Default log file name within the log directory
const DEFAULT_LOG_FILE: &str = "running_logs.log";

/// Logging initialization errors
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The log directory could not be created
    #[error("failed to create log directory {dir}: {source}")]
    CreateLogDir { dir: PathBuf, source: io::Error },

    /// The log file could not be opened for appending
    #[error("failed to open log file {path}: {source}")]
    OpenLogFile { path: PathBuf, source: io::Error },

    /// A global subscriber was already installed
    #[error(transparent)]
    Install(#[from] TryInitError),
}

/// Configuration for logging initialization
///
/// The defaults reproduce the fixed scaffold behavior: INFO level, an
/// append-mode file under `logs/`, and mirroring to standard output.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Minimum log level to record
    pub level: Level,

    /// Directory holding the log file, created if absent
    pub log_dir: PathBuf,

    /// File name within `log_dir`, opened in append mode
    pub log_file: String,

    /// Mirror every line to standard output
    pub mirror_stdout: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
            log_file: DEFAULT_LOG_FILE.to_string(),
            mirror_stdout: true,
        }
    }
}

impl LoggingConfig {
    /// Creates a configuration with the specified level
    pub fn with_level(level: Level) -> Self {
        Self {
            level,
            ..Default::default()
        }
    }

    /// Creates a configuration writing under the given directory
    pub fn in_dir(log_dir: impl Into<PathBuf>) -> Self {
        Self {
            log_dir: log_dir.into(),
            ..Default::default()
        }
    }

    fn log_path(&self) -> PathBuf {
        self.log_dir.join(&self.log_file)
    }
}

/// Handle returned by a successful [`init_logging`] call
///
/// Proof that initialization ran; carries the resolved log file path so
/// callers and tests can locate the output.
#[derive(Debug, Clone)]
pub struct LogHandle {
    log_path: PathBuf,
}

impl LogHandle {
    /// Path of the append-mode log file
    pub fn log_path(&self) -> &Path {
        &self.log_path
    }
}

/// Event formatter producing `[<timestamp>: <LEVEL>: <module>: <message>]`
struct BracketFormat;

impl<S, N> FormatEvent<S, N> for BracketFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();
        write!(
            writer,
            "[{}: {}: {}: ",
            Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
            meta.level(),
            meta.target(),
        )?;
        ctx.format_fields(writer.by_ref(), event)?;
        writeln!(writer, "]")
    }
}

/// Initializes process-wide logging
///
/// Creates the log directory if missing, opens the log file in append mode,
/// and installs the global subscriber with a file layer and (optionally) a
/// stdout layer. `RUST_LOG` overrides the configured level when set,
/// matching the rest of the tracing ecosystem.
///
/// # Errors
///
/// Returns [`LoggingError`] if the directory cannot be created, the file
/// cannot be opened, or a global subscriber is already installed. No
/// fallback destination is attempted.
pub fn init_logging(config: LoggingConfig) -> Result<LogHandle, LoggingError> {
    std::fs::create_dir_all(&config.log_dir).map_err(|source| LoggingError::CreateLogDir {
        dir: config.log_dir.clone(),
        source,
    })?;

    let log_path = config.log_path();
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .map_err(|source| LoggingError::OpenLogFile {
            path: log_path.clone(),
            source,
        })?;

    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(config.level).into())
        .from_env_lossy();

    let file_layer = fmt::layer()
        .event_format(BracketFormat)
        .with_ansi(false)
        .with_writer(Mutex::new(file));

    let stdout_layer = fmt::layer()
        .event_format(BracketFormat)
        .with_writer(io::stdout);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(config.mirror_stdout.then_some(stdout_layer))
        .try_init()?;

    Ok(LogHandle { log_path })
}

/// Initializes logging with the default configuration
pub fn init_default() -> Result<LogHandle, LoggingError> {
    init_logging(LoggingConfig::default())
}
