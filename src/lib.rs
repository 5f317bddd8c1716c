//! mlscaffold - shared utilities for ML pipeline scaffolds
//!
//! This library provides the small common layer consumed by the training and
//! inference pipeline stages: explicit process-wide logging initialization
//! and helpers for reading/writing the configuration and artifact files the
//! stages exchange.
//!
//! # Core Concepts
//!
//! - **Logging**: one [`logging::init_logging`] call at process start
//!   installs a subscriber that appends bracketed lines to
//!   `logs/running_logs.log` and mirrors them to stdout
//! - **Configuration documents**: YAML/JSON files parsed into a
//!   [`ConfigMap`] with key-style and typed access
//! - **Artifacts**: opaque serde values persisted as bincode files
//!
//! # Example Usage
//!
//! ```no_run
//! use mlscaffold::{create_directories, init_logging, read_yaml, LoggingConfig};
//! use std::path::PathBuf;
//!
//! fn main() -> anyhow::Result<()> {
//!     let _handle = init_logging(LoggingConfig::default())?;
//!
//!     let params = read_yaml("params.yaml")?;
//!     create_directories(&[PathBuf::from("artifacts/model")], true)?;
//!
//!     let epochs = params.require("epochs")?.as_u64();
//!     tracing::info!("training for {:?} epochs", epochs);
//!     Ok(())
//! }
//! ```

// Public modules
pub mod artifact;
pub mod config;
pub mod error;
pub mod fs;
pub mod logging;

// Re-export key items for convenient access
pub use artifact::{load_bin, save_bin};
pub use config::{load_json, read_yaml, save_json, ConfigMap};
pub use error::UtilError;
pub use fs::{create_directories, get_size};
pub use logging::{init_default, init_logging, LogHandle, LoggingConfig, LoggingError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
