//! Error types for the file I/O helpers
//!
//! Policy: no local recovery and no retries. Parse, serialization, and I/O
//! failures surface to the caller unwrapped via `#[error(transparent)]`; the
//! only errors minted here are the ones the underlying libraries cannot
//! express (empty documents, wrong document shape, missing keys).

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the configuration and artifact helpers
#[derive(Debug, Error)]
pub enum UtilError {
    /// The document parsed to null or to an empty mapping
    #[error("document is empty: {path}")]
    EmptyDocument { path: PathBuf },

    /// The document root is a scalar or sequence instead of a mapping
    #[error("document root is not a mapping: {path}")]
    NotAMapping { path: PathBuf },

    /// A required key is absent from a configuration mapping
    #[error("missing configuration key: {0}")]
    KeyNotFound(String),

    /// YAML parse or serialize error
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    /// JSON parse or serialize error
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Binary encode or decode error
    #[error(transparent)]
    Bin(#[from] bincode::Error),

    /// Underlying filesystem error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
