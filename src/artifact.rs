//! Binary artifact persistence
//!
//! Thin wrappers over `bincode` for saving and loading arbitrary serde
//! values (model weights, encoders, split indices). The on-disk format is
//! bincode's and is not intended for cross-language portability.

use crate::error::UtilError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::info;

/// Serializes `data` to a binary file at `path`
pub fn save_bin<T: Serialize>(data: &T, path: impl AsRef<Path>) -> Result<(), UtilError> {
    let path = path.as_ref();
    let bytes = bincode::serialize(data)?;
    fs::write(path, bytes)?;
    info!("binary file saved at: {}", path.display());
    Ok(())
}

/// Deserializes a value from the binary file at `path`
pub fn load_bin<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, UtilError> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;
    let data = bincode::deserialize(&bytes)?;
    info!("binary file loaded from: {}", path.display());
    Ok(data)
}
