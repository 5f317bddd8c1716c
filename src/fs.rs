//! Filesystem helpers

use crate::error::UtilError;
use std::fs;
use std::path::Path;
use tracing::info;

/// Ensures every path in `paths` exists as a directory
///
/// Intermediate segments are created as needed; pre-existing directories are
/// not an error, so the call is idempotent. When `verbose` is set each path
/// is logged whether or not it already existed.
pub fn create_directories<P: AsRef<Path>>(paths: &[P], verbose: bool) -> Result<(), UtilError> {
    for path in paths {
        let path = path.as_ref();
        fs::create_dir_all(path)?;
        if verbose {
            info!("created directory at: {}", path.display());
        }
    }
    Ok(())
}

/// Reports a file's size rounded to the nearest kilobyte, as `"~ {N} KB"`
///
/// Propagates the underlying I/O error if the path does not exist or is
/// inaccessible. Emits no log line.
pub fn get_size(path: impl AsRef<Path>) -> Result<String, UtilError> {
    let bytes = fs::metadata(path.as_ref())?.len();
    let kb = (bytes as f64 / 1024.0).round() as u64;
    Ok(format!("~ {} KB", kb))
}
