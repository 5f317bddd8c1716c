//! YAML and JSON configuration documents
//!
//! Both readers return a [`ConfigMap`], an order-preserving key/value view of
//! the document root. Field access comes in two flavors:
//!
//! - key-style: [`ConfigMap::get`], [`ConfigMap::require`], or indexing with
//!   `map["key"]`
//! - typed: [`ConfigMap::deserialize_into`] into a `Deserialize` struct
//!   defined at the use site
//!
//! # Example
//!
//! ```no_run
//! use mlscaffold::config::read_yaml;
//!
//! # fn main() -> Result<(), mlscaffold::UtilError> {
//! let params = read_yaml("params.yaml")?;
//! let epochs = params.require("epochs")?.as_u64();
//! # Ok(())
//! # }
//! ```

use crate::error::UtilError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use serde_yaml::{Mapping, Value};
use std::fs;
use std::ops::Index;
use std::path::Path;
use tracing::info;

/// Parsed form of a YAML or JSON document whose root is a non-empty mapping
///
/// Keys keep document order. Equality is structural, so round-trip tests can
/// compare whole documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigMap {
    root: Mapping,
}

impl ConfigMap {
    /// Validates a parsed document root
    ///
    /// Null documents and empty mappings are both rejected as empty; scalar
    /// or sequence roots are rejected as non-mappings.
    fn from_value(value: Value, path: &Path) -> Result<Self, UtilError> {
        match value {
            Value::Null => Err(UtilError::EmptyDocument {
                path: path.to_path_buf(),
            }),
            Value::Mapping(root) if root.is_empty() => Err(UtilError::EmptyDocument {
                path: path.to_path_buf(),
            }),
            Value::Mapping(root) => Ok(Self { root }),
            _ => Err(UtilError::NotAMapping {
                path: path.to_path_buf(),
            }),
        }
    }

    /// Looks up a top-level key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.root.get(key)
    }

    /// Looks up a top-level key, failing if absent
    pub fn require(&self, key: &str) -> Result<&Value, UtilError> {
        self.get(key)
            .ok_or_else(|| UtilError::KeyNotFound(key.to_string()))
    }

    /// Number of top-level keys
    pub fn len(&self) -> usize {
        self.root.len()
    }

    /// Always false for a successfully parsed document
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Iterates top-level keys in document order
    pub fn keys(&self) -> impl Iterator<Item = &Value> {
        self.root.keys()
    }

    /// Deserializes the whole document into a typed configuration struct
    pub fn deserialize_into<T: DeserializeOwned>(&self) -> Result<T, UtilError> {
        let value = Value::Mapping(self.root.clone());
        Ok(serde_yaml::from_value(value)?)
    }
}

impl Index<&str> for ConfigMap {
    type Output = Value;

    /// Key-style access; missing keys yield `Value::Null`
    fn index(&self, key: &str) -> &Value {
        static NULL: Value = Value::Null;
        self.root.get(key).unwrap_or(&NULL)
    }
}

/// Reads a YAML document into a [`ConfigMap`]
///
/// # Errors
///
/// - [`UtilError::EmptyDocument`] when the document parses to null or `{}`
/// - [`UtilError::NotAMapping`] when the root is a scalar or sequence
/// - underlying I/O and parse errors propagate unwrapped
pub fn read_yaml(path: impl AsRef<Path>) -> Result<ConfigMap, UtilError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let value: Value = serde_yaml::from_str(&text)?;
    let map = ConfigMap::from_value(value, path)?;
    info!("yaml file loaded successfully: {}", path.display());
    Ok(map)
}

/// Reads a JSON document into a [`ConfigMap`]
///
/// Same contract as [`read_yaml`], with JSON parse errors in place of YAML
/// ones.
pub fn load_json(path: impl AsRef<Path>) -> Result<ConfigMap, UtilError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let json: serde_json::Value = serde_json::from_str(&text)?;
    let value = serde_yaml::to_value(&json)?;
    let map = ConfigMap::from_value(value, path)?;
    info!("json file loaded successfully from: {}", path.display());
    Ok(map)
}

/// Serializes `data` as 4-space-indented JSON at `path`, overwriting any
/// existing file
pub fn save_json<T: Serialize>(path: impl AsRef<Path>, data: &T) -> Result<(), UtilError> {
    let path = path.as_ref();
    let mut buf = Vec::with_capacity(256);
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    data.serialize(&mut serializer)?;
    fs::write(path, buf)?;
    info!("json file saved at: {}", path.display());
    Ok(())
}
