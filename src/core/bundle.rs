//! core/bundle.rs
//! Recreation bundle: a tiny key -> int map saved when the window closes
//! and handed back to the controller on the next launch.
//!
//! Stored as JSON in a temp-dir file. It is not a database: if the file is
//! gone, the app simply starts from 0.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::Result;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bundle {
    #[serde(default)]
    ints: BTreeMap<String, i32>,
}

impl Bundle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put_int(&mut self, key: &str, value: i32) {
        self.ints.insert(key.to_string(), value);
    }

    pub fn get_int(&self, key: &str, default: i32) -> i32 {
        self.ints.get(key).copied().unwrap_or(default)
    }

    /// Read a bundle file.
    /// - missing file -> Ok(None)
    /// - unreadable / not JSON -> Err
    pub fn load(path: &Path) -> Result<Option<Self>> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        Ok(Some(serde_json::from_str(&text)?))
    }

    /// Write the bundle, creating parent folders if needed.
    pub fn store(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ContestError;

    #[test]
    fn get_int_falls_back_to_default() {
        let mut bundle = Bundle::new();
        assert_eq!(bundle.get_int("SCORE_KEY", 0), 0);

        bundle.put_int("SCORE_KEY", 7);
        assert_eq!(bundle.get_int("SCORE_KEY", 0), 7);
        assert_eq!(bundle.get_int("OTHER_KEY", -1), -1);
    }

    #[test]
    fn store_then_load_from_nested_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("state.json");

        let mut bundle = Bundle::new();
        bundle.put_int("SCORE_KEY", 7);
        bundle.store(&path).unwrap();

        let loaded = Bundle::load(&path).unwrap();
        assert_eq!(loaded, Some(bundle));
    }

    #[test]
    fn missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = Bundle::load(&dir.path().join("nope.json")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        fs::write(&path, "{ not json").unwrap();

        let err = Bundle::load(&path).unwrap_err();
        assert!(matches!(err, ContestError::BundleFormat(_)));
    }

    #[test]
    fn empty_object_loads_as_empty_bundle() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        fs::write(&path, "{}").unwrap();

        assert_eq!(Bundle::load(&path).unwrap(), Some(Bundle::new()));
    }
}
