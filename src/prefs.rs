//! User preference persistence
//!
//! Small JSON-file key-value store for things like volume and genre choice.
//! Keys live in a sorted map so the saved file is stable across runs.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// File-backed preference store
#[derive(Debug)]
pub struct Preferences {
    path: PathBuf,
    values: BTreeMap<String, Value>,
}

impl Preferences {
    /// Load preferences from `path`. A missing file yields an empty store.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let values = if path.exists() {
            let raw = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read preferences: {:?}", path))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("Malformed preferences file: {:?}", path))?
        } else {
            BTreeMap::new()
        };

        Ok(Self { path, values })
    }

    /// Read a preference, falling back to `default` when absent or of the
    /// wrong shape.
    pub fn get<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        match self.values.get(key) {
            Some(value) => serde_json::from_value(value.clone()).unwrap_or_else(|e| {
                log::warn!("Preference '{}' has unexpected shape: {}", key, e);
                default
            }),
            None => default,
        }
    }

    /// Store a preference value. Not persisted until [`save`](Self::save).
    pub fn set<T: Serialize>(&mut self, key: &str, value: T) -> Result<()> {
        let value = serde_json::to_value(value)
            .with_context(|| format!("Failed to serialize preference '{}'", key))?;
        self.values.insert(key.to_string(), value);
        Ok(())
    }

    /// Remove one preference. Returns true if it existed.
    pub fn remove(&mut self, key: &str) -> bool {
        self.values.remove(key).is_some()
    }

    /// Drop every stored preference.
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Write the store back to its file, creating parent directories.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create preference directory: {:?}", parent))?;
        }

        let raw = serde_json::to_string_pretty(&self.values)?;
        fs::write(&self.path, raw)
            .with_context(|| format!("Failed to write preferences: {:?}", self.path))?;

        log::debug!("Saved {} preference(s) to {:?}", self.values.len(), self.path);
        Ok(())
    }
}
