//! Namespaced JSON key-value storage
//!
//! One `hsk_<key>.json` file per key under the data directory, pretty
//! printed for inspectability. The public surface is deliberately
//! infallible: `load` returns the caller's fallback on any failure and
//! `save` logs and swallows errors, mirroring the storage contract the
//! progress tracker relies on.

use std::fs;
use std::path::PathBuf;

use log::warn;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// Filename prefix for every stored key
const KEY_PREFIX: &str = "hsk_";

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Data directory not found")]
    DataDirNotFound,
}

pub type Result<T> = std::result::Result<T, StorageError>;

/// Key-value store rooted at a data directory
pub struct KvStorage {
    base_path: PathBuf,
}

impl KvStorage {
    /// Open a store at `base_path`, creating the directory if needed
    pub fn new(base_path: PathBuf) -> Result<Self> {
        fs::create_dir_all(&base_path)?;
        Ok(Self { base_path })
    }

    /// Get the default data directory
    pub fn default_data_dir() -> Result<PathBuf> {
        dirs::data_local_dir()
            .map(|p| p.join("tingxie"))
            .ok_or(StorageError::DataDirNotFound)
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.base_path.join(format!("{}{}.json", KEY_PREFIX, key))
    }

    /// Load a value, returning `fallback` on any failure
    ///
    /// A missing key, unreadable file, and malformed JSON all yield the
    /// fallback; only the latter two are logged.
    pub fn load<T: DeserializeOwned>(&self, key: &str, fallback: T) -> T {
        match self.try_load(key) {
            Ok(Some(value)) => value,
            Ok(None) => fallback,
            Err(err) => {
                warn!("failed to load '{}', using fallback: {}", key, err);
                fallback
            }
        }
    }

    fn try_load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let path = self.entry_path(key);
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(path)?;
        Ok(Some(serde_json::from_str(&content)?))
    }

    /// Save a value; failures are logged and swallowed
    pub fn save<T: Serialize>(&self, key: &str, value: &T) {
        if let Err(err) = self.try_save(key, value) {
            warn!("failed to save '{}': {}", key, err);
        }
    }

    fn try_save<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let path = self.entry_path(key);
        fs::write(path, serde_json::to_string_pretty(value)?)?;
        Ok(())
    }

    /// Delete a stored key if present, best effort
    pub fn remove(&self, key: &str) {
        let path = self.entry_path(key);
        if path.exists() {
            if let Err(err) = fs::remove_file(&path) {
                warn!("failed to remove '{}': {}", key, err);
            }
        }
    }
}
