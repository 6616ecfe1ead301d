//! Key-value stores for serialized artifacts

use super::key::CacheKey;
use crate::error::CacheError;
use log::debug;
use rustc_hash::FxHashMap;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

/// Persistence for artifacts addressed by [`CacheKey`]
pub trait CacheStore {
    /// Raw contents stored under `key`, if any
    ///
    /// # Errors
    /// Returns an error if the backing storage cannot be read.
    fn read(&self, key: &CacheKey) -> Result<Option<String>, CacheError>;

    /// Replace the contents stored under `key`
    ///
    /// # Errors
    /// Returns an error if the backing storage cannot be written.
    fn write(&self, key: &CacheKey, contents: &str) -> Result<(), CacheError>;

    /// Load and deserialize the value stored under `key`
    ///
    /// # Errors
    /// `Io` for unreadable storage, `Format` for contents of the wrong shape.
    fn load<T: DeserializeOwned>(&self, key: &CacheKey) -> Result<Option<T>, CacheError> {
        match self.read(key)? {
            Some(contents) => Ok(Some(serde_json::from_str(&contents)?)),
            None => Ok(None),
        }
    }

    /// Serialize `value` and store it under `key`
    ///
    /// # Errors
    /// Returns an error if serialization or the write fails.
    fn store<T: Serialize>(&self, key: &CacheKey, value: &T) -> Result<(), CacheError> {
        self.write(key, &serde_json::to_string(value)?)
    }
}

/// JSON files in one directory, one per key
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    #[must_use]
    pub fn path_for(&self, key: &CacheKey) -> PathBuf {
        self.dir.join(format!("{}.json", key.stem()))
    }
}

impl CacheStore for FileStore {
    fn read(&self, key: &CacheKey) -> Result<Option<String>, CacheError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    /// Writes to a temporary file first so readers never see a partial entry
    fn write(&self, key: &CacheKey, contents: &str) -> Result<(), CacheError> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(key);
        let partial = path.with_extension("json.partial");
        fs::write(&partial, contents)?;
        fs::rename(&partial, &path)?;
        debug!("stored {} ({} bytes)", path.display(), contents.len());
        Ok(())
    }
}

/// In-process store
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<FxHashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl CacheStore for MemoryStore {
    fn read(&self, key: &CacheKey) -> Result<Option<String>, CacheError> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(entries.get(key.stem()).cloned())
    }

    fn write(&self, key: &CacheKey, contents: &str) -> Result<(), CacheError> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.stem().to_string(), contents.to_string());
        Ok(())
    }
}
