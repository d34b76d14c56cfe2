//! Key-value persistence for the option list
//!
//! The widget keeps a single JSON-encoded value under
//! [`STORAGE_KEY`](crate::constants::wheel::STORAGE_KEY). Persistence is best
//! effort: unreadable or corrupt values count as "nothing saved" and failed
//! writes are dropped by [`OptionsRepository`].

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::constants::wheel::STORAGE_KEY;
use crate::core::default_options;
use crate::error::WheelError;

/// A string key-value store
pub trait KeyValueStore {
    /// Value stored under `key`, if any can be read
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`
    fn set(&mut self, key: &str, value: &str) -> Result<(), WheelError>;
}

/// Store kept in memory for the lifetime of the process
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), WheelError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store backed by a JSON object file mapping keys to string values
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<BTreeMap<String, String>, WheelError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(source) => {
                return Err(WheelError::FileReadError {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        Ok(serde_json::from_str(&content)?)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.read_entries().ok()?.remove(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), WheelError> {
        // A corrupt file is replaced rather than blocking every later write
        let mut entries = self.read_entries().unwrap_or_default();
        entries.insert(key.to_string(), value.to_string());

        let content = serde_json::to_string_pretty(&entries)?;
        fs::write(&self.path, content).map_err(|source| WheelError::Store {
            message: format!("cannot write '{}': {source}", self.path.display()),
        })
    }
}

/// Loads and saves the option list through a [`KeyValueStore`]
#[derive(Debug, Clone)]
pub struct OptionsRepository<S> {
    store: S,
}

impl<S: KeyValueStore> OptionsRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// The saved list, or the built-in defaults when nothing usable is saved
    pub fn load_or_default(&self) -> Vec<String> {
        self.load().unwrap_or_else(default_options)
    }

    /// The saved list, if present, valid and non-empty
    pub fn load(&self) -> Option<Vec<String>> {
        let raw = self.store.get(STORAGE_KEY)?;
        let options: Vec<String> = serde_json::from_str(&raw).ok()?;
        (!options.is_empty()).then_some(options)
    }

    /// Persist the list, reporting failures to the caller
    pub fn save(&mut self, options: &[String]) -> Result<(), WheelError> {
        let encoded = serde_json::to_string(options)?;
        self.store.set(STORAGE_KEY, &encoded)
    }

    /// Persist the list, silently dropping failures
    pub fn save_best_effort(&mut self, options: &[String]) {
        let _ = self.save(options);
    }
}
