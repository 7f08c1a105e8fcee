//! Credentials for the remote store and their persistence.
//!
//! The [`ConfigStore`] reads and writes the two values through a
//! [`KeyValueStore`], so the browser can plug in `localStorage` while tests
//! use [`MemoryStore`].

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigField, StorageError, ValidationError};

/// Storage key for the API key.
pub const API_KEY_STORAGE_KEY: &str = "gdrive_api_key";

/// Storage key for the root folder identifier.
pub const FOLDER_ID_STORAGE_KEY: &str = "gdrive_folder_id";

/// Access credential and root folder.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    pub api_key: String,
    pub folder_id: String,
}

impl Configuration {
    pub fn new(folder_id: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            folder_id: folder_id.into(),
        }
    }

    /// Both fields present (after trimming).
    pub fn is_complete(&self) -> bool {
        !self.api_key.trim().is_empty() && !self.folder_id.trim().is_empty()
    }

    /// Trim both fields, failing on the first empty one.
    pub fn validated(&self) -> Result<Self, ValidationError> {
        let folder_id = self.folder_id.trim();
        let api_key = self.api_key.trim();

        if folder_id.is_empty() {
            return Err(ValidationError::MissingField(ConfigField::FolderId));
        }
        if api_key.is_empty() {
            return Err(ValidationError::MissingField(ConfigField::ApiKey));
        }

        Ok(Self::new(folder_id, api_key))
    }
}

/// String key-value persistence.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory [`KeyValueStore`].
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
    /// Keys whose writes fail, for exercising error paths.
    failing: Vec<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every write to `key` fail with [`StorageError::WriteFailed`].
    pub fn fail_writes_to(mut self, key: &str) -> Self {
        self.failing.push(key.to_string());
        self
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.failing.iter().any(|k| k == key) {
            return Err(StorageError::WriteFailed(key.to_string()));
        }
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Loads and saves the [`Configuration`].
#[derive(Clone, Debug)]
pub struct ConfigStore<S> {
    store: S,
}

impl<S: KeyValueStore> ConfigStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Read the persisted configuration; missing values are empty strings.
    pub fn load(&self) -> Configuration {
        Configuration {
            api_key: self.store.get(API_KEY_STORAGE_KEY).unwrap_or_default(),
            folder_id: self.store.get(FOLDER_ID_STORAGE_KEY).unwrap_or_default(),
        }
    }

    /// Validate and persist both fields, returning the effective configuration.
    ///
    /// Either both keys are written or neither: when the second write fails
    /// the first key is put back to its previous value.
    pub fn save(&mut self, cfg: &Configuration) -> Result<Configuration, ConfigError> {
        let cfg = cfg.validated()?;

        let previous_folder = self.store.get(FOLDER_ID_STORAGE_KEY);
        self.store.set(FOLDER_ID_STORAGE_KEY, &cfg.folder_id)?;

        if let Err(err) = self.store.set(API_KEY_STORAGE_KEY, &cfg.api_key) {
            let restored = self
                .store
                .set(FOLDER_ID_STORAGE_KEY, previous_folder.as_deref().unwrap_or(""));
            if restored.is_err() {
                log::error!("failed to roll back {FOLDER_ID_STORAGE_KEY} after a partial save");
            }
            return Err(err.into());
        }

        log::info!("configuration saved (root folder {})", cfg.folder_id);
        Ok(cfg)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
