//! localStorage-backed key-value store.

use driveview_core::{KeyValueStore, StorageError};

use super::dom;

/// [`KeyValueStore`] over `window.localStorage`.
///
/// Holds no handle; storage is looked up on every call, so a disabled
/// storage surfaces as [`StorageError::Unavailable`] on write and as missing
/// values on read.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        let storage = dom::local_storage()?;
        storage.get_item(key).ok()?
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = dom::local_storage().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|_| StorageError::WriteFailed(key.to_string()))
    }
}
