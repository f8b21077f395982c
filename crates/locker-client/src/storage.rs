use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::error::ClientError;

/// Key/value persistence for the session record.
pub trait SessionStorage: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, ClientError>;
    fn set(&self, key: &str, value: &str) -> Result<(), ClientError>;
    fn remove(&self, key: &str) -> Result<(), ClientError>;
}

/// Process-local storage, used for server rendering and tests.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, ClientError> {
        self.entries
            .lock()
            .map_err(|_| ClientError::Storage("memory storage poisoned".into()))
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, ClientError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ClientError> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), ClientError> {
        self.lock()?.remove(key);
        Ok(())
    }
}

/// `window.localStorage`. Looked up on every call, so the handle stays `Send`.
#[cfg(feature = "browser")]
#[derive(Clone, Copy, Default)]
pub struct BrowserStorage;

#[cfg(feature = "browser")]
impl BrowserStorage {
    fn storage() -> Result<web_sys::Storage, ClientError> {
        web_sys::window()
            .ok_or_else(|| ClientError::Storage("no window".into()))?
            .local_storage()
            .map_err(|_| ClientError::Storage("localStorage access denied".into()))?
            .ok_or_else(|| ClientError::Storage("localStorage missing".into()))
    }
}

#[cfg(feature = "browser")]
impl SessionStorage for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, ClientError> {
        Self::storage()?
            .get_item(key)
            .map_err(|_| ClientError::Storage(format!("failed to read {key}")))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ClientError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|_| ClientError::Storage(format!("failed to write {key}")))
    }

    fn remove(&self, key: &str) -> Result<(), ClientError> {
        Self::storage()?
            .remove_item(key)
            .map_err(|_| ClientError::Storage(format!("failed to remove {key}")))
    }
}
