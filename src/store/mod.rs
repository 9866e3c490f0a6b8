//! Persisted key-value store.
//!
//! A [`Store`] serializes values to JSON text under named keys on a
//! [`StorageBackend`]. The backend is injected so the board can run against
//! the filesystem in production and an in-memory map in tests.
//!
//! `load`/`save` are fail-soft: a missing key, unreadable slot, or corrupt
//! payload falls back to the caller's default (load) or leaves the stored
//! state untouched (save), with the failure logged rather than propagated.
//! The `try_` variants expose the underlying `Result` for callers that want
//! to surface storage failures themselves.

pub mod file;
pub mod memory;

pub use file::FileBackend;
pub use memory::MemoryBackend;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage backend error: {0}")]
    Backend(#[from] std::io::Error),
    #[error("failed to encode value for key {key}: {source}")]
    Encode {
        key: String,
        source: serde_json::Error,
    },
    #[error("failed to decode value for key {key}: {source}")]
    Decode {
        key: String,
        source: serde_json::Error,
    },
}

/// Raw textual key-value storage. One slot per key.
pub trait StorageBackend {
    /// The stored text for `key`, or `None` if the slot has never been
    /// written.
    fn read(&self, key: &str) -> std::io::Result<Option<String>>;

    /// Replace the slot's contents. Durable by the time this returns.
    fn write(&mut self, key: &str, value: &str) -> std::io::Result<()>;
}

pub struct Store {
    backend: Box<dyn StorageBackend>,
}

impl Store {
    pub fn new(backend: impl StorageBackend + 'static) -> Self {
        Self {
            backend: Box::new(backend),
        }
    }

    /// The stored value for `key`, or `default` if nothing is stored or the
    /// stored text fails to parse. Never fails: errors are logged and the
    /// default substituted.
    pub fn load<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        match self.try_load(key) {
            Ok(Some(value)) => value,
            Ok(None) => default,
            Err(e) => {
                log::warn!("Failed to load {key}, using default: {e}");
                default
            }
        }
    }

    /// Serialize `value` and replace the slot for `key`. Never fails: errors
    /// are logged and the previous contents (if any) remain in place.
    pub fn save<T: Serialize>(&mut self, key: &str, value: &T) {
        if let Err(e) = self.try_save(key, value) {
            log::error!("Failed to save {key}: {e}");
        }
    }

    pub fn try_load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        let Some(text) = self.backend.read(key)? else {
            return Ok(None);
        };
        let value = serde_json::from_str(&text).map_err(|source| StoreError::Decode {
            key: key.to_string(),
            source,
        })?;
        Ok(Some(value))
    }

    pub fn try_save<T: Serialize>(&mut self, key: &str, value: &T) -> Result<(), StoreError> {
        let text = serde_json::to_string(value).map_err(|source| StoreError::Encode {
            key: key.to_string(),
            source,
        })?;
        self.backend.write(key, &text)?;
        Ok(())
    }
}
