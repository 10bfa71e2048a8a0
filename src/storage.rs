//! Durable key-value store for the single user preference the site keeps.
//!
//! ERROR HANDLING
//! ==============
//! Browsers may refuse storage access (private modes, disabled cookies,
//! quota). Implementations report that as [`StorageError`]; callers treat it
//! as "nothing stored" and keep working from memory.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// No store is reachable at all.
    #[error("preference storage unavailable: {0}")]
    Unavailable(String),
    /// The store exists but refused the operation.
    #[error("preference storage rejected {op} of {key:?}: {reason}")]
    Rejected { op: &'static str, key: String, reason: String },
}

/// A string-to-string store that survives page reloads.
pub trait PreferenceStore {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the store cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Process-local store used natively and as the fallback when nothing durable exists.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-populated with a single entry.
    #[must_use]
    pub fn with(key: &str, value: &str) -> Self {
        let mut entries = HashMap::new();
        entries.insert(key.to_owned(), value.to_owned());
        Self { entries }
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
