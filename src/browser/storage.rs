//! `localStorage`-backed preference store.

use web_sys::{Storage, Window};

use crate::storage::{PreferenceStore, StorageError};

pub struct LocalStore {
    storage: Option<Storage>,
}

impl LocalStore {
    /// Open the window's `localStorage`. Access may be refused; the store
    /// then reports [`StorageError::Unavailable`] on every call.
    #[must_use]
    pub fn open(window: &Window) -> Self {
        let storage = match window.local_storage() {
            Ok(storage) => storage,
            Err(err) => {
                log::debug!("localStorage refused: {err:?}");
                None
            }
        };
        Self { storage }
    }

    fn storage(&self) -> Result<&Storage, StorageError> {
        self.storage.as_ref().ok_or_else(|| StorageError::Unavailable("localStorage is not available".to_owned()))
    }
}

impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage()?.get_item(key).map_err(|err| StorageError::Rejected {
            op: "read",
            key: key.to_owned(),
            reason: format!("{err:?}"),
        })
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage()?.set_item(key, value).map_err(|err| StorageError::Rejected {
            op: "write",
            key: key.to_owned(),
            reason: format!("{err:?}"),
        })
    }
}
