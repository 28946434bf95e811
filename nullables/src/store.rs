//! Nullable store: thread-safe in-memory metadata storage for testing.

use ballot_store::{MetaStore, StoreError};
use std::collections::HashMap;
use std::sync::Mutex;

/// An in-memory [`MetaStore`] for testing.
pub struct NullStore {
    meta: Mutex<HashMap<String, Vec<u8>>>,
}

impl NullStore {
    pub fn new() -> Self {
        Self {
            meta: Mutex::new(HashMap::new()),
        }
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.meta.lock().map(|m| m.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for NullStore {
    fn default() -> Self {
        Self::new()
    }
}

fn poisoned<T>(_: T) -> StoreError {
    StoreError::Backend("null store mutex poisoned".into())
}

impl MetaStore for NullStore {
    fn put_meta(&self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        self.meta
            .lock()
            .map_err(poisoned)?
            .insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn get_meta(&self, key: &str) -> Result<Vec<u8>, StoreError> {
        self.meta
            .lock()
            .map_err(poisoned)?
            .get(key)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(key.to_string()))
    }

    fn delete_meta(&self, key: &str) -> Result<(), StoreError> {
        self.meta.lock().map_err(poisoned)?.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_get_meta() {
        let store = NullStore::new();
        store.put_meta("k", b"value").unwrap();
        assert_eq!(store.get_meta("k").unwrap(), b"value");
    }

    #[test]
    fn test_meta_not_found() {
        let store = NullStore::new();
        assert!(matches!(store.get_meta("missing"), Err(StoreError::NotFound(_))));
    }

    #[test]
    fn test_delete_meta() {
        let store = NullStore::new();
        store.put_meta("k", b"v").unwrap();
        store.delete_meta("k").unwrap();
        assert!(store.get_meta("k").is_err());
        assert!(store.is_empty());
    }
}
