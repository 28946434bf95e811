//! Metadata storage trait.

use crate::StoreError;

/// Trait for storing opaque, keyed state blobs such as governance snapshots.
///
/// A generic key-value store for bookkeeping that doesn't need its own
/// domain-specific table.
pub trait MetaStore {
    /// Store a metadata value, replacing any previous value.
    fn put_meta(&self, key: &str, value: &[u8]) -> Result<(), StoreError>;

    /// Retrieve a metadata value. Missing keys yield [`StoreError::NotFound`].
    fn get_meta(&self, key: &str) -> Result<Vec<u8>, StoreError>;

    /// Delete a metadata entry.
    fn delete_meta(&self, key: &str) -> Result<(), StoreError>;
}
