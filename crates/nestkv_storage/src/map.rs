//! The flat key/value map.

use crate::error::{StorageError, StorageResult};
use std::collections::HashMap;

/// A flat key/value map with validation on write.
///
/// `FlatStore` is the storage primitive under NestKV's transactional store:
/// a plain associative container mapping string keys to string values.
/// Writes reject empty (or whitespace-only) keys and values; deletion is
/// existence-checked. Keys are case-sensitive and stored exactly as given.
///
/// Cloning a `FlatStore` yields a fully independent copy — mutating either
/// side never affects the other. The transactional layer relies on this to
/// snapshot state at each nesting level.
///
/// # Example
///
/// ```rust
/// use nestkv_storage::FlatStore;
///
/// let mut store = FlatStore::new();
/// store.set("city", "Dodoma").unwrap();
///
/// let snapshot = store.clone();
/// store.set("city", "Arusha").unwrap();
///
/// assert_eq!(store.get("city"), Some("Arusha"));
/// assert_eq!(snapshot.get("city"), Some("Dodoma"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlatStore {
    entries: HashMap<String, String>,
}

impl FlatStore {
    /// Creates a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value stored under `key`, or `None` if absent.
    ///
    /// Lookup is case-sensitive and has no side effects.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Inserts or overwrites the entry under `key`.
    ///
    /// The key is validated but stored unchanged: surrounding whitespace
    /// only decides emptiness and is never stripped, so `"a"` and `" a "`
    /// are distinct keys.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::EmptyKey`] if `key` trims to the empty
    /// string, and [`StorageError::EmptyValue`] if `value` does. The store
    /// is unchanged on error.
    pub fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        if key.trim().is_empty() {
            return Err(StorageError::EmptyKey);
        }
        if value.trim().is_empty() {
            return Err(StorageError::EmptyValue);
        }
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    /// Removes the entry under `key`.
    ///
    /// Returns `false` and leaves the store unchanged if the key is absent.
    pub fn delete(&mut self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    /// Returns `true` if `key` has an entry.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the store holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
