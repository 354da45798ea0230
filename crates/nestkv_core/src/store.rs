//! The public store facade.

use crate::error::CoreResult;
use crate::transaction::TransactionChain;
use tracing::{debug, trace};

/// An in-process key-value store with nested, chained transactions.
///
/// `KvStore` is the primary entry point for NestKV. It routes every
/// operation to the innermost active transaction level, falling back to
/// the root store when no transaction is active — callers never pass or
/// track transaction handles, matching a sequential REPL-style embedding.
///
/// The store is a single unit of mutable state with no internal locking:
/// mutation goes through `&mut self`, so the compiler enforces the
/// single-writer model. Wrap the whole store behind one mutual-exclusion
/// boundary if shared access is ever needed.
///
/// # Example
///
/// ```rust
/// use nestkv_core::KvStore;
///
/// let mut store = KvStore::new();
/// store.set("x", "1")?;
///
/// store.begin();
/// store.set("x", "2")?;
/// assert_eq!(store.get("x"), Some("2"));
///
/// store.abort()?;
/// assert_eq!(store.get("x"), Some("1"));
/// # Ok::<(), nestkv_core::CoreError>(())
/// ```
#[derive(Debug, Default)]
pub struct KvStore {
    chain: TransactionChain,
}

impl KvStore {
    /// Creates a new empty store with no active transaction.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value stored under `key`, or `None` if absent.
    ///
    /// Reads see the innermost active transaction level's state.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.chain.current().get(key)
    }

    /// Inserts or overwrites the entry under `key`.
    ///
    /// Writes target the innermost active transaction level, or the root
    /// when no transaction is active.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Storage`](crate::CoreError::Storage) if the
    /// key or value is empty after trimming. The store is unchanged on
    /// error.
    pub fn set(&mut self, key: &str, value: &str) -> CoreResult<()> {
        self.chain.current_mut().set(key, value)?;
        trace!(key, "set");
        Ok(())
    }

    /// Removes the entry under `key`, returning whether it existed.
    pub fn delete(&mut self, key: &str) -> bool {
        let deleted = self.chain.current_mut().delete(key);
        trace!(key, deleted, "delete");
        deleted
    }

    /// Begins a new transaction level. Always succeeds.
    ///
    /// The new level starts as an exact snapshot of the current state.
    /// Transactions nest to arbitrary depth.
    pub fn begin(&mut self) {
        self.chain.begin();
        debug!(depth = self.chain.depth(), "transaction begun");
    }

    /// Commits the innermost transaction level into its parent.
    ///
    /// Committing the outermost level makes its changes durable in the
    /// root; an inner commit folds exactly one level outward.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::TransactionNotActive`](crate::CoreError::TransactionNotActive)
    /// if no transaction is active.
    pub fn commit(&mut self) -> CoreResult<()> {
        self.chain.commit()?;
        debug!(depth = self.chain.depth(), "transaction committed");
        Ok(())
    }

    /// Aborts the innermost transaction level, discarding its changes.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::TransactionNotActive`](crate::CoreError::TransactionNotActive)
    /// if no transaction is active.
    pub fn abort(&mut self) -> CoreResult<()> {
        self.chain.abort()?;
        debug!(depth = self.chain.depth(), "transaction aborted");
        Ok(())
    }

    /// Returns `true` if a transaction is currently active.
    #[must_use]
    pub fn in_transaction(&self) -> bool {
        self.chain.is_active()
    }

    /// Returns the current transaction nesting depth (0 when inactive).
    #[must_use]
    pub fn depth(&self) -> usize {
        self.chain.depth()
    }

    /// Returns the number of entries visible to reads right now.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chain.current().len()
    }

    /// Returns `true` if no entries are visible to reads right now.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chain.current().is_empty()
    }
}
