//! The snapshot stack over the root store.

use crate::error::{CoreError, CoreResult};
use nestkv_storage::FlatStore;

/// A chain of transaction levels layered above a root store.
///
/// Each level holds a full independent copy of the key/value data, taken
/// from its parent at the moment it was begun. The levels form a stack:
/// the top is the head (the innermost active transaction) and the bottom
/// level's parent is the root. An empty stack means no transaction is
/// active.
///
/// All reads and writes route through [`current`](Self::current) /
/// [`current_mut`](Self::current_mut): the head's map while any level is
/// active, the root otherwise. A level below the head is never mutated —
/// it only changes when the level above it commits into it.
#[derive(Debug, Default)]
pub struct TransactionChain {
    /// Committed baseline state. Always present.
    root: FlatStore,
    /// Active levels, outermost first; the last element is the head.
    levels: Vec<FlatStore>,
}

impl TransactionChain {
    /// Creates a chain with an empty root and no active levels.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if at least one transaction level is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.levels.is_empty()
    }

    /// Returns the number of active transaction levels.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.levels.len()
    }

    /// Returns the map all reads currently target.
    #[must_use]
    pub fn current(&self) -> &FlatStore {
        self.levels.last().unwrap_or(&self.root)
    }

    /// Returns the map all writes currently target.
    pub fn current_mut(&mut self) -> &mut FlatStore {
        self.levels.last_mut().unwrap_or(&mut self.root)
    }

    /// Begins a new transaction level.
    ///
    /// The new head starts as an exact copy of whatever was current at
    /// this moment — the previous head, or the root when no transaction
    /// was active. Always succeeds; nesting depth is unbounded.
    pub fn begin(&mut self) {
        let snapshot = self.current().clone();
        self.levels.push(snapshot);
    }

    /// Commits the head level into its parent.
    ///
    /// The head's map replaces its parent's: the enclosing level when one
    /// exists, the root otherwise. Committing the outermost level is the
    /// only way changes become durable in the root; an inner commit only
    /// folds one level outward.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::TransactionNotActive`] if no transaction is
    /// active. The chain is unchanged on error.
    pub fn commit(&mut self) -> CoreResult<()> {
        let head = self.levels.pop().ok_or(CoreError::TransactionNotActive)?;
        match self.levels.last_mut() {
            Some(parent) => *parent = head,
            None => self.root = head,
        }
        Ok(())
    }

    /// Aborts the head level, discarding its changes entirely.
    ///
    /// The parent level (or the root) is left exactly as it was when the
    /// head was begun.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::TransactionNotActive`] if no transaction is
    /// active. The chain is unchanged on error.
    pub fn abort(&mut self) -> CoreResult<()> {
        if self.levels.pop().is_none() {
            return Err(CoreError::TransactionNotActive);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain_with_root(pairs: &[(&str, &str)]) -> TransactionChain {
        let mut chain = TransactionChain::new();
        for (key, value) in pairs {
            chain.current_mut().set(key, value).unwrap();
        }
        chain
    }

    #[test]
    fn new_chain_has_no_active_transaction() {
        let chain = TransactionChain::new();
        assert!(!chain.is_active());
        assert_eq!(chain.depth(), 0);
        assert!(chain.current().is_empty());
    }

    #[test]
    fn begin_snapshots_current_state() {
        let mut chain = chain_with_root(&[("a", "1")]);
        chain.begin();

        assert_eq!(chain.depth(), 1);
        assert_eq!(chain.current().get("a"), Some("1"));
    }

    #[test]
    fn nested_begin_snapshots_head_not_root() {
        let mut chain = chain_with_root(&[("a", "1")]);
        chain.begin();
        chain.current_mut().set("a", "2").unwrap();
        chain.begin();

        assert_eq!(chain.depth(), 2);
        assert_eq!(chain.current().get("a"), Some("2"));
    }

    #[test]
    fn writes_do_not_leak_into_parent_level() {
        let mut chain = chain_with_root(&[("a", "1")]);
        chain.begin();
        chain.begin();
        chain.current_mut().set("a", "inner").unwrap();

        chain.abort().unwrap();
        assert_eq!(chain.current().get("a"), Some("1"));
    }

    #[test]
    fn outermost_commit_replaces_root() {
        let mut chain = chain_with_root(&[("a", "1")]);
        chain.begin();
        chain.current_mut().set("a", "2").unwrap();
        chain.commit().unwrap();

        assert!(!chain.is_active());
        assert_eq!(chain.current().get("a"), Some("2"));
    }

    #[test]
    fn inner_commit_folds_exactly_one_level() {
        let mut chain = chain_with_root(&[("a", "root")]);
        chain.begin();
        chain.begin();
        chain.current_mut().set("a", "inner").unwrap();
        chain.commit().unwrap();

        // Folded into the enclosing level, not the root.
        assert_eq!(chain.depth(), 1);
        assert_eq!(chain.current().get("a"), Some("inner"));

        chain.abort().unwrap();
        assert_eq!(chain.current().get("a"), Some("root"));
    }

    #[test]
    fn commit_of_deletion_propagates() {
        let mut chain = chain_with_root(&[("a", "1")]);
        chain.begin();
        assert!(chain.current_mut().delete("a"));
        chain.commit().unwrap();

        assert_eq!(chain.current().get("a"), None);
    }

    #[test]
    fn abort_discards_head_entirely() {
        let mut chain = chain_with_root(&[("a", "1")]);
        chain.begin();
        chain.current_mut().set("a", "2").unwrap();
        chain.current_mut().set("b", "new").unwrap();
        chain.abort().unwrap();

        assert!(!chain.is_active());
        assert_eq!(chain.current().get("a"), Some("1"));
        assert_eq!(chain.current().get("b"), None);
    }

    #[test]
    fn commit_without_transaction_fails() {
        let mut chain = chain_with_root(&[("a", "1")]);
        assert_eq!(chain.commit(), Err(CoreError::TransactionNotActive));
        assert_eq!(chain.current().get("a"), Some("1"));
    }

    #[test]
    fn abort_without_transaction_fails() {
        let mut chain = TransactionChain::new();
        assert_eq!(chain.abort(), Err(CoreError::TransactionNotActive));
    }

    #[test]
    fn deep_nesting_unwinds_to_original_state() {
        let mut chain = chain_with_root(&[("k", "base")]);
        for i in 0..32 {
            chain.begin();
            chain.current_mut().set("k", &format!("level-{i}")).unwrap();
        }
        assert_eq!(chain.depth(), 32);

        for _ in 0..32 {
            chain.abort().unwrap();
        }
        assert!(!chain.is_active());
        assert_eq!(chain.current().get("k"), Some("base"));
    }

    #[test]
    fn superseded_level_is_untouched_until_commit() {
        let mut chain = chain_with_root(&[]);
        chain.begin();
        chain.current_mut().set("outer", "1").unwrap();
        chain.begin();
        chain.current_mut().set("inner", "2").unwrap();

        // Abort the head: the outer level must be exactly as left.
        chain.abort().unwrap();
        assert_eq!(chain.current().get("outer"), Some("1"));
        assert_eq!(chain.current().get("inner"), None);
    }
}
