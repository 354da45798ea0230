//! Nested transaction support.
//!
//! NestKV transactions nest to arbitrary depth with independent
//! commit/abort at each level:
//! - **Begin** pushes a full copy of the current state; always succeeds
//! - **Commit** folds exactly one level into its parent, or into the root
//!   when the outermost level commits
//! - **Abort** discards exactly one level, leaving its parent exactly as
//!   it was when that level was begun
//!
//! Isolation is by full duplication: every level owns an independent copy
//! of the data, so no level can observe another's uncommitted changes.

mod chain;

pub use chain::TransactionChain;
