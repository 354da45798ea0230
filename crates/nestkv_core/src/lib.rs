//! # NestKV Core
//!
//! Transactional key-value engine for NestKV.
//!
//! This crate provides:
//! - [`KvStore`] — the public store: `get`/`set`/`delete` plus
//!   `begin`/`commit`/`abort`
//! - [`TransactionChain`] — the stack of copy-on-write snapshot levels
//!   behind nested transactions
//! - [`CoreError`] — layered error type over the storage crate's
//!
//! ## Transaction Model
//!
//! `begin` snapshots the full current state into a new level; reads and
//! writes always target the innermost level. `commit` folds exactly one
//! level into its parent — changes only reach the root by committing
//! through every enclosing level in turn. `abort` discards exactly one
//! level. Isolation comes from full duplication rather than diffing: each
//! level owns an independent copy of the data.
//!
//! ## Example
//!
//! ```rust
//! use nestkv_core::KvStore;
//!
//! let mut store = KvStore::new();
//! store.set("balance", "100")?;
//!
//! store.begin();
//! store.set("balance", "250")?;
//! store.begin();
//! store.delete("balance");
//! store.abort()?; // inner deletion discarded
//!
//! store.commit()?; // outer overwrite reaches the root
//! assert_eq!(store.get("balance"), Some("250"));
//! # Ok::<(), nestkv_core::CoreError>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod store;
mod transaction;

pub use error::{CoreError, CoreResult};
pub use store::KvStore;
pub use transaction::TransactionChain;

pub use nestkv_storage::{FlatStore, StorageError, StorageResult};

/// Crate version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
