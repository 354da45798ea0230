//! # NestKV Storage
//!
//! Flat key/value map for NestKV.
//!
//! This crate provides the lowest-level container for NestKV. A
//! [`FlatStore`] is a plain string-to-string map — it does not know about
//! transactions, snapshots, or nesting. The transactional layer in
//! `nestkv_core` is built on top of it.
//!
//! ## Design Principles
//!
//! - Validation happens at write time: no entry ever holds an empty or
//!   whitespace-only key or value
//! - Keys are case-sensitive and stored exactly as given (validated for
//!   emptiness, never trimmed)
//! - `Clone` produces a fully independent copy; this is how the
//!   transactional layer snapshots state per nesting level
//!
//! ## Example
//!
//! ```rust
//! use nestkv_storage::FlatStore;
//!
//! let mut store = FlatStore::new();
//! store.set("name", "ada").unwrap();
//! assert_eq!(store.get("name"), Some("ada"));
//! assert!(store.delete("name"));
//! assert_eq!(store.get("name"), None);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod map;

pub use error::{StorageError, StorageResult};
pub use map::FlatStore;
