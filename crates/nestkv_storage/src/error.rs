//! Error types for storage operations.

use thiserror::Error;

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors that can occur during storage operations.
///
/// Both variants are user-input-level rejections: the store is left
/// unchanged and subsequent operations are unaffected.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StorageError {
    /// The key was empty, or whitespace-only after trimming.
    #[error("key cannot be empty")]
    EmptyKey,

    /// The value was empty, or whitespace-only after trimming.
    #[error("value cannot be empty")]
    EmptyValue,
}
