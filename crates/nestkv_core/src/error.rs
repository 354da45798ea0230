//! Error types for NestKV core.

use nestkv_storage::StorageError;
use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur in NestKV core operations.
///
/// Every variant is recoverable: the store's state is unchanged and
/// subsequent calls are unaffected.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CoreError {
    /// A write was rejected by the storage layer.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// Commit or abort was requested with no transaction begun.
    #[error("operation not allowed as a transaction does not exist")]
    TransactionNotActive,
}
