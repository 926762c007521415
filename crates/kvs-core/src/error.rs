//! Store Error Types
//!
//! Error vocabulary shared by every bucket store backend. Implementations map
//! their internal failures into [`StoreError`] so callers (including the
//! conformance suite) handle all backends uniformly.

use thiserror::Error;

/// Error type for store and bucket operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("backend error: {0}")]
    Backend(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("invalid operation: {0}")]
    InvalidOperation(String),

    #[error("bucket not found: {name}")]
    BucketNotFound { name: String },

    #[error("store is closed")]
    Closed,
}

/// Result type for store and bucket operations
pub type StoreResult<T> = Result<T, StoreError>;

impl StoreError {
    /// Create a connection error from any displayable source
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::Connection(msg.into())
    }

    /// Create a backend error from any displayable source
    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }

    /// Create a serialization error from any displayable source
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }

    /// Create an invalid-operation error from any displayable source
    pub fn invalid_operation(msg: impl Into<String>) -> Self {
        Self::InvalidOperation(msg.into())
    }

    /// Create a bucket-not-found error for the given bucket name
    pub fn bucket_not_found(name: impl Into<String>) -> Self {
        Self::BucketNotFound { name: name.into() }
    }
}
