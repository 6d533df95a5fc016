//! Storage abstraction trait
//!
//! This module defines the `Disk` trait that all storage backends must
//! implement.

use async_trait::async_trait;
use mediafield_core::DiskBackend;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Write failed: {0}")]
    WriteFailed(String),

    #[error("Read failed: {0}")]
    ReadFailed(String),

    #[error("Delete failed: {0}")]
    DeleteFailed(String),

    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("Storage backend error: {0}")]
    Backend(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Named storage backend ("disk") behind a uniform put/exists/url interface.
///
/// The pipeline only ever addresses durable storage through this trait, so
/// local filesystems and object stores are interchangeable.
///
/// **Key format:** keys are owner-scoped: `{owner_id}/images/{variant}/
/// {filename}`. See the crate root documentation and the `keys` module.
#[async_trait]
pub trait Disk: Send + Sync {
    /// Write a file at the given key, creating parents as needed.
    /// Returns the publicly accessible URL of the stored file.
    async fn put(&self, key: &str, data: Vec<u8>) -> StorageResult<String>;

    /// Read the file stored at the given key.
    async fn get(&self, key: &str) -> StorageResult<Vec<u8>>;

    /// Check whether a file (or, for backends with real directories, a
    /// directory) exists at the given key.
    async fn exists(&self, key: &str) -> StorageResult<bool>;

    /// Recursively delete everything under the given key prefix.
    ///
    /// Returns `Ok(true)` when something was removed and `Ok(false)` when
    /// the prefix was already absent; only real backend failures are errors.
    async fn delete_directory(&self, prefix: &str) -> StorageResult<bool>;

    /// Public URL for the file at the given key. Purely syntactic; the key
    /// is not checked for existence.
    fn url(&self, key: &str) -> String;

    /// Get the storage backend type
    fn backend_type(&self) -> DiskBackend;
}
