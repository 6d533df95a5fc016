//! Error types module
//!
//! All domain errors are unified under the `MediaError` enum. Configuration
//! errors are programmer errors and are never swallowed by the upload
//! pipeline; storage, encoding, and persistence errors are runtime failures
//! that the pipeline catches at its boundary and converts into a rollback.

#[derive(Debug, thiserror::Error)]
pub enum MediaError {
    /// Invalid or incomplete configuration. Raised before any I/O and
    /// propagated to the caller unchanged.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A storage backend operation failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// The image could not be decoded, resized, or re-encoded.
    #[error("Image encoding error: {0}")]
    Encoding(String),

    /// The owner could not be persisted.
    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
