//! Mediafield Core Library
//!
//! This crate provides the domain types shared across all mediafield
//! components: configuration, error types, the `MediaOwner` capability
//! trait, encode-format/quality types, and the video reference codec.

pub mod config;
pub mod encode;
pub mod error;
pub mod owner;
pub mod storage_types;
pub mod video;

// Re-export commonly used types
pub use config::{MediaConfig, StorageConfig, Variant, HTML_PROVIDER};
pub use encode::{EncodeFormat, QualityPreset};
pub use error::MediaError;
pub use owner::MediaOwner;
pub use storage_types::DiskBackend;
