//! Mediafield Storage Library
//!
//! This crate provides the `Disk` storage abstraction and its backends:
//! the local filesystem and (feature-gated) S3-compatible object stores.
//!
//! # Key format
//!
//! Media keys are owner-scoped. All backends use the same layout:
//!
//! - variant file: `{owner_id}/images/{variant}/{filename}`
//! - per-owner image root: `{owner_id}/images`
//!
//! Keys must not contain `..` or a leading `/`. Key generation is
//! centralized in the `keys` module so the pipeline and the URL resolver
//! stay consistent.

pub mod factory;
pub mod keys;
#[cfg(feature = "storage-local")]
pub mod local;
#[cfg(feature = "storage-s3")]
pub mod s3;
pub mod traits;

// Re-export commonly used types
pub use factory::create_disk;
pub use keys::{image_root, media_key};
#[cfg(feature = "storage-local")]
pub use local::LocalDisk;
pub use mediafield_core::DiskBackend;
#[cfg(feature = "storage-s3")]
pub use s3::S3Disk;
pub use traits::{Disk, StorageError, StorageResult};
