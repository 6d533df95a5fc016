//! Mediafield Processing Library
//!
//! This crate implements the media-variant workflow on top of
//! `mediafield-core` and `mediafield-storage`:
//!
//! - [`MediaPipeline`]: save_image (canonical filename, per-variant
//!   resize and encode, storage, owner persistence, with full rollback on
//!   failure) and delete_image.
//! - [`UrlResolver`]: public URLs and existence checks for stored
//!   variants, plus video-reference conveniences.
//! - Image resize/encode primitives and the scoped temp workspace the
//!   pipeline works in.

pub mod image;
pub mod pipeline;
pub mod resolver;
pub mod temp;
pub mod types;

// Re-export commonly used types
pub use pipeline::MediaPipeline;
pub use resolver::{UrlResolver, DEFAULT_VARIANT};
pub use temp::TempWorkspace;
pub use types::UploadedImage;
