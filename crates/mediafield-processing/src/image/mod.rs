//! Image processing module
//!
//! Variant generation is two primitives: an aspect-preserving,
//! never-upscaling resize and a re-encode into the configured output
//! format.

pub mod encoder;
pub mod resize;

pub use encoder::encode_image;
pub use resize::{fit_within, resize_to_fit, select_filter};
