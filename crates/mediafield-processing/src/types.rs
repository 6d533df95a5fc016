//! Types for the upload pipeline.

use mediafield_core::MediaError;
use std::path::Path;

/// An uploaded image file handed to the pipeline by the host application.
///
/// The original filename is only used to derive the canonical stored
/// filename; the actual format is sniffed from the bytes when decoding.
#[derive(Clone, Debug)]
pub struct UploadedImage {
    pub data: Vec<u8>,
    pub original_filename: String,
}

impl UploadedImage {
    pub fn new(original_filename: impl Into<String>, data: Vec<u8>) -> Self {
        UploadedImage {
            data,
            original_filename: original_filename.into(),
        }
    }

    /// Read an upload from a local file, taking the filename from the path.
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self, MediaError> {
        let path = path.as_ref();
        let original_filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .map(String::from)
            .ok_or_else(|| {
                MediaError::Io(std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    format!("path has no file name: {}", path.display()),
                ))
            })?;
        let data = tokio::fs::read(path).await?;

        Ok(UploadedImage {
            data,
            original_filename,
        })
    }
}
