use std::sync::Arc;
use std::time::Instant;

use mediafield_core::{
    EncodeFormat, MediaConfig, MediaError, MediaOwner, QualityPreset, Variant,
};
use mediafield_storage::{image_root, media_key, Disk, StorageError};

use crate::image::{encode_image, resize_to_fit};
use crate::temp::TempWorkspace;
use crate::types::UploadedImage;

fn storage_err(e: StorageError) -> MediaError {
    MediaError::Storage(e.to_string())
}

/// Upload pipeline that turns one source image into the configured set of
/// encoded variants, stores them under the owner's key space and persists
/// the resulting filename on the owner.
///
/// Upload failures are transactional at the owner level: either every
/// variant is stored and the owner saved, or the owner's image directory
/// is wiped and the attribute left untouched.
pub struct MediaPipeline {
    config: MediaConfig,
    disk: Arc<dyn Disk>,
    last_error: Option<String>,
}

impl MediaPipeline {
    pub fn new(config: MediaConfig, disk: Arc<dyn Disk>) -> Result<Self, MediaError> {
        config.validate()?;
        Ok(Self {
            config,
            disk,
            last_error: None,
        })
    }

    pub fn config(&self) -> &MediaConfig {
        &self.config
    }

    /// Human-readable description of why the most recent `save_image` call
    /// returned `Ok(false)`. Cleared at the start of each upload.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Process and store an uploaded image for `owner`.
    ///
    /// `requested` selects which configured variants to produce by name.
    /// An empty slice or a `"*"` entry selects all of them; unknown names
    /// are ignored.
    ///
    /// Returns `Ok(true)` when every variant was stored and the owner
    /// saved. Recoverable failures (undecodable input, storage write
    /// errors, owner save errors) roll back any stored files and return
    /// `Ok(false)` with the cause available via `last_error`.
    /// Configuration errors are not recoverable and propagate as `Err`.
    pub async fn save_image(
        &mut self,
        owner: &mut dyn MediaOwner,
        upload: &UploadedImage,
        requested: &[&str],
    ) -> Result<bool, MediaError> {
        self.last_error = None;
        let owner_id = owner.object_id();
        let started = Instant::now();

        // Prior uploads for this owner are replaced wholesale.
        self.disk
            .delete_directory(&image_root(&owner_id))
            .await
            .map_err(storage_err)?;

        match self.run_upload(owner, &owner_id, upload, requested).await {
            Ok(filename) => {
                tracing::info!(
                    owner_id = %owner_id,
                    filename = %filename,
                    duration_ms = started.elapsed().as_millis() as u64,
                    "Image upload complete"
                );
                Ok(true)
            }
            Err(err @ MediaError::Configuration(_)) => Err(err),
            Err(err) => {
                tracing::warn!(
                    owner_id = %owner_id,
                    error = %err,
                    "Image upload failed, rolling back stored variants"
                );
                if let Err(cleanup_err) =
                    self.disk.delete_directory(&image_root(&owner_id)).await
                {
                    tracing::warn!(
                        owner_id = %owner_id,
                        error = %cleanup_err,
                        "Rollback cleanup failed"
                    );
                }
                self.last_error = Some(err.to_string());
                Ok(false)
            }
        }
    }

    async fn run_upload(
        &self,
        owner: &mut dyn MediaOwner,
        owner_id: &str,
        upload: &UploadedImage,
        requested: &[&str],
    ) -> Result<String, MediaError> {
        let filename = canonical_filename(&upload.original_filename, self.config.encode);
        let variants = self.resolve_variants(requested);
        if variants.is_empty() {
            tracing::warn!(owner_id = %owner_id, "No variants resolved for upload");
        }

        for variant in &variants {
            self.store_variant(owner_id, variant, upload, &filename)
                .await?;
        }

        let previous = owner.media_image().map(String::from);
        owner.set_media_image(Some(filename.clone()));
        if let Err(err) = owner.save().await {
            owner.set_media_image(previous);
            return Err(err);
        }

        Ok(filename)
    }

    fn resolve_variants(&self, requested: &[&str]) -> Vec<Variant> {
        if requested.is_empty() || requested.contains(&"*") {
            return self.config.variants.clone();
        }

        for name in requested {
            if self.config.variant(name).is_none() {
                tracing::debug!(variant = %name, "Ignoring unknown variant name");
            }
        }

        self.config
            .variants
            .iter()
            .filter(|v| requested.contains(&v.name.as_str()))
            .cloned()
            .collect()
    }

    async fn store_variant(
        &self,
        owner_id: &str,
        variant: &Variant,
        upload: &UploadedImage,
        filename: &str,
    ) -> Result<(), MediaError> {
        let data = upload.data.clone();
        let variant_clone = variant.clone();
        let format = self.config.encode;
        let quality = self.config.quality;

        let encoded = tokio::task::spawn_blocking(move || {
            process_variant(&data, &variant_clone, format, quality)
        })
        .await
        .map_err(|_| MediaError::Encoding("encode task panicked".to_string()))??;

        let key = media_key(owner_id, &variant.name, filename);
        let size_bytes = encoded.len();
        self.disk.put(&key, encoded).await.map_err(storage_err)?;

        tracing::debug!(key = %key, size_bytes, "Stored image variant");
        Ok(())
    }

    /// Remove every stored image for `owner` and clear its image attribute.
    ///
    /// The attribute is only cleared when files were actually removed; a
    /// delete against an owner with no stored images is a no-op, even if
    /// the attribute still holds a stale filename.
    pub async fn delete_image(&self, owner: &mut dyn MediaOwner) -> Result<(), MediaError> {
        let owner_id = owner.object_id();
        let deleted = self
            .disk
            .delete_directory(&image_root(&owner_id))
            .await
            .map_err(storage_err)?;

        if deleted {
            owner.set_media_image(None);
            owner.save().await?;
            tracing::info!(owner_id = %owner_id, "Deleted owner images");
        }

        Ok(())
    }
}

/// Decode, resize and re-encode one variant. Runs on a blocking thread.
fn process_variant(
    data: &[u8],
    variant: &Variant,
    format: EncodeFormat,
    quality: QualityPreset,
) -> Result<Vec<u8>, MediaError> {
    let workspace = TempWorkspace::create()?;
    let input = workspace.write("source", data)?;

    let img = image::ImageReader::open(&input)?
        .with_guessed_format()?
        .decode()
        .map_err(|e| MediaError::Encoding(format!("failed to decode image: {e}")))?;

    let img = if variant.has_size() {
        resize_to_fit(&img, variant.width, variant.height)
    } else {
        img
    };

    encode_image(&img, format, quality)
}

/// Derive the stored filename from the uploaded one: whitespace is
/// stripped, the extension swapped for the configured encoding's, and
/// dot runs in the stem collapsed so the storage key never contains `..`.
pub fn canonical_filename(original: &str, format: EncodeFormat) -> String {
    let cleaned: String = original.chars().filter(|c| !c.is_whitespace()).collect();

    let stem = match cleaned.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => cleaned.trim_matches('.'),
    };

    let mut normalized = String::with_capacity(stem.len());
    for c in stem.chars() {
        if c == '.' && normalized.ends_with('.') {
            continue;
        }
        normalized.push(c);
    }
    let stem = normalized.trim_matches('.');
    let stem = if stem.is_empty() { "image" } else { stem };

    format!("{stem}.{}", format.extension())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_filename_strips_whitespace_and_swaps_extension() {
        assert_eq!(
            canonical_filename("my holiday photo.JPG", EncodeFormat::WebP),
            "myholidayphoto.webp"
        );
        assert_eq!(
            canonical_filename("photo.png", EncodeFormat::Jpeg),
            "photo.jpg"
        );
    }

    #[test]
    fn test_canonical_filename_without_extension() {
        assert_eq!(canonical_filename("photo", EncodeFormat::WebP), "photo.webp");
    }

    #[test]
    fn test_canonical_filename_keeps_inner_dots() {
        assert_eq!(
            canonical_filename("archive.tar.gz", EncodeFormat::Png),
            "archive.tar.png"
        );
    }

    #[test]
    fn test_canonical_filename_collapses_dot_runs() {
        assert_eq!(
            canonical_filename("photo..png", EncodeFormat::WebP),
            "photo.webp"
        );
        assert_eq!(
            canonical_filename("a...b.png", EncodeFormat::WebP),
            "a.b.webp"
        );
        assert_eq!(
            canonical_filename("trailing..", EncodeFormat::WebP),
            "trailing.webp"
        );
    }

    #[test]
    fn test_canonical_filename_degenerate_names() {
        assert_eq!(canonical_filename("", EncodeFormat::WebP), "image.webp");
        assert_eq!(canonical_filename(".png", EncodeFormat::WebP), "png.webp");
        assert_eq!(canonical_filename(" . ", EncodeFormat::WebP), "image.webp");
    }
}
