use std::sync::Arc;

use mediafield_core::{video, MediaConfig, MediaOwner};
use mediafield_storage::{media_key, Disk, StorageResult};

/// Variant name used when no explicit variant is asked for.
pub const DEFAULT_VARIANT: &str = "originalImage";

/// Read-side companion to the pipeline: turns an owner's stored image
/// attribute into public URLs, with a placeholder fallback for owners
/// that have no image yet.
pub struct UrlResolver {
    config: MediaConfig,
    disk: Arc<dyn Disk>,
}

impl UrlResolver {
    pub fn new(config: MediaConfig, disk: Arc<dyn Disk>) -> Self {
        Self { config, disk }
    }

    /// URL of the owner's image in the given variant, or the configured
    /// preview placeholder when the owner has no image.
    pub fn image_url(&self, owner: &dyn MediaOwner, variant: &str) -> String {
        match owner.media_image() {
            Some(filename) => self
                .disk
                .url(&media_key(&owner.object_id(), variant, filename)),
            None => self.config.preview_image_url.clone(),
        }
    }

    /// Like `image_url`, but with a caller-chosen fallback.
    pub fn image_url_or(&self, owner: &dyn MediaOwner, variant: &str, fallback: &str) -> String {
        match owner.media_image() {
            Some(filename) => self
                .disk
                .url(&media_key(&owner.object_id(), variant, filename)),
            None => fallback.to_string(),
        }
    }

    pub fn original_image_url(&self, owner: &dyn MediaOwner) -> String {
        self.image_url(owner, DEFAULT_VARIANT)
    }

    /// Whether the owner's image actually exists on the disk in the given
    /// variant. Owners without an image attribute report `false` without
    /// touching storage.
    pub async fn image_exists(
        &self,
        owner: &dyn MediaOwner,
        variant: &str,
    ) -> StorageResult<bool> {
        let Some(filename) = owner.media_image() else {
            return Ok(false);
        };
        self.disk
            .exists(&media_key(&owner.object_id(), variant, filename))
            .await
    }

    pub fn video_provider(&self, owner: &dyn MediaOwner) -> Option<&str> {
        video::owner_provider(&self.config, owner)
    }

    pub fn video_embed_url(&self, owner: &dyn MediaOwner) -> Option<String> {
        video::owner_embed_url(&self.config, owner)
    }

    pub fn video_without_tags(&self, owner: &dyn MediaOwner) -> Option<String> {
        video::owner_video_without_tags(&self.config, owner)
    }
}
