//! Shared key generation for storage backends.
//!
//! Key layout: variant files live at `{owner_id}/images/{variant}/
//! {filename}`; the per-owner image root is `{owner_id}/images`. One
//! upload shares a single canonical filename across every variant
//! sub-path, so variants differ only by sub-path, never by filename.

/// Storage key for one variant file of an owner's image.
pub fn media_key(owner_id: &str, variant: &str, filename: &str) -> String {
    format!("{}/images/{}/{}", owner_id, variant, filename)
}

/// Root of everything the media field stores for one owner.
///
/// Existence checks and recursive deletes use this narrower
/// `{owner_id}/images` path so unrelated files an application may keep
/// under the bare owner id are left alone.
pub fn image_root(owner_id: &str) -> String {
    format!("{}/images", owner_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_key_layout() {
        assert_eq!(
            media_key("42", "thumbnails", "photo.webp"),
            "42/images/thumbnails/photo.webp"
        );
    }

    #[test]
    fn test_image_root_is_prefix_of_media_key() {
        let root = image_root("42");
        assert_eq!(root, "42/images");
        assert!(media_key("42", "originalImage", "a.webp").starts_with(&root));
    }
}
