//! Configuration module
//!
//! Configuration is explicit: hosts build a [`MediaConfig`] (and a
//! [`StorageConfig`] for the disk factory) and hand it to the pipeline
//! constructor. `from_env` loaders exist for hosts that configure through
//! the environment; there is no process-wide ambient lookup.

use std::collections::HashMap;
use std::env;

use crate::encode::{EncodeFormat, QualityPreset};
use crate::error::MediaError;
use crate::storage_types::DiskBackend;

/// Provider name for untagged/local references. Never produces an embed URL.
pub const HTML_PROVIDER: &str = "HTML";

/// One named derivative of an uploaded image.
///
/// A variant without a size is encoded only (used for the original image);
/// a sized variant is fitted inside the `width` x `height` box, preserving
/// aspect ratio and never upscaling.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Variant {
    pub name: String,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

impl Variant {
    pub fn encode_only(name: impl Into<String>) -> Self {
        Variant {
            name: name.into(),
            width: None,
            height: None,
        }
    }

    pub fn sized(name: impl Into<String>, width: u32, height: u32) -> Self {
        Variant {
            name: name.into(),
            width: Some(width),
            height: Some(height),
        }
    }

    /// Whether this variant declares a resize target at all.
    pub fn has_size(&self) -> bool {
        self.width.is_some() || self.height.is_some()
    }
}

/// Media field configuration: the full description of how one logical
/// image attribute maps to stored variants, and how video references are
/// interpreted. Loaded once; read-only afterwards.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct MediaConfig {
    /// Output format shared by every variant of an upload.
    pub encode: EncodeFormat,
    /// Encoder quality preset.
    #[serde(default)]
    pub quality: QualityPreset,
    /// Ordered variant list; declaration order is processing order.
    pub variants: Vec<Variant>,
    /// Ordered provider scan list for tagged video references.
    pub video_providers: Vec<String>,
    /// Embed URL templates keyed by provider; `{video}` is the id slot.
    pub video_provider_urls: HashMap<String, String>,
    /// Fallback URL returned when an owner has no image set.
    pub preview_image_url: String,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self::with_app_domain("localhost")
    }
}

impl MediaConfig {
    /// Stock configuration with the given parent domain baked into the
    /// Twitch embed template.
    pub fn with_app_domain(app_domain: &str) -> Self {
        let video_provider_urls = HashMap::from([
            (
                "Twitch".to_string(),
                format!("{{video}}&parent={}", app_domain),
            ),
            (
                "YouTube".to_string(),
                "https://www.youtube.com/embed/{video}".to_string(),
            ),
            (
                "Facebook".to_string(),
                "https://www.facebook.com/plugins/video.php?href={video}&show_text=0".to_string(),
            ),
            (
                "Vimeo".to_string(),
                "https://player.vimeo.com/video/{video}".to_string(),
            ),
            (
                "Dailymotion".to_string(),
                "https://www.dailymotion.com/embed/video/{video}".to_string(),
            ),
        ]);

        MediaConfig {
            encode: EncodeFormat::WebP,
            quality: QualityPreset::default(),
            variants: vec![
                Variant::encode_only("originalImage"),
                Variant::sized("bigImage", 800, 465),
                Variant::sized("thumbnails", 80, 80),
            ],
            video_providers: vec![
                HTML_PROVIDER.to_string(),
                "Twitch".to_string(),
                "YouTube".to_string(),
                "Facebook".to_string(),
                "Vimeo".to_string(),
                "Dailymotion".to_string(),
            ],
            video_provider_urls,
            preview_image_url: "https://via.placeholder.com/560x315.png".to_string(),
        }
    }

    /// Load the stock configuration with `MEDIAFIELD_*` environment
    /// overrides applied.
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let app_domain =
            env::var("MEDIAFIELD_APP_DOMAIN").unwrap_or_else(|_| "localhost".to_string());
        let mut config = Self::with_app_domain(&app_domain);

        if let Ok(encode) = env::var("MEDIAFIELD_ENCODE") {
            config.encode = EncodeFormat::parse(&encode)?;
        }
        if let Ok(quality) = env::var("MEDIAFIELD_QUALITY") {
            config.quality = QualityPreset::parse(&quality)?;
        }
        if let Ok(url) = env::var("MEDIAFIELD_PREVIEW_IMAGE_URL") {
            config.preview_image_url = url;
        }

        config.validate()?;
        Ok(config)
    }

    /// Look up a configured variant by name.
    pub fn variant(&self, name: &str) -> Option<&Variant> {
        self.variants.iter().find(|v| v.name == name)
    }

    pub fn validate(&self) -> Result<(), MediaError> {
        if self.variants.is_empty() {
            return Err(MediaError::Configuration(
                "at least one variant must be configured".to_string(),
            ));
        }

        for variant in &self.variants {
            if variant.name.trim().is_empty() {
                return Err(MediaError::Configuration(
                    "variant names must not be empty".to_string(),
                ));
            }
        }

        for (i, variant) in self.variants.iter().enumerate() {
            if self.variants[..i].iter().any(|v| v.name == variant.name) {
                return Err(MediaError::Configuration(format!(
                    "duplicate variant name: {}",
                    variant.name
                )));
            }
        }

        for (provider, template) in &self.video_provider_urls {
            if !template.contains("{video}") {
                return Err(MediaError::Configuration(format!(
                    "embed template for {} is missing the {{video}} placeholder",
                    provider
                )));
            }
        }

        Ok(())
    }
}

/// Storage backend configuration consumed by the disk factory.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct StorageConfig {
    pub backend: DiskBackend,
    pub local_path: Option<String>,
    pub local_base_url: Option<String>,
    pub s3_bucket: Option<String>,
    pub s3_region: Option<String>,
    /// Custom endpoint for S3-compatible providers (MinIO, Spaces, ...).
    pub s3_endpoint: Option<String>,
}

impl StorageConfig {
    pub fn local(path: impl Into<String>, base_url: impl Into<String>) -> Self {
        StorageConfig {
            backend: DiskBackend::Local,
            local_path: Some(path.into()),
            local_base_url: Some(base_url.into()),
            s3_bucket: None,
            s3_region: None,
            s3_endpoint: None,
        }
    }

    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let backend = env::var("MEDIAFIELD_STORAGE_BACKEND")
            .unwrap_or_else(|_| "local".to_string())
            .parse::<DiskBackend>()?;

        let config = StorageConfig {
            backend,
            local_path: env::var("MEDIAFIELD_LOCAL_STORAGE_PATH").ok(),
            local_base_url: env::var("MEDIAFIELD_LOCAL_STORAGE_BASE_URL").ok(),
            s3_bucket: env::var("MEDIAFIELD_S3_BUCKET").ok(),
            s3_region: env::var("MEDIAFIELD_S3_REGION")
                .or_else(|_| env::var("AWS_REGION"))
                .ok(),
            s3_endpoint: env::var("MEDIAFIELD_S3_ENDPOINT").ok(),
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        match self.backend {
            DiskBackend::Local => {
                if self.local_path.is_none() {
                    return Err(anyhow::anyhow!(
                        "MEDIAFIELD_LOCAL_STORAGE_PATH must be set when using the local backend"
                    ));
                }
                if self.local_base_url.is_none() {
                    return Err(anyhow::anyhow!(
                        "MEDIAFIELD_LOCAL_STORAGE_BASE_URL must be set when using the local backend"
                    ));
                }
            }
            DiskBackend::S3 => {
                if self.s3_bucket.is_none() {
                    return Err(anyhow::anyhow!(
                        "MEDIAFIELD_S3_BUCKET must be set when using the S3 backend"
                    ));
                }
                if self.s3_region.is_none() {
                    return Err(anyhow::anyhow!(
                        "MEDIAFIELD_S3_REGION or AWS_REGION must be set when using the S3 backend"
                    ));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = MediaConfig::default();
        config.validate().unwrap();
        assert_eq!(config.encode, EncodeFormat::WebP);
        assert_eq!(config.variants.len(), 3);
        assert_eq!(config.variants[0].name, "originalImage");
        assert!(!config.variants[0].has_size());
        assert_eq!(config.variants[1].width, Some(800));
        assert_eq!(config.variants[1].height, Some(465));
    }

    #[test]
    fn test_variant_lookup_preserves_declared_order() {
        let config = MediaConfig::default();
        let names: Vec<&str> = config.variants.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["originalImage", "bigImage", "thumbnails"]);
        assert!(config.variant("thumbnails").is_some());
        assert!(config.variant("missing").is_none());
    }

    #[test]
    fn test_app_domain_flows_into_twitch_template() {
        let config = MediaConfig::with_app_domain("example.com");
        assert_eq!(
            config.video_provider_urls.get("Twitch").unwrap(),
            "{video}&parent=example.com"
        );
    }

    #[test]
    fn test_duplicate_variant_rejected() {
        let mut config = MediaConfig::default();
        config.variants.push(Variant::sized("bigImage", 1, 1));
        assert!(matches!(
            config.validate(),
            Err(MediaError::Configuration(_))
        ));
    }

    #[test]
    fn test_empty_variants_rejected() {
        let mut config = MediaConfig::default();
        config.variants.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_template_without_placeholder_rejected() {
        let mut config = MediaConfig::default();
        config
            .video_provider_urls
            .insert("Broken".to_string(), "https://example.com/".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_variants_deserialize_from_json() {
        let json = r#"[
            {"name": "originalImage"},
            {"name": "bigImage", "width": 800, "height": 465}
        ]"#;
        let variants: Vec<Variant> = serde_json::from_str(json).unwrap();
        assert_eq!(variants[0], Variant::encode_only("originalImage"));
        assert_eq!(variants[1], Variant::sized("bigImage", 800, 465));
    }

    #[test]
    fn test_local_storage_config_requires_path_and_url() {
        let config = StorageConfig::local("/tmp/media", "http://localhost:3000/media");
        config.validate().unwrap();

        let broken = StorageConfig {
            local_base_url: None,
            ..config
        };
        assert!(broken.validate().is_err());
    }
}
