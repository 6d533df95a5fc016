//! Output encode format and quality presets.
//!
//! All variants of one upload share a single output format; the quality
//! preset feeds the format-specific encoder settings in the processing
//! crate.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

/// Output format every stored variant is re-encoded to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EncodeFormat {
    WebP,
    Jpeg,
    Png,
}

impl EncodeFormat {
    pub fn parse(s: &str) -> anyhow::Result<Self> {
        match s.to_lowercase().as_str() {
            "webp" => Ok(EncodeFormat::WebP),
            "jpeg" | "jpg" => Ok(EncodeFormat::Jpeg),
            "png" => Ok(EncodeFormat::Png),
            _ => Err(anyhow::anyhow!("Invalid encode format: {}", s)),
        }
    }

    /// File extension used for the canonical filename.
    pub fn extension(self) -> &'static str {
        match self {
            EncodeFormat::WebP => "webp",
            EncodeFormat::Jpeg => "jpg",
            EncodeFormat::Png => "png",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            EncodeFormat::WebP => "image/webp",
            EncodeFormat::Jpeg => "image/jpeg",
            EncodeFormat::Png => "image/png",
        }
    }
}

impl FromStr for EncodeFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Display for EncodeFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            EncodeFormat::WebP => write!(f, "webp"),
            EncodeFormat::Jpeg => write!(f, "jpeg"),
            EncodeFormat::Png => write!(f, "png"),
        }
    }
}

/// Quality presets for image encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityPreset {
    #[default]
    Normal, // Default quality, balanced size and quality
    Better,   // Higher quality, larger files
    Best,     // Near pristine quality
    Lighter,  // Smaller files
    Lightest, // Maximum compression
}

impl QualityPreset {
    pub fn parse(s: &str) -> anyhow::Result<Self> {
        match s.to_lowercase().as_str() {
            "normal" => Ok(QualityPreset::Normal),
            "better" => Ok(QualityPreset::Better),
            "best" => Ok(QualityPreset::Best),
            "lighter" => Ok(QualityPreset::Lighter),
            "lightest" => Ok(QualityPreset::Lightest),
            _ => Err(anyhow::anyhow!("Invalid quality preset: {}", s)),
        }
    }

    /// Get quality value for JPEG (0-100)
    pub fn jpeg_quality(self) -> u8 {
        match self {
            QualityPreset::Normal => 75,
            QualityPreset::Better => 85,
            QualityPreset::Best => 95,
            QualityPreset::Lighter => 65,
            QualityPreset::Lightest => 50,
        }
    }

    /// Get quality value for WebP (0-100)
    pub fn webp_quality(self) -> f32 {
        match self {
            QualityPreset::Normal => 80.0,
            QualityPreset::Better => 90.0,
            QualityPreset::Best => 98.0,
            QualityPreset::Lighter => 70.0,
            QualityPreset::Lightest => 55.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_format() {
        assert_eq!(EncodeFormat::parse("webp").unwrap(), EncodeFormat::WebP);
        assert_eq!(EncodeFormat::parse("JPG").unwrap(), EncodeFormat::Jpeg);
        assert_eq!(EncodeFormat::parse("jpeg").unwrap(), EncodeFormat::Jpeg);
        assert_eq!(EncodeFormat::parse("png").unwrap(), EncodeFormat::Png);
        assert!(EncodeFormat::parse("avif").is_err());
    }

    #[test]
    fn test_extension_and_mime() {
        assert_eq!(EncodeFormat::WebP.extension(), "webp");
        assert_eq!(EncodeFormat::Jpeg.extension(), "jpg");
        assert_eq!(EncodeFormat::WebP.mime_type(), "image/webp");
        assert_eq!(EncodeFormat::Png.mime_type(), "image/png");
    }

    #[test]
    fn test_quality_values() {
        assert_eq!(QualityPreset::Normal.webp_quality(), 80.0);
        assert_eq!(QualityPreset::Best.webp_quality(), 98.0);
        assert_eq!(QualityPreset::Lightest.jpeg_quality(), 50);
        assert_eq!(QualityPreset::default(), QualityPreset::Normal);
    }

    #[test]
    fn test_parse_quality() {
        assert_eq!(
            QualityPreset::parse("better").unwrap(),
            QualityPreset::Better
        );
        assert!(QualityPreset::parse("ultra").is_err());
    }
}
