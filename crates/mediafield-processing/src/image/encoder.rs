use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageFormat};
use mediafield_core::{EncodeFormat, MediaError, QualityPreset};

/// Encode a decoded image into the configured output format.
pub fn encode_image(
    img: &DynamicImage,
    format: EncodeFormat,
    quality: QualityPreset,
) -> Result<Vec<u8>, MediaError> {
    match format {
        EncodeFormat::WebP => encode_webp(img, quality),
        EncodeFormat::Jpeg => encode_jpeg(img, quality),
        EncodeFormat::Png => encode_png(img),
    }
}

fn encode_webp(img: &DynamicImage, quality: QualityPreset) -> Result<Vec<u8>, MediaError> {
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();

    let encoder = webp::Encoder::from_rgba(&rgba, width, height);
    let encoded = encoder.encode(quality.webp_quality());

    tracing::debug!(width, height, size_bytes = encoded.len(), "Encoded webp");
    Ok(encoded.to_vec())
}

fn encode_jpeg(img: &DynamicImage, quality: QualityPreset) -> Result<Vec<u8>, MediaError> {
    // JPEG has no alpha channel, flatten first.
    let rgb = img.to_rgb8();
    let mut buffer = Vec::new();

    let mut encoder = JpegEncoder::new_with_quality(&mut buffer, quality.jpeg_quality());
    encoder
        .encode_image(&rgb)
        .map_err(|e| MediaError::Encoding(format!("jpeg encode failed: {e}")))?;

    Ok(buffer)
}

fn encode_png(img: &DynamicImage) -> Result<Vec<u8>, MediaError> {
    let mut buffer = Vec::new();
    img.write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)
        .map_err(|e| MediaError::Encoding(format!("png encode failed: {e}")))?;
    Ok(buffer)
}
