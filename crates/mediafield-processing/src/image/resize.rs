use image::{imageops::FilterType, DynamicImage, GenericImageView};

/// Calculate the dimensions of an image fitted inside a target box.
///
/// Aspect ratio is always preserved and the image is never upscaled: the
/// scale factor is clamped to 1.0. A missing dimension constrains on one
/// axis only; with neither dimension set the original size is returned.
pub fn fit_within(
    orig_width: u32,
    orig_height: u32,
    width: Option<u32>,
    height: Option<u32>,
) -> (u32, u32) {
    let scale_w = width.map(|w| w as f32 / orig_width as f32);
    let scale_h = height.map(|h| h as f32 / orig_height as f32);

    let scale = match (scale_w, scale_h) {
        (Some(w), Some(h)) => w.min(h),
        (Some(w), None) => w,
        (None, Some(h)) => h,
        (None, None) => return (orig_width, orig_height),
    };

    if scale >= 1.0 {
        return (orig_width, orig_height);
    }

    let new_width = ((orig_width as f32 * scale).round() as u32).max(1);
    let new_height = ((orig_height as f32 * scale).round() as u32).max(1);
    (new_width, new_height)
}

/// Select appropriate filter type based on resize ratio
pub fn select_filter(
    orig_width: u32,
    orig_height: u32,
    new_width: u32,
    new_height: u32,
) -> FilterType {
    let width_ratio = orig_width as f32 / new_width as f32;
    let height_ratio = orig_height as f32 / new_height as f32;
    let max_ratio = width_ratio.max(height_ratio);

    if max_ratio > 2.0 {
        FilterType::Triangle
    } else if max_ratio > 1.5 {
        FilterType::CatmullRom
    } else {
        FilterType::Lanczos3
    }
}

/// Fit an image inside the target box, preserving aspect ratio and never
/// upscaling. Returns a clone when no scaling is needed.
pub fn resize_to_fit(img: &DynamicImage, width: Option<u32>, height: Option<u32>) -> DynamicImage {
    let (orig_width, orig_height) = img.dimensions();
    let (new_width, new_height) = fit_within(orig_width, orig_height, width, height);

    if (new_width, new_height) == (orig_width, orig_height) {
        return img.clone();
    }

    tracing::debug!(
        orig_width,
        orig_height,
        new_width,
        new_height,
        "Resizing image"
    );

    let filter = select_filter(orig_width, orig_height, new_width, new_height);
    img.resize_exact(new_width, new_height, filter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    #[test]
    fn test_fit_within_downscales_preserving_aspect() {
        // 1000x500 into 800x465: width is the limiting axis.
        assert_eq!(fit_within(1000, 500, Some(800), Some(465)), (800, 400));
        // 500x1000 into 800x465: height is the limiting axis.
        assert_eq!(fit_within(500, 1000, Some(800), Some(465)), (233, 465));
    }

    #[test]
    fn test_fit_within_never_upscales() {
        assert_eq!(fit_within(100, 100, Some(800), Some(465)), (100, 100));
        assert_eq!(fit_within(100, 100, Some(200), None), (100, 100));
    }

    #[test]
    fn test_fit_within_single_axis() {
        assert_eq!(fit_within(1000, 500, Some(500), None), (500, 250));
        assert_eq!(fit_within(1000, 500, None, Some(100)), (200, 100));
    }

    #[test]
    fn test_fit_within_no_target_is_identity() {
        assert_eq!(fit_within(640, 480, None, None), (640, 480));
    }

    #[test]
    fn test_fit_within_never_collapses_to_zero() {
        assert_eq!(fit_within(1000, 2, Some(100), None), (100, 1));
    }

    #[test]
    fn test_select_filter_by_ratio() {
        assert_eq!(select_filter(1000, 1000, 100, 100), FilterType::Triangle);
        assert_eq!(select_filter(100, 100, 60, 60), FilterType::CatmullRom);
        assert_eq!(select_filter(100, 100, 90, 90), FilterType::Lanczos3);
    }

    #[test]
    fn test_resize_to_fit_downscale() {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            200,
            100,
            Rgba([255, 0, 0, 255]),
        ));
        let resized = resize_to_fit(&img, Some(100), Some(100));
        assert_eq!(resized.dimensions(), (100, 50));
    }

    #[test]
    fn test_resize_to_fit_small_source_is_untouched() {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            100,
            100,
            Rgba([0, 255, 0, 255]),
        ));
        let resized = resize_to_fit(&img, Some(800), Some(465));
        assert_eq!(resized.dimensions(), (100, 100));
    }
}
