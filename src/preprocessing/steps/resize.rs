use crate::error::OcrError;
use image::{
    imageops::{self, FilterType},
    GrayImage,
};

/// Images whose larger side is below this are upscaled
const TARGET_DIMENSION: u32 = 1200;

/// Upscale small images by an integer factor so the larger side approaches
/// 1200px. Images already at least that large are returned untouched.
pub fn apply(image: GrayImage) -> Result<GrayImage, OcrError> {
    let (width, height) = image.dimensions();
    let scale = scale_factor(width, height);

    if scale <= 1 {
        return Ok(image);
    }

    tracing::debug!("Upscaling {}x{} by {}", width, height, scale);

    Ok(imageops::resize(
        &image,
        width * scale,
        height * scale,
        FilterType::Lanczos3,
    ))
}

/// Integer upscale factor for the given dimensions (1 means no resize)
fn scale_factor(width: u32, height: u32) -> u32 {
    let longest = width.max(height);
    if longest == 0 || longest >= TARGET_DIMENSION {
        return 1;
    }
    TARGET_DIMENSION / longest
}
