use crate::error::OcrError;
use image::{DynamicImage, GrayImage, Luma};

/// Convert image to single-channel grayscale
/// Uses ITU-R BT.601 luma weights in 16-bit fixed point; alpha is dropped
pub fn apply(image: DynamicImage) -> Result<GrayImage, OcrError> {
    if let DynamicImage::ImageLuma8(gray) = image {
        return Ok(gray);
    }

    let rgb = image.into_rgb8();
    let gray = GrayImage::from_fn(rgb.width(), rgb.height(), |x, y| {
        let [r, g, b] = rgb.get_pixel(x, y).0;
        Luma([luma(r, g, b)])
    });

    Ok(gray)
}

fn luma(r: u8, g: u8, b: u8) -> u8 {
    let weighted = r as u32 * 19595 + g as u32 * 38470 + b as u32 * 7471 + 0x8000;
    (weighted >> 16) as u8
}
