use crate::error::OcrError;
use image::GrayImage;
use imageproc::stats::histogram;

/// Percentage of samples discarded at each end of the histogram
const CUTOFF_PERCENT: u64 = 2;

/// Auto-contrast: clip the darkest and lightest 2% of pixels, then stretch
/// the remaining intensity range over 0-255
pub fn apply(mut image: GrayImage) -> Result<GrayImage, OcrError> {
    let counts = histogram(&image).channels[0];
    let lut = contrast_lut(&counts);

    for pixel in image.pixels_mut() {
        pixel.0[0] = lut[pixel.0[0] as usize];
    }

    Ok(image)
}

/// Build the intensity lookup table for a 256-bin histogram
fn contrast_lut(counts: &[u32; 256]) -> [u8; 256] {
    let mut bins: [u64; 256] = counts.map(u64::from);
    let total: u64 = bins.iter().sum();
    let cut = total * CUTOFF_PERCENT / 100;

    clip(bins.iter_mut(), cut);
    clip(bins.iter_mut().rev(), cut);

    let lo = bins.iter().position(|&c| c > 0);
    let hi = bins.iter().rposition(|&c| c > 0);

    let mut lut = [0u8; 256];
    match (lo, hi) {
        (Some(lo), Some(hi)) if hi > lo => {
            let scale = 255.0 / (hi - lo) as f64;
            let offset = -(lo as f64) * scale;
            for (i, entry) in lut.iter_mut().enumerate() {
                // Truncation toward zero, then clamp
                *entry = (i as f64 * scale + offset).trunc().clamp(0.0, 255.0) as u8;
            }
        }
        // Nothing left to stretch
        _ => {
            for (i, entry) in lut.iter_mut().enumerate() {
                *entry = i as u8;
            }
        }
    }

    lut
}

/// Remove `cut` samples from the bins in iteration order
fn clip<'a>(bins: impl Iterator<Item = &'a mut u64>, mut cut: u64) {
    for bin in bins {
        if cut == 0 {
            break;
        }
        let taken = cut.min(*bin);
        *bin -= taken;
        cut -= taken;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    fn min_max(img: &GrayImage) -> (u8, u8) {
        img.pixels().fold((255, 0), |(min, max), p| {
            (min.min(p.0[0]), max.max(p.0[0]))
        })
    }

    #[test]
    fn test_normalize_stretches_histogram() {
        // Low-contrast gradient, values 50-185
        let img = GrayImage::from_fn(10, 10, |x, _| Luma([50 + x as u8 * 15]));

        let result = apply(img).unwrap();

        assert_eq!(min_max(&result), (0, 255));
    }

    #[test]
    fn test_normalize_clips_outliers() {
        // 1% near-black specks must not anchor the dark end of the range
        let img = GrayImage::from_fn(100, 100, |x, y| match (x, y) {
            (0, _) => Luma([0]),
            _ if x % 2 == 0 => Luma([100]),
            _ => Luma([150]),
        });

        let result = apply(img).unwrap();

        assert_eq!(result.get_pixel(0, 0).0[0], 0);
        assert_eq!(result.get_pixel(2, 0).0[0], 0);
        assert_eq!(result.get_pixel(1, 0).0[0], 255);
    }

    #[test]
    fn test_normalize_handles_uniform_image() {
        let img = GrayImage::from_pixel(10, 10, Luma([128]));

        let result = apply(img.clone()).unwrap();

        assert_eq!(result, img);
    }

    #[test]
    fn test_lut_is_monotonic() {
        let mut counts = [0u32; 256];
        for (i, count) in counts.iter_mut().enumerate() {
            *count = (i as u32 * 7919) % 97;
        }

        let lut = contrast_lut(&counts);

        assert!(lut.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_lut_maps_range_ends() {
        let mut counts = [0u32; 256];
        counts[40] = 500;
        counts[200] = 500;

        let lut = contrast_lut(&counts);

        assert_eq!(lut[40], 0);
        assert_eq!(lut[200], 255);
        assert_eq!(lut[0], 0);
        assert_eq!(lut[255], 255);
    }
}
