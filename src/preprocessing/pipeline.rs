use crate::error::OcrError;
use image::{DynamicImage, GrayImage};
use std::time::Instant;

use super::steps;

/// Timing information for a single preprocessing step
#[derive(Debug, Clone)]
pub struct StepTiming {
    pub name: &'static str,
    pub time_ms: u64,
}

/// Result of preprocessing including timing stats
#[derive(Debug, Clone)]
pub struct PreprocessingResult {
    /// Single-channel image ready for recognition
    pub image: GrayImage,
    /// Total preprocessing time in milliseconds
    pub total_time_ms: u64,
    /// Individual step timings
    pub steps: Vec<StepTiming>,
}

/// Fixed preprocessing pipeline: grayscale, auto-contrast, upscale
#[derive(Debug, Default)]
pub struct Pipeline;

impl Pipeline {
    pub fn new() -> Self {
        Self
    }

    /// Process an image. Deterministic: equal inputs give byte-identical output.
    pub fn process(&self, image: DynamicImage) -> Result<PreprocessingResult, OcrError> {
        let (width, height) = (image.width(), image.height());
        if width == 0 || height == 0 {
            return Err(OcrError::Validation(format!(
                "image has degenerate dimensions {}x{}",
                width, height
            )));
        }

        let start = Instant::now();
        let mut steps_timing = Vec::new();

        let img = self.run_step("grayscale", image, &mut steps_timing, steps::grayscale::apply)?;
        let img = self.run_step("normalize", img, &mut steps_timing, steps::normalize::apply)?;
        let img = self.run_step("resize", img, &mut steps_timing, steps::resize::apply)?;

        Ok(PreprocessingResult {
            image: img,
            total_time_ms: start.elapsed().as_millis() as u64,
            steps: steps_timing,
        })
    }

    fn run_step<I, O, F>(
        &self,
        name: &'static str,
        img: I,
        timings: &mut Vec<StepTiming>,
        step_fn: F,
    ) -> Result<O, OcrError>
    where
        F: FnOnce(I) -> Result<O, OcrError>,
    {
        let step_start = Instant::now();
        let result = step_fn(img)?;
        timings.push(StepTiming {
            name,
            time_ms: step_start.elapsed().as_millis() as u64,
        });
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Luma, Rgb, RgbImage};

    fn sample_image(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, y| {
            Rgb([(x * 7 % 256) as u8, (y * 3 % 256) as u8, ((x + y) % 200) as u8])
        }))
    }

    #[test]
    fn test_pipeline_runs_steps_in_order() {
        let result = Pipeline::new().process(sample_image(40, 30)).unwrap();
        let names: Vec<&str> = result.steps.iter().map(|s| s.name).collect();
        assert_eq!(names, ["grayscale", "normalize", "resize"]);
    }

    #[test]
    fn test_pipeline_is_deterministic() {
        let pipeline = Pipeline::new();
        let first = pipeline.process(sample_image(123, 77)).unwrap();
        let second = pipeline.process(sample_image(123, 77)).unwrap();
        assert_eq!(first.image.as_raw(), second.image.as_raw());
    }

    #[test]
    fn test_pipeline_upscales_small_image() {
        let result = Pipeline::new().process(sample_image(400, 300)).unwrap();
        assert_eq!(result.image.dimensions(), (1200, 900));
    }

    #[test]
    fn test_pipeline_is_noop_on_large_preprocessed_image() {
        // Text-like pattern whose extremes already fill the 2% tails
        let img = RgbImage::from_fn(1250, 60, |x, _| match x % 10 {
            0..=2 => Rgb([0, 0, 0]),
            5 => Rgb([128, 128, 128]),
            _ => Rgb([255, 255, 255]),
        });
        let pipeline = Pipeline::new();
        let once = pipeline
            .process(DynamicImage::ImageRgb8(img))
            .unwrap()
            .image;
        let twice = pipeline
            .process(DynamicImage::ImageLuma8(once.clone()))
            .unwrap()
            .image;
        assert_eq!(once.dimensions(), (1250, 60));
        assert_eq!(once.dimensions(), twice.dimensions());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_pipeline_preserves_intensity_order() {
        // Wide enough that no resampling happens
        let img = GrayImage::from_fn(1280, 2, |x, _| Luma([(x / 5) as u8]));
        let result = Pipeline::new()
            .process(DynamicImage::ImageLuma8(img.clone()))
            .unwrap()
            .image;

        for x in 1..1280 {
            let before = img.get_pixel(x - 1, 0).0[0] <= img.get_pixel(x, 0).0[0];
            let after = result.get_pixel(x - 1, 0).0[0] <= result.get_pixel(x, 0).0[0];
            assert!(before && after, "column {} went darker", x);
        }
        assert_eq!(result.get_pixel(0, 0).0[0], 0);
        assert_eq!(result.get_pixel(1279, 0).0[0], 255);
    }

    #[test]
    fn test_pipeline_rejects_empty_image() {
        let err = Pipeline::new()
            .process(DynamicImage::ImageLuma8(GrayImage::new(0, 10)))
            .unwrap_err();
        assert!(matches!(err, OcrError::Validation(_)));
    }
}
