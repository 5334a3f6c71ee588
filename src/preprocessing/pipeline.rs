use crate::error::OcrError;
use image::{DynamicImage, GrayImage};
use serde::Serialize;
use std::time::Instant;

use super::{steps, PreprocessOptions};

/// Timing information for a single preprocessing step
#[derive(Debug, Clone, Serialize)]
pub struct StepTiming {
    pub name: String,
    pub time_ms: u64,
}

/// Result of preprocessing including timing stats
#[derive(Debug, Clone, Serialize)]
pub struct PreprocessingResult {
    /// Binarized image (not serialized)
    #[serde(skip)]
    pub image: GrayImage,
    /// Total preprocessing time in milliseconds
    pub total_time_ms: u64,
    /// Individual step timings
    pub steps: Vec<StepTiming>,
}

/// Fixed preprocessing pipeline:
/// resize, grayscale, CLAHE, median, sharpen, Otsu threshold (inverted)
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    options: PreprocessOptions,
}

impl Pipeline {
    pub fn new(options: PreprocessOptions) -> Self {
        Self { options }
    }

    /// Run every step in order on the image
    pub fn process(&self, image: DynamicImage) -> Result<PreprocessingResult, OcrError> {
        let start = Instant::now();
        let mut steps_timing = Vec::new();
        let opts = &self.options;

        let mut img = image;
        img = self.run_step("resize", img, &mut steps_timing, |i| {
            steps::resize::apply(i, opts)
        })?;
        img = self.run_step("grayscale", img, &mut steps_timing, steps::grayscale::apply)?;
        img = self.run_step("contrast", img, &mut steps_timing, |i| {
            steps::contrast::apply(i, opts)
        })?;
        img = self.run_step("denoise", img, &mut steps_timing, |i| {
            steps::denoise::apply(i, opts)
        })?;
        img = self.run_step("sharpen", img, &mut steps_timing, |i| {
            steps::sharpen::apply(i, opts)
        })?;
        img = self.run_step("threshold", img, &mut steps_timing, steps::threshold::apply)?;

        let total_time_ms = start.elapsed().as_millis() as u64;
        tracing::info!(
            "Preprocessed image to {}x{} in {}ms",
            img.width(),
            img.height(),
            total_time_ms
        );

        Ok(PreprocessingResult {
            image: img.into_luma8(),
            total_time_ms,
            steps: steps_timing,
        })
    }

    fn run_step<F>(
        &self,
        name: &str,
        img: DynamicImage,
        timings: &mut Vec<StepTiming>,
        step_fn: F,
    ) -> Result<DynamicImage, OcrError>
    where
        F: FnOnce(DynamicImage) -> Result<DynamicImage, OcrError>,
    {
        let step_start = Instant::now();
        let result = step_fn(img)?;
        let time_ms = step_start.elapsed().as_millis() as u64;
        tracing::debug!("Step {} finished in {}ms", name, time_ms);
        timings.push(StepTiming {
            name: name.to_string(),
            time_ms,
        });
        Ok(result)
    }
}
