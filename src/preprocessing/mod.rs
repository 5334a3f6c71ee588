//! Image preprocessing module for OCR enhancement
//!
//! Turns a decoded color image into a binarized image sized and filtered for
//! the OCR engine.

pub mod pipeline;
pub mod steps;

pub use pipeline::{Pipeline, PreprocessingResult, StepTiming};

/// Filter parameters for the preprocessing pipeline
#[derive(Debug, Clone, PartialEq)]
pub struct PreprocessOptions {
    /// Longest side the resize step scales toward
    pub target_dimension: u32,
    pub min_scale: f32,
    pub max_scale: f32,
    /// CLAHE tile grid (tiles per axis)
    pub clahe_grid: u32,
    pub clahe_clip_limit: f32,
    /// Median window radius (1 = 3x3)
    pub median_radius: u32,
    /// Sharpening kernel center weight, neighbours are -1
    pub sharpen_center: f32,
}

impl Default for PreprocessOptions {
    fn default() -> Self {
        Self {
            target_dimension: 2000,
            min_scale: 1.0,
            max_scale: 5.0,
            clahe_grid: 8,
            clahe_clip_limit: 2.0,
            median_radius: 1,
            sharpen_center: 10.0,
        }
    }
}
