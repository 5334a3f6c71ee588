use crate::error::OcrError;
use crate::preprocessing::PreprocessOptions;
use image::{imageops::FilterType, DynamicImage, GenericImageView};

/// Scale factor that brings the longest side toward the target dimension.
///
/// Clamped to `[min_scale, max_scale]`, so small images are upscaled at most
/// `max_scale` times and large images are never shrunk below `min_scale`.
pub fn scale_factor(width: u32, height: u32, options: &PreprocessOptions) -> f32 {
    let longest = width.max(height).max(1) as f32;
    (options.target_dimension as f32 / longest).clamp(options.min_scale, options.max_scale)
}

/// Resize image by the clamped scale factor using cubic interpolation
pub fn apply(image: DynamicImage, options: &PreprocessOptions) -> Result<DynamicImage, OcrError> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(OcrError::PreprocessingFailed(format!(
            "image has zero area ({}x{})",
            width, height
        )));
    }

    let scale = scale_factor(width, height, options);
    let new_width = scaled(width, scale);
    let new_height = scaled(height, scale);

    tracing::debug!(
        "Resize {}x{} -> {}x{} (scale {:.3})",
        width,
        height,
        new_width,
        new_height,
        scale
    );

    if new_width == width && new_height == height {
        return Ok(image);
    }

    Ok(image.resize_exact(new_width, new_height, FilterType::CatmullRom))
}

fn scaled(dim: u32, scale: f32) -> u32 {
    ((dim as f64 * scale as f64).round() as u32).max(1)
}
