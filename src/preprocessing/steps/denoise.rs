use crate::error::OcrError;
use crate::preprocessing::PreprocessOptions;
use image::DynamicImage;
use imageproc::filter::median_filter;

/// Apply median filter to reduce noise
/// Median filter preserves edges better than a mean filter
pub fn apply(image: DynamicImage, options: &PreprocessOptions) -> Result<DynamicImage, OcrError> {
    let gray = image.into_luma8();
    let radius = options.median_radius;
    let denoised = median_filter(&gray, radius, radius);
    Ok(DynamicImage::ImageLuma8(denoised))
}
