use crate::error::OcrError;
use crate::preprocessing::PreprocessOptions;
use image::DynamicImage;
use imageproc::filter::filter3x3;

/// Apply 3x3 sharpening convolution
/// Counteracts the softening introduced by the median filter
pub fn apply(image: DynamicImage, options: &PreprocessOptions) -> Result<DynamicImage, OcrError> {
    let gray = image.into_luma8();

    // Center weight boosted, all eight neighbours -1
    let c = options.sharpen_center;
    let kernel: [f32; 9] = [-1.0, -1.0, -1.0, -1.0, c, -1.0, -1.0, -1.0, -1.0];

    let sharpened = filter3x3(&gray, &kernel);
    Ok(DynamicImage::ImageLuma8(sharpened))
}
