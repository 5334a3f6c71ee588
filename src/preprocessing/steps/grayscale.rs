use crate::error::OcrError;
use image::DynamicImage;

/// Convert image to single-channel grayscale
/// Every later step works on luma data only
pub fn apply(image: DynamicImage) -> Result<DynamicImage, OcrError> {
    Ok(DynamicImage::ImageLuma8(image.into_luma8()))
}
