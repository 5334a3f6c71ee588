use crate::error::OcrError;
use image::DynamicImage;
use std::path::Path;

/// Read the source image and normalize it to three-channel RGB.
///
/// A missing file and an undecodable file are reported the same way, as
/// [`OcrError::SourceUnreadable`].
pub fn read_image(path: &Path) -> Result<DynamicImage, OcrError> {
    if !path.is_file() {
        return Err(OcrError::SourceUnreadable {
            path: path.to_path_buf(),
            reason: "file does not exist".to_string(),
        });
    }

    let image = image::open(path).map_err(|e| OcrError::SourceUnreadable {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    tracing::info!(
        "Loaded {} ({}x{}, {:?})",
        path.display(),
        image.width(),
        image.height(),
        image.color()
    );

    Ok(DynamicImage::ImageRgb8(image.into_rgb8()))
}
