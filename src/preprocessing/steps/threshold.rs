use crate::error::OcrError;
use image::{DynamicImage, GrayImage, Luma};
use imageproc::contrast::otsu_level;

/// Apply Otsu global thresholding with inverted output
/// Pixels brighter than the Otsu level become black, all others white
pub fn apply(image: DynamicImage) -> Result<DynamicImage, OcrError> {
    let gray = image.into_luma8();
    let level = otsu_level(&gray);
    tracing::debug!("Otsu threshold level: {}", level);
    Ok(DynamicImage::ImageLuma8(binarize_inverted(&gray, level)))
}

fn binarize_inverted(img: &GrayImage, level: u8) -> GrayImage {
    GrayImage::from_fn(img.width(), img.height(), |x, y| {
        if img.get_pixel(x, y).0[0] > level {
            Luma([0u8])
        } else {
            Luma([255u8])
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_binarizes_image() {
        let img = GrayImage::from_fn(50, 50, |x, _| Luma([(x as u8 * 5).min(255)]));

        let result = apply(DynamicImage::ImageLuma8(img)).unwrap();
        let result_gray = result.to_luma8();

        for pixel in result_gray.pixels() {
            assert!(
                pixel.0[0] == 0 || pixel.0[0] == 255,
                "Expected binary pixel, got {}",
                pixel.0[0]
            );
        }
    }

    #[test]
    fn test_threshold_inverts_text_pattern() {
        // Dark text on light background
        let mut img = GrayImage::from_pixel(50, 20, Luma([240]));
        for x in 10..40 {
            img.put_pixel(x, 10, Luma([20]));
        }

        let result = apply(DynamicImage::ImageLuma8(img)).unwrap();
        let result_gray = result.to_luma8();

        // Text pixels become white, background black
        assert_eq!(result_gray.get_pixel(25, 10).0[0], 255);
        assert_eq!(result_gray.get_pixel(25, 5).0[0], 0);
    }

    #[test]
    fn test_binarize_inverted_boundary() {
        let img = GrayImage::from_fn(3, 1, |x, _| Luma([99 + x as u8]));
        let result = binarize_inverted(&img, 100);
        assert_eq!(result.get_pixel(0, 0).0[0], 255);
        assert_eq!(result.get_pixel(1, 0).0[0], 255);
        assert_eq!(result.get_pixel(2, 0).0[0], 0);
    }
}
