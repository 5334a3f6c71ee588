use crate::error::OcrError;
use image::GrayImage;

/// Trait that all OCR engines must implement
pub trait TextRecognizer: Send + Sync {
    /// Returns the engine identifier (e.g., "tesseract", "leptess")
    fn name(&self) -> &'static str;

    /// Recognize the text in a preprocessed image using the given language code
    fn recognize(&self, image: &GrayImage, language: &str) -> Result<String, OcrError>;
}
