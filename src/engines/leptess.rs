//! Leptess/Tesseract engine implementation
//!
//! In-process Tesseract through the tesseract-static crate (static linking,
//! no system dependencies). The configured engine path is the tessdata
//! directory holding the `<language>.traineddata` files.

use crate::engine::TextRecognizer;
use crate::error::OcrError;
use image::GrayImage;
use std::path::Path;
use tesseract_static::tesseract::Tesseract;

/// Tesseract OCR Engine
pub struct LeptessEngine {
    /// Path to tessdata directory
    tessdata_path: String,
}

impl LeptessEngine {
    /// Create a new Tesseract-based OCR engine
    pub fn new(tessdata_path: &Path, language: &str) -> Result<Self, OcrError> {
        if !tessdata_path.is_dir() {
            return Err(OcrError::EngineUnavailable(format!(
                "tessdata directory not found at {}",
                tessdata_path.display()
            )));
        }

        let tessdata_path = tessdata_path
            .to_str()
            .map(|s| s.to_string())
            .ok_or_else(|| OcrError::EngineUnavailable("Invalid tessdata path".to_string()))?;

        // Validate that tessdata is accessible by doing a test initialization
        let test_tess = Tesseract::new(Some(&tessdata_path), Some(language)).map_err(|e| {
            OcrError::EngineUnavailable(format!("Failed to initialize Tesseract: {}", e))
        })?;
        drop(test_tess);

        tracing::info!(
            "Leptess engine initialized (tessdata: {}, language: {})",
            tessdata_path,
            language
        );

        Ok(Self { tessdata_path })
    }
}

impl TextRecognizer for LeptessEngine {
    fn name(&self) -> &'static str {
        "leptess"
    }

    fn recognize(&self, image: &GrayImage, language: &str) -> Result<String, OcrError> {
        let (width, height) = image.dimensions();

        // Convert to BMP in memory (BMP is always supported by leptonica)
        let mut bmp_data = Vec::new();
        {
            let mut cursor = std::io::Cursor::new(&mut bmp_data);
            image
                .write_to(&mut cursor, image::ImageFormat::Bmp)
                .map_err(|e| {
                    OcrError::EngineUnavailable(format!("Failed to convert to BMP: {}", e))
                })?;
        }

        tracing::debug!(
            "Processing image: {}x{}, BMP size: {} bytes",
            width,
            height,
            bmp_data.len()
        );

        let mut tess = Tesseract::new(Some(&self.tessdata_path), Some(language)).map_err(|e| {
            OcrError::EngineUnavailable(format!("Failed to create Tesseract: {}", e))
        })?;

        tess = tess.set_image_from_mem(&bmp_data).map_err(|e| {
            OcrError::EngineUnavailable(format!(
                "Failed to set image ({}x{}, {} bytes): {}",
                width,
                height,
                bmp_data.len(),
                e
            ))
        })?;

        tess = tess.recognize().map_err(|e| {
            OcrError::EngineUnavailable(format!("Failed to recognize text: {}", e))
        })?;

        tess.get_text()
            .map_err(|e| OcrError::EngineUnavailable(format!("Failed to get text: {}", e)))
    }
}
