//! OCR engine implementations
//!
//! This module contains implementations of the TextRecognizer trait for
//! different OCR backends. The library binding is conditionally compiled
//! based on feature flags.

pub mod tesseract;

#[cfg(feature = "engine-leptess")]
pub mod leptess;

use crate::config::{Config, EngineKind};
use crate::engine::TextRecognizer;
use crate::error::OcrError;

pub use tesseract::TesseractCli;

/// Build the engine selected in the configuration
pub fn create(config: &Config) -> Result<Box<dyn TextRecognizer>, OcrError> {
    match config.engine {
        EngineKind::Tesseract => {
            tracing::info!(
                "Initializing tesseract engine ({})",
                config.engine_path.display()
            );
            let engine = TesseractCli::new(&config.engine_path)?
                .with_page_segmentation_mode(config.page_segmentation_mode)
                .with_tessdata_path(config.tessdata_path.clone());
            Ok(Box::new(engine))
        }
        EngineKind::Leptess => create_leptess(config),
    }
}

#[cfg(feature = "engine-leptess")]
fn create_leptess(config: &Config) -> Result<Box<dyn TextRecognizer>, OcrError> {
    tracing::info!("Initializing leptess engine...");
    let tessdata = config
        .tessdata_path
        .as_deref()
        .unwrap_or(config.engine_path.as_path());
    let engine = leptess::LeptessEngine::new(tessdata, &config.language)?;
    Ok(Box::new(engine))
}

#[cfg(not(feature = "engine-leptess"))]
fn create_leptess(_config: &Config) -> Result<Box<dyn TextRecognizer>, OcrError> {
    Err(OcrError::EngineUnavailable(
        "leptess engine not available. Build with --features engine-leptess".to_string(),
    ))
}
