//! Extract e-mail addresses from the text of a raster image.
//!
//! The image is loaded, run through a fixed OCR-oriented filter chain
//! (resize, grayscale, CLAHE, median, sharpen, Otsu threshold), recognized by
//! an OCR engine, and every e-mail-shaped token in the recognized text is
//! written to a line-delimited file.

pub mod config;
pub mod engine;
pub mod engines;
pub mod error;
pub mod extract;
pub mod loader;
pub mod preprocessing;
pub mod runner;
pub mod writer;

pub use config::{Config, EngineKind, ReportFormat};
pub use engine::TextRecognizer;
pub use error::OcrError;
pub use extract::{extract_text, find_emails};
pub use loader::read_image;
pub use preprocessing::{Pipeline, PreprocessOptions};
pub use runner::{run, run_configured, RunSummary};
pub use writer::WriteReport;
