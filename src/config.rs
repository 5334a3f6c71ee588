use clap::ValueEnum;
use std::path::PathBuf;

/// Default recognition language (Tesseract language code for English)
pub const DEFAULT_LANGUAGE: &str = "eng";

/// Available OCR engine backends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum EngineKind {
    /// Tesseract command-line executable, run out of process
    #[default]
    Tesseract,
    /// Tesseract library binding (requires the `engine-leptess` feature)
    Leptess,
}

impl EngineKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tesseract => "tesseract",
            Self::Leptess => "leptess",
        }
    }
}

/// How the run summary is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// Run configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub image_path: PathBuf,
    pub output_path: PathBuf,
    pub engine: EngineKind,
    /// Tesseract executable for the CLI engine, tessdata directory for leptess
    pub engine_path: PathBuf,
    pub language: String,
    pub page_segmentation_mode: Option<u8>,
    pub tessdata_path: Option<PathBuf>,
    pub save_processed: Option<PathBuf>,
    pub format: ReportFormat,
}

impl Config {
    /// Configuration with defaults for everything but the three required paths
    pub fn new(
        image_path: impl Into<PathBuf>,
        output_path: impl Into<PathBuf>,
        engine_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            image_path: image_path.into(),
            output_path: output_path.into(),
            engine: EngineKind::default(),
            engine_path: engine_path.into(),
            language: DEFAULT_LANGUAGE.to_string(),
            page_segmentation_mode: None,
            tessdata_path: None,
            save_processed: None,
            format: ReportFormat::default(),
        }
    }
}
