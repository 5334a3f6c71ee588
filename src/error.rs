use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OcrError {
    /// The source path is missing or does not decode as an image.
    #[error("Failed to read the image {}: {reason}", .path.display())]
    SourceUnreadable { path: PathBuf, reason: String },

    #[error("OCR engine unavailable: {0}")]
    EngineUnavailable(String),

    #[error("Preprocessing failed: {0}")]
    PreprocessingFailed(String),

    #[error("Failed to write results to {}: {source}", .path.display())]
    OutputWriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl OcrError {
    /// Short machine-readable code for the error kind
    pub fn code(&self) -> &'static str {
        match self {
            OcrError::SourceUnreadable { .. } => "SOURCE_UNREADABLE",
            OcrError::EngineUnavailable(_) => "ENGINE_UNAVAILABLE",
            OcrError::PreprocessingFailed(_) => "PREPROCESSING_ERROR",
            OcrError::OutputWriteFailure { .. } => "OUTPUT_WRITE_FAILURE",
        }
    }
}
