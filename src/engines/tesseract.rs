//! Tesseract command-line engine
//!
//! Runs the Tesseract executable out of process. The executable location is
//! configured explicitly; nothing is looked up on behalf of the caller.

use crate::engine::TextRecognizer;
use crate::error::OcrError;
use image::GrayImage;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::NamedTempFile;

/// Tesseract OCR engine driven through its CLI
pub struct TesseractCli {
    executable: PathBuf,
    page_segmentation_mode: Option<u8>,
    tessdata_path: Option<PathBuf>,
}

impl TesseractCli {
    /// Create an engine for the given executable.
    ///
    /// A path with directory components must point at an existing file. A
    /// bare program name is left to the OS to resolve when the engine runs.
    pub fn new(executable: impl Into<PathBuf>) -> Result<Self, OcrError> {
        let executable = executable.into();

        if executable.as_os_str().is_empty() {
            return Err(OcrError::EngineUnavailable(
                "Tesseract executable path is empty".to_string(),
            ));
        }

        let has_parent = executable
            .parent()
            .is_some_and(|p| !p.as_os_str().is_empty());
        if has_parent && !executable.is_file() {
            return Err(OcrError::EngineUnavailable(format!(
                "Tesseract executable not found at {}",
                executable.display()
            )));
        }

        Ok(Self {
            executable,
            page_segmentation_mode: None,
            tessdata_path: None,
        })
    }

    /// Page segmentation mode forwarded as `--psm`
    pub fn with_page_segmentation_mode(mut self, psm: Option<u8>) -> Self {
        self.page_segmentation_mode = psm;
        self
    }

    /// Training data directory forwarded as `--tessdata-dir`
    pub fn with_tessdata_path(mut self, path: Option<PathBuf>) -> Self {
        self.tessdata_path = path;
        self
    }

    fn command(&self, input: &Path, language: &str) -> Command {
        let mut cmd = Command::new(&self.executable);
        cmd.arg(input).arg("stdout").arg("-l").arg(language);

        if let Some(psm) = self.page_segmentation_mode {
            cmd.arg("--psm").arg(psm.to_string());
        }
        if let Some(dir) = &self.tessdata_path {
            cmd.arg("--tessdata-dir").arg(dir);
        }

        cmd
    }
}

impl TextRecognizer for TesseractCli {
    fn name(&self) -> &'static str {
        "tesseract"
    }

    fn recognize(&self, image: &GrayImage, language: &str) -> Result<String, OcrError> {
        // Save image to temporary file
        let temp_input = NamedTempFile::with_suffix(".png").map_err(|e| {
            OcrError::EngineUnavailable(format!("Failed to create temp file: {}", e))
        })?;
        image.save(temp_input.path()).map_err(|e| {
            OcrError::EngineUnavailable(format!("Failed to write OCR input image: {}", e))
        })?;

        tracing::debug!(
            "Running {} on {}x{} image (language: {})",
            self.executable.display(),
            image.width(),
            image.height(),
            language
        );

        let output = self
            .command(temp_input.path(), language)
            .output()
            .map_err(|e| {
                OcrError::EngineUnavailable(format!(
                    "Failed to run {}: {}",
                    self.executable.display(),
                    e
                ))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(OcrError::EngineUnavailable(format!(
                "Tesseract exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
