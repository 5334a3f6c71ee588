//! Load -> preprocess -> extract -> write, once per invocation

use crate::config::Config;
use crate::engine::TextRecognizer;
use crate::engines;
use crate::error::OcrError;
use crate::extract::{extract_text, find_emails};
use crate::loader::read_image;
use crate::preprocessing::{Pipeline, PreprocessOptions, PreprocessingResult, StepTiming};
use crate::writer::{self, WriteReport};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;

/// Everything a run produced, for printing or JSON output
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub image: PathBuf,
    pub output: PathBuf,
    pub engine: String,
    pub language: String,
    pub emails: Vec<String>,
    pub count: usize,
    pub report: WriteReport,
    pub preprocessing_time_ms: u64,
    pub steps: Vec<StepTiming>,
    pub processing_time_ms: u64,
}

/// Run the full pipeline with default filter parameters
pub fn run(config: &Config, recognizer: &dyn TextRecognizer) -> Result<RunSummary, OcrError> {
    run_with_options(config, recognizer, PreprocessOptions::default())
}

pub fn run_with_options(
    config: &Config,
    recognizer: &dyn TextRecognizer,
    options: PreprocessOptions,
) -> Result<RunSummary, OcrError> {
    let start = Instant::now();
    let processed = prepare(config, options)?;
    finish(config, recognizer, processed, start)
}

/// Run the full pipeline with the engine selected in the configuration.
///
/// The engine is built only once the image has been loaded and preprocessed,
/// so an unreadable source is reported before any engine problem.
pub fn run_configured(config: &Config) -> Result<RunSummary, OcrError> {
    let start = Instant::now();
    let processed = prepare(config, PreprocessOptions::default())?;
    let engine = engines::create(config)?;
    finish(config, engine.as_ref(), processed, start)
}

/// Load and preprocess the source image, saving it when requested
fn prepare(config: &Config, options: PreprocessOptions) -> Result<PreprocessingResult, OcrError> {
    let image = read_image(&config.image_path)?;
    let processed = Pipeline::new(options).process(image)?;

    if let Some(path) = &config.save_processed {
        processed.image.save(path).map_err(|e| {
            OcrError::PreprocessingFailed(format!(
                "Failed to save processed image to {}: {}",
                path.display(),
                e
            ))
        })?;
        tracing::info!("Saved processed image to {}", path.display());
    }

    Ok(processed)
}

/// OCR the processed image, match addresses and write them out
fn finish(
    config: &Config,
    recognizer: &dyn TextRecognizer,
    processed: PreprocessingResult,
    start: Instant,
) -> Result<RunSummary, OcrError> {
    let text = extract_text(recognizer, &processed.image, &config.language)?;
    let emails = find_emails(&text);
    tracing::debug!("Matched {} e-mail addresses", emails.len());

    let report = writer::write(&emails, &config.output_path)?;

    Ok(RunSummary {
        image: config.image_path.clone(),
        output: config.output_path.clone(),
        engine: recognizer.name().to_string(),
        language: config.language.clone(),
        count: emails.len(),
        emails,
        report,
        preprocessing_time_ms: processed.total_time_ms,
        steps: processed.steps,
        processing_time_ms: start.elapsed().as_millis() as u64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Rgb, RgbImage};
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Returns canned text and counts how often it was asked
    struct CannedEngine {
        text: &'static str,
        calls: AtomicUsize,
    }

    impl CannedEngine {
        fn new(text: &'static str) -> Self {
            Self {
                text,
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl TextRecognizer for CannedEngine {
        fn name(&self) -> &'static str {
            "canned"
        }

        fn recognize(&self, image: &GrayImage, _language: &str) -> Result<String, OcrError> {
            assert!(image.pixels().all(|p| p.0[0] == 0 || p.0[0] == 255));
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.text.to_string())
        }
    }

    fn write_sample_image(dir: &std::path::Path) -> PathBuf {
        let path = dir.join("card.png");
        RgbImage::from_fn(80, 30, |x, y| {
            if y > 10 && y < 20 && x % 5 != 0 {
                Rgb([10, 10, 10])
            } else {
                Rgb([235, 235, 235])
            }
        })
        .save(&path)
        .unwrap();
        path
    }

    #[test]
    fn test_run_writes_matches_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let image = write_sample_image(dir.path());
        let output = dir.path().join("emails.txt");
        let config = Config::new(&image, &output, "tesseract");
        let engine = CannedEngine::new("Mail: a@b.com\nCopy: c.d@e.io\nAgain a@b.com");

        let summary = run(&config, &engine).unwrap();

        assert_eq!(summary.count, 3);
        assert_eq!(summary.engine, "canned");
        assert_eq!(summary.steps.len(), 6);
        assert_eq!(
            std::fs::read_to_string(&output).unwrap(),
            "a@b.com\nc.d@e.io\na@b.com\n"
        );
    }

    #[test]
    fn test_run_without_matches_leaves_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let image = write_sample_image(dir.path());
        let output = dir.path().join("emails.txt");
        let config = Config::new(&image, &output, "tesseract");

        let summary = run(&config, &CannedEngine::new("nothing useful")).unwrap();

        assert_eq!(summary.report, WriteReport::NoMatches);
        assert_eq!(std::fs::read(&output).unwrap().len(), 0);
    }

    #[test]
    fn test_missing_image_stops_before_ocr_and_output() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("emails.txt");
        let config = Config::new(dir.path().join("absent.jpg"), &output, "tesseract");
        let engine = CannedEngine::new("x@y.com");

        let result = run(&config, &engine);

        assert!(matches!(result, Err(OcrError::SourceUnreadable { .. })));
        assert_eq!(engine.calls.load(Ordering::SeqCst), 0);
        assert!(!output.exists());
    }

    #[test]
    fn test_run_saves_processed_image() {
        let dir = tempfile::tempdir().unwrap();
        let image = write_sample_image(dir.path());
        let processed = dir.path().join("processed.png");
        let mut config = Config::new(&image, dir.path().join("emails.txt"), "tesseract");
        config.save_processed = Some(processed.clone());

        run(&config, &CannedEngine::new("")).unwrap();

        let saved = image::open(&processed).unwrap().to_luma8();
        // 2000 / 80 caps at 5x
        assert_eq!(saved.dimensions(), (400, 150));
        assert!(saved.pixels().all(|p| p.0[0] == 0 || p.0[0] == 255));
    }

    #[test]
    fn test_repeated_runs_produce_identical_output() {
        let dir = tempfile::tempdir().unwrap();
        let image = write_sample_image(dir.path());
        let first = dir.path().join("first.png");
        let second = dir.path().join("second.png");

        for path in [&first, &second] {
            let mut config = Config::new(&image, dir.path().join("emails.txt"), "tesseract");
            config.save_processed = Some(path.clone());
            run(&config, &CannedEngine::new("a@b.com")).unwrap();
        }

        assert_eq!(std::fs::read(&first).unwrap(), std::fs::read(&second).unwrap());
    }

    #[test]
    fn test_missing_image_is_reported_before_engine_problems() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("emails.txt");
        let config = Config::new(
            dir.path().join("absent.png"),
            &output,
            dir.path().join("no-such-dir").join("tesseract"),
        );

        let result = run_configured(&config);

        assert!(matches!(result, Err(OcrError::SourceUnreadable { .. })));
        assert!(!output.exists());
    }

    #[test]
    fn test_configured_run_rejects_missing_engine_after_loading() {
        let dir = tempfile::tempdir().unwrap();
        let image = write_sample_image(dir.path());
        let output = dir.path().join("emails.txt");
        let config = Config::new(&image, &output, dir.path().join("no-such-dir").join("tesseract"));

        let result = run_configured(&config);

        assert!(matches!(result, Err(OcrError::EngineUnavailable(_))));
        assert!(!output.exists());
    }
}
