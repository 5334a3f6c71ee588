use crate::engine::TextRecognizer;
use crate::error::OcrError;
use image::GrayImage;
use regex::Regex;
use std::sync::OnceLock;

/// local-part@domain.tld, ASCII letters only, word-bounded
const EMAIL_PATTERN: &str = r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b";

static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();

// EMAIL_PATTERN is a constant; test_email_pattern_compiles covers it.
fn email_regex() -> &'static Regex {
    EMAIL_REGEX
        .get_or_init(|| Regex::new(EMAIL_PATTERN).expect("EMAIL_PATTERN is a valid regex"))
}

/// Run the OCR engine over the processed image
pub fn extract_text(
    recognizer: &dyn TextRecognizer,
    image: &GrayImage,
    language: &str,
) -> Result<String, OcrError> {
    let text = recognizer.recognize(image, language)?;
    tracing::info!(
        "{} recognized {} characters (language: {})",
        recognizer.name(),
        text.chars().count(),
        language
    );
    Ok(text)
}

/// Every e-mail-shaped token in the text, in order, duplicates included
pub fn find_emails(text: &str) -> Vec<String> {
    email_regex()
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}
