// WHY: Raw user text is validated and normalized here before it reaches the language detector

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::Settings;

pub mod normalization;

pub use normalization::{clean_text, count_words, normalize_whitespace, normalize_whitespace_into};

/// Upper bound on raw input length, in characters
pub const MAX_TEXT_LENGTH: usize = 10_000;

/// Lower bound on cleaned text length, in characters
pub const MIN_TEXT_LENGTH: usize = 1;

/// Reasons raw text is rejected by the input handler
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TextInputError {
    #[error("Text cannot be empty or whitespace only")]
    Empty,

    #[error("Text too long ({len} chars). Maximum is {max} characters")]
    TooLong { len: usize, max: usize },

    #[error("Text too short after cleaning (minimum 1 character)")]
    EmptyAfterCleaning,
}

/// Outcome of processing one piece of raw text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextInputResult {
    pub success: bool,
    /// Cleaned text, empty on failure
    pub text: String,
    pub original_text: String,
    pub char_count: usize,
    pub word_count: usize,
    pub error: Option<String>,
}

impl TextInputResult {
    fn failed(original_text: &str, error: TextInputError) -> Self {
        warn!(%error, "Text input validation failed");
        Self {
            success: false,
            text: String::new(),
            original_text: original_text.to_string(),
            char_count: 0,
            word_count: 0,
            error: Some(error.to_string()),
        }
    }
}

/// Validates and normalizes raw text for the detector and synthesizer
#[derive(Debug, Clone)]
pub struct TextInputHandler {
    max_text_length: usize,
}

impl TextInputHandler {
    pub fn new() -> Self {
        Self::with_max_length(MAX_TEXT_LENGTH)
    }

    pub fn with_max_length(max_text_length: usize) -> Self {
        info!(max_text_length, "TextInputHandler initialized");
        Self { max_text_length }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::with_max_length(settings.max_text_length)
    }

    /// Validate raw input without normalizing it
    pub fn validate_only(&self, text: &str) -> Result<(), TextInputError> {
        if text.trim().is_empty() {
            return Err(TextInputError::Empty);
        }
        let len = text.chars().count();
        if len > self.max_text_length {
            return Err(TextInputError::TooLong {
                len,
                max: self.max_text_length,
            });
        }
        Ok(())
    }

    /// Validate, normalize whitespace, clean and re-validate
    pub fn process(&self, text: &str) -> TextInputResult {
        if let Err(error) = self.validate_only(text) {
            return TextInputResult::failed(text, error);
        }

        let normalized = normalize_whitespace(text);
        let cleaned = clean_text(&normalized);
        if cleaned != normalized {
            debug!(
                removed = normalized.chars().count() - cleaned.chars().count(),
                "Removed unsupported characters"
            );
        }

        let char_count = cleaned.chars().count();
        if char_count < MIN_TEXT_LENGTH {
            return TextInputResult::failed(text, TextInputError::EmptyAfterCleaning);
        }

        TextInputResult {
            success: true,
            word_count: count_words(&cleaned),
            char_count,
            text: cleaned,
            original_text: text.to_string(),
            error: None,
        }
    }
}

impl Default for TextInputHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// One-off processing with default limits
pub fn process_text(text: &str) -> TextInputResult {
    TextInputHandler::new().process(text)
}
