pub mod config;
pub mod language_detector;
pub mod text_input;

// Re-export main types for convenient access
pub use config::Settings;

pub use language_detector::{
    detect_language, is_mixed_language, quick_detect, supported_languages,
    DetectionMethod, DetectionResult, InputError, Language, LanguageDetector,
    StatisticalClassifier, StatisticalGuess, UnavailableClassifier,
};

pub use text_input::{process_text, TextInputError, TextInputHandler, TextInputResult};
