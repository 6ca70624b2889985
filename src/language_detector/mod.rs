// WHY: Detection orchestrator tying script analysis, the statistical fallback and validation together
// Every call is a pure function of the input and the configuration fixed at construction

use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::{debug, info, warn};

use crate::config::Settings;

pub mod script;
pub mod statistical;
pub mod validation;

pub use script::{classify, count_script, ScriptAnalysis, ScriptCounts, URDU_UNICODE_RANGES};
pub use statistical::{
    default_classifier, map_detected_code, StatisticalClassifier, StatisticalGuess,
    UnavailableClassifier,
};
#[cfg(feature = "statistical")]
pub use statistical::WhatlangClassifier;
pub use validation::{validate_text, validate_value, InputError, MIN_TEXT_CHARS};

/// Script confidence above which the fallback is never consulted
pub const ACCEPT_CONFIDENCE: f64 = 70.0;

/// Default band width for the mixed-language query
pub const DEFAULT_MIXED_THRESHOLD: f64 = 0.20;

/// Number of leading characters kept in a result for diagnostics
pub const TEXT_SAMPLE_CHARS: usize = 100;

/// The closed set of languages this pipeline speaks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Language {
    #[serde(rename = "en")]
    English,
    #[serde(rename = "ur")]
    Urdu,
}

impl Language {
    /// Two-letter ISO 639-1 code
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Urdu => "ur",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Language::English),
            "ur" => Ok(Language::Urdu),
            other => anyhow::bail!("Unsupported language code: {other}"),
        }
    }
}

impl TryFrom<String> for Language {
    type Error = anyhow::Error;

    fn try_from(code: String) -> Result<Self, Self::Error> {
        code.parse()
    }
}

/// Supported language codes, in fixed order
pub fn supported_languages() -> [Language; 2] {
    [Language::English, Language::Urdu]
}

/// Which stage produced an accepted result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetectionMethod {
    Script,
    Statistical,
}

impl DetectionMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            DetectionMethod::Script => "script",
            DetectionMethod::Statistical => "statistical",
        }
    }
}

/// Outcome of a single detection call
///
/// A failed result carries no language, zero confidence and an error message.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetectionResult {
    pub success: bool,
    #[serde(serialize_with = "serialize_language")]
    pub language: Option<Language>,
    pub confidence: f64,
    #[serde(serialize_with = "serialize_method")]
    pub method: Option<DetectionMethod>,
    pub text_sample: String,
    pub char_count: usize,
    pub error: Option<String>,
}

impl DetectionResult {
    fn accepted(text: &str, language: Language, confidence: f64, method: DetectionMethod) -> Self {
        Self {
            success: true,
            language: Some(language),
            confidence,
            method: Some(method),
            text_sample: text.chars().take(TEXT_SAMPLE_CHARS).collect(),
            char_count: text.chars().count(),
            error: None,
        }
    }

    fn rejected(error: InputError) -> Self {
        Self {
            success: false,
            language: None,
            confidence: 0.0,
            method: None,
            text_sample: String::new(),
            char_count: 0,
            error: Some(error.to_string()),
        }
    }

    /// Language code, empty on failure
    pub fn language_code(&self) -> &'static str {
        self.language.map(Language::code).unwrap_or("")
    }

    /// Method tag, empty on failure
    pub fn method_tag(&self) -> &'static str {
        self.method.map(DetectionMethod::as_str).unwrap_or("")
    }
}

fn serialize_language<S: Serializer>(language: &Option<Language>, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(language.map(Language::code).unwrap_or(""))
}

fn serialize_method<S: Serializer>(method: &Option<DetectionMethod>, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(method.map(DetectionMethod::as_str).unwrap_or(""))
}

/// English/Urdu detector: script analysis first, statistical fallback second
#[derive(Debug)]
pub struct LanguageDetector {
    classifier: Box<dyn StatisticalClassifier>,
    use_fallback: bool,
    mixed_threshold: f64,
}

impl LanguageDetector {
    /// Create a detector with the best statistical classifier this build provides
    pub fn new(use_library_fallback: bool) -> Self {
        Self::with_classifier(default_classifier(), use_library_fallback)
    }

    /// Create a detector around a specific fallback classifier
    pub fn with_classifier(classifier: Box<dyn StatisticalClassifier>, use_library_fallback: bool) -> Self {
        let use_fallback = use_library_fallback && classifier.is_available();
        info!(
            fallback = use_fallback,
            classifier = classifier.name(),
            "Language detector initialized"
        );
        Self {
            classifier,
            use_fallback,
            mixed_threshold: DEFAULT_MIXED_THRESHOLD,
        }
    }

    /// Create a detector from loaded settings
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.use_statistical_fallback).with_mixed_threshold(settings.mixed_threshold)
    }

    /// Override the band used by [`LanguageDetector::is_mixed`]
    pub fn with_mixed_threshold(mut self, threshold: f64) -> Self {
        self.mixed_threshold = threshold;
        self
    }

    /// Whether the statistical fallback will be consulted for inconclusive text
    pub fn uses_fallback(&self) -> bool {
        self.use_fallback
    }

    pub fn mixed_threshold(&self) -> f64 {
        self.mixed_threshold
    }

    /// Detect the language of a string
    pub fn detect(&self, text: &str) -> DetectionResult {
        match validate_text(text) {
            Ok(()) => self.classify_validated(text),
            Err(error) => {
                debug!(%error, "Rejected detection input");
                DetectionResult::rejected(error)
            }
        }
    }

    /// Detect the language of a dynamically typed value (e.g. a JSON field)
    pub fn detect_value(&self, value: &Value) -> DetectionResult {
        match validate_value(value) {
            Ok(text) => self.classify_validated(text),
            Err(error) => {
                debug!(%error, "Rejected detection input");
                DetectionResult::rejected(error)
            }
        }
    }

    fn classify_validated(&self, text: &str) -> DetectionResult {
        let sample: String = text.chars().take(50).collect();
        debug!(%sample, "Detecting language");

        let analysis = classify(text);
        if analysis.confidence > ACCEPT_CONFIDENCE {
            info!(
                language = %analysis.language,
                confidence = analysis.confidence,
                "Script detection confident"
            );
            return DetectionResult::accepted(text, analysis.language, analysis.confidence, DetectionMethod::Script);
        }

        if self.use_fallback {
            if let Some(guess) = self.classifier.classify(text) {
                info!(
                    language = %guess.language,
                    confidence = guess.confidence,
                    classifier = self.classifier.name(),
                    "Statistical detection"
                );
                return DetectionResult::accepted(text, guess.language, guess.confidence, DetectionMethod::Statistical);
            }
        }

        warn!(
            language = %analysis.language,
            confidence = analysis.confidence,
            "Low confidence detection, using script result"
        );
        DetectionResult::accepted(text, analysis.language, analysis.confidence, DetectionMethod::Script)
    }

    /// Language code only; English whenever detection fails
    pub fn quick_detect(&self, text: &str) -> Language {
        let result = self.detect(text);
        match (result.success, result.language) {
            (true, Some(language)) => language,
            _ => Language::English,
        }
    }

    /// Mixed-language query using this detector's configured threshold
    pub fn is_mixed(&self, text: &str) -> bool {
        is_mixed_language(text, self.mixed_threshold)
    }

    pub fn supported_languages(&self) -> [Language; 2] {
        supported_languages()
    }
}

impl Default for LanguageDetector {
    fn default() -> Self {
        Self::new(true)
    }
}

/// True iff the Urdu ratio lies in `[threshold, 1 - threshold]`
///
/// Text with nothing analyzable is never mixed.
pub fn is_mixed_language(text: &str, threshold: f64) -> bool {
    match count_script(text).ratio() {
        Some(ratio) => threshold <= ratio && ratio <= 1.0 - threshold,
        None => false,
    }
}

fn shared_detector() -> &'static LanguageDetector {
    static DETECTOR: OnceLock<LanguageDetector> = OnceLock::new();
    DETECTOR.get_or_init(LanguageDetector::default)
}

/// One-off detection with a default detector
pub fn detect_language(text: &str) -> DetectionResult {
    shared_detector().detect(text)
}

/// One-off detection returning just the language, English on failure
pub fn quick_detect(text: &str) -> Language {
    shared_detector().quick_detect(text)
}
