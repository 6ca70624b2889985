// WHY: Secondary n-gram classification for text whose script ratio is inconclusive
// The orchestrator only sees the trait; which implementation backs it is fixed at construction

use std::fmt::Debug;
use tracing::{debug, warn};

use super::Language;

/// Confidence reported when the detector names a supported language
pub const SUPPORTED_CONFIDENCE: f64 = 95.0;

/// Confidence reported when the detector names some other language
pub const UNSUPPORTED_CONFIDENCE: f64 = 60.0;

/// A successful statistical classification, already mapped into `{en, ur}`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatisticalGuess {
    pub language: Language,
    pub confidence: f64,
}

/// Capability interface for the optional statistical fallback
pub trait StatisticalClassifier: Send + Sync + Debug {
    /// Short identifier used in logs
    fn name(&self) -> &'static str;

    /// Whether a real detector backs this classifier
    fn is_available(&self) -> bool;

    /// Classify text, `None` when the detector could not decide
    fn classify(&self, text: &str) -> Option<StatisticalGuess>;
}

/// Map a detector language code (ISO 639-1 or 639-3) into the supported set
///
/// Anything outside `{en, ur}` is coerced to English at low confidence
pub fn map_detected_code(code: &str) -> StatisticalGuess {
    match code {
        "ur" | "urd" => StatisticalGuess {
            language: Language::Urdu,
            confidence: SUPPORTED_CONFIDENCE,
        },
        "en" | "eng" => StatisticalGuess {
            language: Language::English,
            confidence: SUPPORTED_CONFIDENCE,
        },
        other => {
            warn!(detected = other, "Unsupported language detected, defaulting to English");
            StatisticalGuess {
                language: Language::English,
                confidence: UNSUPPORTED_CONFIDENCE,
            }
        }
    }
}

/// Stand-in used when no statistical detector is compiled in or it is disabled
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableClassifier;

impl StatisticalClassifier for UnavailableClassifier {
    fn name(&self) -> &'static str {
        "unavailable"
    }

    fn is_available(&self) -> bool {
        false
    }

    fn classify(&self, _text: &str) -> Option<StatisticalGuess> {
        None
    }
}

/// Trigram-based classifier backed by `whatlang`
#[cfg(feature = "statistical")]
#[derive(Debug, Clone, Copy, Default)]
pub struct WhatlangClassifier;

#[cfg(feature = "statistical")]
impl StatisticalClassifier for WhatlangClassifier {
    fn name(&self) -> &'static str {
        "whatlang"
    }

    fn is_available(&self) -> bool {
        true
    }

    fn classify(&self, text: &str) -> Option<StatisticalGuess> {
        match whatlang::detect(text) {
            Some(info) => {
                debug!(
                    lang = info.lang().code(),
                    detector_confidence = info.confidence(),
                    "Statistical detection"
                );
                Some(map_detected_code(info.lang().code()))
            }
            None => {
                debug!("Statistical detection could not decide");
                None
            }
        }
    }
}

/// The best classifier this build provides
pub fn default_classifier() -> Box<dyn StatisticalClassifier> {
    #[cfg(feature = "statistical")]
    {
        Box::new(WhatlangClassifier)
    }
    #[cfg(not(feature = "statistical"))]
    {
        warn!("Statistical detector not compiled in, using script-only detection");
        Box::new(UnavailableClassifier)
    }
}
