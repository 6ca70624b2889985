// WHY: Script statistics are the primary signal for English/Urdu classification
// Counting lives here so the mixed-language query and the classifier share one definition

use super::Language;

/// Inclusive code-point ranges for Arabic-derived script (covers Urdu)
pub const URDU_UNICODE_RANGES: &[(u32, u32)] = &[
    (0x0600, 0x06FF), // Arabic
    (0x0750, 0x077F), // Arabic Supplement
    (0xFB50, 0xFDFF), // Arabic Presentation Forms-A
    (0xFE70, 0xFEFF), // Arabic Presentation Forms-B
];

/// Punctuation that never counts toward the analyzable total
pub const SKIPPED_PUNCTUATION: &[char] = &[
    '.', ',', '!', '?', ';', ':', '\'', '"', '(', ')', '-', '[', ']', '{', '}',
];

/// Fraction of analyzable characters above which text is classified as Urdu
pub const URDU_THRESHOLD: f64 = 0.30;

/// Flat boost added to the decisive percentage
pub const CONFIDENCE_BOOST: f64 = 20.0;

/// Confidence never reaches 100
pub const MAX_CONFIDENCE: f64 = 99.0;

/// Confidence reported when nothing in the text is analyzable
pub const NEUTRAL_CONFIDENCE: f64 = 50.0;

/// Language label and confidence derived from character statistics
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScriptAnalysis {
    pub language: Language,
    /// Percentage in `[20, 99]`, or exactly 50 when nothing was analyzable
    pub confidence: f64,
}

/// Raw character counts from a single scan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScriptCounts {
    /// Characters inside the Urdu ranges
    pub target: usize,
    /// All non-whitespace, non-punctuation characters
    pub total: usize,
}

impl ScriptCounts {
    /// Target-script ratio in `[0, 1]`, `None` when nothing was analyzable
    pub fn ratio(&self) -> Option<f64> {
        if self.total == 0 {
            None
        } else {
            Some(self.target as f64 / self.total as f64)
        }
    }
}

/// Information separators (U+001C..=U+001F) count as whitespace alongside `char::is_whitespace`
fn is_separator_space(ch: char) -> bool {
    ch.is_whitespace() || ('\u{1C}'..='\u{1F}').contains(&ch)
}

/// Whether a character participates in script statistics
pub fn is_analyzable(ch: char) -> bool {
    !is_separator_space(ch) && !SKIPPED_PUNCTUATION.contains(&ch)
}

/// Whether a character falls inside any of the Urdu ranges
pub fn is_urdu_char(ch: char) -> bool {
    let code = ch as u32;
    URDU_UNICODE_RANGES
        .iter()
        .any(|&(start, end)| (start..=end).contains(&code))
}

/// Count target-script and analyzable characters in one pass
pub fn count_script(text: &str) -> ScriptCounts {
    text.chars()
        .filter(|&ch| is_analyzable(ch))
        .fold(ScriptCounts::default(), |mut counts, ch| {
            counts.total += 1;
            if is_urdu_char(ch) {
                counts.target += 1;
            }
            counts
        })
}

/// Classify text purely from its script ratio. Never fails.
pub fn classify(text: &str) -> ScriptAnalysis {
    let Some(ratio) = count_script(text).ratio() else {
        return ScriptAnalysis {
            language: Language::English,
            confidence: NEUTRAL_CONFIDENCE,
        };
    };

    let percentage = ratio * 100.0;

    // WHY: compare the unscaled ratio so text at exactly 30% stays English
    if ratio > URDU_THRESHOLD {
        ScriptAnalysis {
            language: Language::Urdu,
            confidence: (percentage + CONFIDENCE_BOOST).min(MAX_CONFIDENCE),
        }
    } else {
        ScriptAnalysis {
            language: Language::English,
            confidence: ((100.0 - percentage) + CONFIDENCE_BOOST).min(MAX_CONFIDENCE),
        }
    }
}
