// Sample texts with known expected languages
// WHY: Deterministic inputs shared across detector, input handler and CLI tests

/// Pure English texts
pub const ENGLISH_TEXTS: &[&str] = &[
    "Hello World",
    "This is a test",
    "The quick brown fox jumps over the lazy dog.",
    "Hello! How are you? I'm doing great, thanks.",
    "The year is 2026 and we are testing",
];

/// Pure Urdu texts
pub const URDU_TEXTS: &[&str] = &[
    "سلام دنیا",
    "یہ ایک ٹیسٹ ہے",
    "السلام علیکم",
    "شکریہ",
    "خوش آمدید",
    "اللہ حافظ",
    "پاکستان زندہ باد",
];

/// Longer English paragraph
pub const LONG_ENGLISH: &str = "This is a longer piece of English text. It contains multiple sentences and should be easily detected as English language content.";

/// Longer Urdu paragraph
pub const LONG_URDU: &str = "یہ ایک طویل اردو متن ہے۔ اس میں متعدد جملے ہیں اور اسے آسانی سے اردو زبان کے مواد کے طور پر پہچانا جانا چاہیے۔";

/// English-dominant mix: 4 of 32 analyzable characters are Urdu
pub const MIXED_ENGLISH_DOMINANT: &str = "Hello سلام this is mostly English text";

/// Evenly split mix: 15 Urdu and 15 Latin characters
pub const MIXED_EVEN: &str = "یہ زیادہ تر اردو ہے with some English";

/// Inputs rejected before classification
pub const INVALID_TEXTS: &[&str] = &["", "   \n\t  ", "Hi", " a "];

/// Build text with a given number of Latin and Urdu letters
pub fn script_mix(latin: usize, urdu: usize) -> String {
    format!("{} {}", "a".repeat(latin), "ب".repeat(urdu))
}
