// WHY: whitespace and character cleanup shared by the input handler and the CLI
// Separated from validation so cleaned text can be produced into a reused buffer

use crate::language_detector::script::is_urdu_char;

/// Punctuation kept by [`clean_text_into`]
pub const KEPT_PUNCTUATION: &[char] = &['.', ',', '!', '?', '\'', '"', '-', ':', ';'];

/// Collapse every whitespace run (including `\r\n`, tabs, newlines) into one space and trim
pub fn normalize_whitespace(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    normalize_whitespace_into(text, &mut result);
    result
}

/// Normalize whitespace into supplied buffer to avoid allocation
pub fn normalize_whitespace_into(text: &str, buffer: &mut String) {
    buffer.clear();
    buffer.reserve(text.len());

    let mut prev_was_space = true; // suppresses leading whitespace
    for ch in text.chars() {
        if ch.is_whitespace() {
            if !prev_was_space {
                buffer.push(' ');
                prev_was_space = true;
            }
        } else {
            buffer.push(ch);
            prev_was_space = false;
        }
    }

    if buffer.ends_with(' ') {
        buffer.pop();
    }
}

/// Whether a character survives cleaning
///
/// Word characters, whitespace, common punctuation and Urdu script are kept.
pub fn is_kept_char(ch: char) -> bool {
    ch.is_alphanumeric()
        || ch == '_'
        || ch.is_whitespace()
        || KEPT_PUNCTUATION.contains(&ch)
        || is_urdu_char(ch)
}

/// Drop unsupported symbols and control characters, then re-collapse spaces
pub fn clean_text(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    clean_text_into(text, &mut result);
    result
}

/// Clean text into supplied buffer
pub fn clean_text_into(text: &str, buffer: &mut String) {
    let kept: String = text.chars().filter(|&ch| is_kept_char(ch)).collect();
    normalize_whitespace_into(&kept, buffer);
}

/// Count whitespace-separated tokens
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}
