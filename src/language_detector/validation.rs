use serde_json::Value;
use thiserror::Error;

/// Minimum trimmed length, in characters, for a detection attempt
pub const MIN_TEXT_CHARS: usize = 3;

/// Reasons an input is rejected before any classification runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Text cannot be None")]
    NullInput,

    #[error("Text must be a string")]
    TypeMismatch,

    #[error("Text cannot be empty or only whitespace")]
    EmptyInput,

    #[error("Text too short for reliable detection (minimum 3 characters)")]
    TooShort,
}

/// Check a string for emptiness and minimum length
pub fn validate_text(text: &str) -> Result<(), InputError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(InputError::EmptyInput);
    }
    if trimmed.chars().count() < MIN_TEXT_CHARS {
        return Err(InputError::TooShort);
    }
    Ok(())
}

/// Extract text from a dynamically typed value, then validate it
pub fn validate_value(value: &Value) -> Result<&str, InputError> {
    match value {
        Value::Null => Err(InputError::NullInput),
        Value::String(text) => validate_text(text).map(|()| text.as_str()),
        _ => Err(InputError::TypeMismatch),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_validate_text() {
        assert_eq!(validate_text(""), Err(InputError::EmptyInput));
        assert_eq!(validate_text("   \n\t  "), Err(InputError::EmptyInput));
        assert_eq!(validate_text("Hi"), Err(InputError::TooShort));
        assert_eq!(validate_text("  Hi  "), Err(InputError::TooShort));
        assert_eq!(validate_text("Hi!"), Ok(()));
        // three Urdu characters, six bytes
        assert_eq!(validate_text("سلا"), Ok(()));
        assert_eq!(validate_text("سل"), Err(InputError::TooShort));
    }

    #[test]
    fn test_validate_value() {
        assert_eq!(validate_value(&Value::Null), Err(InputError::NullInput));
        assert_eq!(validate_value(&json!(12345)), Err(InputError::TypeMismatch));
        assert_eq!(validate_value(&json!(true)), Err(InputError::TypeMismatch));
        assert_eq!(validate_value(&json!(["Hello"])), Err(InputError::TypeMismatch));
        assert_eq!(validate_value(&json!({"text": "Hello"})), Err(InputError::TypeMismatch));
        assert_eq!(validate_value(&json!("")), Err(InputError::EmptyInput));
        assert_eq!(validate_value(&json!("Hello")), Ok("Hello"));
    }

    #[test]
    fn test_messages_are_distinct() {
        let messages = [
            InputError::NullInput.to_string(),
            InputError::TypeMismatch.to_string(),
            InputError::EmptyInput.to_string(),
            InputError::TooShort.to_string(),
        ];
        for (i, a) in messages.iter().enumerate() {
            for b in &messages[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert!(InputError::NullInput.to_string().contains("cannot be None"));
        assert!(InputError::TooShort.to_string().to_lowercase().contains("too short"));
    }
}
