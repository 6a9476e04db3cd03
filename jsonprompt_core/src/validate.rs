use serde::{Deserialize, Serialize};

pub const VALID_MESSAGE: &str = "Valid JSON generated successfully!";
pub const EMPTY_MESSAGE: &str = "No JSON output to validate";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub message: String,
}

impl ValidationResult {
    #[must_use]
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            message: VALID_MESSAGE.to_string(),
        }
    }

    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            message: message.into(),
        }
    }
}

/// Check that `text` parses as JSON.
#[must_use]
pub fn validate_json(text: &str) -> ValidationResult {
    if text.trim().is_empty() {
        return ValidationResult::invalid(EMPTY_MESSAGE);
    }

    match serde_json::from_str::<serde_json::Value>(text) {
        Ok(_) => ValidationResult::valid(),
        Err(e) => ValidationResult::invalid(format!("Invalid JSON: {e}")),
    }
}
