//! Validation verdicts

use serde::{Deserialize, Serialize};

/// Outcome of running one validator against one value.
///
/// A passing result always carries an empty message; build results through
/// [`ValidationResult::valid`] and [`ValidationResult::invalid`] to keep it
/// that way.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub message: String,
}

impl ValidationResult {
    /// Create a passing result
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            message: String::new(),
        }
    }

    /// Create a failing result with a human-readable message
    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            message: message.into(),
        }
    }

    /// The failure message, if any
    pub fn error(&self) -> Option<&str> {
        if self.is_valid {
            None
        } else {
            Some(&self.message)
        }
    }

    /// Convert into the `Result<(), String>` shape used by the length and
    /// numeric helpers.
    pub fn into_result(self) -> Result<(), String> {
        if self.is_valid {
            Ok(())
        } else {
            Err(self.message)
        }
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::valid()
    }
}

impl From<Result<(), String>> for ValidationResult {
    fn from(result: Result<(), String>) -> Self {
        match result {
            Ok(()) => Self::valid(),
            Err(message) => Self::invalid(message),
        }
    }
}
