// File: src/feedback.rs
// Purpose: Turn API failures into the message shown above a form

use thiserror::Error;

/// Failure reported by the API collaborator of a submission
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The backend answered with an error
    #[error("request rejected: {}", .message.as_deref().unwrap_or("no message"))]
    Rejected {
        status: Option<u16>,
        message: Option<String>,
    },

    /// No usable response
    #[error("transport failure: {0}")]
    Transport(String),
}

impl ApiError {
    pub fn rejected(message: impl Into<String>) -> Self {
        ApiError::Rejected {
            status: None,
            message: Some(message.into()),
        }
    }

    pub fn with_status(status: u16, message: impl Into<String>) -> Self {
        ApiError::Rejected {
            status: Some(status),
            message: Some(message.into()),
        }
    }
}

/// Maps backend error text onto user-facing phrases.
///
/// Entries are tried in order and matched by case-sensitive substring;
/// the first entry with a matching needle wins.
#[derive(Debug, Clone)]
pub struct ErrorTranslator {
    entries: Vec<(Vec<String>, String)>,
    prefix: String,
    default_message: String,
    transport_message: String,
}

impl ErrorTranslator {
    /// Translator without a phrase table: backend text is shown as is
    pub fn plain(default_message: impl Into<String>) -> Self {
        let default_message = default_message.into();
        Self {
            entries: Vec::new(),
            prefix: String::new(),
            transport_message: default_message.clone(),
            default_message,
        }
    }

    pub fn login() -> Self {
        Self {
            entries: Vec::new(),
            prefix: "❌ ".to_string(),
            default_message: "Login failed".to_string(),
            transport_message: "❌ Login failed. Please try again later.".to_string(),
        }
        .entry(
            &["Invalid credentials", "incorrect"],
            "❌ Wrong email or password. Please check your credentials.",
        )
        .entry(
            &["User not found", "email"],
            "❌ Email not found. Please check your email address.",
        )
        .entry(&["password"], "❌ Incorrect password. Please try again.")
        .entry(
            &["network", "connection"],
            "❌ Network error. Please check your internet connection.",
        )
    }

    /// Append a phrase used when the backend text contains any of `needles`
    pub fn entry(mut self, needles: &[&str], phrase: impl Into<String>) -> Self {
        self.entries.push((
            needles.iter().map(|needle| needle.to_string()).collect(),
            phrase.into(),
        ));
        self
    }

    /// Prefix put in front of untranslated backend text
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn transport_message(mut self, message: impl Into<String>) -> Self {
        self.transport_message = message.into();
        self
    }

    pub fn translate(&self, error: &ApiError) -> String {
        match error {
            ApiError::Rejected { message, .. } => {
                let text = message
                    .as_deref()
                    .filter(|text| !text.is_empty())
                    .unwrap_or(&self.default_message);
                self.translate_text(text)
            }
            ApiError::Transport(_) => self.transport_message.clone(),
        }
    }

    fn translate_text(&self, text: &str) -> String {
        self.entries
            .iter()
            .find(|(needles, _)| needles.iter().any(|needle| text.contains(needle.as_str())))
            .map(|(_, phrase)| phrase.clone())
            .unwrap_or_else(|| format!("{}{}", self.prefix, text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("Invalid credentials", "❌ Wrong email or password. Please check your credentials.")]
    #[case("Password is incorrect", "❌ Wrong email or password. Please check your credentials.")]
    #[case("User not found", "❌ Email not found. Please check your email address.")]
    #[case("Unknown email", "❌ Email not found. Please check your email address.")]
    #[case("Bad password", "❌ Incorrect password. Please try again.")]
    #[case("network unreachable", "❌ Network error. Please check your internet connection.")]
    #[case("connection reset", "❌ Network error. Please check your internet connection.")]
    #[case("Account locked", "❌ Account locked")]
    fn test_login_table(#[case] backend: &str, #[case] expected: &str) {
        assert_eq!(ErrorTranslator::login().translate(&ApiError::rejected(backend)), expected);
    }

    #[test]
    fn test_login_defaults() {
        let translator = ErrorTranslator::login();
        let silent = ApiError::Rejected {
            status: Some(500),
            message: None,
        };
        assert_eq!(translator.translate(&silent), "❌ Login failed");
        assert_eq!(
            translator.translate(&ApiError::Transport("dns".into())),
            "❌ Login failed. Please try again later."
        );
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        // "Network Error" does not contain "network"
        assert_eq!(
            ErrorTranslator::login().translate(&ApiError::rejected("Network Error")),
            "❌ Network Error"
        );
    }

    #[test]
    fn test_plain_translator() {
        let translator = ErrorTranslator::plain("Failed to create user");
        assert_eq!(
            translator.translate(&ApiError::with_status(409, "User already exists")),
            "User already exists"
        );
        assert_eq!(
            translator.translate(&ApiError::Rejected {
                status: Some(400),
                message: Some(String::new()),
            }),
            "Failed to create user"
        );
        assert_eq!(
            translator.translate(&ApiError::Transport("timeout".into())),
            "Failed to create user"
        );
    }

    #[test]
    fn test_api_error_display() {
        assert_eq!(ApiError::rejected("nope").to_string(), "request rejected: nope");
        assert_eq!(
            ApiError::Transport("timed out".into()).to_string(),
            "transport failure: timed out"
        );
    }
}
