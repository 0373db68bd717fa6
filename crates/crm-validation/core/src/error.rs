//! Errors raised while turning rule names into rules

use thiserror::Error;

/// Failure to parse a rule or input-handler name such as `"max_length:500"`.
///
/// Validators themselves never fail; this only covers configuration coming
/// from rule files, the CLI or the browser bindings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleParseError {
    #[error("unknown rule `{0}`")]
    UnknownRule(String),

    #[error("unknown input handler `{0}`")]
    UnknownHandler(String),

    #[error("rule `{rule}` expects {expected}")]
    MissingParameter { rule: String, expected: &'static str },

    #[error("invalid parameter `{value}` for rule `{rule}`")]
    InvalidParameter { rule: String, value: String },

    #[error("rule `{0}` does not take parameters")]
    UnexpectedParameter(String),
}
