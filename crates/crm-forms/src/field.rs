// File: src/field.rs
// Purpose: One form field's value, error and change/blur/submit handling

use crm_validation_core::{FieldRule, InputDecision, InputHandler, Rule};
use serde::Serialize;

/// Visible validation state of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldState {
    #[default]
    Clean,
    /// Flagged while typing
    InvalidLive,
    /// Flagged on blur or submit
    InvalidBlurred,
}

/// How a keystroke is treated before it reaches the committed value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChangePolicy {
    /// Always commit, flag an invalid value with a live error
    #[default]
    Commit,
    /// Drop a keystroke that would make the value invalid
    Reject,
    /// Let an input handler filter or flag the keystroke
    Handler(InputHandler),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeOutcome {
    Committed,
    Rejected,
}

/// State container for a single field.
///
/// The error is cleared optimistically on every committed change and set
/// again when the new value fails. Blur only ever adds an error; submit
/// re-runs every rule through [`FieldBinding::check`] and settles the error
/// either way.
#[derive(Debug, Clone)]
pub struct FieldBinding {
    name: String,
    initial: String,
    value: String,
    error: String,
    state: FieldState,
    rules: Vec<FieldRule>,
    policy: ChangePolicy,
    uppercase: bool,
    live_message: Option<String>,
    blur_message: Option<String>,
}

impl FieldBinding {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            initial: String::new(),
            value: String::new(),
            error: String::new(),
            state: FieldState::Clean,
            rules: Vec::new(),
            policy: ChangePolicy::default(),
            uppercase: false,
            live_message: None,
            blur_message: None,
        }
    }

    /// Add a rule, checked in insertion order
    pub fn rule(mut self, rule: impl Into<FieldRule>) -> Self {
        self.rules.push(rule.into());
        self
    }

    pub fn policy(mut self, policy: ChangePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Upper-case every candidate before it is checked
    pub fn uppercase(mut self) -> Self {
        self.uppercase = true;
        self
    }

    /// Message shown instead of the rule message while typing
    pub fn live_message(mut self, message: impl Into<String>) -> Self {
        self.live_message = Some(message.into());
        self
    }

    /// Message shown instead of the rule message when blur finds a failure
    pub fn blur_message(mut self, message: impl Into<String>) -> Self {
        self.blur_message = Some(message.into());
        self
    }

    /// Value the field starts with and returns to on reset
    pub fn initial(mut self, value: impl Into<String>) -> Self {
        self.initial = value.into();
        self.value = self.initial.clone();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Current error message, empty when the field is clean
    pub fn error(&self) -> &str {
        &self.error
    }

    pub fn state(&self) -> FieldState {
        self.state
    }

    pub fn rules(&self) -> &[FieldRule] {
        &self.rules
    }

    /// Handle a change event carrying the field's full new text
    pub fn on_change(&mut self, raw: &str) -> ChangeOutcome {
        let candidate = if self.uppercase {
            raw.to_uppercase()
        } else {
            raw.to_string()
        };

        match self.policy {
            ChangePolicy::Commit => {
                self.clear_error();
                if !candidate.is_empty() {
                    if let Some(message) = self.first_failure(&candidate, true) {
                        let message = self.live_message.clone().unwrap_or(message);
                        self.set_error(message, FieldState::InvalidLive);
                    }
                }
                self.value = candidate;
                ChangeOutcome::Committed
            }
            ChangePolicy::Reject => {
                if self.first_failure(&candidate, false).is_some() {
                    return ChangeOutcome::Rejected;
                }
                self.clear_error();
                self.value = candidate;
                ChangeOutcome::Committed
            }
            ChangePolicy::Handler(handler) => match handler.handle(&candidate) {
                InputDecision::Accept { value, error } => {
                    self.clear_error();
                    if let Some(message) = error {
                        let message = self.live_message.clone().unwrap_or(message);
                        self.set_error(message, FieldState::InvalidLive);
                    }
                    self.value = value;
                    ChangeOutcome::Committed
                }
                InputDecision::Reject => ChangeOutcome::Rejected,
            },
        }
    }

    /// Re-validate the committed value when focus leaves the field
    pub fn on_blur(&mut self) {
        if self.value.is_empty() {
            return;
        }
        if let Some(message) = self.first_failure(&self.value, true) {
            tracing::debug!(field = %self.name, %message, "blur validation failed");
            let message = self.blur_message.clone().unwrap_or(message);
            self.set_error(message, FieldState::InvalidBlurred);
        }
    }

    /// Submit-time check: every rule runs against the committed value and
    /// the first failure becomes the field's error. A passing value clears
    /// whatever error was left from typing or blur.
    pub fn check(&mut self) -> Result<(), String> {
        match self.first_failure(&self.value, true) {
            Some(message) => {
                self.set_error(message.clone(), FieldState::InvalidBlurred);
                Err(message)
            }
            None => {
                self.clear_error();
                Ok(())
            }
        }
    }

    /// Overwrite the value without running any rule
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn set_error(&mut self, message: impl Into<String>, state: FieldState) {
        self.error = message.into();
        self.state = if self.error.is_empty() {
            FieldState::Clean
        } else {
            state
        };
    }

    pub fn clear_error(&mut self) {
        self.error.clear();
        self.state = FieldState::Clean;
    }

    pub fn reset(&mut self) {
        self.value = self.initial.clone();
        self.clear_error();
    }

    fn first_failure(&self, value: &str, include_required: bool) -> Option<String> {
        self.rules
            .iter()
            .filter(|rule| include_required || rule.rule != Rule::Required)
            .map(|rule| rule.check(value))
            .find(|result| !result.is_valid)
            .map(|result| result.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crm_validation_core::Pattern;
    use pretty_assertions::assert_eq;

    fn password() -> FieldBinding {
        FieldBinding::new("password")
            .rule(Rule::Password)
            .live_message("Password should be at least 6 characters long")
    }

    #[test]
    fn test_commit_flags_live() {
        let mut field = password();
        assert_eq!(field.on_change("abc"), ChangeOutcome::Committed);
        assert_eq!(field.value(), "abc");
        assert_eq!(field.error(), "Password should be at least 6 characters long");
        assert_eq!(field.state(), FieldState::InvalidLive);

        field.on_change("abcdef");
        assert_eq!(field.error(), "");
        assert_eq!(field.state(), FieldState::Clean);
    }

    #[test]
    fn test_commit_empty_value_clears_error() {
        let mut field = password();
        field.on_change("abc");
        field.on_change("");
        assert_eq!(field.error(), "");
        assert_eq!(field.state(), FieldState::Clean);
    }

    #[test]
    fn test_reject_leaves_value_untouched() {
        let mut field = FieldBinding::new("name")
            .rule(FieldRule::new(Rule::Required).named("Name"))
            .rule(FieldRule::new(Rule::Format(Pattern::AlphabetOnly)).named("Name"))
            .policy(ChangePolicy::Reject);

        assert_eq!(field.on_change("Ravi"), ChangeOutcome::Committed);
        assert_eq!(field.on_change("Ravi1"), ChangeOutcome::Rejected);
        assert_eq!(field.value(), "Ravi");

        // required is not enforced per keystroke
        assert_eq!(field.on_change(""), ChangeOutcome::Committed);
        assert_eq!(field.value(), "");
    }

    #[test]
    fn test_reject_commit_clears_error() {
        let mut field = FieldBinding::new("name")
            .rule(FieldRule::new(Rule::Required).named("Name"))
            .policy(ChangePolicy::Reject);
        assert_eq!(field.check(), Err("Name is required".to_string()));

        field.set_value("R");
        assert_eq!(field.on_change("R!"), ChangeOutcome::Committed);
        assert_eq!(field.error(), "");
    }

    #[test]
    fn test_uppercase_transform() {
        let mut field = FieldBinding::new("supplier_gstin")
            .rule(FieldRule::new(Rule::Format(Pattern::Gstin)).named("GSTIN"))
            .uppercase();

        field.on_change("22aaaaa0000a1z5");
        assert_eq!(field.value(), "22AAAAA0000A1Z5");
        assert_eq!(field.state(), FieldState::Clean);

        field.on_change("22aaaaa");
        assert_eq!(field.error(), "GSTIN should be a valid 15-character GSTIN format");
    }

    #[test]
    fn test_handler_policy() {
        let mut field = FieldBinding::new("bank_account")
            .rule(FieldRule::new(Rule::Format(Pattern::BankAccount)).named("Account Number"))
            .policy(ChangePolicy::Handler(InputHandler::BankAccount));

        assert_eq!(field.on_change("1234"), ChangeOutcome::Committed);
        assert_eq!(field.on_change("1234x"), ChangeOutcome::Rejected);
        assert_eq!(field.value(), "1234");

        field.on_blur();
        assert_eq!(field.error(), "Account Number should be 9-18 digits");
    }

    #[test]
    fn test_blur_only_adds_errors() {
        let mut field = password();
        field.on_blur();
        assert_eq!(field.state(), FieldState::Clean);

        field.set_value("abc");
        field.on_blur();
        assert_eq!(field.error(), "Password should be at least 6 characters long");
        assert_eq!(field.state(), FieldState::InvalidBlurred);

        field.set_value("abcdef");
        field.on_blur();
        assert_eq!(field.state(), FieldState::InvalidBlurred);
    }

    #[test]
    fn test_check_reports_first_failure() {
        let mut field = FieldBinding::new("email")
            .rule(FieldRule::new(Rule::Required).named("Email"))
            .rule(Rule::Format(Pattern::Email));

        assert_eq!(field.check(), Err("Email is required".to_string()));
        field.set_value("nope");
        assert_eq!(field.check(), Err("Email should be a valid email address".to_string()));
        field.set_value("admin@company.com");
        assert_eq!(field.check(), Ok(()));
    }

    #[test]
    fn test_passing_check_clears_stale_error() {
        let mut field = password();
        field.set_value("abc");
        field.on_blur();
        assert_eq!(field.state(), FieldState::InvalidBlurred);

        field.set_value("abcdef");
        assert_eq!(field.check(), Ok(()));
        assert_eq!(field.error(), "");
        assert_eq!(field.state(), FieldState::Clean);

        let mut field = FieldBinding::new("ifsc")
            .policy(ChangePolicy::Handler(InputHandler::IfscCode));
        field.on_change("hdfc");
        assert_eq!(field.state(), FieldState::InvalidLive);
        assert_eq!(field.check(), Ok(()));
        assert_eq!(field.error(), "");
    }

    #[test]
    fn test_blur_message_overrides_rule_message() {
        let mut field = FieldBinding::new("email")
            .rule(FieldRule::new(Rule::Format(Pattern::Email)).named("Email"))
            .blur_message("Check the address");

        field.set_value("admin@");
        field.on_blur();
        assert_eq!(field.error(), "Check the address");
        assert_eq!(field.state(), FieldState::InvalidBlurred);

        // submit keeps the rule message
        assert_eq!(field.check(), Err("Email should be a valid email address".to_string()));
        assert_eq!(field.error(), "Email should be a valid email address");
    }

    #[test]
    fn test_reset_restores_initial() {
        let mut field = FieldBinding::new("status").initial("Draft");
        field.on_change("Sent");
        field.set_error("boom", FieldState::InvalidBlurred);
        field.reset();
        assert_eq!(field.value(), "Draft");
        assert_eq!(field.error(), "");
        assert_eq!(field.state(), FieldState::Clean);
    }
}
