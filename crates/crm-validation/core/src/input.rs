//! Keystroke-level input handlers
//!
//! These run on every change event, before a value is committed. Filtering
//! handlers drop a keystroke that would make the value unacceptable; their
//! accepted languages are prefix-closed, so a user can never type a
//! disallowed character. Flagging handlers always commit (after optional
//! upper-casing) and attach a short live message while the value is
//! incomplete.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RuleParseError;
use crate::patterns::Pattern;

/// What to do with a candidate value typed into a field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "decision", rename_all = "camelCase")]
pub enum InputDecision {
    /// Commit `value`; show `error` if present, clear any error otherwise
    Accept { value: String, error: Option<String> },
    /// Drop the keystroke; value and error stay as they were
    Reject,
}

impl InputDecision {
    pub fn is_accepted(&self) -> bool {
        matches!(self, InputDecision::Accept { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputHandler {
    AlphabetOnly,
    NumbersOnly,
    DecimalNumbers,
    PhoneNumber,
    Gstin,
    IfscCode,
    BankAccount,
    UpiId,
    WebsiteUrl,
    HsnSac,
    PostalCode,
    PanNumber,
    AadharNumber,
    CreditCard,
    Cvv,
    ExpiryDate,
}

impl InputHandler {
    pub const ALL: [InputHandler; 16] = [
        InputHandler::AlphabetOnly,
        InputHandler::NumbersOnly,
        InputHandler::DecimalNumbers,
        InputHandler::PhoneNumber,
        InputHandler::Gstin,
        InputHandler::IfscCode,
        InputHandler::BankAccount,
        InputHandler::UpiId,
        InputHandler::WebsiteUrl,
        InputHandler::HsnSac,
        InputHandler::PostalCode,
        InputHandler::PanNumber,
        InputHandler::AadharNumber,
        InputHandler::CreditCard,
        InputHandler::Cvv,
        InputHandler::ExpiryDate,
    ];

    pub fn name(self) -> &'static str {
        match self {
            InputHandler::AlphabetOnly => "alphabet_only",
            InputHandler::NumbersOnly => "numbers_only",
            InputHandler::DecimalNumbers => "decimal_numbers",
            InputHandler::PhoneNumber => "phone_number",
            InputHandler::Gstin => "gstin",
            InputHandler::IfscCode => "ifsc_code",
            InputHandler::BankAccount => "bank_account",
            InputHandler::UpiId => "upi_id",
            InputHandler::WebsiteUrl => "website_url",
            InputHandler::HsnSac => "hsn_sac",
            InputHandler::PostalCode => "postal_code",
            InputHandler::PanNumber => "pan_number",
            InputHandler::AadharNumber => "aadhar_number",
            InputHandler::CreditCard => "credit_card",
            InputHandler::Cvv => "cvv",
            InputHandler::ExpiryDate => "expiry_date",
        }
    }

    /// Decide what happens to `raw`, the full text of the field after the
    /// keystroke.
    pub fn handle(self, raw: &str) -> InputDecision {
        match self {
            InputHandler::AlphabetOnly => filter(raw, Pattern::AlphabetOnly, None),
            InputHandler::NumbersOnly | InputHandler::BankAccount | InputHandler::HsnSac => {
                filter(raw, Pattern::NumbersOnly, None)
            }
            InputHandler::DecimalNumbers => filter(raw, Pattern::DecimalNumbers, None),
            InputHandler::PostalCode => filter(raw, Pattern::NumbersOnly, Some(6)),
            InputHandler::AadharNumber => filter(raw, Pattern::NumbersOnly, Some(12)),
            InputHandler::CreditCard => filter(raw, Pattern::NumbersOnly, Some(19)),
            InputHandler::Cvv => filter(raw, Pattern::NumbersOnly, Some(4)),
            InputHandler::PhoneNumber => flag(
                raw.to_string(),
                Pattern::PhoneNumber,
                "Please enter a valid 10-digit phone number",
            ),
            InputHandler::Gstin => flag(
                raw.to_uppercase(),
                Pattern::Gstin,
                "Please enter a valid 15-character GSTIN",
            ),
            InputHandler::IfscCode => flag(
                raw.to_uppercase(),
                Pattern::IfscCode,
                "Please enter a valid 11-character IFSC code",
            ),
            InputHandler::PanNumber => flag(
                raw.to_uppercase(),
                Pattern::PanNumber,
                "Please enter a valid 10-character PAN",
            ),
            InputHandler::UpiId => flag(
                raw.to_string(),
                Pattern::UpiId,
                "Please enter a valid UPI ID (username@provider)",
            ),
            InputHandler::WebsiteUrl => flag(
                raw.to_string(),
                Pattern::WebsiteUrl,
                "Please enter a valid URL starting with http:// or https://",
            ),
            InputHandler::ExpiryDate => flag(
                raw.to_string(),
                Pattern::ExpiryDate,
                "Please enter in MM/YY format",
            ),
        }
    }
}

fn filter(raw: &str, pattern: Pattern, max_len: Option<usize>) -> InputDecision {
    let fits = max_len.map_or(true, |max| raw.chars().count() <= max);
    if fits && pattern.is_match(raw) {
        InputDecision::Accept {
            value: raw.to_string(),
            error: None,
        }
    } else {
        InputDecision::Reject
    }
}

fn flag(value: String, pattern: Pattern, message: &str) -> InputDecision {
    let error = if !value.is_empty() && !pattern.is_match(&value) {
        Some(message.to_string())
    } else {
        None
    };
    InputDecision::Accept { value, error }
}

impl fmt::Display for InputHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for InputHandler {
    type Err = RuleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InputHandler::ALL
            .iter()
            .copied()
            .find(|handler| handler.name() == s)
            .ok_or_else(|| RuleParseError::UnknownHandler(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn accepted(value: &str, error: Option<&str>) -> InputDecision {
        InputDecision::Accept {
            value: value.to_string(),
            error: error.map(str::to_string),
        }
    }

    #[test]
    fn test_filtering_handlers_drop_bad_keystrokes() {
        assert_eq!(InputHandler::AlphabetOnly.handle("Ravi"), accepted("Ravi", None));
        assert_eq!(InputHandler::AlphabetOnly.handle("Ravi1"), InputDecision::Reject);
        assert_eq!(InputHandler::DecimalNumbers.handle("10."), accepted("10.", None));
        assert_eq!(InputHandler::DecimalNumbers.handle("10.5."), InputDecision::Reject);
        assert_eq!(InputHandler::BankAccount.handle("12a"), InputDecision::Reject);
    }

    #[test]
    fn test_length_capped_handlers() {
        assert!(InputHandler::PostalCode.handle("560001").is_accepted());
        assert_eq!(InputHandler::PostalCode.handle("5600011"), InputDecision::Reject);
        assert!(InputHandler::Cvv.handle("1234").is_accepted());
        assert_eq!(InputHandler::Cvv.handle("12345"), InputDecision::Reject);
        assert!(InputHandler::AadharNumber.handle("123412341234").is_accepted());
        assert_eq!(InputHandler::AadharNumber.handle("1234123412345"), InputDecision::Reject);
        assert!(InputHandler::CreditCard.handle("4111111111111111111").is_accepted());
        assert_eq!(InputHandler::CreditCard.handle("41111111111111111111"), InputDecision::Reject);
    }

    #[test]
    fn test_filtering_handlers_are_prefix_closed() {
        let samples = [
            (InputHandler::AlphabetOnly, "Anita Rao"),
            (InputHandler::NumbersOnly, "0042"),
            (InputHandler::DecimalNumbers, "199.99"),
            (InputHandler::PostalCode, "560001"),
            (InputHandler::Cvv, "123"),
        ];
        for (handler, full) in samples {
            for end in 0..=full.len() {
                assert!(handler.handle(&full[..end]).is_accepted(), "{} on {:?}", handler, &full[..end]);
            }
        }
    }

    #[test]
    fn test_flagging_handlers_uppercase_and_commit() {
        assert_eq!(
            InputHandler::Gstin.handle("22aaaaa"),
            accepted("22AAAAA", Some("Please enter a valid 15-character GSTIN"))
        );
        assert_eq!(InputHandler::Gstin.handle("22aaaaa0000a1z5"), accepted("22AAAAA0000A1Z5", None));
        assert_eq!(InputHandler::IfscCode.handle("hdfc0001234"), accepted("HDFC0001234", None));
        assert_eq!(
            InputHandler::PanNumber.handle("abcde"),
            accepted("ABCDE", Some("Please enter a valid 10-character PAN"))
        );
    }

    #[test]
    fn test_flagging_handlers_clear_on_empty() {
        assert_eq!(InputHandler::PhoneNumber.handle(""), accepted("", None));
        assert_eq!(
            InputHandler::PhoneNumber.handle("98765"),
            accepted("98765", Some("Please enter a valid 10-digit phone number"))
        );
        assert_eq!(
            InputHandler::ExpiryDate.handle("13/2"),
            accepted("13/2", Some("Please enter in MM/YY format"))
        );
    }

    #[test]
    fn test_names_round_trip() {
        for handler in InputHandler::ALL {
            assert_eq!(handler.name().parse::<InputHandler>().unwrap(), handler);
        }
        assert_eq!(
            "swift".parse::<InputHandler>(),
            Err(RuleParseError::UnknownHandler("swift".to_string()))
        );
    }
}
