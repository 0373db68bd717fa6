//! Pattern table
//!
//! One canonical matching rule per semantic field type. Patterns are compiled
//! once, on first use, and never change afterwards.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::RuleParseError;

/// Named text-matching rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Pattern {
    /// Letters and whitespace only
    AlphabetOnly,
    /// Digits only
    NumbersOnly,
    /// Digits with at most one decimal point
    DecimalNumbers,
    /// 10 digits, optionally prefixed with `+91`
    PhoneNumber,
    /// 15-character GST identification number
    Gstin,
    /// 11-character bank branch code
    IfscCode,
    /// 9-18 digit account number
    BankAccount,
    /// `username@provider` payment handle
    UpiId,
    /// `http(s)://` address
    WebsiteUrl,
    /// 4-8 digit HSN/SAC classification code
    HsnSac,
    /// 6-digit PIN code
    PostalCode,
    /// 10-character PAN
    PanNumber,
    /// 12-digit Aadhar number
    AadharNumber,
    /// 13-19 digit card number
    CreditCard,
    /// 3-4 digit card security code
    Cvv,
    /// `MM/YY`
    ExpiryDate,
    /// `local@domain.tld`
    Email,
    SpecialCharsOnly,
    AlphanumericWithSpaces,
    AlphanumericWithSpecial,
}

// Indexed by `Pattern as usize`; keep in declaration order.
static COMPILED: Lazy<Vec<Regex>> = Lazy::new(|| {
    Pattern::ALL
        .iter()
        .map(|pattern| Regex::new(pattern.source()).unwrap())
        .collect()
});

impl Pattern {
    /// Every pattern, in declaration order
    pub const ALL: [Pattern; 20] = [
        Pattern::AlphabetOnly,
        Pattern::NumbersOnly,
        Pattern::DecimalNumbers,
        Pattern::PhoneNumber,
        Pattern::Gstin,
        Pattern::IfscCode,
        Pattern::BankAccount,
        Pattern::UpiId,
        Pattern::WebsiteUrl,
        Pattern::HsnSac,
        Pattern::PostalCode,
        Pattern::PanNumber,
        Pattern::AadharNumber,
        Pattern::CreditCard,
        Pattern::Cvv,
        Pattern::ExpiryDate,
        Pattern::Email,
        Pattern::SpecialCharsOnly,
        Pattern::AlphanumericWithSpaces,
        Pattern::AlphanumericWithSpecial,
    ];

    /// Canonical snake-case name, as accepted by [`FromStr`]
    pub fn name(self) -> &'static str {
        match self {
            Pattern::AlphabetOnly => "alphabet_only",
            Pattern::NumbersOnly => "numbers_only",
            Pattern::DecimalNumbers => "decimal_numbers",
            Pattern::PhoneNumber => "phone_number",
            Pattern::Gstin => "gstin",
            Pattern::IfscCode => "ifsc_code",
            Pattern::BankAccount => "bank_account",
            Pattern::UpiId => "upi_id",
            Pattern::WebsiteUrl => "website_url",
            Pattern::HsnSac => "hsn_sac",
            Pattern::PostalCode => "postal_code",
            Pattern::PanNumber => "pan_number",
            Pattern::AadharNumber => "aadhar_number",
            Pattern::CreditCard => "credit_card",
            Pattern::Cvv => "cvv",
            Pattern::ExpiryDate => "expiry_date",
            Pattern::Email => "email",
            Pattern::SpecialCharsOnly => "special_chars_only",
            Pattern::AlphanumericWithSpaces => "alphanumeric_with_spaces",
            Pattern::AlphanumericWithSpecial => "alphanumeric_with_special",
        }
    }

    /// Regular expression source for the pattern
    pub fn source(self) -> &'static str {
        match self {
            Pattern::AlphabetOnly => r"^[a-zA-Z\s]*$",
            Pattern::NumbersOnly => r"^[0-9]*$",
            Pattern::DecimalNumbers => r"^[0-9]*\.?[0-9]*$",
            Pattern::PhoneNumber => r"^(?:\+91\s?)?[0-9]{10}$",
            Pattern::Gstin => r"^[0-9]{2}[A-Z]{5}[0-9]{4}[A-Z][1-9A-Z]Z[0-9A-Z]$",
            Pattern::IfscCode => r"^[A-Z]{4}0[A-Z0-9]{6}$",
            Pattern::BankAccount => r"^[0-9]{9,18}$",
            Pattern::UpiId => r"^[a-zA-Z0-9._-]+@[a-zA-Z0-9.-]+$",
            Pattern::WebsiteUrl => r"^https?://[A-Za-z0-9_.-]+(?:\.[A-Za-z0-9_.-]+)+(?:[/#?].*)?$",
            Pattern::HsnSac => r"^[0-9]{4,8}$",
            Pattern::PostalCode => r"^[0-9]{6}$",
            Pattern::PanNumber => r"^[A-Z]{5}[0-9]{4}[A-Z]$",
            Pattern::AadharNumber => r"^[0-9]{12}$",
            Pattern::CreditCard => r"^[0-9]{13,19}$",
            Pattern::Cvv => r"^[0-9]{3,4}$",
            Pattern::ExpiryDate => r"^(?:0[1-9]|1[0-2])/[0-9]{2}$",
            Pattern::Email => r"^[^\s@]+@[^\s@]+\.[^\s@]+$",
            Pattern::SpecialCharsOnly => r#"^[!@#$%^&*()_+\-=\[\]{};':"\\|,.<>/?]*$"#,
            Pattern::AlphanumericWithSpaces => r"^[a-zA-Z0-9\s]*$",
            Pattern::AlphanumericWithSpecial => {
                r#"^[a-zA-Z0-9\s!@#$%^&*()_+\-=\[\]{};':"\\|,.<>/?]*$"#
            }
        }
    }

    /// True when the whole of `value` matches the pattern
    pub fn is_match(self, value: &str) -> bool {
        COMPILED[self as usize].is_match(value)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Pattern {
    type Err = RuleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pattern::ALL
            .iter()
            .copied()
            .find(|pattern| pattern.name() == s)
            .ok_or_else(|| RuleParseError::UnknownRule(s.to_string()))
    }
}
