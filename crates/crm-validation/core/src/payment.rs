//! Bank and card details

use crate::check_format;
use crate::patterns::Pattern;
use crate::result::ValidationResult;

pub fn validate_bank_account(value: &str, field_name: &str) -> ValidationResult {
    check_format(value, Pattern::BankAccount, || {
        format!("{} should be 9-18 digits", field_name)
    })
}

/// 11-character branch code: 4 letters, a literal `0`, 6 alphanumerics
pub fn validate_ifsc_code(value: &str, field_name: &str) -> ValidationResult {
    check_format(value, Pattern::IfscCode, || {
        format!("{} should be a valid 11-character IFSC code", field_name)
    })
}

pub fn validate_credit_card(value: &str, field_name: &str) -> ValidationResult {
    check_format(value, Pattern::CreditCard, || {
        format!("{} should be 13-19 digits", field_name)
    })
}

pub fn validate_cvv(value: &str, field_name: &str) -> ValidationResult {
    check_format(value, Pattern::Cvv, || format!("{} should be 3-4 digits", field_name))
}

/// `MM/YY` with a month between 01 and 12. The year is not compared with
/// the current date.
pub fn validate_expiry_date(value: &str, field_name: &str) -> ValidationResult {
    check_format(value, Pattern::ExpiryDate, || {
        format!("{} should be in MM/YY format", field_name)
    })
}
