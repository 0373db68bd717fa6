//! Identity, tax and address identifiers: phone, GSTIN, PAN, Aadhar,
//! HSN/SAC and postal codes.

use crate::check_format;
use crate::patterns::Pattern;
use crate::result::ValidationResult;

/// 10 digits, optionally prefixed with `+91`
pub fn validate_phone_number(value: &str, field_name: &str) -> ValidationResult {
    check_format(value, Pattern::PhoneNumber, || {
        format!(
            "{} should be a valid 10-digit number (e.g., 9876543210 or +91 9876543210)",
            field_name
        )
    })
}

/// 15-character GST identification number, e.g. `22AAAAA0000A1Z5`
pub fn validate_gstin(value: &str, field_name: &str) -> ValidationResult {
    check_format(value, Pattern::Gstin, || {
        format!("{} should be a valid 15-character GSTIN format", field_name)
    })
}

/// 10-character PAN, e.g. `ABCDE1234F`
pub fn validate_pan_number(value: &str, field_name: &str) -> ValidationResult {
    check_format(value, Pattern::PanNumber, || {
        format!("{} should be a valid 10-character PAN format", field_name)
    })
}

pub fn validate_aadhar_number(value: &str, field_name: &str) -> ValidationResult {
    check_format(value, Pattern::AadharNumber, || {
        format!("{} should be 12 digits", field_name)
    })
}

/// Line-item classification code
pub fn validate_hsn_sac(value: &str, field_name: &str) -> ValidationResult {
    check_format(value, Pattern::HsnSac, || {
        format!("{} should be 4-8 digits", field_name)
    })
}

pub fn validate_postal_code(value: &str, field_name: &str) -> ValidationResult {
    check_format(value, Pattern::PostalCode, || {
        format!("{} should be 6 digits", field_name)
    })
}
