//! Email, web address and UPI handle validation functions

use crate::check_format;
use crate::patterns::Pattern;
use crate::result::ValidationResult;

/// Validates basic email format
///
/// Checks for a non-empty local part, exactly one `@`, no whitespace and at
/// least one `.` in the domain part.
pub fn validate_email(value: &str, field_name: &str) -> ValidationResult {
    check_format(value, Pattern::Email, || {
        format!("{} should be a valid email address", field_name)
    })
}

/// `http://` or `https://` followed by a dotted host and an optional
/// path, query or fragment.
pub fn validate_website_url(value: &str, field_name: &str) -> ValidationResult {
    check_format(value, Pattern::WebsiteUrl, || {
        format!(
            "{} should be a valid URL starting with http:// or https://",
            field_name
        )
    })
}

/// `username@provider` payment handle
pub fn validate_upi_id(value: &str, field_name: &str) -> ValidationResult {
    check_format(value, Pattern::UpiId, || {
        format!("{} should be in format: username@provider", field_name)
    })
}
