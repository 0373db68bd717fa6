//! Password validation functions

use crate::result::ValidationResult;

/// Minimum number of characters accepted by [`validate_password`]
pub const PASSWORD_MIN_LENGTH: usize = 6;

/// Basic password validation: 6+ characters.
///
/// Empty input passes; pair with `required` when the password is mandatory.
pub fn validate_password(value: &str, field_name: &str) -> ValidationResult {
    if value.is_empty() || value.chars().count() >= PASSWORD_MIN_LENGTH {
        ValidationResult::valid()
    } else {
        ValidationResult::invalid(format!(
            "{} should be at least {} characters long",
            field_name, PASSWORD_MIN_LENGTH
        ))
    }
}
