//! String validation functions

use crate::check_format;
use crate::patterns::Pattern;
use crate::result::ValidationResult;

/// Letters and spaces only
pub fn validate_alphabet_only(value: &str, field_name: &str) -> ValidationResult {
    check_format(value, Pattern::AlphabetOnly, || {
        format!("{} should contain only alphabets and spaces", field_name)
    })
}

/// Digits only
pub fn validate_numbers_only(value: &str, field_name: &str) -> ValidationResult {
    check_format(value, Pattern::NumbersOnly, || {
        format!("{} should contain only numbers", field_name)
    })
}

/// Digits with at most one decimal point
pub fn validate_decimal_numbers(value: &str, field_name: &str) -> ValidationResult {
    check_format(value, Pattern::DecimalNumbers, || {
        format!("{} should contain only numbers and decimal points", field_name)
    })
}

pub fn validate_special_chars_only(value: &str, field_name: &str) -> ValidationResult {
    check_format(value, Pattern::SpecialCharsOnly, || {
        format!("{} should contain only special characters", field_name)
    })
}

pub fn validate_alphanumeric_with_spaces(value: &str, field_name: &str) -> ValidationResult {
    check_format(value, Pattern::AlphanumericWithSpaces, || {
        format!("{} should contain only letters, numbers, and spaces", field_name)
    })
}

pub fn validate_alphanumeric_with_special(value: &str, field_name: &str) -> ValidationResult {
    check_format(value, Pattern::AlphanumericWithSpecial, || {
        format!(
            "{} should contain only letters, numbers, spaces, and special characters",
            field_name
        )
    })
}

/// Mandatory field: empty and whitespace-only values fail.
///
/// This is the only validator that rejects empty input.
pub fn validate_required(value: &str, field_name: &str) -> ValidationResult {
    if value.trim().is_empty() {
        ValidationResult::invalid(format!("{} is required", field_name))
    } else {
        ValidationResult::valid()
    }
}

/// Validates minimum length, counted in characters
pub fn validate_min_length(value: &str, min: usize, field_name: &str) -> ValidationResult {
    if value.is_empty() || value.chars().count() >= min {
        ValidationResult::valid()
    } else {
        ValidationResult::invalid(format!(
            "{} should be at least {} characters long",
            field_name, min
        ))
    }
}

/// Validates maximum length, counted in characters
pub fn validate_max_length(value: &str, max: usize, field_name: &str) -> ValidationResult {
    if value.chars().count() <= max {
        ValidationResult::valid()
    } else {
        ValidationResult::invalid(format!("{} should not exceed {} characters", field_name, max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_only() {
        assert!(validate_alphabet_only("Anita Rao", "Name").is_valid);
        assert!(validate_alphabet_only("", "Name").is_valid);
        assert_eq!(
            validate_alphabet_only("Anita_Rao", "Name").message,
            "Name should contain only alphabets and spaces"
        );
    }

    #[test]
    fn test_numeric_strings() {
        assert!(validate_numbers_only("1234", "Field").is_valid);
        assert!(!validate_numbers_only("12.5", "Field").is_valid);
        assert!(validate_decimal_numbers("12.5", "Price").is_valid);
        assert_eq!(
            validate_decimal_numbers("12,5", "Price").message,
            "Price should contain only numbers and decimal points"
        );
    }

    #[test]
    fn test_required() {
        assert_eq!(
            validate_required("   ", "Field"),
            ValidationResult::invalid("Field is required")
        );
        assert_eq!(validate_required("", "Title").message, "Title is required");
        assert!(validate_required("x", "Field").is_valid);
    }

    #[test]
    fn test_length_validators() {
        assert!(validate_min_length("hello", 3, "Field").is_valid);
        assert!(validate_min_length("", 3, "Field").is_valid);
        assert_eq!(
            validate_min_length("hi", 3, "Code").message,
            "Code should be at least 3 characters long"
        );

        assert!(validate_max_length("hello", 10, "Field").is_valid);
        assert_eq!(
            validate_max_length("verylongstring", 5, "Description").message,
            "Description should not exceed 5 characters"
        );
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 4 characters, 12 bytes
        assert!(validate_max_length("नमस्", 4, "Field").is_valid);
    }

    #[test]
    fn test_special_and_alphanumeric() {
        assert!(validate_special_chars_only("!?", "Field").is_valid);
        assert!(!validate_special_chars_only("a!", "Field").is_valid);
        assert!(validate_alphanumeric_with_spaces("Plot 7", "Address").is_valid);
        assert_eq!(
            validate_alphanumeric_with_spaces("Plot #7", "Address").message,
            "Address should contain only letters, numbers, and spaces"
        );
        assert!(validate_alphanumeric_with_special("Plot #7, Sector 4", "Address").is_valid);
    }
}
