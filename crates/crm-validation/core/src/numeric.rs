//! Numeric validation functions
//!
//! Field values arrive as text. Leading whitespace is skipped and the
//! longest numeric prefix is read, so `"12abc"` is 12 and `"1e400"` is
//! infinite. Text with no numeric prefix fails with the same message as an
//! out-of-range number. Callers that need to tell the two apart can use
//! [`NumericValue::parse`] directly.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::result::ValidationResult;

static NUMERIC_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:Infinity|(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)").unwrap()
});

/// Parsed form of a numeric field
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericValue {
    /// Nothing typed yet
    Empty,
    /// Text present but no numeric prefix
    NotANumber,
    Number(f64),
}

impl NumericValue {
    /// Read the leading number of `value`, ignoring whatever follows it.
    ///
    /// Overflow and a literal `Infinity` prefix give an infinite number.
    /// Whitespace-only text is not empty and has no number.
    pub fn parse(value: &str) -> Self {
        if value.is_empty() {
            return NumericValue::Empty;
        }
        let Some(prefix) = NUMERIC_PREFIX.find(value.trim_start()) else {
            return NumericValue::NotANumber;
        };
        let prefix = prefix.as_str();
        let number = match prefix.trim_start_matches(['+', '-']) {
            "Infinity" if prefix.starts_with('-') => f64::NEG_INFINITY,
            "Infinity" => f64::INFINITY,
            _ => match prefix.parse::<f64>() {
                Ok(number) => number,
                Err(_) => return NumericValue::NotANumber,
            },
        };
        NumericValue::Number(number)
    }

    pub fn as_f64(self) -> Option<f64> {
        match self {
            NumericValue::Number(number) => Some(number),
            _ => None,
        }
    }
}

/// Shared body of the numeric validators: empty passes, a number must satisfy
/// `accept`, anything else fails.
fn check_number(
    value: &str,
    accept: impl FnOnce(f64) -> bool,
    message: impl FnOnce() -> String,
) -> ValidationResult {
    match NumericValue::parse(value) {
        NumericValue::Empty => ValidationResult::valid(),
        NumericValue::Number(number) if accept(number) => ValidationResult::valid(),
        _ => ValidationResult::invalid(message()),
    }
}

/// Validates value is within `[min, max]`
pub fn validate_range(value: &str, min: f64, max: f64, field_name: &str) -> ValidationResult {
    check_number(
        value,
        |number| number >= min && number <= max,
        || format!("{} should be between {} and {}", field_name, min, max),
    )
}

/// Strictly greater than zero
pub fn validate_positive_number(value: &str, field_name: &str) -> ValidationResult {
    check_number(
        value,
        |number| number > 0.0,
        || format!("{} should be a positive number", field_name),
    )
}

/// Zero or greater
pub fn validate_non_negative_number(value: &str, field_name: &str) -> ValidationResult {
    check_number(
        value,
        |number| number >= 0.0,
        || format!("{} should be a non-negative number", field_name),
    )
}
