//! CRM Validation Core
//!
//! Pure, stateless validation functions shared by the form bindings, the
//! WASM client bindings and the `crm` command-line tool.
//!
//! Every validator has the same shape: it takes the raw field text and the
//! field name used to build the message, and returns a [`ValidationResult`].
//! Apart from [`validate_required`], empty input always passes; format checks
//! only apply once a value is present.

pub mod email;
pub mod error;
pub mod form;
pub mod identifiers;
pub mod input;
pub mod numeric;
pub mod password;
pub mod patterns;
pub mod payment;
pub mod result;
pub mod rule;
pub mod string;

// Re-export all validators
pub use email::*;
pub use identifiers::*;
pub use numeric::*;
pub use password::*;
pub use payment::*;
pub use string::*;

pub use error::RuleParseError;
pub use form::{field_text, text_fields, validate_form, FieldSource, FormRules, FormValidation};
pub use input::{InputDecision, InputHandler};
pub use patterns::Pattern;
pub use result::ValidationResult;
pub use rule::{FieldRule, Rule};

/// Shared body of every format validator: empty passes, otherwise the value
/// must fully match `pattern`.
pub(crate) fn check_format(
    value: &str,
    pattern: Pattern,
    message: impl FnOnce() -> String,
) -> ValidationResult {
    if value.is_empty() || pattern.is_match(value) {
        ValidationResult::valid()
    } else {
        ValidationResult::invalid(message())
    }
}
