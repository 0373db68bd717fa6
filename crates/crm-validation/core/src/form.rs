//! Generic form validation
//!
//! Runs a set of rules over a flat map of field values. Unlike the per-field
//! bindings in `crm-forms`, nothing short-circuits here: every rule of every
//! field is evaluated, and when several rules fail for one field the last
//! failing rule's message is the one reported.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::rule::FieldRule;

/// Field name → ordered list of rules
pub type FormRules = BTreeMap<String, Vec<FieldRule>>;

/// Result of validating a whole form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormValidation {
    pub is_valid: bool,
    pub errors: BTreeMap<String, String>,
}

impl FormValidation {
    /// Get the error for a specific field
    pub fn get_error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Anything that can look up a submitted field value by name.
///
/// Missing fields are validated as empty text.
pub trait FieldSource {
    fn field(&self, name: &str) -> Option<&str>;
}

impl<S: BuildHasher> FieldSource for HashMap<String, String, S> {
    fn field(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl FieldSource for BTreeMap<String, String> {
    fn field(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

/// Text of a loosely typed field value: `null` is empty, strings pass through
/// and anything else uses its JSON rendering (`3` → `"3"`).
pub fn field_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Convert a JSON-shaped form object into text fields for [`validate_form`]
pub fn text_fields<I>(values: I) -> HashMap<String, String>
where
    I: IntoIterator<Item = (String, Value)>,
{
    values
        .into_iter()
        .map(|(field, value)| {
            let text = field_text(&value);
            (field, text)
        })
        .collect()
}

/// Validate every declared field against every one of its rules.
///
/// A rule without a display-name override names the field by its key.
pub fn validate_form<D: FieldSource + ?Sized>(data: &D, rules: &FormRules) -> FormValidation {
    let mut errors = BTreeMap::new();

    for (field, field_rules) in rules {
        let value = data.field(field).unwrap_or_default();
        for rule in field_rules {
            let result = rule.check_or(value, field);
            if !result.is_valid {
                tracing::trace!(field = %field, rule = %rule.rule, "form rule failed");
                errors.insert(field.clone(), result.message);
            }
        }
    }

    FormValidation {
        is_valid: errors.is_empty(),
        errors,
    }
}
