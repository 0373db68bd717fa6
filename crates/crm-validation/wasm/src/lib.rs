//! CRM Validation WASM
//!
//! WebAssembly bindings for the CRM validation engine, so the browser runs
//! exactly the rules the rest of the workspace runs.

use std::collections::HashMap;

use crm_validation_core::{
    self as core, FormRules, FormValidation, InputDecision, InputHandler, Pattern, Rule,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use wasm_bindgen::prelude::*;

/// Set panic hook for better error messages in the browser
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Outcome of a keystroke handed to `handleInput`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct InputVerdict {
    pub accepted: bool,
    pub value: Option<String>,
    pub error: Option<String>,
}

impl From<InputDecision> for InputVerdict {
    fn from(decision: InputDecision) -> Self {
        match decision {
            InputDecision::Accept { value, error } => Self {
                accepted: true,
                value: Some(value),
                error,
            },
            InputDecision::Reject => Self {
                accepted: false,
                value: None,
                error: None,
            },
        }
    }
}

fn check_rule(
    rule: &str,
    value: &str,
    field_name: Option<&str>,
) -> Result<core::ValidationResult, String> {
    let rule: Rule = rule.parse().map_err(|e| format!("{}", e))?;
    Ok(match field_name {
        Some(name) => rule.check_as(value, name),
        None => rule.check(value),
    })
}

// Form objects may hold numbers, null or undefined alongside strings
fn check_form(data: HashMap<String, Value>, rules: &FormRules) -> FormValidation {
    core::validate_form(&core::text_fields(data), rules)
}

fn decide_input(handler: &str, raw: &str) -> Result<InputVerdict, String> {
    let handler: InputHandler = handler.parse().map_err(|e| format!("{}", e))?;
    Ok(handler.handle(raw).into())
}

fn reject(message: String) -> JsValue {
    web_sys::console::warn_1(&JsValue::from_str(&message));
    JsValue::from_str(&message)
}

/// Validate one value against a named rule
///
/// # Example (JavaScript)
/// ```javascript
/// const { isValid, message } = validateRule('max_length:500', text, 'Description');
/// ```
#[wasm_bindgen(js_name = validateRule)]
pub fn validate_rule(
    rule: &str,
    value: &str,
    field_name: Option<String>,
) -> Result<JsValue, JsValue> {
    let result = check_rule(rule, value, field_name.as_deref()).map_err(reject)?;
    Ok(serde_wasm_bindgen::to_value(&result)?)
}

/// Validate a whole form
///
/// # Arguments
/// * `data` - object of field name → value; numbers are checked as their
///   text and `null`/`undefined` as empty
/// * `rules` - object of field name → `[{ rule, fieldName? }]`
///
/// # Example (JavaScript)
/// ```javascript
/// const { isValid, errors } = validateForm(
///     { title: '', gstin: '22AAAAA0000A1Z5' },
///     { title: [{ rule: 'required', fieldName: 'Title' }], gstin: [{ rule: 'gstin' }] }
/// );
/// ```
#[wasm_bindgen(js_name = validateForm)]
pub fn validate_form(data: JsValue, rules: JsValue) -> Result<JsValue, JsValue> {
    let data: HashMap<String, Value> = serde_wasm_bindgen::from_value(data)
        .map_err(|e| reject(format!("Failed to parse form data: {}", e)))?;
    let rules: FormRules = serde_wasm_bindgen::from_value(rules)
        .map_err(|e| reject(format!("Failed to parse rules: {}", e)))?;

    let result = check_form(data, &rules);
    Ok(serde_wasm_bindgen::to_value(&result)?)
}

/// Quick pattern check; unknown pattern names never match
#[wasm_bindgen(js_name = matchesPattern)]
pub fn matches_pattern(name: &str, value: &str) -> bool {
    name.parse::<Pattern>()
        .map(|pattern| pattern.is_match(value))
        .unwrap_or(false)
}

/// Run a keystroke handler over the field's full new text
#[wasm_bindgen(js_name = handleInput)]
pub fn handle_input(handler: &str, raw: &str) -> Result<JsValue, JsValue> {
    let verdict = decide_input(handler, raw).map_err(reject)?;
    Ok(serde_wasm_bindgen::to_value(&verdict)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_pattern_matching() {
        assert!(matches_pattern("gstin", "22AAAAA0000A1Z5"));
        assert!(!matches_pattern("gstin", "22AAAAA0000A1Y5"));
        assert!(matches_pattern("ifsc_code", "HDFC0001234"));
        assert!(!matches_pattern("swift_code", "HDFC0001234"));
    }

    #[wasm_bindgen_test]
    fn test_rule_check() {
        let result = check_rule("max_length:5", "too long", Some("Description")).unwrap();
        assert!(!result.is_valid);
        assert_eq!(result.message, "Description should not exceed 5 characters");

        assert!(check_rule("required", "x", None).unwrap().is_valid);
        assert!(check_rule("max_length", "x", None).is_err());
    }

    #[wasm_bindgen_test]
    fn test_form_with_number_and_null_values() {
        let data = HashMap::from([
            ("title".to_string(), Value::Null),
            ("qty".to_string(), Value::from(3)),
            ("price".to_string(), Value::from(-2.5)),
        ]);
        let mut rules = FormRules::new();
        rules.insert("title".into(), vec![Rule::Required.into()]);
        rules.insert("qty".into(), vec![Rule::PositiveNumber.into()]);
        rules.insert("price".into(), vec![Rule::NonNegativeNumber.into()]);

        let result = check_form(data, &rules);
        assert!(!result.is_valid);
        assert_eq!(result.get_error("title"), Some("title is required"));
        assert_eq!(result.get_error("qty"), None);
        assert_eq!(result.get_error("price"), Some("price should be a non-negative number"));
    }

    #[wasm_bindgen_test]
    fn test_input_decision() {
        assert_eq!(
            decide_input("numbers_only", "12a").unwrap(),
            InputVerdict {
                accepted: false,
                value: None,
                error: None,
            }
        );
        assert_eq!(
            decide_input("ifsc_code", "hdfc").unwrap(),
            InputVerdict {
                accepted: true,
                value: Some("HDFC".to_string()),
                error: Some("Please enter a valid 11-character IFSC code".to_string()),
            }
        );
        assert!(decide_input("swift", "x").is_err());
    }
}
