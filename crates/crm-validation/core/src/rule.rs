//! Named rules
//!
//! [`Rule`] names every validator in the crate together with its parameters,
//! so rule lists can live in data: form presets, rule files read by the CLI
//! and rule objects sent from the browser. Rules are written as
//! `name[:param[:param]]`, e.g. `gstin`, `max_length:500`, `range:1:100`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RuleParseError;
use crate::patterns::Pattern;
use crate::result::ValidationResult;
use crate::{email, identifiers, numeric, password, payment, string};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Rule {
    /// Value must match a pattern from the pattern table
    Format(Pattern),
    Password,
    Required,
    MinLength(usize),
    MaxLength(usize),
    Range { min: f64, max: f64 },
    PositiveNumber,
    NonNegativeNumber,
}

impl Rule {
    /// Field name used in messages when the caller does not supply one
    pub fn default_field_name(&self) -> &'static str {
        match self {
            Rule::Format(pattern) => match pattern {
                Pattern::PhoneNumber => "Phone Number",
                Pattern::Gstin => "GSTIN",
                Pattern::IfscCode => "IFSC Code",
                Pattern::BankAccount => "Bank Account",
                Pattern::UpiId => "UPI ID",
                Pattern::WebsiteUrl => "Website URL",
                Pattern::HsnSac => "HSN/SAC",
                Pattern::PostalCode => "Postal Code",
                Pattern::PanNumber => "PAN Number",
                Pattern::AadharNumber => "Aadhar Number",
                Pattern::CreditCard => "Credit Card",
                Pattern::Cvv => "CVV",
                Pattern::ExpiryDate => "Expiry Date",
                Pattern::Email => "Email",
                Pattern::AlphabetOnly
                | Pattern::NumbersOnly
                | Pattern::DecimalNumbers
                | Pattern::SpecialCharsOnly
                | Pattern::AlphanumericWithSpaces
                | Pattern::AlphanumericWithSpecial => "Field",
            },
            Rule::Password => "Password",
            Rule::Required
            | Rule::MinLength(_)
            | Rule::MaxLength(_)
            | Rule::Range { .. }
            | Rule::PositiveNumber
            | Rule::NonNegativeNumber => "Field",
        }
    }

    /// Run the rule with its default field name
    pub fn check(&self, value: &str) -> ValidationResult {
        self.check_as(value, self.default_field_name())
    }

    /// Run the rule, naming the field `field_name` in the message
    pub fn check_as(&self, value: &str, field_name: &str) -> ValidationResult {
        match self {
            Rule::Format(pattern) => format_validator(*pattern)(value, field_name),
            Rule::Password => password::validate_password(value, field_name),
            Rule::Required => string::validate_required(value, field_name),
            Rule::MinLength(min) => string::validate_min_length(value, *min, field_name),
            Rule::MaxLength(max) => string::validate_max_length(value, *max, field_name),
            Rule::Range { min, max } => numeric::validate_range(value, *min, *max, field_name),
            Rule::PositiveNumber => numeric::validate_positive_number(value, field_name),
            Rule::NonNegativeNumber => numeric::validate_non_negative_number(value, field_name),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Rule::Format(pattern) => pattern.name(),
            Rule::Password => "password",
            Rule::Required => "required",
            Rule::MinLength(_) => "min_length",
            Rule::MaxLength(_) => "max_length",
            Rule::Range { .. } => "range",
            Rule::PositiveNumber => "positive_number",
            Rule::NonNegativeNumber => "non_negative_number",
        }
    }
}

/// Format validator backing each pattern
fn format_validator(pattern: Pattern) -> fn(&str, &str) -> ValidationResult {
    match pattern {
        Pattern::AlphabetOnly => string::validate_alphabet_only,
        Pattern::NumbersOnly => string::validate_numbers_only,
        Pattern::DecimalNumbers => string::validate_decimal_numbers,
        Pattern::SpecialCharsOnly => string::validate_special_chars_only,
        Pattern::AlphanumericWithSpaces => string::validate_alphanumeric_with_spaces,
        Pattern::AlphanumericWithSpecial => string::validate_alphanumeric_with_special,
        Pattern::PhoneNumber => identifiers::validate_phone_number,
        Pattern::Gstin => identifiers::validate_gstin,
        Pattern::PanNumber => identifiers::validate_pan_number,
        Pattern::AadharNumber => identifiers::validate_aadhar_number,
        Pattern::HsnSac => identifiers::validate_hsn_sac,
        Pattern::PostalCode => identifiers::validate_postal_code,
        Pattern::BankAccount => payment::validate_bank_account,
        Pattern::IfscCode => payment::validate_ifsc_code,
        Pattern::CreditCard => payment::validate_credit_card,
        Pattern::Cvv => payment::validate_cvv,
        Pattern::ExpiryDate => payment::validate_expiry_date,
        Pattern::Email => email::validate_email,
        Pattern::WebsiteUrl => email::validate_website_url,
        Pattern::UpiId => email::validate_upi_id,
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::MinLength(n) | Rule::MaxLength(n) => write!(f, "{}:{}", self.name(), n),
            Rule::Range { min, max } => write!(f, "range:{}:{}", min, max),
            _ => f.write_str(self.name()),
        }
    }
}

impl FromStr for Rule {
    type Err = RuleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.trim().split(':');
        let name = parts.next().unwrap_or_default();
        let params: Vec<&str> = parts.collect();

        let rule = match name {
            "password" => Rule::Password,
            "required" => Rule::Required,
            "positive_number" => Rule::PositiveNumber,
            "non_negative_number" => Rule::NonNegativeNumber,
            "min_length" | "max_length" => {
                let [param] = params.as_slice() else {
                    return Err(RuleParseError::MissingParameter {
                        rule: name.to_string(),
                        expected: "a length, e.g. `max_length:500`",
                    });
                };
                let length = parse_param::<usize>(name, param)?;
                return Ok(if name == "min_length" {
                    Rule::MinLength(length)
                } else {
                    Rule::MaxLength(length)
                });
            }
            "range" => {
                let [min, max] = params.as_slice() else {
                    return Err(RuleParseError::MissingParameter {
                        rule: name.to_string(),
                        expected: "bounds, e.g. `range:1:100`",
                    });
                };
                return Ok(Rule::Range {
                    min: parse_param(name, min)?,
                    max: parse_param(name, max)?,
                });
            }
            other => Rule::Format(other.parse()?),
        };

        if params.is_empty() {
            Ok(rule)
        } else {
            Err(RuleParseError::UnexpectedParameter(name.to_string()))
        }
    }
}

fn parse_param<T: FromStr>(rule: &str, value: &str) -> Result<T, RuleParseError> {
    value.trim().parse().map_err(|_| RuleParseError::InvalidParameter {
        rule: rule.to_string(),
        value: value.to_string(),
    })
}

impl TryFrom<String> for Rule {
    type Error = RuleParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rule> for String {
    fn from(rule: Rule) -> Self {
        rule.to_string()
    }
}

/// A rule plus an optional display-name override for its message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldRule {
    pub rule: Rule,
    #[serde(default, alias = "fieldName", skip_serializing_if = "Option::is_none")]
    pub field_name: Option<String>,
}

impl FieldRule {
    pub fn new(rule: Rule) -> Self {
        Self {
            rule,
            field_name: None,
        }
    }

    /// Override the field name used in messages
    pub fn named(mut self, field_name: impl Into<String>) -> Self {
        self.field_name = Some(field_name.into());
        self
    }

    /// Run the rule with the override, or the rule's default name
    pub fn check(&self, value: &str) -> ValidationResult {
        match &self.field_name {
            Some(name) => self.rule.check_as(value, name),
            None => self.rule.check(value),
        }
    }

    /// Run the rule with the override, or `fallback` when none is set
    pub fn check_or(&self, value: &str, fallback: &str) -> ValidationResult {
        self.rule
            .check_as(value, self.field_name.as_deref().unwrap_or(fallback))
    }
}

impl From<Rule> for FieldRule {
    fn from(rule: Rule) -> Self {
        Self::new(rule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_rules() {
        assert_eq!("gstin".parse::<Rule>().unwrap(), Rule::Format(Pattern::Gstin));
        assert_eq!("required".parse::<Rule>().unwrap(), Rule::Required);
        assert_eq!("max_length:500".parse::<Rule>().unwrap(), Rule::MaxLength(500));
        assert_eq!(
            "range:1:99.5".parse::<Rule>().unwrap(),
            Rule::Range { min: 1.0, max: 99.5 }
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "gst".parse::<Rule>(),
            Err(RuleParseError::UnknownRule("gst".to_string()))
        );
        assert!(matches!(
            "max_length".parse::<Rule>(),
            Err(RuleParseError::MissingParameter { .. })
        ));
        assert!(matches!(
            "max_length:lots".parse::<Rule>(),
            Err(RuleParseError::InvalidParameter { .. })
        ));
        assert_eq!(
            "email:strict".parse::<Rule>(),
            Err(RuleParseError::UnexpectedParameter("email".to_string()))
        );
    }

    #[test]
    fn test_display_round_trips() {
        for text in ["upi_id", "min_length:6", "range:0:100", "non_negative_number"] {
            assert_eq!(text.parse::<Rule>().unwrap().to_string(), text);
        }
    }

    #[test]
    fn test_default_field_names() {
        assert_eq!(
            Rule::Format(Pattern::IfscCode).check("HDFC1001234").message,
            "IFSC Code should be a valid 11-character IFSC code"
        );
        assert_eq!(Rule::Required.check("").message, "Field is required");
        assert_eq!(
            Rule::Password.check("abc").message,
            "Password should be at least 6 characters long"
        );
    }

    #[test]
    fn test_field_rule_override() {
        let rule = FieldRule::new(Rule::Required).named("Title");
        assert_eq!(rule.check("").message, "Title is required");
        assert_eq!(rule.check_or("", "title").message, "Title is required");
        assert_eq!(
            FieldRule::new(Rule::Required).check_or("", "title").message,
            "title is required"
        );
    }

    #[test]
    fn test_field_rule_deserializes_from_json() {
        let rules: Vec<FieldRule> = serde_json::from_str(
            r#"[{"rule":"required","fieldName":"Title"},{"rule":"max_length:500"}]"#,
        )
        .unwrap();
        assert_eq!(
            rules,
            vec![
                FieldRule::new(Rule::Required).named("Title"),
                FieldRule::new(Rule::MaxLength(500)),
            ]
        );
    }
}
