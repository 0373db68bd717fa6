use anyhow::{Context, Result};
use colored::Colorize;
use crm_validation_core::{text_fields, validate_form, FormRules, FormValidation};
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Returns whether the form passed
pub fn execute(data_path: &Path, rules_path: &Path, json: bool) -> Result<bool> {
    let data = fs::read_to_string(data_path)
        .with_context(|| format!("Failed to read data file: {:?}", data_path))?;
    let rules = fs::read_to_string(rules_path)
        .with_context(|| format!("Failed to read rules file: {:?}", rules_path))?;

    let result = run(&data, &rules)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else if result.is_valid {
        println!("{}", "Form is valid".green().bold());
    } else {
        println!("{}", "Form has errors:".red().bold());
        for (field, message) in &result.errors {
            println!("  {} {}: {}", "✗".red(), field.cyan(), message);
        }
    }

    Ok(result.is_valid)
}

fn run(data: &str, rules: &str) -> Result<FormValidation> {
    let values: HashMap<String, Value> =
        serde_json::from_str(data).context("Form data must be a JSON object")?;
    let rules: FormRules = toml::from_str(rules).context("Failed to parse rules")?;

    Ok(validate_form(&text_fields(values), &rules))
}
