use anyhow::{Context, Result};
use colored::Colorize;
use crm_validation_core::{Rule, ValidationResult};

/// Returns whether the value passed
pub fn execute(rule: &str, value: &str, field: Option<&str>) -> Result<bool> {
    let result = run(rule, value, field)?;

    if result.is_valid {
        println!("{} {:?} passes {}", "✓".green(), value, rule.cyan());
    } else {
        println!("{} {}", "✗".red(), result.message);
    }

    Ok(result.is_valid)
}

fn run(rule: &str, value: &str, field: Option<&str>) -> Result<ValidationResult> {
    let parsed: Rule = rule
        .parse()
        .with_context(|| format!("Invalid rule '{}'", rule))?;
    tracing::debug!(rule = %parsed, "checking value");

    Ok(match field {
        Some(name) => parsed.check_as(value, name),
        None => parsed.check(value),
    })
}
