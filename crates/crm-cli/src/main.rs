mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "crm")]
#[command(version, about = "CRM validation rules and calendar helpers", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check one value against a rule (e.g. `gstin`, `max_length:500`, `range:1:100`)
    Check {
        /// Rule name with optional `:`-separated parameters
        rule: String,

        /// Value to check
        value: String,

        /// Field name used in the message
        #[arg(short, long)]
        field: Option<String>,
    },

    /// Validate a JSON object of field values against a TOML rules file
    Form {
        /// JSON file with field name → value
        data: PathBuf,

        /// TOML file with field name → [{ rule, field_name }]
        rules: PathBuf,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// List pattern names and keystroke handlers
    Patterns,

    /// Print the six-week grid for a month
    Calendar {
        /// Month as YYYY-MM (default: current month)
        #[arg(short, long)]
        month: Option<String>,
    },
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let passed = match cli.command {
        Commands::Check { rule, value, field } => {
            commands::check::execute(&rule, &value, field.as_deref())?
        }
        Commands::Form { data, rules, json } => commands::form::execute(&data, &rules, json)?,
        Commands::Patterns => {
            commands::patterns::execute();
            true
        }
        Commands::Calendar { month } => {
            commands::calendar::execute(month.as_deref())?;
            true
        }
    };

    Ok(if passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
