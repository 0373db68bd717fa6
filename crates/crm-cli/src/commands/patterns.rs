use colored::Colorize;
use crm_validation_core::{InputHandler, Pattern};

pub fn execute() {
    println!("{}", "Patterns".green().bold());
    for pattern in Pattern::ALL {
        println!("  {:<28} {}", pattern.name().cyan(), pattern.source());
    }

    println!();
    println!("{}", "Keystroke handlers".green().bold());
    for handler in InputHandler::ALL {
        println!("  {}", handler.name().cyan());
    }
}
