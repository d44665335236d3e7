//! Terminal styling for the wizard's own output

use console::{style, Emoji};

pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "[*] ");
pub static ROCKET: Emoji<'_, '_> = Emoji("🚀 ", ">> ");
pub static WRENCH: Emoji<'_, '_> = Emoji("🔧 ", "");

/// Print the welcome banner
pub fn print_banner(version: &str) {
    println!();
    println!(
        "    {}{}",
        WRENCH,
        style("Welcome to the TensorFlow.js converter wizard").cyan().bold()
    );
    println!("    {}", style(format!("v{}", version)).dim());
    println!("    {}", style("━".repeat(50)).dim());
    println!();
}

/// Print the command a dry run would have executed
pub fn print_dry_run(command_line: &str) {
    println!();
    println!("    {}", style("converter command generated:").white().bold());
    println!("    {}", style(command_line).yellow());
    println!();
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("    {} {}", style("✓").green().bold(), style(message).green());
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("    {} {}", INFO, message);
}

/// Print the final completion message
pub fn print_completion() {
    println!();
    println!(
        "    {} {}",
        ROCKET,
        style("Model conversion complete!").green().bold()
    );
    println!();
}
