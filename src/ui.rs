//! Terminal output helpers
//!
//! All status lines go to stderr so the wrapped tools own stdout.

use colored::Colorize;

/// Print a command about to be executed
pub fn print_run(command: &str) {
    eprintln!("{} {}", "[RUN]".cyan().bold(), command);
}

/// Print a command that would be executed in dry-run mode
pub fn print_dry_run(command: &str) {
    eprintln!("{} {}", "[DRY-RUN]".magenta().bold(), command);
}

pub fn print_info(message: &str) {
    eprintln!("{} {}", "[INFO]".green().bold(), message);
}

pub fn print_warn(message: &str) {
    eprintln!("{} {}", "[WARN]".yellow().bold(), message);
}

pub fn print_error(message: &str) {
    eprintln!("{} {}", "[ERROR]".red().bold(), message);
}

pub fn print_debug(message: &str) {
    eprintln!("{} {}", "[DEBUG]".dimmed(), message);
}
