//! Standard output helpers for consistent command formatting

use colored::*;

/// Display a success message
pub fn success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Display a labelled value
pub fn field(label: &str, value: impl std::fmt::Display) {
    println!("{} {}", format!("{}:", label).bold(), value);
}

/// Display a warning on stderr
pub fn warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message);
}
