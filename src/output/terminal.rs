//! Terminal output utilities.
//!
//! Provides formatting helpers and colored banners for terminal output.

use colored::Colorize;

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A quoted, right-aligned string
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    let quoted = format!("\"{value_str}\"");
    let quoted_len = quoted.len();

    if quoted_len >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

/// Print a bold cyan title line, set off by a leading blank line.
pub fn print_title(title: &str) {
    println!();
    println!("{}", title.cyan().bold());
}

/// Print a yellow warning line to stdout.
pub fn print_warning(message: &str) {
    println!("{}", message.yellow());
}

/// Print red `message` lines inside a red `=` frame.
pub fn print_error_block(lines: &[String]) {
    let frame = "=".repeat(70);
    println!("{}", frame.red());
    for line in lines {
        println!("{}", line.red());
    }
    println!("{}", frame.red());
}
