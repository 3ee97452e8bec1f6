//! Pure formatting functions for UI output.
//!
//! Messages go to stdout, errors to stderr, styled with `console` so colours
//! are dropped automatically when the output is not a terminal.

use console::style;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Format and print a warning with a yellow marker on stderr.
pub fn display_warning(message: &str) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), message);
}

/// Display the version and dist-tag about to be published.
///
/// # Arguments
/// * `version` - The computed version
/// * `tag` - The npm dist-tag, if this run publishes
pub fn display_plan(version: &str, tag: Option<&str>) {
    println!("\n{}", style("Publish plan:").bold());
    println!("  Version: {}", style(version).green());
    if let Some(tag) = tag {
        println!("  Tag:     {}", style(tag).cyan());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_error() {
        // Visual verification test - output is printed to stderr
        display_error("test error");
    }

    #[test]
    fn test_display_success() {
        // Visual verification test - output is printed to stdout
        display_success("test success");
    }

    #[test]
    fn test_display_plan_without_tag() {
        display_plan("1000.0.0-abc", None);
    }
}
