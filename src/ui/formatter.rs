//! Pure formatting functions for UI output.

use console::style;

use crate::boundary::BoundaryWarning;
use crate::version::ReleaseVersion;

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

/// Display a boundary warning to the user.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// Display the proposed version next to the tag it replaces.
pub fn display_proposed_version(previous_tag: Option<&str>, version: &ReleaseVersion) {
    match previous_tag {
        Some(previous) => {
            println!("\n{}", style("Proposed Tag Change:").bold());
            println!("  From: {}", style(previous).red());
            println!("  To:   {}", style(version).green());
        }
        None => {
            println!("\n{}", style("Initial Tag:").bold());
            println!("  New tag: {}", style(version).green());
        }
    }
}

/// Print the rendered entry as it would be prepended.
pub fn display_changelog_preview(entry: &str) {
    println!("\n{}", style("Changelog entry:").bold());
    println!("{}", entry.trim_end());
}
