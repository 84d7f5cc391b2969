//! Pure formatting functions for UI output.
//!
//! Every `display_*` function writes to stderr; stdout is reserved for
//! command results so that scripts can capture them.

use crate::boundary::BoundaryWarning;
use crate::error::SemverToolError;
use console::style;
use std::error::Error;

/// Error text followed by each underlying cause on its own line.
pub fn format_error_chain(error: &SemverToolError) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(&format!("\n  caused by: {}", cause));
        source = cause.source();
    }
    message
}

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Format and print a warning message in yellow.
pub fn display_warning(message: &str) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), message);
}

/// Display a boundary warning to the user.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    display_warning(&warning.to_string());
}

/// Display every warning in order.
pub fn display_boundary_warnings(warnings: &[BoundaryWarning]) {
    for warning in warnings {
        display_boundary_warning(warning);
    }
}
