//! User interface module - terminal diagnostics.
//!
//! Formatting lives in `formatter`; nothing here reads from the terminal.

pub mod formatter;

pub use formatter::{
    display_boundary_warning, display_boundary_warnings, display_error, display_warning,
    format_error_chain,
};
