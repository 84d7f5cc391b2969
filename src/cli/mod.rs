//! Command workflows
//!
//! Each submodule takes a plain request struct and returns a result value.
//! None of them depends on clap or prints anything; `main.rs` maps parsed
//! arguments into requests and results into output and exit codes.

pub mod bump;
pub mod previous;
pub mod script;
pub mod sort;

use crate::error::SemverToolError;

pub use bump::{run_bump, run_git_bump, BumpOutcome, BumpRequest, GitBumpRequest};
pub use previous::{run_previous, PreviousOutcome, PreviousRequest};
pub use script::{compare_exit_code, compare_versions, is_released, released_exit_code};
pub use sort::{run_sort, SortOutcome, SortRequest};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
/// Operation ran but found nothing to report (no tags, no previous tag)
pub const EXIT_NOT_FOUND: i32 = 3;

/// Exit code for a failed command
pub fn exit_code_for(error: &SemverToolError) -> i32 {
    if error.is_not_found() {
        EXIT_NOT_FOUND
    } else {
        EXIT_FAILURE
    }
}
