use std::fmt;

/// Non-fatal conditions met while reading versions or tags.
/// These are reported to the user but never abort an operation.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// Tag exists but cannot be parsed as a semantic version
    UnparsableTag { tag: String, reason: String },
    /// A version given on the command line was skipped
    UnparsableVersion { input: String },
    /// A commit message was consulted but held no `[bump <kind>]` directive
    MissingBumpDirective { message: String },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::UnparsableTag { tag, reason } => {
                write!(f, "Could not parse tag '{}' as semver: {}", tag, reason)
            }
            BoundaryWarning::UnparsableVersion { input } => {
                write!(f, "invalid semver version: {}", input)
            }
            BoundaryWarning::MissingBumpDirective { message } => {
                let first_line = message.lines().next().unwrap_or("");
                write!(
                    f,
                    "No valid bump type found in the commit message '{}'",
                    first_line
                )
            }
        }
    }
}
