use std::fmt;

use thiserror::Error;

/// Why a previous tag could not be determined
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoPreviousReason {
    /// The working set holds a single tag
    SingleTag { released_only: bool },
    /// HEAD carries the oldest tag of the working set
    AtOldestTag,
    /// No commit reachable from HEAD carries a tag of the working set
    NotInHistory,
}

impl fmt::Display for NoPreviousReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoPreviousReason::SingleTag {
                released_only: true,
            } => write!(f, "no previous tag available - only one released tag exists"),
            NoPreviousReason::SingleTag {
                released_only: false,
            } => write!(f, "no previous tag available - only one tag exists"),
            NoPreviousReason::AtOldestTag => {
                write!(f, "no previous tag available - already at oldest tag")
            }
            NoPreviousReason::NotInHistory => write!(f, "no semver tags found in commit history"),
        }
    }
}

/// Unified error type for semvertool operations
#[derive(Error, Debug)]
pub enum SemverToolError {
    #[error("Invalid semantic version '{input}': {source}")]
    Parse {
        input: String,
        #[source]
        source: semver::Error,
    },

    #[error("No trailing digits found in prerelease '{prerelease}'")]
    NoTrailingDigits { prerelease: String },

    #[error("No semver tags found")]
    NoTags,

    #[error("No released versions found")]
    NoReleasedVersions,

    #[error("{0}")]
    NoPreviousTag(NoPreviousReason),

    #[error("Version component overflow while bumping '{version}'")]
    Overflow { version: String },

    #[error("Git repository error: {0}")]
    Repository(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in semvertool
pub type Result<T> = std::result::Result<T, SemverToolError>;

impl SemverToolError {
    /// Create a parse error for the given input
    pub fn parse(input: impl Into<String>, source: semver::Error) -> Self {
        SemverToolError::Parse {
            input: input.into(),
            source,
        }
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        SemverToolError::Config(msg.into())
    }

    /// True for conditions where the operation ran but found nothing to report
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            SemverToolError::NoTags
                | SemverToolError::NoReleasedVersions
                | SemverToolError::NoPreviousTag(_)
        )
    }
}
