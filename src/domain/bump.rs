//! Version bumping
//!
//! Pure value transformations: nothing here touches git or the environment.

use crate::domain::directive::bump_kind_from_message;
use crate::domain::SemVersion;
use crate::error::{Result, SemverToolError};
use lazy_regex::regex_captures;
use semver::Version;
use std::fmt;
use std::str::FromStr;

/// Prefix used when a prerelease sequence is started on a release version
pub const DEFAULT_PRERELEASE_PREFIX: &str = "prerelease";

/// Which component of a version to bump
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BumpKind {
    Major,
    Minor,
    #[default]
    Patch,
    Prerelease,
    /// Leave the version untouched
    None,
}

impl BumpKind {
    /// Decide the bump kind for one invocation.
    ///
    /// A non-empty `message` takes priority: its `[bump <kind>]` directive is
    /// used, and a message without one yields [`BumpKind::None`]. Otherwise the
    /// first set flag wins, falling back to [`BumpKind::Patch`].
    pub fn select(message: Option<&str>, flags: BumpFlags) -> BumpKind {
        if let Some(message) = message.filter(|m| !m.is_empty()) {
            return bump_kind_from_message(message).unwrap_or(BumpKind::None);
        }

        if flags.major {
            BumpKind::Major
        } else if flags.minor {
            BumpKind::Minor
        } else if flags.patch {
            BumpKind::Patch
        } else if flags.prerelease {
            BumpKind::Prerelease
        } else {
            BumpKind::Patch
        }
    }
}

impl FromStr for BumpKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "major" => Ok(BumpKind::Major),
            "minor" => Ok(BumpKind::Minor),
            "patch" => Ok(BumpKind::Patch),
            "prerelease" => Ok(BumpKind::Prerelease),
            "none" => Ok(BumpKind::None),
            other => Err(format!("unknown bump kind '{}'", other)),
        }
    }
}

impl fmt::Display for BumpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BumpKind::Major => "major",
            BumpKind::Minor => "minor",
            BumpKind::Patch => "patch",
            BumpKind::Prerelease => "prerelease",
            BumpKind::None => "none",
        };
        f.write_str(name)
    }
}

/// Explicit bump flags given on the command line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BumpFlags {
    pub major: bool,
    pub minor: bool,
    pub patch: bool,
    pub prerelease: bool,
}

/// Options for a single bump
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BumpOptions {
    pub kind: BumpKind,
    /// Used only when a prerelease bump starts from a release version
    pub prerelease_prefix: String,
}

impl BumpOptions {
    pub fn new(kind: BumpKind) -> Self {
        BumpOptions {
            kind,
            ..Default::default()
        }
    }

    pub fn with_prerelease_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prerelease_prefix = prefix.into();
        self
    }
}

impl Default for BumpOptions {
    fn default() -> Self {
        BumpOptions {
            kind: BumpKind::Patch,
            prerelease_prefix: DEFAULT_PRERELEASE_PREFIX.to_string(),
        }
    }
}

/// Bump `version` according to `options`.
///
/// - **Major**: major += 1, minor = patch = 0
/// - **Minor**: minor += 1, patch = 0
/// - **Patch**: patch += 1, or drops the prerelease of a prerelease version
/// - **Prerelease**: increments the trailing number of the prerelease, or
///   starts `<prefix>.1` on the next patch when there is no prerelease
/// - **None**: returns the version unchanged
///
/// Every bump other than `None` clears build metadata; major, minor and patch
/// bumps also clear the prerelease.
pub fn bump(version: &SemVersion, options: &BumpOptions) -> Result<SemVersion> {
    let current = version.as_semver();
    let next = match options.kind {
        BumpKind::None => return Ok(version.clone()),
        BumpKind::Prerelease => return bump_prerelease(version, &options.prerelease_prefix),
        BumpKind::Major => Version::new(increment(version, current.major)?, 0, 0),
        BumpKind::Minor => Version::new(current.major, increment(version, current.minor)?, 0),
        // A prerelease is finalized rather than skipped past
        BumpKind::Patch if !current.pre.is_empty() => {
            Version::new(current.major, current.minor, current.patch)
        }
        BumpKind::Patch => Version::new(
            current.major,
            current.minor,
            increment(version, current.patch)?,
        ),
    };

    Ok(version.derive(next))
}

/// Parse `text` and bump it
pub fn bump_str(text: &str, options: &BumpOptions) -> Result<SemVersion> {
    let version = SemVersion::parse(text)?;
    bump(&version, options)
}

/// Split a prerelease into its stem and trailing number.
///
/// The stem loses one trailing `.`, so `"alpha.1"` gives `("alpha", 1)`,
/// `"alpha0"` gives `("alpha", 0)` and `"alpha.0.9"` gives `("alpha.0", 9)`.
pub fn split_trailing_number(prerelease: &str) -> Result<(&str, u64)> {
    let (_, stem, digits) = regex_captures!(r"^(.*\D)?(\d+)$", prerelease).ok_or_else(|| {
        SemverToolError::NoTrailingDigits {
            prerelease: prerelease.to_string(),
        }
    })?;

    let number = digits
        .parse::<u64>()
        .map_err(|_| SemverToolError::Overflow {
            version: prerelease.to_string(),
        })?;

    Ok((stem.strip_suffix('.').unwrap_or(stem), number))
}

fn bump_prerelease(version: &SemVersion, prefix: &str) -> Result<SemVersion> {
    let current = version.as_semver();

    if current.pre.is_empty() {
        let next = Version::new(
            current.major,
            current.minor,
            increment(version, current.patch)?,
        );
        return version
            .derive(next)
            .with_prerelease(&format!("{}.{}", prefix, 1));
    }

    let pre = current.pre.as_str();
    let next_pre = match split_trailing_number(pre) {
        Ok((stem, number)) => {
            let number = increment(version, number)?;
            if stem.is_empty() {
                number.to_string()
            } else {
                format!("{}.{}", stem, number)
            }
        }
        // A single bare identifier such as "alpha" starts counting at zero
        Err(SemverToolError::NoTrailingDigits { .. }) if !pre.contains('.') => {
            format!("{}.0", pre)
        }
        Err(e) => return Err(e),
    };

    let next = Version::new(current.major, current.minor, current.patch);
    version.derive(next).with_prerelease(&next_pre)
}

fn increment(version: &SemVersion, component: u64) -> Result<u64> {
    component
        .checked_add(1)
        .ok_or_else(|| SemverToolError::Overflow {
            version: version.original().to_string(),
        })
}
