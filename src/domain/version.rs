use crate::error::{Result, SemverToolError};
use lazy_regex::regex_captures;
use semver::{BuildMetadata, Prerelease, Version};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Semantic version that remembers how it was spelled
///
/// Wraps a [`semver::Version`] and keeps the exact input text so that output
/// can reproduce it, including a leading `v`. Values derived from a parsed
/// version (bumps, metadata changes) keep the same prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SemVersion {
    version: Version,
    prefix: &'static str,
    original: String,
}

impl SemVersion {
    /// Parse a version, accepting an optional leading `v`
    ///
    /// A missing minor or patch number reads as zero, so `v1` and `1.2-rc.1`
    /// parse as `1.0.0` and `1.2.0-rc.1`. The original spelling is kept.
    pub fn parse(text: &str) -> Result<Self> {
        let (prefix, rest) = match text.strip_prefix('v') {
            Some(rest) => ("v", rest),
            None => ("", text),
        };

        let version = match Version::parse(rest) {
            Ok(version) => version,
            Err(e) => complete_partial(rest).ok_or_else(|| SemverToolError::parse(text, e))?,
        };

        Ok(SemVersion {
            version,
            prefix,
            original: text.to_string(),
        })
    }

    /// Build a new value from `version`, reusing this value's prefix
    pub(crate) fn derive(&self, version: Version) -> Self {
        let original = format!("{}{}", self.prefix, version);
        SemVersion {
            version,
            prefix: self.prefix,
            original,
        }
    }

    pub fn major(&self) -> u64 {
        self.version.major
    }

    pub fn minor(&self) -> u64 {
        self.version.minor
    }

    pub fn patch(&self) -> u64 {
        self.version.patch
    }

    /// Prerelease identifiers, empty when absent
    pub fn prerelease(&self) -> &str {
        self.version.pre.as_str()
    }

    /// Build metadata, empty when absent
    pub fn build_metadata(&self) -> &str {
        self.version.build.as_str()
    }

    /// The exact spelling this value was parsed from or rendered as
    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn as_semver(&self) -> &Version {
        &self.version
    }

    /// A released version has neither prerelease nor build metadata
    pub fn is_released(&self) -> bool {
        self.version.pre.is_empty() && self.version.build.is_empty()
    }

    /// Replace the build metadata; an empty string clears it
    pub fn with_build_metadata(&self, metadata: &str) -> Result<Self> {
        let build = if metadata.is_empty() {
            BuildMetadata::EMPTY
        } else {
            BuildMetadata::new(metadata).map_err(|e| SemverToolError::parse(metadata, e))?
        };

        let mut version = self.version.clone();
        version.build = build;
        Ok(self.derive(version))
    }

    /// Replace the prerelease identifiers; an empty string clears them
    pub(crate) fn with_prerelease(&self, prerelease: &str) -> Result<Self> {
        let pre = if prerelease.is_empty() {
            Prerelease::EMPTY
        } else {
            Prerelease::new(prerelease).map_err(|e| SemverToolError::parse(prerelease, e))?
        };

        let mut version = self.version.clone();
        version.pre = pre;
        Ok(self.derive(version))
    }

    /// Compare by semver precedence, ignoring build metadata
    ///
    /// A release outranks all of its prereleases; prerelease identifiers are
    /// compared segment by segment as the semver rules prescribe.
    pub fn cmp_precedence(&self, other: &Self) -> Ordering {
        let (a, b) = (&self.version, &other.version);
        a.major
            .cmp(&b.major)
            .then(a.minor.cmp(&b.minor))
            .then(a.patch.cmp(&b.patch))
            .then_with(|| a.pre.cmp(&b.pre))
    }
}

/// `1` -> `1.0.0`, `1.2+build` -> `1.2.0+build`
fn complete_partial(text: &str) -> Option<Version> {
    let (_, major, minor, rest) = regex_captures!(r"^(\d+)(?:\.(\d+))?((?:[-+].*)?)$", text)?;
    let minor = if minor.is_empty() { "0" } else { minor };
    Version::parse(&format!("{}.{}.0{}", major, minor, rest)).ok()
}

impl FromStr for SemVersion {
    type Err = SemverToolError;

    fn from_str(s: &str) -> Result<Self> {
        SemVersion::parse(s)
    }
}

impl fmt::Display for SemVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original)
    }
}
