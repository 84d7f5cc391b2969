//! Exit-code oriented commands for shell scripts

use std::cmp::Ordering;

use crate::domain::SemVersion;
use crate::error::Result;

/// Compare two versions by semver precedence; build metadata is ignored
pub fn compare_versions(a: &str, b: &str) -> Result<Ordering> {
    let a = SemVersion::parse(a)?;
    let b = SemVersion::parse(b)?;
    Ok(a.cmp_precedence(&b))
}

/// 0 when the first version is lower, 1 when equal, 2 when greater, 3 when
/// either input is invalid
pub fn compare_exit_code(result: &Result<Ordering>) -> i32 {
    match result {
        Ok(Ordering::Less) => 0,
        Ok(Ordering::Equal) => 1,
        Ok(Ordering::Greater) => 2,
        Err(_) => 3,
    }
}

/// Whether `text` is a released version (no prerelease, no build metadata)
pub fn is_released(text: &str) -> Result<bool> {
    Ok(SemVersion::parse(text)?.is_released())
}

/// 0 for a released version, 1 otherwise (invalid input included)
pub fn released_exit_code(result: &Result<bool>) -> i32 {
    match result {
        Ok(true) => 0,
        _ => 1,
    }
}
