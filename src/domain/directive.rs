//! Bump directives embedded in commit messages, e.g. `[bump minor]`

use crate::domain::BumpKind;
use lazy_regex::regex_captures;

/// Extract the bump kind requested by a `[bump <kind>]` directive.
///
/// Matching is case-insensitive and tolerates whitespace around the kind.
/// When a message carries several directives the first one wins. Returns
/// `None` when there is no well-formed directive.
pub fn bump_kind_from_message(message: &str) -> Option<BumpKind> {
    let (_, kind) = regex_captures!(
        r"(?i)\[bump\s*(major|minor|patch|prerelease)\s*\]",
        message
    )?;
    kind.parse().ok()
}
