use crate::domain::SemVersion;
use serde::{Deserialize, Serialize};

/// Direction for version sorting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

/// Sort items by the semver precedence of the version `key` extracts.
///
/// Versions of equal precedence (`v1.0.0` and `1.0.0`, or differing only in
/// build metadata) are ordered by their original spelling so the output is
/// deterministic.
pub fn sort_by_precedence<T, F>(items: &mut [T], key: F, order: SortOrder)
where
    F: Fn(&T) -> &SemVersion,
{
    items.sort_by(|a, b| {
        let (a, b) = (key(a), key(b));
        let ordering = a
            .cmp_precedence(b)
            .then_with(|| a.original().cmp(b.original()));
        match order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    });
}

pub fn sort_versions(versions: &mut [SemVersion], order: SortOrder) {
    sort_by_precedence(versions, |v| v, order);
}

/// Drop versions carrying a prerelease; build metadata alone is kept
pub fn filter_prereleases(versions: Vec<SemVersion>) -> Vec<SemVersion> {
    versions
        .into_iter()
        .filter(|v| v.prerelease().is_empty())
        .collect()
}
