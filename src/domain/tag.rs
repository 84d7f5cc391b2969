use crate::boundary::BoundaryWarning;
use crate::domain::sort::{sort_by_precedence, SortOrder};
use crate::domain::SemVersion;
use git2::Oid;

/// A git tag whose name parsed as a semantic version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedVersion {
    pub version: SemVersion,
    /// Commit the tag points at (annotated tags already peeled)
    pub commit: Oid,
}

impl TaggedVersion {
    pub fn new(version: SemVersion, commit: Oid) -> Self {
        TaggedVersion { version, commit }
    }

    /// Tag name exactly as it appears in the repository
    pub fn name(&self) -> &str {
        self.version.original()
    }
}

/// Semver tags of a repository
///
/// Built from raw `(name, commit)` pairs; names that are not valid semver are
/// kept aside as warnings instead of failing the collection. Entries are in
/// no particular order until sorted.
#[derive(Debug, Clone, Default)]
pub struct TagSet {
    tags: Vec<TaggedVersion>,
    skipped: Vec<BoundaryWarning>,
}

impl TagSet {
    pub fn from_refs<I, S>(refs: I) -> Self
    where
        I: IntoIterator<Item = (S, Oid)>,
        S: AsRef<str>,
    {
        let mut set = TagSet::default();

        for (name, commit) in refs {
            let name = name.as_ref();
            match SemVersion::parse(name) {
                Ok(version) => set.tags.push(TaggedVersion::new(version, commit)),
                Err(e) => {
                    let warning = BoundaryWarning::UnparsableTag {
                        tag: name.to_string(),
                        reason: e.to_string(),
                    };
                    tracing::debug!("{}", warning);
                    set.skipped.push(warning);
                }
            }
        }

        set
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Tags that were rejected during collection
    pub fn skipped(&self) -> &[BoundaryWarning] {
        &self.skipped
    }

    /// The subset without prerelease or build metadata
    pub fn released(&self) -> TagSet {
        TagSet {
            tags: self
                .tags
                .iter()
                .filter(|t| t.version.is_released())
                .cloned()
                .collect(),
            skipped: Vec::new(),
        }
    }

    /// Tags ordered by semver precedence, ties broken by tag name
    pub fn sorted(&self, order: SortOrder) -> Vec<&TaggedVersion> {
        let mut tags: Vec<&TaggedVersion> = self.tags.iter().collect();
        sort_by_precedence(&mut tags, |t| &t.version, order);
        tags
    }

    /// The highest tag by semver precedence
    pub fn latest(&self) -> Option<&TaggedVersion> {
        self.sorted(SortOrder::Ascending).pop()
    }
}
