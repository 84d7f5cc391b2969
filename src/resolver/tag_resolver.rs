use crate::domain::{bump, BumpOptions, SemVersion, SortOrder, TagSet, TaggedVersion};
use crate::error::{NoPreviousReason, Result, SemverToolError};
use crate::git::{short_hash, Repository};
use git2::Oid;

/// Collect every tag of the repository whose name is a valid semver
pub fn collect_tags<R: Repository>(repo: &R) -> Result<TagSet> {
    let refs = repo.list_tags()?;
    let set = TagSet::from_refs(refs);
    tracing::debug!(
        "Collected {} semver tags ({} skipped)",
        set.len(),
        set.skipped().len()
    );
    Ok(set)
}

/// Options for tag resolution
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Only consider tags without prerelease or build metadata
    pub released_only: bool,
    /// Attach the abbreviated HEAD hash as build metadata to bumped versions
    pub append_hash: bool,
}

/// Answers "which tag is relevant to HEAD" questions against a repository
pub struct TagResolver {
    options: ResolveOptions,
}

impl TagResolver {
    /// Create a new tag resolver
    pub fn new(options: ResolveOptions) -> Self {
        TagResolver { options }
    }

    /// Bump the highest semver tag of the repository
    pub fn bump_latest<R: Repository>(&self, repo: &R, options: &BumpOptions) -> Result<SemVersion> {
        let tags = collect_tags(repo)?;
        self.bump_from(repo, &tags, options)
    }

    /// [TagResolver::bump_latest] over tags the caller already collected
    pub fn bump_from<R: Repository>(
        &self,
        repo: &R,
        tags: &TagSet,
        options: &BumpOptions,
    ) -> Result<SemVersion> {
        let latest = tags.latest().ok_or(SemverToolError::NoTags)?;
        tracing::debug!("Latest tag is {}", latest.name());

        let next = bump(&latest.version, options)?;
        if !self.options.append_hash {
            return Ok(next);
        }

        let head = repo.resolve_head()?;
        next.with_build_metadata(&short_hash(head))
    }

    /// Name of the tag preceding HEAD
    ///
    /// When HEAD itself is tagged, this is the next-older tag by semver
    /// order. Otherwise it is the tag on the most recent tagged ancestor.
    pub fn previous_tag<R: Repository>(&self, repo: &R) -> Result<String> {
        let tags = collect_tags(repo)?;
        self.previous_from(repo, &tags)
    }

    /// [TagResolver::previous_tag] over tags the caller already collected
    pub fn previous_from<R: Repository>(&self, repo: &R, tags: &TagSet) -> Result<String> {
        if tags.is_empty() {
            return Err(SemverToolError::NoTags);
        }

        let released;
        let working = if self.options.released_only {
            released = tags.released();
            if released.is_empty() {
                return Err(SemverToolError::NoReleasedVersions);
            }
            &released
        } else {
            tags
        };

        if working.len() == 1 {
            return Err(SemverToolError::NoPreviousTag(NoPreviousReason::SingleTag {
                released_only: self.options.released_only,
            }));
        }

        let sorted = working.sorted(SortOrder::Descending);
        let head = repo.resolve_head()?;

        // Descending order: the first hit is the newest tag on HEAD
        if let Some(position) = sorted.iter().position(|t| t.commit == head) {
            tracing::debug!("HEAD is tagged {}", sorted[position].name());
            return sorted
                .get(position + 1)
                .map(|t| t.name().to_string())
                .ok_or(SemverToolError::NoPreviousTag(NoPreviousReason::AtOldestTag));
        }

        for oid in repo.walk_history(head)? {
            let oid = oid?;
            if let Some(tag) = newest_on_commit(&sorted, oid) {
                tracing::debug!("Found {} on ancestor {}", tag.name(), short_hash(oid));
                return Ok(tag.name().to_string());
            }
        }

        Err(SemverToolError::NoPreviousTag(NoPreviousReason::NotInHistory))
    }
}

fn newest_on_commit<'a>(sorted: &[&'a TaggedVersion], oid: Oid) -> Option<&'a TaggedVersion> {
    sorted.iter().find(|t| t.commit == oid).copied()
}
