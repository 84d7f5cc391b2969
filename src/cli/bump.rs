use std::path::PathBuf;

use crate::boundary::BoundaryWarning;
use crate::config::Config;
use crate::domain::{bump, BumpFlags, BumpKind, BumpOptions, SemVersion};
use crate::error::Result;
use crate::git::{Git2Repository, Repository};
use crate::resolver::{collect_tags, TagResolver};

/// Arguments for bumping a literal version
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BumpRequest {
    pub version: String,
    pub flags: BumpFlags,
    /// Commit message to take a `[bump <kind>]` directive from
    pub message: Option<String>,
    /// Overrides `[bump] prerelease_prefix`
    pub prerelease_prefix: Option<String>,
    /// Build metadata to attach to the result
    pub metadata: Option<String>,
}

/// Arguments for bumping the highest tag of a repository
#[derive(Debug, Clone, PartialEq)]
pub struct GitBumpRequest {
    pub repository: PathBuf,
    pub flags: BumpFlags,
    pub message: Option<String>,
    /// Read the directive from the HEAD commit message instead of `message`
    pub from_commit: bool,
    pub prerelease_prefix: Option<String>,
    /// Attach the abbreviated HEAD hash as build metadata; `None` defers to
    /// `[git] hash`
    pub hash: Option<bool>,
}

impl Default for GitBumpRequest {
    fn default() -> Self {
        GitBumpRequest {
            repository: PathBuf::from("."),
            flags: BumpFlags::default(),
            message: None,
            from_commit: false,
            prerelease_prefix: None,
            hash: None,
        }
    }
}

/// Result of a bump
#[derive(Debug, Clone, PartialEq)]
pub struct BumpOutcome {
    pub version: SemVersion,
    pub warnings: Vec<BoundaryWarning>,
}

fn select_kind(
    message: Option<&str>,
    flags: BumpFlags,
    warnings: &mut Vec<BoundaryWarning>,
) -> BumpKind {
    let kind = BumpKind::select(message, flags);
    if let (BumpKind::None, Some(message)) = (kind, message) {
        warnings.push(BoundaryWarning::MissingBumpDirective {
            message: message.to_string(),
        });
    }
    tracing::debug!("Selected bump kind: {}", kind);
    kind
}

fn bump_options(kind: BumpKind, prefix: Option<&str>, config: &Config) -> BumpOptions {
    let options = config.bump_options(kind);
    match prefix {
        Some(prefix) => options.with_prerelease_prefix(prefix),
        None => options,
    }
}

/// Bump a version given on the command line
pub fn run_bump(request: &BumpRequest, config: &Config) -> Result<BumpOutcome> {
    let mut warnings = Vec::new();
    let kind = select_kind(request.message.as_deref(), request.flags, &mut warnings);
    let options = bump_options(kind, request.prerelease_prefix.as_deref(), config);

    let current = SemVersion::parse(&request.version)?;
    let mut version = bump(&current, &options)?;
    if let Some(metadata) = request.metadata.as_deref().filter(|m| !m.is_empty()) {
        version = version.with_build_metadata(metadata)?;
    }

    Ok(BumpOutcome { version, warnings })
}

/// Bump the highest semver tag of the repository at `request.repository`
pub fn run_git_bump(request: &GitBumpRequest, config: &Config) -> Result<BumpOutcome> {
    let repo = Git2Repository::open(&request.repository)?;
    bump_repository(&repo, request, config)
}

/// [run_git_bump] against any [Repository]
pub fn bump_repository<R: Repository>(
    repo: &R,
    request: &GitBumpRequest,
    config: &Config,
) -> Result<BumpOutcome> {
    let head_message = if request.from_commit {
        Some(repo.commit_message(repo.resolve_head()?)?)
    } else {
        None
    };
    let message = head_message.as_deref().or(request.message.as_deref());

    let mut warnings = Vec::new();
    let kind = select_kind(message, request.flags, &mut warnings);
    let options = bump_options(kind, request.prerelease_prefix.as_deref(), config);

    let mut resolve = config.resolve_options();
    resolve.released_only = false;
    resolve.append_hash = request.hash.unwrap_or(config.git.hash);

    let tags = collect_tags(repo)?;
    warnings.extend_from_slice(tags.skipped());

    let version = TagResolver::new(resolve).bump_from(repo, &tags, &options)?;
    Ok(BumpOutcome { version, warnings })
}
