use std::path::PathBuf;

use crate::boundary::BoundaryWarning;
use crate::config::Config;
use crate::error::Result;
use crate::git::{Git2Repository, Repository};
use crate::resolver::{collect_tags, TagResolver};

/// Arguments for `previous`
#[derive(Debug, Clone, PartialEq)]
pub struct PreviousRequest {
    pub repository: PathBuf,
    /// Ignore prerelease and build-metadata tags; `None` defers to
    /// `[previous] released_only`
    pub released_only: Option<bool>,
}

/// Result of `previous`
#[derive(Debug, Clone, PartialEq)]
pub struct PreviousOutcome {
    pub tag: String,
    pub warnings: Vec<BoundaryWarning>,
}

impl Default for PreviousRequest {
    fn default() -> Self {
        PreviousRequest {
            repository: PathBuf::from("."),
            released_only: None,
        }
    }
}

/// Name of the tag preceding HEAD in the repository at `request.repository`
pub fn run_previous(request: &PreviousRequest, config: &Config) -> Result<PreviousOutcome> {
    let repo = Git2Repository::open(&request.repository)?;
    previous_in(&repo, request, config)
}

/// [run_previous] against any [Repository]
pub fn previous_in<R: Repository>(
    repo: &R,
    request: &PreviousRequest,
    config: &Config,
) -> Result<PreviousOutcome> {
    let mut options = config.resolve_options();
    options.released_only = request
        .released_only
        .unwrap_or(config.previous.released_only);
    options.append_hash = false;

    let tags = collect_tags(repo)?;
    let tag = TagResolver::new(options).previous_from(repo, &tags)?;
    Ok(PreviousOutcome {
        tag,
        warnings: tags.skipped().to_vec(),
    })
}
