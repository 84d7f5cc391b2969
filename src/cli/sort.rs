use crate::boundary::BoundaryWarning;
use crate::config::Config;
use crate::domain::{filter_prereleases, sort_versions, SemVersion, SortOrder};

/// Arguments for `sort`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SortRequest {
    pub versions: Vec<String>,
    pub descending: bool,
    /// Drop versions carrying a prerelease; build-only versions stay
    pub no_prerelease: bool,
    /// Overrides `[sort] separator`
    pub separator: Option<String>,
}

/// Sorted output plus the inputs that were skipped
#[derive(Debug, Clone, PartialEq)]
pub struct SortOutcome {
    pub output: String,
    pub warnings: Vec<BoundaryWarning>,
}

/// Sort the requested versions; invalid entries are skipped with a warning
pub fn run_sort(request: &SortRequest, config: &Config) -> SortOutcome {
    let mut warnings = Vec::new();
    let mut versions = Vec::with_capacity(request.versions.len());

    for input in &request.versions {
        match SemVersion::parse(input.trim()) {
            Ok(version) => versions.push(version),
            Err(e) => {
                tracing::debug!("Skipping '{}': {}", input, e);
                warnings.push(BoundaryWarning::UnparsableVersion {
                    input: input.clone(),
                });
            }
        }
    }

    if request.no_prerelease {
        versions = filter_prereleases(versions);
    }

    let order = if request.descending {
        SortOrder::Descending
    } else {
        config.sort.order()
    };
    sort_versions(&mut versions, order);

    let separator = request
        .separator
        .as_deref()
        .unwrap_or(&config.sort.separator);
    let output = versions
        .iter()
        .map(|v| v.original())
        .collect::<Vec<_>>()
        .join(separator);

    SortOutcome { output, warnings }
}
