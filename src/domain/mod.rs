//! Domain logic - pure version rules independent of git operations

pub mod bump;
pub mod directive;
pub mod sort;
pub mod tag;
pub mod version;

pub use bump::{bump, bump_str, BumpFlags, BumpKind, BumpOptions, DEFAULT_PRERELEASE_PREFIX};
pub use directive::bump_kind_from_message;
pub use sort::{filter_prereleases, sort_versions, SortOrder};
pub use tag::{TagSet, TaggedVersion};
pub use version::SemVersion;
