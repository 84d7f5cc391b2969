//! Resolution of semver tags relative to HEAD

pub mod tag_resolver;

pub use tag_resolver::{collect_tags, ResolveOptions, TagResolver};
