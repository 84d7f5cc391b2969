//! Read-only git access
//!
//! The [Repository] trait is the surface the tag resolver needs. Two
//! implementations exist:
//!
//! - [repository::Git2Repository]: a real repository opened with `git2`
//! - [mock::MockRepository]: an in-memory history for tests
//!
//! ```rust
//! # use semvertool::git::Repository;
//! # fn example<R: Repository>(repo: &R) -> semvertool::Result<()> {
//! let head = repo.resolve_head()?;
//! for oid in repo.walk_history(head)? {
//!     println!("{}", oid?);
//! }
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;
use git2::Oid;

/// Length of an abbreviated commit hash
pub const SHORT_HASH_LEN: usize = 7;

/// Lazy, newest-first sequence of commits
pub type History<'a> = Box<dyn Iterator<Item = Result<Oid>> + 'a>;

/// Read operations on a git repository
///
/// Implementations only read; nothing here creates refs or talks to remotes.
/// Errors from the storage layer surface as
/// [crate::error::SemverToolError::Repository].
pub trait Repository {
    /// Every tag as `(short name, commit)`
    ///
    /// Annotated tags are peeled to the commit they point at. The order of
    /// the returned list is unspecified.
    fn list_tags(&self) -> Result<Vec<(String, Oid)>>;

    /// The commit HEAD currently points at
    fn resolve_head(&self) -> Result<Oid>;

    /// Walk history starting at `from` (inclusive), most recent first
    ///
    /// The walk is lazy: callers that stop early never visit older commits.
    fn walk_history(&self, from: Oid) -> Result<History<'_>>;

    /// Full message of a commit
    fn commit_message(&self, oid: Oid) -> Result<String>;
}

/// First seven hex digits of a commit hash
pub fn short_hash(oid: Oid) -> String {
    let mut hash = oid.to_string();
    hash.truncate(SHORT_HASH_LEN);
    hash
}
