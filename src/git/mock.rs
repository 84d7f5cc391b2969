use crate::error::{Result, SemverToolError};
use crate::git::{History, Repository};
use git2::Oid;
use std::collections::HashMap;

struct MockCommit {
    message: String,
    parent: Option<Oid>,
}

/// Mock repository for testing without actual git operations
///
/// History is linear: every [MockRepository::commit] becomes a child of the
/// current HEAD and moves HEAD forward.
pub struct MockRepository {
    commits: HashMap<Oid, MockCommit>,
    tags: Vec<(String, Oid)>,
    head: Option<Oid>,
    next_id: u32,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        MockRepository {
            commits: HashMap::new(),
            tags: Vec::new(),
            head: None,
            next_id: 1,
        }
    }

    /// Record a commit on top of HEAD and return its id
    pub fn commit(&mut self, message: impl Into<String>) -> Oid {
        let mut bytes = [0u8; 20];
        bytes[16..].copy_from_slice(&self.next_id.to_be_bytes());
        self.next_id += 1;

        // 20 bytes is always a valid raw oid
        let oid = Oid::from_bytes(&bytes).unwrap_or_else(|_| Oid::zero());
        self.commits.insert(
            oid,
            MockCommit {
                message: message.into(),
                parent: self.head,
            },
        );
        self.head = Some(oid);
        oid
    }

    /// Add a tag pointing to a commit
    pub fn tag(&mut self, name: impl Into<String>, oid: Oid) {
        self.tags.push((name.into(), oid));
    }

    /// Move HEAD to an existing commit
    pub fn checkout(&mut self, oid: Oid) {
        self.head = Some(oid);
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn not_found(oid: Oid) -> SemverToolError {
    git2::Error::from_str(&format!("object not found - no match for id ({})", oid)).into()
}

impl Repository for MockRepository {
    fn list_tags(&self) -> Result<Vec<(String, Oid)>> {
        Ok(self.tags.clone())
    }

    fn resolve_head(&self) -> Result<Oid> {
        self.head
            .ok_or_else(|| git2::Error::from_str("reference 'HEAD' not found").into())
    }

    fn walk_history(&self, from: Oid) -> Result<History<'_>> {
        if !self.commits.contains_key(&from) {
            return Err(not_found(from));
        }

        let walk = std::iter::successors(Some(from), move |oid| {
            self.commits.get(oid).and_then(|c| c.parent)
        });
        Ok(Box::new(walk.map(Ok)))
    }

    fn commit_message(&self, oid: Oid) -> Result<String> {
        self.commits
            .get(&oid)
            .map(|c| c.message.clone())
            .ok_or_else(|| not_found(oid))
    }
}
