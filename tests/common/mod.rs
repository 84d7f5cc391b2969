// Shared fixtures for integration tests
#![allow(dead_code)]

use git2::{Oid, Repository, Signature, Time};
use tempfile::TempDir;

/// A throwaway repository on disk with deterministic commit times
pub struct TestRepo {
    pub dir: TempDir,
    pub repo: Repository,
    clock: i64,
}

impl TestRepo {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Could not create temp dir");
        let repo = Repository::init(dir.path()).expect("Could not init git repo");
        TestRepo {
            dir,
            repo,
            clock: 1_700_000_000,
        }
    }

    fn signature(&mut self) -> Signature<'static> {
        self.clock += 60;
        Signature::new("Test User", "test@example.com", &Time::new(self.clock, 0))
            .expect("Could not create signature")
    }

    /// Commit an empty tree on top of HEAD
    pub fn commit(&mut self, message: &str) -> Oid {
        let sig = self.signature();
        let tree_id = self
            .repo
            .treebuilder(None)
            .and_then(|builder| builder.write())
            .expect("Could not write tree");
        let tree = self.repo.find_tree(tree_id).expect("Could not find tree");

        let parent = self
            .repo
            .head()
            .ok()
            .and_then(|head| head.peel_to_commit().ok());
        let parents: Vec<&git2::Commit> = parent.iter().collect();

        self.repo
            .commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .expect("Could not create commit")
    }

    pub fn tag(&self, name: &str, oid: Oid) {
        let object = self.repo.find_object(oid, None).expect("Could not find object");
        self.repo
            .tag_lightweight(name, &object, false)
            .expect("Could not create tag");
    }

    pub fn annotated_tag(&mut self, name: &str, oid: Oid) {
        let sig = self.signature();
        let object = self.repo.find_object(oid, None).expect("Could not find object");
        self.repo
            .tag(name, &object, &sig, &format!("Release {}", name), false)
            .expect("Could not create annotated tag");
    }

    /// Detach HEAD at `oid`
    pub fn checkout(&self, oid: Oid) {
        self.repo.set_head_detached(oid).expect("Could not detach HEAD");
    }

    /// v1.0.0, v1.1.0, v1.2.0-alpha.1, v1.2.0 on consecutive commits
    pub fn with_release_history() -> (Self, Vec<Oid>) {
        let mut test_repo = TestRepo::new();
        let mut commits = Vec::new();
        for tag in ["v1.0.0", "v1.1.0", "v1.2.0-alpha.1", "v1.2.0"] {
            let oid = test_repo.commit(&format!("release {}", tag));
            test_repo.tag(tag, oid);
            commits.push(oid);
        }
        (test_repo, commits)
    }
}
