#![allow(dead_code)]

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use git2::{Oid, Repository, Signature};
use tempfile::TempDir;

/// A throwaway git repository built with git2
pub struct TestRepo {
    pub dir: TempDir,
    pub repo: Repository,
}

impl TestRepo {
    pub fn init() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let repo = Repository::init(dir.path()).expect("Failed to init repository");
        TestRepo { dir, repo }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes a file and commits it on HEAD, returning the new commit id
    pub fn commit(&self, message: &str) -> Oid {
        let file_name = "status.txt";
        fs::write(self.path().join(file_name), message).expect("Failed to write file");

        let mut index = self.repo.index().expect("Failed to open index");
        index
            .add_path(Path::new(file_name))
            .expect("Failed to stage file");
        index.write().expect("Failed to write index");
        let tree_id = index.write_tree().expect("Failed to write tree");
        let tree = self.repo.find_tree(tree_id).expect("Failed to find tree");

        let signature =
            Signature::now("Status Tester", "tester@example.com").expect("Failed to sign");
        let parent = self
            .repo
            .head()
            .ok()
            .and_then(|head| head.peel_to_commit().ok());
        let parents: Vec<&git2::Commit> = parent.iter().collect();

        self.repo
            .commit(Some("HEAD"), &signature, &signature, message, &tree, &parents)
            .expect("Failed to commit")
    }

    /// Creates a lightweight tag on `oid`
    pub fn tag(&self, name: &str, oid: Oid) {
        let object = self.repo.find_object(oid, None).expect("Failed to find commit");
        self.repo
            .tag_lightweight(name, &object, false)
            .expect("Failed to create tag");
    }
}

/// Whether a `git` executable is on PATH
pub fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}

/// Runs the built binary inside `dir`, keeping git from discovering parent repositories
pub fn run_status(dir: &Path) -> Output {
    let ceiling = dir.parent().unwrap_or(dir);
    Command::new(env!("CARGO_BIN_EXE_workspace-status"))
        .current_dir(dir)
        .env("GIT_CEILING_DIRECTORIES", ceiling)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute workspace-status")
}
