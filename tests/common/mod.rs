//! Temporary git repository built with git2 for integration tests

#![allow(dead_code)]

use git2::{Oid, Repository, RepositoryInitOptions};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TempRepo {
    pub repo: Repository,
    path: PathBuf,
    _temp_dir: TempDir,
}

impl TempRepo {
    /// Initialize a repository whose default branch is `main`
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Could not create temp dir");
        let path = temp_dir.path().to_path_buf();

        let mut options = RepositoryInitOptions::new();
        options.initial_head("main");
        let repo = Repository::init_opts(&path, &options).expect("Could not init git repo");

        {
            let mut config = repo.config().expect("Could not get config");
            config
                .set_str("user.name", "Test User")
                .expect("Could not set user.name");
            config
                .set_str("user.email", "test@example.com")
                .expect("Could not set user.email");
        }

        TempRepo {
            repo,
            path,
            _temp_dir: temp_dir,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Commit a change to `notes.txt` with the given message
    pub fn commit(&self, message: &str) -> Oid {
        let notes = self.path.join("notes.txt");
        let mut content = fs::read_to_string(&notes).unwrap_or_default();
        content.push_str(message);
        content.push('\n');
        fs::write(&notes, content).expect("Could not write notes");

        let mut index = self.repo.index().expect("Could not get index");
        index.read(true).expect("Could not reload index");
        index
            .add_path(Path::new("notes.txt"))
            .expect("Could not add file to index");
        index.write().expect("Could not write index");

        let tree_id = index.write_tree().expect("Could not write tree");
        let tree = self.repo.find_tree(tree_id).expect("Could not find tree");
        let signature = self.repo.signature().expect("Could not get sig");

        let parent = self
            .repo
            .head()
            .ok()
            .map(|head| head.peel_to_commit().expect("HEAD is not a commit"));
        let parents: Vec<&git2::Commit<'_>> = parent.iter().collect();

        self.repo
            .commit(Some("HEAD"), &signature, &signature, message, &tree, &parents)
            .expect("Could not create commit")
    }

    /// Lightweight tag on HEAD
    pub fn tag(&self, name: &str) {
        let head = self.repo.head().unwrap().peel_to_commit().unwrap();
        self.repo
            .tag_lightweight(name, head.as_object(), false)
            .expect("Could not create tag");
    }

    /// Lightweight tag on a new commit that HEAD does not reach
    pub fn tag_unreachable(&self, name: &str) {
        let head = self.repo.head().unwrap().peel_to_commit().unwrap();
        let signature = self.repo.signature().expect("Could not get sig");
        let oid = self
            .repo
            .commit(
                None,
                &signature,
                &signature,
                "feat: abandoned",
                &head.tree().unwrap(),
                &[&head],
            )
            .expect("Could not create dangling commit");
        let dangling = self.repo.find_object(oid, None).unwrap();
        self.repo
            .tag_lightweight(name, &dangling, false)
            .expect("Could not create tag");
    }

    pub fn set_origin(&self, url: &str) {
        self.repo.remote("origin", url).expect("Could not add remote");
    }

    pub fn head_message(&self) -> String {
        let head = self.repo.head().unwrap().peel_to_commit().unwrap();
        head.message().unwrap_or_default().to_string()
    }

    pub fn is_annotated_tag(&self, name: &str) -> bool {
        self.repo
            .revparse_single(name)
            .map(|object| object.kind() == Some(git2::ObjectType::Tag))
            .unwrap_or(false)
    }

    pub fn read(&self, name: &str) -> Option<String> {
        fs::read_to_string(self.path.join(name)).ok()
    }
}
