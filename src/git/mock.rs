use crate::error::{ChangelogError, Result};
use crate::git::{strip_git_suffix, CommitRecord, Repository};
use std::cell::RefCell;
use std::path::{Path, PathBuf};

/// Mutation recorded by [MockRepository]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedAction {
    Stage(PathBuf),
    Commit(String),
    Tag { name: String, message: String },
}

/// Mock repository for testing without actual git operations
///
/// Commits form a single linear history in the order they are added, on one
/// branch named `main` unless renamed with [MockRepository::set_branch]. Tags
/// point at commits by full hash.
pub struct MockRepository {
    branch: String,
    commits: Vec<CommitRecord>,
    tags: Vec<(String, String)>,
    remote_url: Option<String>,
    actions: RefCell<Vec<RecordedAction>>,
}

impl MockRepository {
    /// Create a new empty mock repository without remote
    pub fn new() -> Self {
        MockRepository {
            branch: "main".to_string(),
            commits: Vec::new(),
            tags: Vec::new(),
            remote_url: None,
            actions: RefCell::new(Vec::new()),
        }
    }

    /// Append a commit on top of the history; the short hash is the first 7 characters
    pub fn add_commit(&mut self, full_hash: impl Into<String>, subject: impl Into<String>) {
        let full_hash = full_hash.into();
        let short_hash = full_hash.chars().take(7).collect();
        self.commits.push(CommitRecord {
            short_hash,
            full_hash,
            subject: subject.into(),
        });
    }

    /// Rename the only branch of the history
    pub fn set_branch(&mut self, name: impl Into<String>) {
        self.branch = name.into();
    }

    /// Add a tag pointing to a commit
    pub fn add_tag(&mut self, name: impl Into<String>, full_hash: impl Into<String>) {
        self.tags.push((name.into(), full_hash.into()));
    }

    /// Configure the URL returned for any remote
    pub fn set_remote_url(&mut self, url: impl Into<String>) {
        self.remote_url = Some(url.into());
    }

    /// Mutations performed so far, in call order
    pub fn actions(&self) -> Vec<RecordedAction> {
        self.actions.borrow().clone()
    }

    fn tag_target(&self, name: &str) -> Option<&str> {
        self.tags
            .iter()
            .rev()
            .find(|(tag, _)| tag == name)
            .map(|(_, hash)| hash.as_str())
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

/// Glob match supporting `*` only
fn glob_matches(pattern: &str, candidate: &str) -> bool {
    let escaped = regex::escape(pattern).replace(r"\*", ".*");
    regex::Regex::new(&format!("^{}$", escaped))
        .map(|re| re.is_match(candidate))
        .unwrap_or(false)
}

impl Repository for MockRepository {
    fn latest_tag(&self, pattern: Option<&str>) -> Result<Option<String>> {
        for commit in self.commits.iter().rev() {
            let found = self.tags.iter().rev().find(|(name, hash)| {
                *hash == commit.full_hash && pattern.map_or(true, |p| glob_matches(p, name))
            });
            if let Some((name, _)) = found {
                return Ok(Some(name.clone()));
            }
        }
        Ok(None)
    }

    fn remote_url(&self, remote: &str) -> Result<String> {
        self.remote_url
            .as_deref()
            .map(strip_git_suffix)
            .ok_or_else(|| ChangelogError::remote(format!("remote '{}' not found", remote)))
    }

    fn log_range(&self, from: Option<&str>, to: &str) -> Result<Vec<CommitRecord>> {
        if to != self.branch && to != "HEAD" {
            let message = format!("revspec '{}' not found", to);
            return Err(git2::Error::from_str(&message).into());
        }

        let stop = from.and_then(|tag| self.tag_target(tag));

        Ok(self
            .commits
            .iter()
            .rev()
            .take_while(|commit| Some(commit.full_hash.as_str()) != stop)
            .cloned()
            .collect())
    }

    fn stage(&self, path: &Path) -> Result<()> {
        self.actions
            .borrow_mut()
            .push(RecordedAction::Stage(path.to_path_buf()));
        Ok(())
    }

    fn commit(&self, message: &str) -> Result<()> {
        self.actions
            .borrow_mut()
            .push(RecordedAction::Commit(message.to_string()));
        Ok(())
    }

    fn create_annotated_tag(&self, name: &str, message: &str) -> Result<()> {
        self.actions.borrow_mut().push(RecordedAction::Tag {
            name: name.to_string(),
            message: message.to_string(),
        });
        Ok(())
    }
}
