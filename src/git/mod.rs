//! Git operations abstraction layer
//!
//! Every version-control operation the release needs goes through the
//! [Repository] trait, so the workflow can run against a real repository or an
//! in-memory fake.
//!
//! - [repository::Git2Repository]: a real implementation using the `git2` crate
//! - [mock::MockRepository]: an in-memory implementation for testing
//!
//! ```rust
//! # use git_changelog::git::Repository;
//! # fn example<R: Repository>(repo: &R) -> git_changelog::Result<()> {
//! let previous = repo.latest_tag(Some("main-v*"))?;
//! let commits = repo.log_range(previous.as_deref(), "main")?;
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;
use std::path::Path;

/// One commit as listed by the log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    /// Abbreviated commit hash
    pub short_hash: String,
    /// Full 40-character commit hash
    pub full_hash: String,
    /// First line of the commit message
    pub subject: String,
}

/// Version-control capabilities used by a release
///
/// The first three methods are read-only queries; the last three mutate the
/// repository and are only called by [crate::release].
pub trait Repository {
    /// Most recent tag reachable from HEAD matching the glob `pattern`
    ///
    /// `None` as pattern accepts any tag.
    ///
    /// # Returns
    /// * `Ok(Some(tag))` - The nearest matching tag
    /// * `Ok(None)` - No matching tag describes HEAD
    /// * `Err` - If the repository cannot be read
    fn latest_tag(&self, pattern: Option<&str>) -> Result<Option<String>>;

    /// URL of `remote` with a trailing `.git` removed
    ///
    /// # Returns
    /// * `Ok(url)` - e.g. `https://github.com/acme/widget`
    /// * `Err(ChangelogError::Remote)` - If the remote or its URL is missing
    fn remote_url(&self, remote: &str) -> Result<String>;

    /// Commits reachable from `to` but not from `from`, in log order
    ///
    /// `from` is exclusive and `to` inclusive. Without `from` the full
    /// history of `to` is returned.
    fn log_range(&self, from: Option<&str>, to: &str) -> Result<Vec<CommitRecord>>;

    /// Stage a file given relative to the work tree
    fn stage(&self, path: &Path) -> Result<()>;

    /// Commit the index on top of HEAD
    fn commit(&self, message: &str) -> Result<()>;

    /// Create an annotated tag on HEAD
    fn create_annotated_tag(&self, name: &str, message: &str) -> Result<()>;
}

/// Removes a single trailing `.git` from a remote URL
pub fn strip_git_suffix(url: &str) -> String {
    url.strip_suffix(".git").unwrap_or(url).to_string()
}
