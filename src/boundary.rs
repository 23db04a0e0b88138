use std::fmt;
use std::path::PathBuf;

/// Non-fatal conditions met during a release.
/// These are reported to the user but do not stop the run.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// The commit range since the previous tag is empty
    NoNewCommits { since: Option<String> },
    /// The changelog could not be written; commit and tag still follow
    ChangelogWriteFailed { path: PathBuf, reason: String },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::NoNewCommits { since: Some(tag) } => {
                write!(f, "No new commits since tag '{}'", tag)
            }
            BoundaryWarning::NoNewCommits { since: None } => {
                write!(f, "No commits found on the branch")
            }
            BoundaryWarning::ChangelogWriteFailed { path, reason } => {
                write!(f, "填寫文件失敗：{}: {}", path.display(), reason)
            }
        }
    }
}
