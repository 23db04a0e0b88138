use thiserror::Error;

/// Unified error type for git-changelog operations
#[derive(Error, Debug)]
pub enum ChangelogError {
    #[error("請指定分支名稱。")]
    MissingBranch,

    #[error("請指定要遞增的版本號部分（major、minor、patch）。")]
    MissingIncrement,

    #[error("無效的命令，請指定 major、minor 或 patch。（收到：{0}）")]
    InvalidIncrement(String),

    #[error("取得 Git URL 失敗：{0}")]
    Remote(String),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid commit type pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in git-changelog
pub type Result<T> = std::result::Result<T, ChangelogError>;

impl ChangelogError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ChangelogError::Config(msg.into())
    }

    /// Create a remote error with context
    pub fn remote(msg: impl Into<String>) -> Self {
        ChangelogError::Remote(msg.into())
    }
}
