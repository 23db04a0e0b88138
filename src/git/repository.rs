use crate::error::{ChangelogError, Result};
use crate::git::{strip_git_suffix, CommitRecord};
use git2::{
    DescribeFormatOptions, DescribeOptions, ErrorClass, ErrorCode, Repository as Git2Repo, Sort,
};
use std::path::{Path, PathBuf};

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Repository { repo })
    }

    /// Root of the work tree; bare repositories have none
    pub fn workdir(&self) -> Result<PathBuf> {
        self.repo
            .workdir()
            .map(Path::to_path_buf)
            .ok_or_else(|| ChangelogError::config("repository has no work tree"))
    }

    fn head_commit(&self) -> Result<git2::Commit<'_>> {
        Ok(self.repo.head()?.peel_to_commit()?)
    }
}

impl super::Repository for Git2Repository {
    fn latest_tag(&self, pattern: Option<&str>) -> Result<Option<String>> {
        if self.repo.tag_names(pattern)?.is_empty() {
            return Ok(None);
        }

        let mut options = DescribeOptions::new();
        options.describe_tags();
        if let Some(pattern) = pattern {
            options.pattern(pattern);
        }

        // Matching tags that are not reachable from HEAD fail describe with the Describe class
        let describe = match self.repo.describe(&options) {
            Ok(describe) => describe,
            Err(e) if e.code() == ErrorCode::NotFound || e.class() == ErrorClass::Describe => {
                return Ok(None)
            }
            Err(e) => return Err(e.into()),
        };

        let mut format = DescribeFormatOptions::new();
        format.abbreviated_size(0);

        Ok(Some(describe.format(Some(&format))?))
    }

    fn remote_url(&self, remote: &str) -> Result<String> {
        let found = self
            .repo
            .find_remote(remote)
            .map_err(|e| ChangelogError::remote(format!("remote '{}': {}", remote, e.message())))?;

        let url = found
            .url()
            .ok_or_else(|| ChangelogError::remote(format!("remote '{}' has no URL", remote)))?;

        Ok(strip_git_suffix(url))
    }

    fn log_range(&self, from: Option<&str>, to: &str) -> Result<Vec<CommitRecord>> {
        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME)?;

        let to_commit = self.repo.revparse_single(to)?.peel_to_commit()?;
        revwalk.push(to_commit.id())?;

        if let Some(from) = from {
            let from_commit = self.repo.revparse_single(from)?.peel_to_commit()?;
            revwalk.hide(from_commit.id())?;
        }

        let mut commits = Vec::new();

        for oid_result in revwalk {
            let oid = oid_result?;
            let commit = self.repo.find_commit(oid)?;

            let short_id = commit.as_object().short_id()?;
            let short_hash = short_id.as_str().unwrap_or_default().to_string();
            let subject = commit.summary().unwrap_or_default().to_string();

            commits.push(CommitRecord {
                short_hash,
                full_hash: oid.to_string(),
                subject,
            });
        }

        Ok(commits)
    }

    fn stage(&self, path: &Path) -> Result<()> {
        let mut index = self.repo.index()?;
        index.read(false)?;
        index.add_path(path)?;
        index.write()?;
        Ok(())
    }

    fn commit(&self, message: &str) -> Result<()> {
        let signature = self.repo.signature()?;

        let mut index = self.repo.index()?;
        let tree_id = index.write_tree()?;
        let tree = self.repo.find_tree(tree_id)?;

        let parent = match self.head_commit() {
            Ok(commit) => Some(commit),
            Err(ChangelogError::Git(e)) if e.code() == ErrorCode::UnbornBranch => None,
            Err(e) => return Err(e),
        };
        let parents: Vec<&git2::Commit<'_>> = parent.iter().collect();

        self.repo
            .commit(Some("HEAD"), &signature, &signature, message, &tree, &parents)?;

        Ok(())
    }

    fn create_annotated_tag(&self, name: &str, message: &str) -> Result<()> {
        let signature = self.repo.signature()?;
        let head = self.head_commit()?;

        self.repo
            .tag(name, head.as_object(), &signature, message, false)?;

        Ok(())
    }
}
