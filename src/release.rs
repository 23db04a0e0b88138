use std::path::Path;

use crate::error::Result;
use crate::git::Repository;
use crate::version::ReleaseVersion;

pub fn release_commit_message(version: &ReleaseVersion) -> String {
    format!("chore: changelog for version {}", version)
}

pub fn release_tag_message(version: &ReleaseVersion) -> String {
    format!("Version {}", version)
}

/// Stages the changelog, commits it and tags the commit.
///
/// Steps run in order and stop at the first failure. Nothing is rolled back:
/// a failed tag leaves the commit in place.
pub fn commit_and_tag<R: Repository>(
    repo: &R,
    changelog_path: &Path,
    version: &ReleaseVersion,
) -> Result<()> {
    repo.stage(changelog_path)?;
    repo.commit(&release_commit_message(version))?;
    repo.create_annotated_tag(&version.to_string(), &release_tag_message(version))?;
    log::debug!("created release commit and tag {}", version);
    Ok(())
}
