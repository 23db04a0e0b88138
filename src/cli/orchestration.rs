//! Main workflow orchestration logic
//!
//! Runs one release against any [Repository]: resolve the version, collect
//! and classify commits, render and prepend the changelog entry, then commit
//! and tag. Argument parsing and console output stay in `main.rs`.

use std::path::PathBuf;

use crate::boundary::BoundaryWarning;
use crate::changelog::{prepend_to_file, ChangelogRenderer};
use crate::config::Config;
use crate::conventional::CommitClassifier;
use crate::error::{ChangelogError, Result};
use crate::git::Repository;
use crate::release;
use crate::version::{self, Increment, ReleaseVersion};

/// Arguments for the release workflow
///
/// Decoupled from clap so the workflow can run against a fixture repository.
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseWorkflowArgs {
    /// Branch whose history is released
    pub branch: String,

    /// Version component to bump
    pub increment: Increment,

    /// Root of the work tree; the changelog path is resolved against it
    pub repo_root: PathBuf,

    /// Render only; do not write, commit or tag
    pub dry_run: bool,
}

impl ReleaseWorkflowArgs {
    /// Validate raw positional arguments in the order they are reported
    pub fn from_raw(
        branch: Option<String>,
        increment: Option<String>,
        repo_root: PathBuf,
        dry_run: bool,
    ) -> Result<Self> {
        let branch = branch
            .filter(|b| !b.is_empty())
            .ok_or(ChangelogError::MissingBranch)?;
        let increment = increment
            .filter(|i| !i.is_empty())
            .ok_or(ChangelogError::MissingIncrement)?
            .parse::<Increment>()?;

        Ok(ReleaseWorkflowArgs {
            branch,
            increment,
            repo_root,
            dry_run,
        })
    }
}

/// Result of a release workflow run
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    /// The new version, also the tag name
    pub version: ReleaseVersion,

    /// Latest tag of the branch before this release
    pub previous_tag: Option<String>,

    /// Rendered Markdown entry
    pub entry: String,

    /// Absolute path of the changelog file
    pub changelog_path: PathBuf,

    /// Whether the entry reached the changelog file
    pub changelog_written: bool,

    /// Whether the release commit and tag were created
    pub tagged: bool,

    /// Non-fatal conditions to report
    pub warnings: Vec<BoundaryWarning>,
}

/// Main release workflow
///
/// A missing remote fails before the changelog is touched. A changelog write
/// failure is recorded as a warning and the commit and tag are still created.
pub fn run_release_workflow<R: Repository>(
    repo: &R,
    args: &ReleaseWorkflowArgs,
    config: &Config,
) -> Result<WorkflowResult> {
    config.validate()?;
    let mut warnings = Vec::new();

    let new_version = version::resolve_next_version(repo, &args.branch, args.increment)?;
    let previous_tag = repo.latest_tag(Some(&version::tag_pattern(&args.branch)))?;

    let commits = repo.log_range(previous_tag.as_deref(), &args.branch)?;
    log::debug!(
        "{} commits between {:?} and {}",
        commits.len(),
        previous_tag,
        args.branch
    );
    if commits.is_empty() {
        warnings.push(BoundaryWarning::NoNewCommits {
            since: previous_tag.clone(),
        });
    }

    let classifier = CommitClassifier::from_config(&config.conventional_commits)?;
    let classified = classifier.classify(&commits);
    log::debug!("{} of {} commits classified", classified.len(), commits.len());

    let repo_url = repo.remote_url(&config.remote)?;
    let compare_from = repo.latest_tag(None)?;
    let entry = ChangelogRenderer::new(&repo_url).render(
        &new_version,
        compare_from.as_deref(),
        &classified,
    );

    let changelog_path = args.repo_root.join(&config.changelog.path);

    let mut result = WorkflowResult {
        version: new_version,
        previous_tag,
        entry,
        changelog_path,
        changelog_written: false,
        tagged: false,
        warnings,
    };

    if args.dry_run {
        return Ok(result);
    }

    match prepend_to_file(&result.changelog_path, &result.entry) {
        Ok(()) => result.changelog_written = true,
        Err(e) => {
            log::error!(
                "failed to write {}: {}",
                result.changelog_path.display(),
                e
            );
            result.warnings.push(BoundaryWarning::ChangelogWriteFailed {
                path: result.changelog_path.clone(),
                reason: e.to_string(),
            });
        }
    }

    release::commit_and_tag(repo, &config.changelog.path, &result.version)?;
    result.tagged = true;

    Ok(result)
}
