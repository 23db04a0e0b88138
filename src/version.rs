use std::fmt;
use std::str::FromStr;

use crate::error::{ChangelogError, Result};
use crate::git::Repository;

/// Version used when no prior tag exists or its suffix cannot be parsed.
pub const BASELINE: semver::Version = semver::Version::new(1, 0, 0);

/// Which component of the version to bump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Increment {
    Major,
    Minor,
    Patch,
}

impl FromStr for Increment {
    type Err = ChangelogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "major" => Ok(Increment::Major),
            "minor" => Ok(Increment::Minor),
            "patch" => Ok(Increment::Patch),
            _ => Err(ChangelogError::InvalidIncrement(s.to_string())),
        }
    }
}

/// A branch-scoped release version, rendered as `<branch>-v<major>.<minor>.<patch>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseVersion {
    pub branch: String,
    pub number: semver::Version,
}

impl ReleaseVersion {
    pub fn new(branch: impl Into<String>, number: semver::Version) -> Self {
        ReleaseVersion {
            branch: branch.into(),
            number,
        }
    }
}

impl fmt::Display for ReleaseVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-v{}.{}.{}",
            self.branch, self.number.major, self.number.minor, self.number.patch
        )
    }
}

/// Glob matching every release tag of `branch`.
pub fn tag_pattern(branch: &str) -> String {
    format!("{}-v*", branch)
}

/// Parses the numeric suffix of a release tag.
///
/// Returns `None` unless the part after `-v` has exactly three dot-separated
/// non-negative integers.
pub fn parse_tag_suffix(branch: &str, tag: &str) -> Option<semver::Version> {
    let prefix = format!("{}-v", branch);
    let suffix = tag
        .strip_prefix(prefix.as_str())
        .or_else(|| tag.rsplit_once("-v").map(|(_, rest)| rest))?;

    let parts: Vec<&str> = suffix.split('.').collect();
    if parts.len() != 3 {
        return None;
    }

    let major = parts[0].parse::<u64>().ok()?;
    let minor = parts[1].parse::<u64>().ok()?;
    let patch = parts[2].parse::<u64>().ok()?;

    Some(semver::Version::new(major, minor, patch))
}

/// Computes the next version from the latest matching tag.
///
/// Only the requested component moves. Lower components keep their previous
/// values: `2.3.1` bumped by major is `3.3.1`, not `3.0.0`.
pub fn next_version(
    branch: &str,
    latest_tag: Option<&str>,
    increment: Increment,
) -> ReleaseVersion {
    let mut number = latest_tag
        .and_then(|tag| parse_tag_suffix(branch, tag))
        .unwrap_or(BASELINE);

    match increment {
        Increment::Major => number.major += 1,
        Increment::Minor => number.minor += 1,
        Increment::Patch => number.patch += 1,
    }

    ReleaseVersion::new(branch, number)
}

/// Looks up the latest `<branch>-v*` tag and computes the next version from it.
pub fn resolve_next_version<R: Repository>(
    repo: &R,
    branch: &str,
    increment: Increment,
) -> Result<ReleaseVersion> {
    let latest = repo.latest_tag(Some(&tag_pattern(branch)))?;
    log::debug!("latest tag for branch '{}': {:?}", branch, latest);
    Ok(next_version(branch, latest.as_deref(), increment))
}
