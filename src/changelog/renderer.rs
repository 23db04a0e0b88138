use crate::conventional::{ClassifiedCommit, ClassifiedLog, TypeGroup};
use crate::version::ReleaseVersion;

/// Renders classified commits as a Markdown changelog entry
///
/// Links are built from the repository's web URL, e.g.
/// `https://github.com/acme/widget`.
pub struct ChangelogRenderer<'a> {
    repo_url: &'a str,
}

impl<'a> ChangelogRenderer<'a> {
    pub fn new(repo_url: &'a str) -> Self {
        ChangelogRenderer { repo_url }
    }

    /// Link comparing the previous tag with the new one, or the release page
    /// when there is no previous tag
    pub fn compare_url(&self, previous_tag: Option<&str>, version: &ReleaseVersion) -> String {
        match previous_tag {
            Some(previous) => format!("{}/compare/{}...{}", self.repo_url, previous, version),
            None => format!("{}/releases/tag/{}", self.repo_url, version),
        }
    }

    pub fn commit_url(&self, full_hash: &str) -> String {
        format!("{}/commit/{}", self.repo_url, full_hash)
    }

    /// Render a full entry
    ///
    /// Unscoped commits come first as `### <type>` sections. Each scope then
    /// gets a `### <scope>` heading with its types listed as `- <type>`.
    pub fn render(
        &self,
        version: &ReleaseVersion,
        previous_tag: Option<&str>,
        log: &ClassifiedLog,
    ) -> String {
        let mut entry = format!(
            "## [{}]({})\n\n",
            version,
            self.compare_url(previous_tag, version)
        );

        if let Some(unscoped) = log.unscoped() {
            for group in &unscoped.types {
                entry.push_str(&format!("### {}\n\n", group.r#type));
                entry.push_str(&self.render_commits(group));
            }
        }

        for scoped in log.scoped() {
            entry.push_str(&format!("### {}\n", scoped.scope.as_deref().unwrap_or_default()));
            for group in &scoped.types {
                entry.push_str(&format!("- {}\n\n", group.r#type));
                entry.push_str(&self.render_commits(group));
            }
        }

        entry
    }

    fn render_commits(&self, group: &TypeGroup) -> String {
        let lines: Vec<String> = group
            .commits
            .iter()
            .map(|commit| self.render_commit(commit))
            .collect();
        format!("{}\n\n", lines.join("\n"))
    }

    fn render_commit(&self, commit: &ClassifiedCommit) -> String {
        format!(
            "  - {}([{}]({}))",
            commit.description,
            commit.record.short_hash,
            self.commit_url(&commit.record.full_hash)
        )
    }
}
