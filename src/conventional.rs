use regex::Regex;

use crate::config::ConventionalCommitsConfig;
use crate::error::Result;
use crate::git::CommitRecord;

/// A commit whose subject follows the conventional-commit shape
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedCommit {
    pub record: CommitRecord,
    pub r#type: String,
    /// `None` when the subject carries no `(scope)`
    pub scope: Option<String>,
    pub description: String,
}

/// Commits of one type, in log order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeGroup {
    pub r#type: String,
    pub commits: Vec<ClassifiedCommit>,
}

/// Types found under one scope, in first-seen order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopeGroup {
    pub scope: Option<String>,
    pub types: Vec<TypeGroup>,
}

/// Classified commits grouped by scope, then by type
///
/// Both levels keep the order in which a key was first encountered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifiedLog {
    pub scopes: Vec<ScopeGroup>,
}

impl ClassifiedLog {
    fn insert(&mut self, commit: ClassifiedCommit) {
        let scope_index = match self.scopes.iter().position(|g| g.scope == commit.scope) {
            Some(index) => index,
            None => {
                self.scopes.push(ScopeGroup {
                    scope: commit.scope.clone(),
                    types: Vec::new(),
                });
                self.scopes.len() - 1
            }
        };
        let types = &mut self.scopes[scope_index].types;

        match types.iter().position(|g| g.r#type == commit.r#type) {
            Some(index) => types[index].commits.push(commit),
            None => types.push(TypeGroup {
                r#type: commit.r#type.clone(),
                commits: vec![commit],
            }),
        }
    }

    /// The group of commits without scope, if any
    pub fn unscoped(&self) -> Option<&ScopeGroup> {
        self.scopes.iter().find(|g| g.scope.is_none())
    }

    /// Groups with a real scope, in first-seen order
    pub fn scoped(&self) -> impl Iterator<Item = &ScopeGroup> {
        self.scopes.iter().filter(|g| g.scope.is_some())
    }

    /// Number of classified commits across all groups
    pub fn len(&self) -> usize {
        self.scopes
            .iter()
            .flat_map(|s| &s.types)
            .map(|t| t.commits.len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Matches commit subjects against the recognized conventional-commit types
pub struct CommitClassifier {
    pattern: Regex,
}

impl CommitClassifier {
    /// Build a classifier recognizing the given type keywords
    pub fn new<S: AsRef<str>>(types: &[S]) -> Result<Self> {
        let alternatives: Vec<String> = types.iter().map(|t| regex::escape(t.as_ref())).collect();
        let pattern = Regex::new(&format!(
            r"^\s*({})(?:\((.+)\))?:\s*(.*)",
            alternatives.join("|")
        ))?;

        Ok(CommitClassifier { pattern })
    }

    pub fn from_config(config: &ConventionalCommitsConfig) -> Result<Self> {
        Self::new(&config.types)
    }

    /// Classify a single commit; `None` when the subject does not match
    pub fn classify_one(&self, record: &CommitRecord) -> Option<ClassifiedCommit> {
        let captures = self.pattern.captures(&record.subject)?;

        Some(ClassifiedCommit {
            record: record.clone(),
            r#type: captures.get(1)?.as_str().to_string(),
            scope: captures.get(2).map(|m| m.as_str().to_string()),
            description: captures
                .get(3)
                .map(|m| m.as_str().to_string())
                .unwrap_or_default(),
        })
    }

    /// Classify commits in order; unmatched subjects are left out
    pub fn classify(&self, records: &[CommitRecord]) -> ClassifiedLog {
        let mut log = ClassifiedLog::default();
        for commit in records.iter().filter_map(|r| self.classify_one(r)) {
            log.insert(commit);
        }
        log
    }
}
