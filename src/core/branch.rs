use crate::utils::{Result, SweepError};
use std::fmt;

/// A branch on a named remote, e.g. `origin/feature-x`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BranchRef {
    pub remote: String,
    pub name: String,
}

impl BranchRef {
    pub fn new(remote: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            remote: remote.into(),
            name: name.into(),
        }
    }

    /// Splits `remote/name` on the first separator. Both halves must be non-empty.
    pub fn parse(identity: &str) -> Result<Self> {
        let identity = identity.trim();
        match identity.split_once('/') {
            Some((remote, name)) if !remote.is_empty() && !name.is_empty() => {
                Ok(Self::new(remote, name))
            }
            _ => Err(SweepError::malformed_input(identity)),
        }
    }
}

impl fmt::Display for BranchRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.remote, self.name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchStatus {
    Protected,
    Merged,
    Unmerged,
}

impl BranchStatus {
    pub fn indicator_key(&self) -> &'static str {
        match self {
            BranchStatus::Protected => "protected_indicator",
            BranchStatus::Merged => "merged_indicator",
            BranchStatus::Unmerged => "unmerged_indicator",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedBranch {
    pub name: String,
    pub status: BranchStatus,
}

impl ClassifiedBranch {
    pub fn new(name: impl Into<String>, status: BranchStatus) -> Self {
        Self {
            name: name.into(),
            status,
        }
    }
}

/// Branch names that must never be deleted.
///
/// Only the segment after the remote prefix is compared, and only exactly:
/// `origin/main` is protected, `origin/team/main` and `origin/Main` are not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtectionPolicy {
    names: Vec<String>,
}

impl ProtectionPolicy {
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn is_protected(&self, branch: &str) -> bool {
        let short_name = branch
            .split_once('/')
            .map(|(_, name)| name)
            .unwrap_or(branch);

        self.names.iter().any(|protected| protected == short_name)
    }
}

impl Default for ProtectionPolicy {
    fn default() -> Self {
        Self::new(crate::config::defaults::default_protected_branches())
    }
}
