use super::branch::{BranchStatus, ClassifiedBranch, ProtectionPolicy};
use super::decoration::Decorator;
use super::git::{parse_merged_listing, RemoteGit};
use crate::i18n::Messages;
use std::collections::HashSet;

pub struct Classifier<'a> {
    policy: &'a ProtectionPolicy,
    decorator: &'a Decorator,
}

impl<'a> Classifier<'a> {
    pub fn new(policy: &'a ProtectionPolicy, decorator: &'a Decorator) -> Self {
        Self { policy, decorator }
    }

    /// Classifies listed branches in order. The merged query runs once; if it
    /// fails every non-protected branch is reported as unmerged.
    pub fn classify<G: RemoteGit + ?Sized>(
        &self,
        git: &G,
        branches: &[String],
        messages: &Messages,
    ) -> Vec<ClassifiedBranch> {
        let merged = self.merged_branches(git, messages);

        branches
            .iter()
            .map(|line| {
                let name = self.decorator.clean_branch_name(line);
                let status = self.status_of(&name, &merged);
                ClassifiedBranch::new(name, status)
            })
            .collect()
    }

    pub fn status_of(&self, name: &str, merged: &HashSet<String>) -> BranchStatus {
        if self.policy.is_protected(name) {
            BranchStatus::Protected
        } else if merged.contains(name.trim()) {
            BranchStatus::Merged
        } else {
            BranchStatus::Unmerged
        }
    }

    fn merged_branches<G: RemoteGit + ?Sized>(&self, git: &G, messages: &Messages) -> HashSet<String> {
        match git.merged_remote_branch_listing() {
            Ok(output) => parse_merged_listing(&output),
            Err(e) => {
                tracing::warn!(
                    "{}",
                    messages.format("merged_query_failed", &[("error", &e.to_string())])
                );
                HashSet::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;
    use crate::test_utils::test_helpers::MockGit;

    fn classify(git: &MockGit, branches: &[&str]) -> Vec<ClassifiedBranch> {
        let policy = ProtectionPolicy::default();
        let decorator = Decorator::new().unwrap();
        let messages = Messages::load(Language::En).unwrap();
        let branches: Vec<String> = branches.iter().map(|b| b.to_string()).collect();
        Classifier::new(&policy, &decorator).classify(git, &branches, &messages)
    }

    #[test]
    fn test_classifies_protected_merged_and_unmerged() {
        let git = MockGit::new("").with_merged("  origin/main\n  origin/feature-x\n");

        let classified = classify(&git, &["origin/main", "origin/feature-x", "origin/wip"]);

        assert_eq!(
            classified,
            vec![
                ClassifiedBranch::new("origin/main", BranchStatus::Protected),
                ClassifiedBranch::new("origin/feature-x", BranchStatus::Merged),
                ClassifiedBranch::new("origin/wip", BranchStatus::Unmerged),
            ]
        );
    }

    #[test]
    fn test_merged_query_failure_marks_everything_unmerged() {
        let git = MockGit::new("").with_failing_merged_query();

        let classified = classify(&git, &["origin/master", "origin/feature-x", "origin/wip"]);

        assert_eq!(classified[0].status, BranchStatus::Protected);
        assert!(classified[1..]
            .iter()
            .all(|branch| branch.status == BranchStatus::Unmerged));
    }

    #[test]
    fn test_merged_query_runs_once_per_run() {
        let git = MockGit::new("").with_merged("origin/a\n");

        classify(&git, &["origin/a", "origin/b", "origin/c", "origin/d"]);

        assert_eq!(git.merged_query_count(), 1);
    }

    #[test]
    fn test_already_decorated_input_is_cleaned() {
        let git = MockGit::new("").with_merged("origin/feature-x\n");

        let classified = classify(&git, &["\x1b[31morigin/feature-x (unmerged)\x1b[0m"]);

        assert_eq!(
            classified,
            vec![ClassifiedBranch::new("origin/feature-x", BranchStatus::Merged)]
        );
    }

    #[test]
    fn test_protection_wins_over_merged() {
        let git = MockGit::new("").with_merged("origin/master\n");

        let classified = classify(&git, &["origin/master"]);

        assert_eq!(classified[0].status, BranchStatus::Protected);
    }
}
