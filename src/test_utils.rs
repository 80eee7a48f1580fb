pub mod test_helpers {
    use crate::core::branch::BranchRef;
    use crate::core::git::{BranchDetail, RemoteGit};
    use crate::core::prompt::Confirmer;
    use crate::core::selector::{BranchSelector, SelectionOutcome};
    use crate::utils::{Result, SweepError, ToolOperation};
    use std::cell::{Cell, RefCell};

    /// In-memory git double. Records every delete and log request.
    pub struct MockGit {
        listing: String,
        listing_fails: bool,
        merged: Option<String>,
        failing_deletes: Vec<String>,
        log_fails: bool,
        merged_queries: Cell<usize>,
        deletes: RefCell<Vec<BranchRef>>,
        logs: RefCell<Vec<String>>,
    }

    impl MockGit {
        pub fn new(listing: &str) -> Self {
            Self {
                listing: listing.to_string(),
                listing_fails: false,
                merged: Some(String::new()),
                failing_deletes: Vec::new(),
                log_fails: false,
                merged_queries: Cell::new(0),
                deletes: RefCell::new(Vec::new()),
                logs: RefCell::new(Vec::new()),
            }
        }

        pub fn with_merged(mut self, merged: &str) -> Self {
            self.merged = Some(merged.to_string());
            self
        }

        pub fn with_failing_merged_query(mut self) -> Self {
            self.merged = None;
            self
        }

        pub fn with_failing_listing(mut self) -> Self {
            self.listing_fails = true;
            self
        }

        pub fn with_failing_delete(mut self, branch: &str) -> Self {
            self.failing_deletes.push(branch.to_string());
            self
        }

        pub fn with_failing_log(mut self) -> Self {
            self.log_fails = true;
            self
        }

        pub fn merged_query_count(&self) -> usize {
            self.merged_queries.get()
        }

        pub fn delete_calls(&self) -> Vec<BranchRef> {
            self.deletes.borrow().clone()
        }

        pub fn log_calls(&self) -> Vec<String> {
            self.logs.borrow().clone()
        }
    }

    impl RemoteGit for MockGit {
        fn remote_branch_listing(&self) -> Result<String> {
            if self.listing_fails {
                return Err(SweepError::external_tool(
                    ToolOperation::ListRemoteBranches,
                    "git branch -r exited with exit status: 128",
                    "fatal: not a git repository",
                ));
            }
            Ok(self.listing.clone())
        }

        fn merged_remote_branch_listing(&self) -> Result<String> {
            self.merged_queries.set(self.merged_queries.get() + 1);
            self.merged.clone().ok_or_else(|| {
                SweepError::external_tool(
                    ToolOperation::ListMergedBranches,
                    "git branch -r --merged HEAD exited with exit status: 129",
                    "error: malformed object name HEAD",
                )
            })
        }

        fn branch_detail(&self, branch: &str) -> Result<BranchDetail> {
            if self.log_fails {
                return Err(SweepError::external_tool(
                    ToolOperation::ShowBranchDetail,
                    "unknown revision",
                    "",
                ));
            }
            BranchDetail::parse(
                branch,
                "0123456789abcdef0123456789abcdef01234567\nTest User\nMon Jan 1 00:00:00 2024 +0000\nInitial commit",
            )
        }

        fn stream_log(&self, branch: &str) -> Result<()> {
            self.logs.borrow_mut().push(branch.to_string());
            if self.log_fails {
                return Err(SweepError::external_tool(
                    ToolOperation::ShowLog,
                    format!("git log for {} exited with exit status: 128", branch),
                    "",
                ));
            }
            Ok(())
        }

        fn delete_remote_branch(&self, branch: &BranchRef) -> Result<String> {
            self.deletes.borrow_mut().push(branch.clone());
            let label = branch.to_string();
            if self.failing_deletes.contains(&label) {
                return Err(SweepError::external_tool(
                    ToolOperation::DeleteRemoteBranch,
                    format!("git push {} --delete {} exited with exit status: 1", branch.remote, branch.name),
                    format!("remote rejected {}", label),
                ));
            }
            Ok(format!(" - [deleted]         {}", branch.name))
        }
    }

    #[derive(Debug, Clone)]
    pub enum SelectorScript {
        Cancel,
        SelectAll,
        SelectNothing,
        SelectContaining(Vec<String>),
        Fail,
    }

    /// Selector double that answers from a script and records its input.
    pub struct ScriptedSelector {
        script: SelectorScript,
        received: RefCell<Vec<String>>,
    }

    impl ScriptedSelector {
        pub fn new(script: SelectorScript) -> Self {
            Self {
                script,
                received: RefCell::new(Vec::new()),
            }
        }

        pub fn selecting(needles: &[&str]) -> Self {
            Self::new(SelectorScript::SelectContaining(
                needles.iter().map(|n| n.to_string()).collect(),
            ))
        }

        pub fn received(&self) -> Vec<String> {
            self.received.borrow().clone()
        }
    }

    impl BranchSelector for ScriptedSelector {
        fn select(&self, candidates: &[String]) -> Result<SelectionOutcome> {
            *self.received.borrow_mut() = candidates.to_vec();

            match &self.script {
                SelectorScript::Cancel => Ok(SelectionOutcome::Cancelled),
                SelectorScript::SelectAll => Ok(SelectionOutcome::Selected(candidates.to_vec())),
                SelectorScript::SelectNothing => Ok(SelectionOutcome::Selected(Vec::new())),
                SelectorScript::SelectContaining(needles) => Ok(SelectionOutcome::Selected(
                    candidates
                        .iter()
                        .filter(|c| needles.iter().any(|n| c.contains(n.as_str())))
                        .cloned()
                        .collect(),
                )),
                SelectorScript::Fail => Err(SweepError::external_tool(
                    ToolOperation::Select,
                    "selector exited with status 2",
                    "",
                )),
            }
        }
    }

    pub struct ScriptedConfirmer {
        answer: bool,
        prompts: RefCell<Vec<String>>,
    }

    impl ScriptedConfirmer {
        pub fn new(answer: bool) -> Self {
            Self {
                answer,
                prompts: RefCell::new(Vec::new()),
            }
        }

        pub fn prompts(&self) -> Vec<String> {
            self.prompts.borrow().clone()
        }
    }

    impl Confirmer for ScriptedConfirmer {
        fn confirm(&self, prompt: &str) -> bool {
            self.prompts.borrow_mut().push(prompt.to_string());
            self.answer
        }
    }

    #[cfg(test)]
    pub use fixtures::*;

}
