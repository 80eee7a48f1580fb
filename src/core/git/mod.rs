use super::branch::BranchRef;
use crate::utils::Result;

pub mod detail;
pub mod listing;
pub mod repository;

pub use detail::BranchDetail;
pub use listing::{list_remote_branches, parse_merged_listing, parse_remote_branch_listing};
pub use repository::{GitCli, GitOutput};

/// The git operations the sweep needs. Implemented by [`GitCli`] for real
/// repositories and by in-memory doubles in tests.
pub trait RemoteGit {
    /// Raw output of `git branch -r`.
    fn remote_branch_listing(&self) -> Result<String>;

    /// Raw output of `git branch -r --merged HEAD`.
    fn merged_remote_branch_listing(&self) -> Result<String>;

    fn branch_detail(&self, branch: &str) -> Result<BranchDetail>;

    /// Streams `git log --color=always` for `branch` straight to the terminal.
    fn stream_log(&self, branch: &str) -> Result<()>;

    /// Deletes the branch on its remote and returns the captured output.
    fn delete_remote_branch(&self, branch: &BranchRef) -> Result<String>;
}
