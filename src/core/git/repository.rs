use super::detail::{BranchDetail, DETAIL_FORMAT};
use super::RemoteGit;
use crate::core::branch::BranchRef;
use crate::utils::{Result, SweepError, ToolOperation};
use std::io;
use std::path::PathBuf;
use std::process::{Command, Output};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GitOutput {
    pub stdout: String,
    pub stderr: String,
}

impl GitOutput {
    fn from_output(output: &Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    /// stdout followed by stderr, the way a terminal would have shown them.
    pub fn combined(&self) -> String {
        let mut combined = self.stdout.clone();
        if !combined.is_empty() && !combined.ends_with('\n') && !self.stderr.is_empty() {
            combined.push('\n');
        }
        combined.push_str(&self.stderr);
        combined
    }
}

/// Runs the git executable as a child process.
#[derive(Debug, Clone)]
pub struct GitCli {
    program: String,
    work_dir: Option<PathBuf>,
}

impl GitCli {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            work_dir: None,
        }
    }

    pub fn with_work_dir(mut self, work_dir: impl Into<PathBuf>) -> Self {
        self.work_dir = Some(work_dir.into());
        self
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut command = Command::new(&self.program);
        command.args(args);
        if let Some(work_dir) = &self.work_dir {
            command.current_dir(work_dir);
        }
        command
    }

    pub fn execute(&self, operation: ToolOperation, args: &[&str]) -> Result<GitOutput> {
        tracing::debug!(program = %self.program, ?args, "running git");

        let output = self
            .command(args)
            .output()
            .map_err(|e| self.spawn_error(e))?;
        let captured = GitOutput::from_output(&output);

        if !output.status.success() {
            return Err(SweepError::external_tool(
                operation,
                format!("git {} exited with {}", args.join(" "), output.status),
                captured.combined(),
            ));
        }

        Ok(captured)
    }

    fn spawn_error(&self, error: io::Error) -> SweepError {
        if error.kind() == io::ErrorKind::NotFound {
            SweepError::missing_dependency(&self.program)
        } else {
            SweepError::Io(error)
        }
    }
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new("git")
    }
}

impl RemoteGit for GitCli {
    fn remote_branch_listing(&self) -> Result<String> {
        let output = self.execute(ToolOperation::ListRemoteBranches, &["branch", "-r"])?;
        Ok(output.stdout)
    }

    fn merged_remote_branch_listing(&self) -> Result<String> {
        let output = self.execute(
            ToolOperation::ListMergedBranches,
            &["branch", "-r", "--merged", "HEAD"],
        )?;
        Ok(output.stdout)
    }

    fn branch_detail(&self, branch: &str) -> Result<BranchDetail> {
        let output = self.execute(
            ToolOperation::ShowBranchDetail,
            &["log", "-1", DETAIL_FORMAT, branch, "--"],
        )?;
        BranchDetail::parse(branch, &output.stdout)
    }

    fn stream_log(&self, branch: &str) -> Result<()> {
        let args = ["log", "--color=always", branch, "--"];
        tracing::debug!(program = %self.program, ?args, "streaming git log");

        let status = self
            .command(&args)
            .status()
            .map_err(|e| self.spawn_error(e))?;

        if !status.success() {
            return Err(SweepError::external_tool(
                ToolOperation::ShowLog,
                format!("git log for {} exited with {}", branch, status),
                "",
            ));
        }

        Ok(())
    }

    fn delete_remote_branch(&self, branch: &BranchRef) -> Result<String> {
        let output = self.execute(
            ToolOperation::DeleteRemoteBranch,
            &["push", &branch.remote, "--delete", &branch.name],
        )?;
        Ok(output.combined())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::git::{list_remote_branches, parse_merged_listing};
    use crate::test_utils::test_helpers::{git, setup_remote_fixture};

    #[test]
    fn test_lists_remote_branches_without_head() {
        let fixture = setup_remote_fixture(&["feature-x", "wip"]);
        let cli = GitCli::default().with_work_dir(&fixture.clone_path);

        let branches = list_remote_branches(&cli).unwrap();

        assert!(branches.contains(&"origin/main".to_string()));
        assert!(branches.contains(&"origin/feature-x".to_string()));
        assert!(branches.contains(&"origin/wip".to_string()));
        assert!(branches.iter().all(|b| !b.contains("HEAD")));
    }

    #[test]
    fn test_merged_listing_includes_branches_reachable_from_head() {
        let fixture = setup_remote_fixture(&["feature-x"]);
        let cli = GitCli::default().with_work_dir(&fixture.clone_path);

        let merged = parse_merged_listing(&cli.merged_remote_branch_listing().unwrap());

        assert!(merged.contains("origin/feature-x"));
        assert!(merged.contains("origin/main"));
        assert!(!merged.contains("origin/unmerged-work"));
    }

    #[test]
    fn test_branch_detail_reads_last_commit() {
        let fixture = setup_remote_fixture(&[]);
        let cli = GitCli::default().with_work_dir(&fixture.clone_path);

        let detail = cli.branch_detail("origin/unmerged-work").unwrap();

        assert_eq!(detail.name, "origin/unmerged-work");
        assert_eq!(detail.author, "Test User");
        assert_eq!(detail.subject, "Unmerged work");
        assert_eq!(detail.hash.len(), 40);
    }

    #[test]
    fn test_delete_remote_branch() {
        let fixture = setup_remote_fixture(&["feature-x"]);
        let cli = GitCli::default().with_work_dir(&fixture.clone_path);

        cli.delete_remote_branch(&BranchRef::new("origin", "feature-x"))
            .unwrap();

        let remote_heads = git(&fixture.remote_path, &["branch", "--list"]);
        assert!(!remote_heads.contains("feature-x"));
        assert!(remote_heads.contains("main"));
    }

    #[test]
    fn test_delete_missing_branch_reports_output() {
        let fixture = setup_remote_fixture(&[]);
        let cli = GitCli::default().with_work_dir(&fixture.clone_path);

        let err = cli
            .delete_remote_branch(&BranchRef::new("origin", "does-not-exist"))
            .unwrap_err();

        assert_eq!(err.operation(), Some(ToolOperation::DeleteRemoteBranch));
        assert!(err.captured_output().is_some());
    }

    #[test]
    fn test_missing_program_is_missing_dependency() {
        let cli = GitCli::new("definitely-not-a-real-git-binary");

        let err = cli.remote_branch_listing().unwrap_err();

        assert!(matches!(
            err,
            SweepError::MissingDependency { ref program } if program == "definitely-not-a-real-git-binary"
        ));
    }

    #[test]
    fn test_listing_outside_repository_fails() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let cli = GitCli::default().with_work_dir(temp_dir.path());

        let err = cli.remote_branch_listing().unwrap_err();
        assert_eq!(err.operation(), Some(ToolOperation::ListRemoteBranches));
    }

    #[test]
    fn test_combined_output_separates_streams() {
        let output = GitOutput {
            stdout: "out".to_string(),
            stderr: "err\n".to_string(),
        };
        assert_eq!(output.combined(), "out\nerr\n");

        let stderr_only = GitOutput {
            stdout: String::new(),
            stderr: "To origin\n".to_string(),
        };
        assert_eq!(stderr_only.combined(), "To origin\n");
    }
}
