use super::branch::BranchRef;
use super::git::RemoteGit;
use crate::i18n::Messages;
use colored::Colorize;
use std::io::{self, Write};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DeletionReport {
    pub deleted: Vec<BranchRef>,
    pub failed: Vec<(BranchRef, String)>,
}

impl DeletionReport {
    pub fn attempted(&self) -> usize {
        self.deleted.len() + self.failed.len()
    }

    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }
}

/// Deletes branches one at a time, reporting each outcome as it happens.
/// Neither a failed deletion nor a failed write to `out` stops the batch.
pub struct DeletionExecutor<'a, G: RemoteGit + ?Sized> {
    git: &'a G,
    messages: &'a Messages,
}

impl<'a, G: RemoteGit + ?Sized> DeletionExecutor<'a, G> {
    pub fn new(git: &'a G, messages: &'a Messages) -> Self {
        Self { git, messages }
    }

    pub fn execute(&self, branches: &[BranchRef], out: &mut dyn Write) -> DeletionReport {
        let mut report = DeletionReport::default();

        for branch in branches {
            let label = branch.to_string();
            tracing::debug!(branch = %label, "deleting remote branch");

            let (headline, captured) = match self.git.delete_remote_branch(branch) {
                Ok(output) => {
                    report.deleted.push(branch.clone());
                    let message = self
                        .messages
                        .format("branch_deleted_successfully", &[("branch", &label)]);
                    (message.green().to_string(), Some(output))
                }
                Err(e) => {
                    let reason = e.reason();
                    tracing::warn!(branch = %label, error = %e, "remote branch deletion failed");
                    report.failed.push((branch.clone(), reason.clone()));
                    let message = self.messages.format(
                        "error_deleting_branch",
                        &[("branch", &label), ("error", &reason)],
                    );
                    (
                        message.red().to_string(),
                        e.captured_output().map(str::to_string),
                    )
                }
            };

            if let Err(e) = write_outcome(out, &headline, captured.as_deref()) {
                tracing::warn!(branch = %label, error = %e, "could not report deletion outcome");
            }
        }

        report
    }
}

fn write_outcome(out: &mut dyn Write, headline: &str, captured: Option<&str>) -> io::Result<()> {
    writeln!(out, "{}", headline)?;
    let trimmed = captured.unwrap_or_default().trim_end();
    if !trimmed.is_empty() {
        writeln!(out, "{}", trimmed)?;
    }
    Ok(())
}
