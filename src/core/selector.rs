//! Bridge to the interactive fuzzy finder.
//!
//! Candidates are written to the selector's stdin by a separate task while
//! its stdout is drained, so a selector that starts emitting output before
//! reading all of its input cannot deadlock the pipe.

use super::decoration::Decorator;
use crate::utils::{Result, SweepError, ToolOperation};
use std::io;
use std::path::PathBuf;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::{ChildStdin, Command};

/// Exit code fzf uses when the user aborts with Esc or Ctrl-C.
pub const CANCEL_EXIT_CODE: i32 = 130;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionOutcome {
    Cancelled,
    Selected(Vec<String>),
}

impl SelectionOutcome {
    /// Maps every selected line back to its canonical branch identity.
    pub fn decode(self, decorator: &Decorator) -> Self {
        match self {
            SelectionOutcome::Cancelled => SelectionOutcome::Cancelled,
            SelectionOutcome::Selected(lines) => SelectionOutcome::Selected(
                lines
                    .iter()
                    .map(|line| decorator.clean_branch_name(line))
                    .filter(|name| !name.is_empty())
                    .collect(),
            ),
        }
    }
}

pub trait BranchSelector {
    /// Presents `candidates` and returns the raw lines the user picked.
    fn select(&self, candidates: &[String]) -> Result<SelectionOutcome>;
}

#[derive(Debug, Clone)]
pub struct FzfSelector {
    program: String,
    preview_command: Option<String>,
    extra_args: Vec<String>,
}

impl FzfSelector {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            preview_command: None,
            extra_args: Vec::new(),
        }
    }

    pub fn with_preview(mut self, preview_command: impl Into<String>) -> Self {
        self.preview_command = Some(preview_command.into());
        self
    }

    pub fn with_extra_args(mut self, extra_args: Vec<String>) -> Self {
        self.extra_args = extra_args;
        self
    }

    /// Resolves the selector on `PATH`.
    pub fn ensure_available(&self) -> Result<PathBuf> {
        which::which(&self.program).map_err(|e| {
            tracing::debug!(program = %self.program, error = %e, "selector lookup failed");
            SweepError::missing_dependency(&self.program)
        })
    }

    pub fn build_args(&self) -> Vec<String> {
        let mut args = vec!["--multi".to_string(), "--ansi".to_string()];
        if let Some(preview) = &self.preview_command {
            args.push("--preview".to_string());
            args.push(preview.clone());
        }
        args.extend(self.extra_args.iter().cloned());
        args
    }

    async fn run(&self, candidates: &[String]) -> Result<SelectionOutcome> {
        let args = self.build_args();
        tracing::debug!(program = %self.program, ?args, count = candidates.len(), "starting selector");

        let mut child = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| {
                if e.kind() == io::ErrorKind::NotFound {
                    SweepError::missing_dependency(&self.program)
                } else {
                    SweepError::Io(e)
                }
            })?;

        let stdin = child.stdin.take().ok_or_else(|| {
            SweepError::external_tool(ToolOperation::Select, "selector stdin unavailable", "")
        })?;
        let writer = tokio::spawn(feed_candidates(stdin, candidate_payload(candidates)));

        let output = child.wait_with_output().await?;

        match writer.await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => tracing::warn!(error = %e, "failed to write all candidates to selector"),
            Err(e) => tracing::warn!(error = %e, "selector input task failed"),
        }

        interpret_exit(output.status.code(), &String::from_utf8_lossy(&output.stdout))
    }
}

impl BranchSelector for FzfSelector {
    fn select(&self, candidates: &[String]) -> Result<SelectionOutcome> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        runtime.block_on(self.run(candidates))
    }
}

fn candidate_payload(candidates: &[String]) -> String {
    candidates
        .iter()
        .map(|candidate| format!("{}\n", candidate))
        .collect()
}

// Owns stdin so the pipe is closed when the task ends, whatever happened.
async fn feed_candidates(mut stdin: ChildStdin, payload: String) -> io::Result<()> {
    let written = stdin.write_all(payload.as_bytes()).await;
    let flushed = stdin.shutdown().await;
    drop(stdin);

    match written.and(flushed) {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
            tracing::debug!("selector closed its input early");
            Ok(())
        }
        other => other,
    }
}

pub fn interpret_exit(code: Option<i32>, stdout: &str) -> Result<SelectionOutcome> {
    match code {
        Some(0) => Ok(SelectionOutcome::Selected(
            stdout
                .lines()
                .filter(|line| !line.trim().is_empty())
                .map(str::to_string)
                .collect(),
        )),
        Some(CANCEL_EXIT_CODE) => Ok(SelectionOutcome::Cancelled),
        Some(code) => Err(SweepError::external_tool(
            ToolOperation::Select,
            format!("selector exited with status {}", code),
            stdout,
        )),
        None => Err(SweepError::external_tool(
            ToolOperation::Select,
            "selector was terminated by a signal",
            stdout,
        )),
    }
}
