use super::branch::{BranchRef, ProtectionPolicy};
use crate::i18n::Messages;
use colored::Colorize;
use std::io::{self, Write};

const BRANCH_COLUMN_WIDTH: usize = 40;
const TABLE_RULE_WIDTH: usize = 60;

/// What a confirmed selection turns into. Built once per run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DeletionPlan {
    pub to_delete: Vec<BranchRef>,
    pub skipped_protected: Vec<String>,
    pub malformed: Vec<String>,
}

impl DeletionPlan {
    /// Partitions decoded selections. Protection is checked again here: the
    /// selector is an external process and its output is not trusted.
    pub fn build(selected: &[String], policy: &ProtectionPolicy) -> Self {
        let mut plan = Self::default();

        for name in selected {
            if policy.is_protected(name) {
                plan.skipped_protected.push(name.clone());
                continue;
            }

            match BranchRef::parse(name) {
                Ok(branch) => plan.to_delete.push(branch),
                Err(e) => {
                    tracing::debug!(error = %e, "selection is not a remote branch");
                    plan.malformed.push(name.clone());
                }
            }
        }

        plan
    }

    pub fn is_empty(&self) -> bool {
        self.to_delete.is_empty()
    }

    pub fn write_notices(&self, out: &mut dyn Write, messages: &Messages) -> io::Result<()> {
        for branch in &self.skipped_protected {
            let notice = messages.format("protected_branch_skipped", &[("branch", branch)]);
            writeln!(out, "{}", notice.yellow())?;
        }

        for line in &self.malformed {
            let notice = messages.format("invalid_branch_format", &[("branch", line)]);
            writeln!(out, "{}", notice.yellow())?;
        }

        Ok(())
    }

    pub fn write_confirmation_table(
        &self,
        out: &mut dyn Write,
        messages: &Messages,
    ) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "{}", messages.get("confirm_deletion").bold())?;
        writeln!(
            out,
            "{:<width$} {}",
            messages.get("table_branch"),
            messages.get("table_remote"),
            width = BRANCH_COLUMN_WIDTH
        )?;
        writeln!(out, "{}", "-".repeat(TABLE_RULE_WIDTH))?;

        for branch in &self.to_delete {
            writeln!(
                out,
                "{:<width$} {}",
                branch.name,
                branch.remote,
                width = BRANCH_COLUMN_WIDTH
            )?;
        }

        writeln!(out, "{}", "-".repeat(TABLE_RULE_WIDTH))?;
        Ok(())
    }
}
