//! Display decoration for selector candidates.
//!
//! A decorated line is `{color}{branch} {indicator}{reset}`. Indicators always
//! begin with `(`, which is what makes [`Decorator::clean_branch_name`] able
//! to recover the branch identity from any line the selector hands back.

use super::branch::{BranchStatus, ClassifiedBranch};
use crate::i18n::Messages;
use crate::utils::Result;
use regex::Regex;

const ANSI_PATTERN: &str = r"\x1b\[[0-9;]*m";
const INDICATOR_SEPARATOR: &str = " (";

pub const RESET: &str = "\x1b[0m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Green,
    Red,
    Yellow,
}

impl Color {
    pub fn escape(&self) -> &'static str {
        match self {
            Color::Green => "\x1b[32m",
            Color::Red => "\x1b[31m",
            Color::Yellow => "\x1b[33m",
        }
    }

    pub fn for_status(status: BranchStatus) -> Self {
        match status {
            BranchStatus::Protected => Color::Yellow,
            BranchStatus::Merged => Color::Green,
            BranchStatus::Unmerged => Color::Red,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Decorator {
    ansi: Regex,
}

impl Decorator {
    pub fn new() -> Result<Self> {
        Ok(Self {
            ansi: Regex::new(ANSI_PATTERN)?,
        })
    }

    pub fn decorate(&self, branch: &ClassifiedBranch, messages: &Messages) -> String {
        format!(
            "{}{} {}{}",
            Color::for_status(branch.status).escape(),
            branch.name,
            messages.get(branch.status.indicator_key()),
            RESET
        )
    }

    pub fn decorate_all(&self, branches: &[ClassifiedBranch], messages: &Messages) -> Vec<String> {
        branches
            .iter()
            .map(|branch| self.decorate(branch, messages))
            .collect()
    }

    /// Strips color codes and the status indicator. Idempotent.
    pub fn clean_branch_name(&self, line: &str) -> String {
        let stripped = self.strip_ansi(line);
        let identity = stripped
            .split(INDICATOR_SEPARATOR)
            .next()
            .unwrap_or_default();
        identity.trim().to_string()
    }

    // Removing one escape can splice the bytes around it into a new one.
    fn strip_ansi(&self, line: &str) -> String {
        let mut current = line.to_string();
        while self.ansi.is_match(&current) {
            current = self.ansi.replace_all(&current, "").into_owned();
        }
        current
    }
}
