use crate::config::Config;
use crate::core::git::{list_remote_branches, GitCli, RemoteGit};
use crate::core::{
    BranchSelector, Classifier, Confirmer, Decorator, DeletionExecutor, DeletionPlan,
    DeletionReport, DialoguerConfirmer, FzfSelector, ProtectionPolicy, SelectionOutcome,
};
use crate::i18n::{Language, Messages};
use crate::utils::{Result, SweepError};
use colored::Colorize;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SweepOutcome {
    NoRemoteBranches,
    Cancelled,
    NothingSelected,
    Completed(DeletionReport),
}

/// Values built once at startup and shared by every stage of a run.
#[derive(Debug, Clone, Copy)]
pub struct SweepContext<'a> {
    pub messages: &'a Messages,
    pub policy: &'a ProtectionPolicy,
    pub decorator: &'a Decorator,
}

pub fn execute(config: &Config, messages: &Messages) -> Result<SweepOutcome> {
    let selector_check = FzfSelector::new(config.selector_command());
    let resolved = selector_check.ensure_available()?;
    tracing::debug!(selector = %resolved.display(), "selector found");

    let executable = std::env::current_exe()
        .map_err(|e| SweepError::executable_path(e.to_string()))?;
    let selector = selector_check
        .with_preview(preview_command(&executable, messages.language()))
        .with_extra_args(config.selector.args.clone());

    let git = GitCli::new(config.git_command());
    let policy = ProtectionPolicy::new(config.protected_branches.clone());
    let decorator = Decorator::new()?;
    let context = SweepContext {
        messages,
        policy: &policy,
        decorator: &decorator,
    };

    let confirmer = DialoguerConfirmer;
    let sweeper = RemoteSweeper::new(&git, &selector, &confirmer, context);
    let mut stdout = std::io::stdout();
    sweeper.run(&mut stdout)
}

/// Command the selector runs for its preview pane; `{}` is the highlighted line.
pub fn preview_command(executable: &Path, language: Language) -> String {
    format!(
        "{} --lang {} --get-remote-log {{}}",
        shell_escape::escape(executable.to_string_lossy()),
        language.code()
    )
}

pub struct RemoteSweeper<'a, G: ?Sized, S: ?Sized, C: ?Sized> {
    git: &'a G,
    selector: &'a S,
    confirmer: &'a C,
    context: SweepContext<'a>,
}

impl<'a, G, S, C> RemoteSweeper<'a, G, S, C>
where
    G: RemoteGit + ?Sized,
    S: BranchSelector + ?Sized,
    C: Confirmer + ?Sized,
{
    pub fn new(git: &'a G, selector: &'a S, confirmer: &'a C, context: SweepContext<'a>) -> Self {
        Self {
            git,
            selector,
            confirmer,
            context,
        }
    }

    pub fn run(&self, out: &mut dyn Write) -> Result<SweepOutcome> {
        let messages = self.context.messages;

        let branches = list_remote_branches(self.git)?;
        if branches.is_empty() {
            writeln!(out, "{}", messages.get("no_remote_branches"))?;
            return Ok(SweepOutcome::NoRemoteBranches);
        }

        let classified = Classifier::new(self.context.policy, self.context.decorator)
            .classify(self.git, &branches, messages);
        let candidates = self.context.decorator.decorate_all(&classified, messages);

        let selected = match self
            .selector
            .select(&candidates)?
            .decode(self.context.decorator)
        {
            SelectionOutcome::Cancelled => {
                writeln!(out, "{}", messages.get("deletion_cancelled"))?;
                return Ok(SweepOutcome::Cancelled);
            }
            SelectionOutcome::Selected(names) => names,
        };

        if selected.is_empty() {
            writeln!(out, "{}", messages.get("no_branches_selected"))?;
            return Ok(SweepOutcome::NothingSelected);
        }

        let plan = DeletionPlan::build(&selected, self.context.policy);
        plan.write_notices(out, messages)?;

        if plan.is_empty() {
            writeln!(out, "{}", messages.get("no_branches_selected"))?;
            return Ok(SweepOutcome::NothingSelected);
        }

        plan.write_confirmation_table(out, messages)?;
        out.flush()?;

        if !self.confirmer.confirm(&messages.get("confirm_prompt")) {
            writeln!(out, "{}", messages.get("deletion_cancelled"))?;
            return Ok(SweepOutcome::Cancelled);
        }

        let report = DeletionExecutor::new(self.git, messages).execute(&plan.to_delete, out);
        let summary = messages.format(
            "deletion_summary",
            &[
                ("deleted", &report.deleted.len().to_string()),
                ("attempted", &report.attempted().to_string()),
            ],
        );
        let summary = if report.has_failures() {
            summary.yellow().to_string()
        } else {
            summary
        };
        if let Err(e) = writeln!(out, "{}", summary) {
            tracing::warn!(error = %e, "could not report deletion summary");
        }
        tracing::info!(
            deleted = report.deleted.len(),
            failed = report.failed.len(),
            "sweep finished"
        );
        Ok(SweepOutcome::Completed(report))
    }
}
