use crate::config::Config;
use crate::core::git::{GitCli, RemoteGit};
use crate::core::Decorator;
use crate::i18n::Messages;
use crate::utils::{Result, SweepError};
use std::io::Write;

/// Entry point for `--get-remote-log`, run by the selector for the highlighted line.
pub fn run(config: &Config, messages: &Messages, raw: &str) -> Result<()> {
    let git = GitCli::new(config.git_command());
    let decorator = Decorator::new()?;
    let mut stdout = std::io::stdout();
    execute(&git, &decorator, messages, raw, &mut stdout)
}

pub fn execute<G: RemoteGit + ?Sized>(
    git: &G,
    decorator: &Decorator,
    messages: &Messages,
    raw: &str,
    out: &mut dyn Write,
) -> Result<()> {
    let branch = decorator.clean_branch_name(raw);
    if branch.is_empty() {
        return Err(SweepError::malformed_input(raw));
    }

    match git.branch_detail(&branch) {
        Ok(detail) => {
            let rows = [
                ("preview_commit", detail.short_hash()),
                ("preview_author", detail.author.as_str()),
                ("preview_date", detail.date.as_str()),
                ("preview_subject", detail.subject.as_str()),
            ];
            for (key, value) in rows {
                writeln!(out, "{:<8} {}", messages.get(key), value)?;
            }
            writeln!(out)?;
        }
        Err(e) => tracing::debug!(branch = %branch, error = %e, "no commit summary"),
    }

    out.flush()?;
    git.stream_log(&branch)
}
