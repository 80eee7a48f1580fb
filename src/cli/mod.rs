pub mod commands;
pub mod help;
pub mod parser;

pub use parser::{normalize_args, Cli};

use crate::config::{Config, ConfigManager};
use crate::i18n::{Language, Messages};
use crate::utils::{Result, SweepError, ToolOperation};
use std::path::Path;

/// Runs the parsed command line and returns the process exit status.
pub fn run(cli: Cli) -> i32 {
    let config = ConfigManager::load().map_err(SweepError::from);
    if let Err(e) = &config {
        tracing::warn!(error = %e, "falling back to built-in configuration for language");
    }

    let configured = config.as_ref().ok().and_then(Config::configured_language);
    let env_lang = std::env::var("LANG").ok();
    let language = Language::resolve(cli.lang.as_deref(), configured, env_lang.as_deref());

    let messages = match Messages::load(language) {
        Ok(messages) => messages,
        Err(e) => {
            eprintln!("{}", e);
            return 1;
        }
    };

    match execute_command(&cli, config, &messages) {
        Ok(()) => 0,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("{}", render_error(&messages, &e));
            1
        }
    }
}

pub fn execute_command(cli: &Cli, config: Result<Config>, messages: &Messages) -> Result<()> {
    if let Some(raw) = &cli.get_remote_log {
        return commands::preview::run(&config_or_default(config), messages, raw);
    }

    if cli.help {
        print!("{}", help::render_help(messages));
        return Ok(());
    }

    let config = config?;
    config.validate()?;
    commands::sweep::execute(&config, messages).map(|outcome| {
        tracing::debug!(?outcome, "sweep outcome");
    })
}

/// The preview pane only needs the git command, so a broken config file must
/// not blank every pane.
fn config_or_default(config: Result<Config>) -> Config {
    config.unwrap_or_else(|e| {
        tracing::debug!(error = %e, "preview using built-in configuration");
        Config::default()
    })
}

/// Localized, user-facing rendering of an error.
pub fn render_error(messages: &Messages, error: &SweepError) -> String {
    match error {
        SweepError::MissingDependency { program } => {
            let mut rendered = messages.format("dependency_not_found", &[("program", program)]);
            if let Some(hint) = install_hint_key(program) {
                rendered.push('\n');
                rendered.push_str(&messages.get(hint));
            }
            rendered
        }
        SweepError::ExternalTool {
            operation, message, ..
        } => {
            let key = match operation {
                ToolOperation::ListRemoteBranches => "error_getting_remote_branches",
                ToolOperation::Select => "error_running_selector",
                ToolOperation::ShowLog | ToolOperation::ShowBranchDetail => "error_getting_log",
                _ => "external_tool_failed",
            };
            let mut rendered = messages.format(key, &[("error", message)]);
            if let Some(output) = error.captured_output() {
                rendered.push('\n');
                rendered.push_str(output.trim_end());
            }
            rendered
        }
        SweepError::ExecutablePath { message } => {
            messages.format("executable_path_error", &[("error", message)])
        }
        SweepError::Config { message } => messages.format("config_error", &[("error", message)]),
        other => other.to_string(),
    }
}

fn install_hint_key(program: &str) -> Option<&'static str> {
    let stem = Path::new(program)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or(program);
    match stem {
        "fzf" => Some("install_fzf"),
        "git" => Some("install_git"),
        _ => None,
    }
}
