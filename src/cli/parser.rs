use clap::Parser;
use std::ffi::OsString;

/// Long flags historically spelled with a single dash (`-lang ja`).
const LEGACY_LONG_FLAGS: &[&str] = &["lang", "help", "get-remote-log"];
const VALUE_FLAGS: &[&str] = &["lang", "get-remote-log"];

#[derive(Parser, Debug)]
#[command(name = "remote-sweep")]
#[command(about = "Interactively select and delete remote git branches")]
#[command(version, disable_help_flag = true)]
pub struct Cli {
    /// Message language (en, ja)
    #[arg(long, value_name = "CODE")]
    pub lang: Option<String>,

    /// Show help
    #[arg(short = 'h', long = "help")]
    pub help: bool,

    /// Preview entry point invoked by the selector for the highlighted line
    #[arg(
        long = "get-remote-log",
        value_name = "BRANCH",
        hide = true,
        allow_hyphen_values = true
    )]
    pub get_remote_log: Option<String>,
}

/// Rewrites single-dash long flags (`-lang`, `-lang=ja`, `-help`,
/// `-get-remote-log`) to their double-dash form. Flag values are left alone.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut normalized = Vec::new();
    let mut expects_value = false;

    for (index, arg) in args.into_iter().map(Into::into).enumerate() {
        if index == 0 || expects_value {
            expects_value = false;
            normalized.push(arg);
            continue;
        }

        let rewritten = arg.to_str().and_then(rewrite_legacy_flag);
        let effective = match rewritten {
            Some(flag) => OsString::from(flag),
            None => arg,
        };

        expects_value = effective.to_str().map(takes_separate_value).unwrap_or(false);
        normalized.push(effective);
    }

    normalized
}

fn rewrite_legacy_flag(arg: &str) -> Option<String> {
    let body = arg.strip_prefix('-')?;
    if body.starts_with('-') {
        return None;
    }

    let name = body.split('=').next().unwrap_or(body);
    LEGACY_LONG_FLAGS
        .contains(&name)
        .then(|| format!("-{}", arg))
}

fn takes_separate_value(arg: &str) -> bool {
    arg.strip_prefix("--")
        .map(|name| VALUE_FLAGS.contains(&name))
        .unwrap_or(false)
}
