use dialoguer::Confirm;

pub const NON_INTERACTIVE_ENV_VAR: &str = "REMOTE_SWEEP_NON_INTERACTIVE";

/// Yes/no confirmation. Anything other than an explicit yes is a no.
pub trait Confirmer {
    fn confirm(&self, prompt: &str) -> bool;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DialoguerConfirmer;

impl DialoguerConfirmer {
    fn is_non_interactive() -> bool {
        env_flag_enabled(std::env::var(NON_INTERACTIVE_ENV_VAR).ok().as_deref())
            || env_flag_enabled(std::env::var("CI").ok().as_deref())
            || !atty::is(atty::Stream::Stdin)
    }
}

/// Unset, empty, `0`, `false` and `no` leave the flag off.
fn env_flag_enabled(value: Option<&str>) -> bool {
    match value.map(str::trim) {
        None | Some("") => false,
        Some(value) => !matches!(value.to_ascii_lowercase().as_str(), "0" | "false" | "no"),
    }
}

impl Confirmer for DialoguerConfirmer {
    fn confirm(&self, prompt: &str) -> bool {
        if Self::is_non_interactive() {
            tracing::info!("non-interactive session, declining deletion");
            return false;
        }

        Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "confirmation prompt failed");
                false
            })
    }
}
