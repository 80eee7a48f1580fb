use super::{Config, ConfigError, Result};

pub fn validate_config(config: &Config) -> Result<()> {
    validate_protected_branches(&config.protected_branches)?;
    validate_command("git.command", &config.git.command)?;
    validate_command("selector.command", &config.selector.command)?;
    Ok(())
}

pub fn validate_protected_branches(names: &[String]) -> Result<()> {
    if names.is_empty() {
        return Err(ConfigError::Validation(
            "protected_branches must list at least one branch name".to_string(),
        ));
    }

    for name in names {
        if name.is_empty() || name.chars().any(char::is_whitespace) {
            return Err(ConfigError::Validation(format!(
                "invalid protected branch name '{}'",
                name
            )));
        }
    }

    Ok(())
}

pub fn validate_command(field: &str, command: &str) -> Result<()> {
    if command.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{} cannot be empty", field)));
    }
    Ok(())
}
