use serde::Deserialize;

pub mod defaults;
pub mod manager;
pub mod validation;

pub use manager::ConfigManager;

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub language: Option<String>,
    pub protected_branches: Vec<String>,
    pub git: GitConfig,
    pub selector: SelectorConfig,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GitConfig {
    pub command: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SelectorConfig {
    pub command: String,
    pub args: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        defaults::default_config()
    }
}

impl Default for GitConfig {
    fn default() -> Self {
        defaults::default_git_config()
    }
}

impl Default for SelectorConfig {
    fn default() -> Self {
        defaults::default_selector_config()
    }
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Validation(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Json(e) => write!(f, "JSON error: {}", e),
            ConfigError::Validation(msg) => write!(f, "Validation error: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(error: std::io::Error) -> Self {
        ConfigError::Io(error)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(error: serde_json::Error) -> Self {
        ConfigError::Json(error)
    }
}

impl From<ConfigError> for crate::utils::SweepError {
    fn from(error: ConfigError) -> Self {
        crate::utils::SweepError::config_error(error.to_string())
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        validation::validate_config(self)
    }

    pub fn configured_language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    pub fn git_command(&self) -> &str {
        &self.git.command
    }

    pub fn selector_command(&self) -> &str {
        &self.selector.command
    }
}
