use super::{Config, GitConfig, SelectorConfig};
use std::path::PathBuf;

pub const CONFIG_PATH_ENV_VAR: &str = "REMOTE_SWEEP_CONFIG";

pub fn default_config() -> Config {
    Config {
        language: None,
        protected_branches: default_protected_branches(),
        git: default_git_config(),
        selector: default_selector_config(),
    }
}

pub fn default_protected_branches() -> Vec<String> {
    vec!["main".to_string(), "master".to_string()]
}

pub fn default_git_config() -> GitConfig {
    GitConfig {
        command: "git".to_string(),
    }
}

pub fn default_selector_config() -> SelectorConfig {
    SelectorConfig {
        command: "fzf".to_string(),
        args: Vec::new(),
    }
}

pub fn get_default_config_dir() -> PathBuf {
    if let Some(proj_dirs) = directories::ProjectDirs::from("", "", "remote-sweep") {
        proj_dirs.config_dir().to_path_buf()
    } else if let Some(base_dirs) = directories::BaseDirs::new() {
        base_dirs.home_dir().join(".config").join("remote-sweep")
    } else {
        PathBuf::from(".remote-sweep")
    }
}

pub fn get_config_file_path() -> PathBuf {
    if let Ok(config_path) = std::env::var(CONFIG_PATH_ENV_VAR) {
        return PathBuf::from(config_path);
    }

    get_default_config_dir().join("config.json")
}
