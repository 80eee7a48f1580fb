//! Embedded message catalogs and language selection.
//!
//! Catalogs are flat JSON objects mapping message keys to templates. Templates
//! use `{name}` placeholders filled by [`Messages::format`].

use crate::utils::Result;
use std::collections::HashMap;

const EN_CATALOG: &str = include_str!("locales/en.json");
const JA_CATALOG: &str = include_str!("locales/ja.json");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    En,
    Ja,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ja => "ja",
        }
    }

    /// Unrecognized codes fall back to English.
    pub fn from_code(code: &str) -> Self {
        match code.trim() {
            "ja" => Language::Ja,
            _ => Language::En,
        }
    }

    /// Explicit flag first, then the configured language, then `LANG`.
    pub fn resolve(flag: Option<&str>, configured: Option<&str>, env_lang: Option<&str>) -> Self {
        let explicit = flag
            .filter(|code| !code.trim().is_empty())
            .or_else(|| configured.filter(|code| !code.trim().is_empty()));

        if let Some(code) = explicit {
            return Self::from_code(code);
        }

        match env_lang {
            Some(lang) if lang.contains("ja") => Language::Ja,
            _ => Language::En,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Messages {
    language: Language,
    catalog: HashMap<String, String>,
    fallback: HashMap<String, String>,
}

impl Messages {
    pub fn load(language: Language) -> Result<Self> {
        let fallback: HashMap<String, String> = serde_json::from_str(EN_CATALOG)?;
        let catalog = match language {
            Language::En => fallback.clone(),
            Language::Ja => serde_json::from_str(JA_CATALOG)?,
        };

        Ok(Self {
            language,
            catalog,
            fallback,
        })
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn get(&self, key: &str) -> String {
        self.catalog
            .get(key)
            .or_else(|| self.fallback.get(key))
            .cloned()
            .unwrap_or_else(|| {
                tracing::debug!(key, "missing message key");
                key.to_string()
            })
    }

    pub fn format(&self, key: &str, args: &[(&str, &str)]) -> String {
        args.iter()
            .fold(self.get(key), |message, (name, value)| {
                message.replace(&format!("{{{}}}", name), value)
            })
    }
}
