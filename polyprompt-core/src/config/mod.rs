//! Polyprompt Configuration Module
//!
//! Loads `polyprompt.toml` and exposes the defaults used by the CLI: the fallback
//! language, where the language preference is persisted, name generation options and
//! logging verbosity.

pub mod constants;
pub mod loader;

pub use loader::{ConfigManager, PolypromptConfig};

use crate::i18n::Language;
use constants::{defaults, logging};
use serde::{Deserialize, Serialize};

/// Language settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LanguageConfig {
    /// Language used when neither `--lang` nor a stored preference is available
    #[serde(default = "default_language")]
    pub default: Language,

    /// Override for the preference file (empty = `~/.polyprompt/language.toml`)
    #[serde(default)]
    pub preference_file: String,
}

impl Default for LanguageConfig {
    fn default() -> Self {
        Self {
            default: default_language(),
            preference_file: String::new(),
        }
    }
}

fn default_language() -> Language {
    Language::resolve(defaults::DEFAULT_LANGUAGE)
}

/// Random name generation settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NamesConfig {
    /// Fixed seed for reproducible names; unset uses a thread-local generator
    #[serde(default)]
    pub seed: Option<u64>,

    /// Names printed per invocation of `polyprompt name`
    #[serde(default = "default_name_count")]
    pub count: usize,
}

impl Default for NamesConfig {
    fn default() -> Self {
        Self {
            seed: None,
            count: default_name_count(),
        }
    }
}

fn default_name_count() -> usize {
    defaults::DEFAULT_NAME_COUNT
}

/// Logging settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Default level when `RUST_LOG` is not set (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl LoggingConfig {
    /// Configured level if recognised, otherwise the default level
    pub fn effective_level(&self) -> &str {
        let normalized = self.level.trim();
        match logging::ALLOWED_LEVELS
            .iter()
            .find(|level| level.eq_ignore_ascii_case(normalized))
        {
            Some(level) => *level,
            None => {
                tracing::warn!(
                    input = normalized,
                    allowed = ?logging::ALLOWED_LEVELS,
                    "Invalid log level provided; falling back to default"
                );
                defaults::DEFAULT_LOG_LEVEL
            }
        }
    }
}

fn default_log_level() -> String {
    defaults::DEFAULT_LOG_LEVEL.to_string()
}
