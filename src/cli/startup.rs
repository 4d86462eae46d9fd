//! Startup: configuration loading, logging and output language resolution

use anyhow::Result;
use polyprompt_core::config::constants::defaults;
use polyprompt_core::config::{ConfigManager, LoggingConfig};
use polyprompt_core::i18n::{Language, LanguagePreferenceStore, PreferenceError};
use std::path::Path;
use tracing::Subscriber;
use tracing_subscriber::EnvFilter;

/// Loaded configuration and the log level it selects
#[derive(Debug)]
pub struct Settings {
    pub manager: ConfigManager,
    pub log_level: String,
}

/// Load the configuration and pick the log level (`--log-level` beats `[logging] level`).
///
/// Fallback warnings for rejected values go to the current subscriber, so callers run
/// this under [`bootstrap_subscriber`] before the real one is installed.
pub fn load_settings(
    config: Option<&Path>,
    workspace: &Path,
    log_level: Option<&str>,
) -> Result<Settings> {
    let manager = match config {
        Some(path) => ConfigManager::load_from_file(path)?,
        None => ConfigManager::load_from_workspace(workspace)?,
    };
    let log_level = match log_level {
        Some(level) => LoggingConfig {
            level: level.to_string(),
        }
        .effective_level()
        .to_string(),
        None => manager.config().logging.effective_level().to_string(),
    };
    Ok(Settings { manager, log_level })
}

fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("polyprompt={level},polyprompt_core={level}"))
    })
}

/// Stderr subscriber at the default level, active until the configuration is read
pub fn bootstrap_subscriber() -> impl Subscriber + Send + Sync {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(defaults::DEFAULT_LOG_LEVEL))
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish()
}

/// Logs go to stderr; stdout carries only the composed document
pub fn init_tracing(level: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

async fn saved_language(
    store: &dyn LanguagePreferenceStore,
) -> Result<Option<Language>, PreferenceError> {
    if store.has_selected_language().await? {
        Ok(Some(store.current_language().await?))
    } else {
        Ok(None)
    }
}

/// `--lang` wins, then an explicitly saved preference, then `[language] default`.
///
/// An unreadable preference store is logged and skipped rather than failing the command.
pub async fn resolve_language(
    flag: Option<&str>,
    store: &dyn LanguagePreferenceStore,
    configured: Language,
) -> Language {
    if let Some(code) = flag {
        return Language::resolve(code);
    }
    match saved_language(store).await {
        Ok(Some(language)) => language,
        Ok(None) => configured,
        Err(err) => {
            tracing::warn!(
                error = %err,
                fallback = configured.code(),
                "Ignoring unreadable language preference"
            );
            configured
        }
    }
}
