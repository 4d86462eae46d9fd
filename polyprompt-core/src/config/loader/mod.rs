use crate::config::constants::defaults;
use crate::config::{LanguageConfig, LoggingConfig, NamesConfig};
use crate::i18n::FilePreferenceStore;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure for polyprompt
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PolypromptConfig {
    /// Language defaults and preference storage
    #[serde(default)]
    pub language: LanguageConfig,

    /// Random name generation
    #[serde(default)]
    pub names: NamesConfig,

    /// Logging verbosity
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl PolypromptConfig {
    /// Preference store configured by `[language] preference_file`
    pub fn preference_store(&self, workspace_root: Option<&Path>) -> FilePreferenceStore {
        let configured = self.language.preference_file.trim();
        if configured.is_empty() {
            return FilePreferenceStore::at_default_location();
        }
        FilePreferenceStore::new(resolve_path(configured, workspace_root))
    }

    /// Create sample configuration file
    pub fn create_sample_config<P: AsRef<Path>>(output: P) -> Result<()> {
        let output = output.as_ref();
        let default_config = PolypromptConfig::default();
        let config_content = toml::to_string_pretty(&default_config)
            .context("Failed to serialize default configuration")?;

        if let Some(parent) = output.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create directory: {}", parent.display())
                })?;
            }
        }

        fs::write(output, config_content)
            .with_context(|| format!("Failed to write config file: {}", output.display()))?;

        Ok(())
    }
}

/// Configuration manager for loading and validating configurations
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config: PolypromptConfig,
    config_path: Option<PathBuf>,
}

impl ConfigManager {
    /// Load configuration from the default locations
    pub fn load() -> Result<Self> {
        Self::load_from_workspace(std::env::current_dir()?)
    }

    /// Load configuration from a specific workspace.
    ///
    /// Lookup order: `<workspace>/polyprompt.toml`, `<workspace>/.polyprompt/polyprompt.toml`,
    /// `~/.polyprompt/polyprompt.toml`, then built-in defaults.
    pub fn load_from_workspace(workspace: impl AsRef<Path>) -> Result<Self> {
        let workspace = workspace.as_ref();

        let mut candidates = vec![
            workspace.join(defaults::CONFIG_FILE_NAME),
            workspace
                .join(defaults::CONFIG_DIR)
                .join(defaults::CONFIG_FILE_NAME),
        ];
        if let Some(home_dir) = dirs::home_dir() {
            candidates.push(
                home_dir
                    .join(defaults::CONFIG_DIR)
                    .join(defaults::CONFIG_FILE_NAME),
            );
        }

        for candidate in candidates {
            if candidate.exists() {
                return Self::load_from_file(&candidate);
            }
        }

        tracing::debug!(workspace = %workspace.display(), "no configuration file found; using defaults");
        Ok(Self {
            config: PolypromptConfig::default(),
            config_path: None,
        })
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: PolypromptConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        tracing::debug!(path = %path.display(), "configuration loaded");
        Ok(Self {
            config,
            config_path: Some(path.to_path_buf()),
        })
    }

    /// Get the loaded configuration
    pub fn config(&self) -> &PolypromptConfig {
        &self.config
    }

    /// Get the configuration file path (if loaded from file)
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }
}

fn resolve_path(input: &str, workspace_root: Option<&Path>) -> PathBuf {
    if let Some(stripped) = input
        .strip_prefix("~/")
        .or_else(|| input.strip_prefix("~\\"))
    {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
        return PathBuf::from(stripped);
    }

    let candidate = Path::new(input);
    if candidate.is_absolute() {
        return candidate.to_path_buf();
    }

    if let Some(root) = workspace_root {
        return root.join(candidate);
    }

    candidate.to_path_buf()
}
