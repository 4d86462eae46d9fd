//! Persisted "current language" preference.
//!
//! The composition functions never read this store; callers resolve the current
//! [`Language`] once and pass it explicitly.

use super::language::{Language, detect_system_language};
use crate::config::constants::defaults;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;

#[derive(Debug, thiserror::Error)]
pub enum PreferenceError {
    #[error("Failed to access preference file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse preference file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("Failed to serialize preferences: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Get/set contract for the process-external language preference
#[async_trait]
pub trait LanguagePreferenceStore: Send + Sync {
    /// Current language; the system locale when nothing has been stored yet
    async fn current_language(&self) -> Result<Language, PreferenceError>;

    /// Persist a new current language and mark it as explicitly chosen
    async fn set_language(&self, language: Language) -> Result<(), PreferenceError>;

    /// Whether the user has ever picked a language explicitly
    async fn has_selected_language(&self) -> Result<bool, PreferenceError>;
}

/// On-disk representation of the preference
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct LanguagePreference {
    #[serde(default)]
    pub language: Option<Language>,
    #[serde(default)]
    pub language_selected: bool,
}

impl LanguagePreference {
    fn effective_language(&self) -> Language {
        self.language.unwrap_or_else(detect_system_language)
    }
}

/// TOML file backed store that survives process restarts
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `~/.polyprompt/language.toml`, or relative to the working directory
    /// when no home directory can be determined
    pub fn at_default_location() -> Self {
        Self::new(default_preference_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<LanguagePreference, PreferenceError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(LanguagePreference::default());
            }
            Err(source) => {
                return Err(PreferenceError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        toml::from_str(&content).map_err(|source| PreferenceError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    async fn store(&self, preference: &LanguagePreference) -> Result<(), PreferenceError> {
        let content = toml::to_string_pretty(preference)?;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|source| PreferenceError::Io {
                        path: parent.to_path_buf(),
                        source,
                    })?;
            }
        }
        tokio::fs::write(&self.path, content)
            .await
            .map_err(|source| PreferenceError::Io {
                path: self.path.clone(),
                source,
            })
    }
}

#[async_trait]
impl LanguagePreferenceStore for FilePreferenceStore {
    async fn current_language(&self) -> Result<Language, PreferenceError> {
        Ok(self.load().await?.effective_language())
    }

    async fn set_language(&self, language: Language) -> Result<(), PreferenceError> {
        let preference = LanguagePreference {
            language: Some(language),
            language_selected: true,
        };
        self.store(&preference).await?;
        tracing::debug!(language = language.code(), path = %self.path.display(), "language preference saved");
        Ok(())
    }

    async fn has_selected_language(&self) -> Result<bool, PreferenceError> {
        Ok(self.load().await?.language_selected)
    }
}

/// In-process store, useful for embedding and tests
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    inner: RwLock<LanguagePreference>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with a language that has not been explicitly selected
    pub fn with_initial(language: Language) -> Self {
        Self {
            inner: RwLock::new(LanguagePreference {
                language: Some(language),
                language_selected: false,
            }),
        }
    }
}

#[async_trait]
impl LanguagePreferenceStore for MemoryPreferenceStore {
    async fn current_language(&self) -> Result<Language, PreferenceError> {
        Ok(self.inner.read().await.effective_language())
    }

    async fn set_language(&self, language: Language) -> Result<(), PreferenceError> {
        let mut guard = self.inner.write().await;
        guard.language = Some(language);
        guard.language_selected = true;
        Ok(())
    }

    async fn has_selected_language(&self) -> Result<bool, PreferenceError> {
        Ok(self.inner.read().await.language_selected)
    }
}

pub fn default_preference_path() -> PathBuf {
    match dirs::home_dir() {
        Some(home) => home
            .join(defaults::CONFIG_DIR)
            .join(defaults::PREFERENCE_FILE_NAME),
        None => PathBuf::from(defaults::CONFIG_DIR).join(defaults::PREFERENCE_FILE_NAME),
    }
}
