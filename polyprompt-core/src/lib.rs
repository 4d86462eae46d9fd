//! # polyprompt-core - Localized prompt composition
//!
//! `polyprompt-core` assembles the AI prompts used to build WebToApp extension
//! modules and HTML pages, in Chinese, English or Arabic, plus random app names.
//!
//! ## Highlights
//!
//! - **Structural parity**: each prompt is an ordered list of sections. Only the
//!   section text is localized, so the same inputs yield the same section sequence in
//!   every language.
//! - **Schema parity**: the JSON output format requested from the model is rendered from
//!   typed enums, so category tags, timings and field names never drift between
//!   languages.
//! - **Literal insertion**: caller text (requirements, code, error lists) is inserted
//!   as-is and never escaped or interpreted.
//! - **Injectable randomness**: name generation accepts any `rand::Rng`, so draws are
//!   reproducible with a seeded generator.
//! - **Configuration-first**: defaults come from `polyprompt.toml` with constants
//!   centralized in `config::constants`.
//!
//! ## Architecture Overview
//!
//! - `i18n/`: supported languages, fallback resolution and the persisted language
//!   preference.
//! - `prompts/`: section composer, per-kind templates, the module catalog and the
//!   registry dispatching over language and prompt kind.
//! - `names/`: word pools and the random name composer.
//! - `config/`: configuration loader and constants.
//!
//! ## Quickstart
//!
//! ```rust
//! use polyprompt_core::{Language, compose_user_message};
//!
//! let message = compose_user_message(Language::English, "dark mode toggle", Some("THEME"), None);
//! assert!(message.contains("dark mode toggle"));
//! ```

pub mod config;
pub mod i18n;
pub mod names;
pub mod prompts;

pub use config::{ConfigManager, PolypromptConfig};
pub use i18n::{
    FilePreferenceStore, Language, LanguagePreferenceStore, MemoryPreferenceStore,
    PreferenceError, TextDirection,
};
pub use names::{NamePool, NamePoolError, generate_random_name, generate_random_name_with};
pub use prompts::{
    PromptKind, PromptRequest, SectionId, StyleMeta, TemplateMeta, compose,
    compose_code_fix_prompt, compose_code_fix_system_prompt, compose_html_coding_system_prompt,
    compose_module_dev_system_prompt, compose_user_message, present_sections,
};
