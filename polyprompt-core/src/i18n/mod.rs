//! Language resolution and the persisted language preference

pub mod language;
pub mod preference;
pub mod text;

pub use language::{Language, TextDirection, detect_system_language};
pub use preference::{
    FilePreferenceStore, LanguagePreference, LanguagePreferenceStore, MemoryPreferenceStore,
    PreferenceError,
};
pub use text::{LocalizedText, list_separator};
