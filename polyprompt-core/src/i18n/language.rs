//! Supported languages and their locale attributes

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Writing direction used when a caller lays out composed text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextDirection {
    LeftToRight,
    RightToLeft,
}

/// Languages that every prompt template and name pool is written in.
///
/// The declaration order is significant: the first entry is the fallback returned by
/// [`Language::resolve`] for unknown codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Chinese,
    English,
    Arabic,
}

impl Language {
    /// Every supported language in declaration order
    pub const ALL: [Language; 3] = [Language::Chinese, Language::English, Language::Arabic];

    /// Stable code used in configuration files and on the command line
    pub fn code(self) -> &'static str {
        match self {
            Self::Chinese => "zh",
            Self::English => "en",
            Self::Arabic => "ar",
        }
    }

    /// English name of the language
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Chinese => "Chinese",
            Self::English => "English",
            Self::Arabic => "Arabic",
        }
    }

    /// Name of the language written in the language itself
    pub fn native_name(self) -> &'static str {
        match self {
            Self::Chinese => "中文",
            Self::English => "English",
            Self::Arabic => "العربية",
        }
    }

    pub fn direction(self) -> TextDirection {
        match self {
            Self::Arabic => TextDirection::RightToLeft,
            Self::Chinese | Self::English => TextDirection::LeftToRight,
        }
    }

    pub fn is_rtl(self) -> bool {
        self.direction() == TextDirection::RightToLeft
    }

    /// Language used when a code cannot be resolved
    pub fn fallback() -> Self {
        Self::ALL[0]
    }

    /// Strict lookup by code; `None` for anything outside the supported set
    pub fn parse(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|language| language.code() == code)
    }

    /// Resolve a code to a language, falling back to [`Language::fallback`] for
    /// unknown input instead of failing.
    pub fn resolve(code: &str) -> Self {
        match Self::parse(code) {
            Some(language) => language,
            None => {
                tracing::warn!(
                    input = code,
                    allowed = ?Self::allowed_values(),
                    fallback = Self::fallback().code(),
                    "Unknown language code; falling back to default"
                );
                Self::fallback()
            }
        }
    }

    /// Map an OS locale tag such as `zh-CN`, `ar_EG` or `fr-FR` to a language.
    /// Chinese and Arabic are recognised by primary subtag; everything else is English.
    pub fn from_system_locale(tag: &str) -> Self {
        let primary = tag
            .split(['-', '_', '.', '@'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match primary.as_str() {
            "zh" => Self::Chinese,
            "ar" => Self::Arabic,
            _ => Self::English,
        }
    }

    /// Enumerate the accepted codes for validation messaging
    pub fn allowed_values() -> &'static [&'static str] {
        &["zh", "en", "ar"]
    }
}

impl Default for Language {
    fn default() -> Self {
        Self::fallback()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for Language {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for Language {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::resolve(raw.trim()))
    }
}

/// Read the operating system locale and map it to a supported language
pub fn detect_system_language() -> Language {
    match sys_locale::get_locale() {
        Some(tag) => Language::from_system_locale(&tag),
        None => {
            tracing::debug!("system locale unavailable; assuming English");
            Language::English
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_unique_and_round_trip() {
        for language in Language::ALL {
            assert_eq!(Language::parse(language.code()), Some(language));
        }
        let codes: std::collections::HashSet<_> =
            Language::ALL.iter().map(|l| l.code()).collect();
        assert_eq!(codes.len(), Language::ALL.len());
        assert_eq!(Language::allowed_values().len(), Language::ALL.len());
    }

    #[test]
    fn unknown_codes_resolve_to_first_declared_language() {
        assert_eq!(Language::resolve("fr"), Language::Chinese);
        assert_eq!(Language::resolve(""), Language::Chinese);
        assert_eq!(Language::resolve("EN"), Language::Chinese);
        assert_eq!(Language::resolve("ar"), Language::Arabic);
    }

    #[test]
    fn only_arabic_is_right_to_left() {
        assert!(Language::Arabic.is_rtl());
        assert!(!Language::Chinese.is_rtl());
        assert_eq!(Language::English.direction(), TextDirection::LeftToRight);
    }

    #[test]
    fn system_locale_mapping() {
        assert_eq!(Language::from_system_locale("zh-CN"), Language::Chinese);
        assert_eq!(Language::from_system_locale("zh_TW.UTF-8"), Language::Chinese);
        assert_eq!(Language::from_system_locale("ar_EG"), Language::Arabic);
        assert_eq!(Language::from_system_locale("fr-FR"), Language::English);
        assert_eq!(Language::from_system_locale(""), Language::English);
    }

    #[test]
    fn deserializes_with_fallback() {
        #[derive(Deserialize)]
        struct Wrapper {
            language: Language,
        }
        let parsed: Wrapper = toml::from_str("language = \"ar\"").unwrap();
        assert_eq!(parsed.language, Language::Arabic);
        let fallback: Wrapper = toml::from_str("language = \"klingon\"").unwrap();
        assert_eq!(fallback.language, Language::Chinese);
    }
}
