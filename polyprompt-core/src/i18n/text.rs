use super::Language;

/// A fixed piece of text written once per supported language.
///
/// Construction requires every language, so a missing translation is a compile error
/// rather than a runtime lookup failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalizedText {
    pub zh: &'static str,
    pub en: &'static str,
    pub ar: &'static str,
}

impl LocalizedText {
    pub const fn new(zh: &'static str, en: &'static str, ar: &'static str) -> Self {
        Self { zh, en, ar }
    }

    pub const fn get(&self, language: Language) -> &'static str {
        match language {
            Language::Chinese => self.zh,
            Language::English => self.en,
            Language::Arabic => self.ar,
        }
    }
}

/// Separator used when a prompt lists keywords or colors inline
pub fn list_separator(language: Language) -> &'static str {
    match language {
        Language::Chinese => "、",
        Language::English | Language::Arabic => ", ",
    }
}
