//! Dispatch from (language, prompt kind) to section lists.

use super::code_fix::{self, CodeFixRequest};
use super::html_coding::{self, HtmlCodingRequest};
use super::module_dev::{self, ModuleDevRequest};
use super::sections::{Section, SectionId, compose_sections, present_ids};
use super::user_message::{self, UserMessageRequest};
use crate::i18n::Language;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PromptKind {
    ModuleDevSystemPrompt,
    CodeFixPrompt,
    CodeFixSystemPrompt,
    UserMessageTemplate,
    HtmlCodingSystemPrompt,
}

impl PromptKind {
    pub const ALL: [PromptKind; 5] = [
        Self::ModuleDevSystemPrompt,
        Self::CodeFixPrompt,
        Self::CodeFixSystemPrompt,
        Self::UserMessageTemplate,
        Self::HtmlCodingSystemPrompt,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::ModuleDevSystemPrompt => "module_dev_system_prompt",
            Self::CodeFixPrompt => "code_fix_prompt",
            Self::CodeFixSystemPrompt => "code_fix_system_prompt",
            Self::UserMessageTemplate => "user_message_template",
            Self::HtmlCodingSystemPrompt => "html_coding_system_prompt",
        }
    }
}

impl fmt::Display for PromptKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind-specific inputs of one composition
#[derive(Debug, Clone, Copy)]
pub enum PromptRequest<'a> {
    ModuleDev(ModuleDevRequest<'a>),
    CodeFix(CodeFixRequest<'a>),
    CodeFixSystem,
    UserMessage(UserMessageRequest<'a>),
    HtmlCoding(HtmlCodingRequest<'a>),
}

impl PromptRequest<'_> {
    pub fn kind(&self) -> PromptKind {
        match self {
            Self::ModuleDev(_) => PromptKind::ModuleDevSystemPrompt,
            Self::CodeFix(_) => PromptKind::CodeFixPrompt,
            Self::CodeFixSystem => PromptKind::CodeFixSystemPrompt,
            Self::UserMessage(_) => PromptKind::UserMessageTemplate,
            Self::HtmlCoding(_) => PromptKind::HtmlCodingSystemPrompt,
        }
    }
}

/// Ordered sections of the prompt for `request` in `language`
pub fn sections<'a>(language: Language, request: &PromptRequest<'a>) -> Vec<Section<'a>> {
    match *request {
        PromptRequest::ModuleDev(params) => module_dev::sections(language, params),
        PromptRequest::CodeFix(params) => code_fix::sections(language, params),
        PromptRequest::CodeFixSystem => code_fix::system_sections(language),
        PromptRequest::UserMessage(params) => user_message::sections(language, params),
        PromptRequest::HtmlCoding(params) => html_coding::sections(language, params),
    }
}

/// Compose the full document for `request` in `language`
pub fn compose(language: Language, request: &PromptRequest<'_>) -> String {
    let document = compose_sections(sections(language, request));
    tracing::debug!(
        language = %language,
        kind = %request.kind(),
        bytes = document.len(),
        "composed prompt"
    );
    document
}

/// Identities of the sections that `compose` would emit, in order
pub fn present_sections(language: Language, request: &PromptRequest<'_>) -> Vec<SectionId> {
    present_ids(&sections(language, request))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_requests() -> Vec<PromptRequest<'static>> {
        vec![
            PromptRequest::ModuleDev(ModuleDevRequest::default()),
            PromptRequest::CodeFix(CodeFixRequest {
                error_messages: "e",
                code: "c",
                attempt: 1,
                max_attempts: 3,
            }),
            PromptRequest::CodeFixSystem,
            PromptRequest::UserMessage(UserMessageRequest {
                requirement: "r",
                ..Default::default()
            }),
            PromptRequest::HtmlCoding(HtmlCodingRequest::default()),
        ]
    }

    #[test]
    fn requests_cover_every_kind() {
        let kinds: Vec<PromptKind> = sample_requests().iter().map(PromptRequest::kind).collect();
        assert_eq!(kinds, PromptKind::ALL);
    }

    #[test]
    fn every_language_and_kind_produces_text() {
        for language in Language::ALL {
            for request in sample_requests() {
                let document = compose(language, &request);
                assert!(!document.trim().is_empty(), "{language}/{}", request.kind());
                assert_eq!(document.trim_end(), document);
            }
        }
    }

    #[test]
    fn kind_names_are_snake_case() {
        assert_eq!(PromptKind::CodeFixPrompt.to_string(), "code_fix_prompt");
    }
}
