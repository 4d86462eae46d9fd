//! Localized prompt templates.
//!
//! Every prompt is an ordered list of sections (see [`sections`]). The registry maps a
//! language and a prompt kind to that list with an exhaustive match, and the section
//! composer renders it. The free functions below are the entry points most callers use.

pub mod catalog;
pub mod code_fix;
pub mod hints;
pub mod html_coding;
pub mod module_dev;
pub mod registry;
pub mod sections;
pub mod user_message;

pub use catalog::{ConfigItemType, ModuleCategory, RunAt};
pub use code_fix::CodeFixRequest;
pub use hints::{SyntaxIssue, category_hint, existing_code_hint, format_syntax_errors};
pub use html_coding::{HtmlCodingRequest, StyleMeta, TemplateMeta};
pub use module_dev::ModuleDevRequest;
pub use registry::{PromptKind, PromptRequest, compose, present_sections};
pub use sections::{Section, SectionId};
pub use user_message::UserMessageRequest;

use crate::i18n::Language;

/// System prompt for extension module generation. Blank arguments omit their section.
pub fn compose_module_dev_system_prompt(
    language: Language,
    category_hint: &str,
    existing_code_hint: &str,
    native_bridge_api: &str,
) -> String {
    compose(
        language,
        &PromptRequest::ModuleDev(ModuleDevRequest {
            category_hint,
            existing_code_hint,
            native_bridge_api,
        }),
    )
}

/// Code fix request; `code` and `error_messages` are inserted verbatim
pub fn compose_code_fix_prompt(
    language: Language,
    error_messages: &str,
    code: &str,
    attempt: u32,
    max_attempts: u32,
) -> String {
    compose(
        language,
        &PromptRequest::CodeFix(CodeFixRequest {
            error_messages,
            code,
            attempt,
            max_attempts,
        }),
    )
}

pub fn compose_code_fix_system_prompt(language: Language) -> String {
    compose(language, &PromptRequest::CodeFixSystem)
}

pub fn compose_user_message(
    language: Language,
    requirement: &str,
    category_name: Option<&str>,
    existing_code: Option<&str>,
) -> String {
    compose(
        language,
        &PromptRequest::UserMessage(UserMessageRequest {
            requirement,
            category_name,
            existing_code,
        }),
    )
}

pub fn compose_html_coding_system_prompt(
    language: Language,
    rules: &[String],
    has_image_capability: bool,
    template: Option<&TemplateMeta>,
    style: Option<&StyleMeta>,
) -> String {
    compose(
        language,
        &PromptRequest::HtmlCoding(HtmlCodingRequest {
            rules,
            has_image_capability,
            template,
            style,
        }),
    )
}
