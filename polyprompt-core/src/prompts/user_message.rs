//! User message wrapping a module development request.

use super::sections::{Section, SectionId};
use crate::config::constants::prompts::{FENCE_END, JS_FENCE};
use crate::i18n::{Language, LocalizedText};

#[derive(Debug, Clone, Copy, Default)]
pub struct UserMessageRequest<'a> {
    pub requirement: &'a str,
    pub category_name: Option<&'a str>,
    pub existing_code: Option<&'a str>,
}

const INTRO: LocalizedText = LocalizedText::new(
    "请根据以下需求开发一个扩展模块：",
    "Please develop an extension module based on the following requirements:",
    "يرجى تطوير وحدة إضافية بناءً على المتطلبات التالية:",
);

const REQUIREMENT_LABEL: LocalizedText = LocalizedText::new(
    "**需求描述**：",
    "**Requirement Description**: ",
    "**وصف المتطلبات**: ",
);

const CATEGORY_LABEL: LocalizedText = LocalizedText::new(
    "**目标分类**：",
    "**Target Category**: ",
    "**الفئة المستهدفة**: ",
);

const EXISTING_CODE_LABEL: LocalizedText = LocalizedText::new(
    "**现有代码**（请在此基础上修改）：",
    "**Existing Code** (please modify based on this):",
    "**الكود الحالي** (يرجى التعديل بناءً على هذا):",
);

const CLOSING: LocalizedText = LocalizedText::new(
    "请生成完整的模块代码，并确保代码质量和安全性。",
    "Please generate complete module code and ensure code quality and security.",
    "يرجى إنشاء كود الوحدة الكامل وضمان جودة الكود والأمان.",
);

pub(super) fn sections<'a>(
    language: Language,
    request: UserMessageRequest<'a>,
) -> Vec<Section<'a>> {
    let requirement = request.requirement;
    vec![
        Section::fixed(SectionId::RequestIntro, INTRO.get(language)),
        Section::always(SectionId::Requirement, move || {
            format!("{}{requirement}", REQUIREMENT_LABEL.get(language))
        }),
        Section::when_not_blank(
            SectionId::TargetCategory,
            request.category_name.unwrap_or_default(),
            move |name| format!("{}{name}", CATEGORY_LABEL.get(language)),
        ),
        Section::when_not_blank(
            SectionId::ExistingCode,
            request.existing_code.unwrap_or_default(),
            move |code| {
                format!(
                    "{}\n{JS_FENCE}\n{code}\n{FENCE_END}",
                    EXISTING_CODE_LABEL.get(language)
                )
            },
        ),
        Section::fixed(SectionId::Closing, CLOSING.get(language)),
    ]
}
