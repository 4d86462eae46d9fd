//! Prompts for repairing JavaScript that failed a syntax check.

use super::sections::{Section, SectionId};
use crate::config::constants::prompts::{FENCE_END, JS_FENCE};
use crate::i18n::{Language, LocalizedText};

#[derive(Debug, Clone, Copy)]
pub struct CodeFixRequest<'a> {
    pub error_messages: &'a str,
    pub code: &'a str,
    pub attempt: u32,
    pub max_attempts: u32,
}

const ERROR_LIST_LABEL: LocalizedText =
    LocalizedText::new("**错误列表**：", "**Error List**:", "**قائمة الأخطاء**:");

const ORIGINAL_CODE_LABEL: LocalizedText =
    LocalizedText::new("**原始代码**：", "**Original Code**:", "**الكود الأصلي**:");

const OUTPUT_RULES: LocalizedText = LocalizedText::new(
    "请只输出修复后的完整代码，使用 ```javascript 代码块包裹。\n不要添加任何解释，只输出代码。",
    "Please output only the fixed complete code, wrapped in ```javascript code block.\nDo not add any explanations, only output the code.",
    "يرجى إخراج الكود المصحح الكامل فقط، ملفوفًا في كتلة كود ```javascript.\nلا تضف أي تفسيرات، فقط أخرج الكود.",
);

const FIX_SYSTEM_ROLE: LocalizedText = LocalizedText::new(
    "你是一个 JavaScript 代码修复专家。请修复代码中的语法错误，保持原有功能不变。只输出修复后的代码，不要添加任何解释。",
    "You are a JavaScript code fix expert. Please fix syntax errors in the code while keeping the original functionality. Only output the fixed code, do not add any explanations.",
    "أنت خبير في إصلاح كود JavaScript. يرجى إصلاح أخطاء بناء الجملة في الكود مع الحفاظ على الوظائف الأصلية. أخرج الكود المصحح فقط، لا تضف أي تفسيرات.",
);

fn instruction(language: Language, attempt: u32, max_attempts: u32) -> String {
    match language {
        Language::Chinese => format!(
            "请修复以下 JavaScript 代码中的语法错误（第 {attempt}/{max_attempts} 次尝试）："
        ),
        Language::English => format!(
            "Please fix the syntax errors in the following JavaScript code (Attempt {attempt}/{max_attempts}):"
        ),
        Language::Arabic => format!(
            "يرجى إصلاح أخطاء بناء الجملة في كود JavaScript التالي (المحاولة {attempt}/{max_attempts}):"
        ),
    }
}

pub(super) fn sections<'a>(language: Language, request: CodeFixRequest<'a>) -> Vec<Section<'a>> {
    let CodeFixRequest {
        error_messages,
        code,
        attempt,
        max_attempts,
    } = request;
    vec![
        Section::always(SectionId::FixInstruction, move || {
            instruction(language, attempt, max_attempts)
        }),
        Section::always(SectionId::ErrorList, move || {
            format!("{}\n{error_messages}", ERROR_LIST_LABEL.get(language))
        }),
        Section::always(SectionId::OriginalCode, move || {
            format!(
                "{}\n{JS_FENCE}\n{code}\n{FENCE_END}",
                ORIGINAL_CODE_LABEL.get(language)
            )
        }),
        Section::fixed(SectionId::FixOutputRules, OUTPUT_RULES.get(language)),
    ]
}

pub(super) fn system_sections<'a>(language: Language) -> Vec<Section<'a>> {
    vec![Section::fixed(SectionId::Role, FIX_SYSTEM_ROLE.get(language))]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompts::sections::compose_sections;

    #[test]
    fn english_fix_prompt_layout() {
        let request = CodeFixRequest {
            error_messages: "- Line 1, Column 9: Unexpected token ';'",
            code: "var x = ;",
            attempt: 1,
            max_attempts: 3,
        };
        assert_eq!(
            compose_sections(sections(Language::English, request)),
            "Please fix the syntax errors in the following JavaScript code (Attempt 1/3):\n\n\
             **Error List**:\n- Line 1, Column 9: Unexpected token ';'\n\n\
             **Original Code**:\n```javascript\nvar x = ;\n```\n\n\
             Please output only the fixed complete code, wrapped in ```javascript code block.\n\
             Do not add any explanations, only output the code."
        );
    }

    #[test]
    fn code_keeps_leading_indentation() {
        let request = CodeFixRequest {
            error_messages: "boom",
            code: "\n    let y = (;\n\t",
            attempt: 3,
            max_attempts: 3,
        };
        let prompt = compose_sections(sections(Language::Arabic, request));
        assert!(prompt.contains("```javascript\n\n    let y = (;\n\t\n```"));
        assert!(prompt.contains("(المحاولة 3/3)"));
    }

    #[test]
    fn system_prompt_is_single_role_section() {
        for language in Language::ALL {
            let prompt = compose_sections(system_sections(language));
            assert_eq!(prompt, FIX_SYSTEM_ROLE.get(language));
        }
    }
}
