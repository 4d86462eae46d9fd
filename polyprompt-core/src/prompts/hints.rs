//! Builders for the optional hint blocks of the module development prompt and for the
//! error list of the code fix prompt.

use super::catalog::ModuleCategory;
use crate::config::constants::prompts::{FENCE_END, JS_FENCE};
use crate::i18n::Language;

/// "Target Category" block for the module development system prompt
pub fn category_hint(language: Language, category: ModuleCategory) -> String {
    let name = category.display_name(language);
    let description = category.description(language);
    match language {
        Language::Chinese => {
            format!("## 目标分类\n用户希望创建「{name}」类型的模块。\n分类说明：{description}")
        }
        Language::English => format!(
            "## Target Category\nUser wants to create a \"{name}\" type module.\nCategory description: {description}"
        ),
        Language::Arabic => format!(
            "## الفئة المستهدفة\nيريد المستخدم إنشاء وحدة من نوع \"{name}\".\nوصف الفئة: {description}"
        ),
    }
}

/// "Existing Code" block; the code is inserted verbatim inside a javascript fence
pub fn existing_code_hint(language: Language, code: &str) -> String {
    let heading = match language {
        Language::Chinese => "## 现有代码\n用户提供了现有代码，请在此基础上进行修改或优化：",
        Language::English => {
            "## Existing Code\nUser provided existing code, please modify or optimize based on this:"
        }
        Language::Arabic => {
            "## الكود الحالي\nقدم المستخدم كودًا موجودًا، يرجى التعديل أو التحسين بناءً على هذا:"
        }
    };
    format!("{heading}\n{JS_FENCE}\n{code}\n{FENCE_END}")
}

/// A syntax problem reported by a JavaScript checker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxIssue {
    pub line: usize,
    pub column: usize,
    pub message: String,
    pub suggestion: Option<String>,
}

impl SyntaxIssue {
    pub fn new(line: usize, column: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            column,
            message: message.into(),
            suggestion: None,
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

/// Error list text for the code fix prompt, one issue per line
pub fn format_syntax_errors(issues: &[SyntaxIssue]) -> String {
    issues
        .iter()
        .map(|issue| {
            let mut line = format!(
                "- Line {}, Column {}: {}",
                issue.line, issue.column, issue.message
            );
            if let Some(suggestion) = issue.suggestion.as_deref().filter(|s| !s.trim().is_empty())
            {
                line.push_str("\n  Suggestion: ");
                line.push_str(suggestion);
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}
