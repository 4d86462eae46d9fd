//! System prompt for generating WebToApp extension modules.

use super::catalog::{category_listing, render_output_schema, run_at_listing};
use super::sections::{Section, SectionId};
use crate::config::constants::prompts::{FENCE_END, JSON_FENCE};
use crate::i18n::{Language, LocalizedText};

/// Inputs of the module development system prompt.
///
/// The hints are complete blocks (see [`super::hints`]); blank values drop the
/// corresponding section.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModuleDevRequest<'a> {
    pub category_hint: &'a str,
    pub existing_code_hint: &'a str,
    pub native_bridge_api: &'a str,
}

const ROLE: LocalizedText = LocalizedText::new(
    "你是一个专业的 WebToApp 扩展模块开发专家。你的任务是根据用户需求生成高质量的扩展模块代码。",
    "You are a professional WebToApp extension module development expert. Your task is to generate high-quality extension module code based on user requirements.",
    "أنت خبير محترف في تطوير وحدات إضافات WebToApp. مهمتك هي إنشاء كود وحدات إضافية عالية الجودة بناءً على متطلبات المستخدم.",
);

const SYSTEM_DESCRIPTION: LocalizedText = LocalizedText::new(
    r#"## 扩展模块系统说明
WebToApp 扩展模块是注入到网页中执行的 JavaScript/CSS 代码，类似于浏览器扩展或油猴脚本。
模块会在 WebView 加载网页时自动注入执行。"#,
    r#"## Extension Module System Description
WebToApp extension modules are JavaScript/CSS code injected into web pages, similar to browser extensions or Tampermonkey scripts.
Modules are automatically injected and executed when WebView loads web pages."#,
    r#"## وصف نظام الوحدات الإضافية
وحدات WebToApp الإضافية هي كود JavaScript/CSS يتم حقنه في صفحات الويب، مشابه لإضافات المتصفح أو سكريبتات Tampermonkey.
يتم حقن الوحدات وتنفيذها تلقائيًا عند تحميل WebView لصفحات الويب."#,
);

const BUILTIN_API: LocalizedText = LocalizedText::new(
    r#"## 可用的内置 API

### 模块配置 API
```javascript
// 获取用户配置值
getConfig(key: string, defaultValue: any): any

// 模块信息对象
__MODULE_INFO__ = { id: string, name: string, version: string }

// 用户配置值对象
__MODULE_CONFIG__ = { [key: string]: any }
```"#,
    r#"## Available Built-in APIs

### Module Configuration API
```javascript
// Get user configuration value
getConfig(key: string, defaultValue: any): any

// Module information object
__MODULE_INFO__ = { id: string, name: string, version: string }

// User configuration values object
__MODULE_CONFIG__ = { [key: string]: any }
```"#,
    r#"## واجهات برمجة التطبيقات المدمجة المتاحة

### واجهة برمجة تطبيقات تكوين الوحدة
```javascript
// الحصول على قيمة تكوين المستخدم
getConfig(key: string, defaultValue: any): any

// كائن معلومات الوحدة
__MODULE_INFO__ = { id: string, name: string, version: string }

// كائن قيم تكوين المستخدم
__MODULE_CONFIG__ = { [key: string]: any }
```"#,
);

const CODE_STANDARDS: LocalizedText = LocalizedText::new(
    r#"## 代码规范要求
1. 使用 'use strict' 严格模式
2. 代码已被包装在 IIFE 中，无需再次包装
3. 使用 const/let 而非 var
4. 使用 === 而非 ==
5. 添加适当的错误处理 try-catch
6. 使用 MutationObserver 监听动态内容
7. 避免使用 eval、document.write 等不安全函数
8. 添加清晰的注释说明
9. 优先使用 NativeBridge API 实现原生功能（如保存图片、分享、震动等）"#,
    r#"## Code Standards Requirements
1. Use 'use strict' strict mode
2. Code is already wrapped in IIFE, no need to wrap again
3. Use const/let instead of var
4. Use === instead of ==
5. Add appropriate error handling with try-catch
6. Use MutationObserver to monitor dynamic content
7. Avoid using unsafe functions like eval, document.write
8. Add clear comments
9. Prefer NativeBridge API for native features (like saving images, sharing, vibration, etc.)"#,
    r#"## متطلبات معايير الكود
1. استخدم الوضع الصارم 'use strict'
2. الكود ملفوف بالفعل في IIFE، لا حاجة للف مرة أخرى
3. استخدم const/let بدلاً من var
4. استخدم === بدلاً من ==
5. أضف معالجة الأخطاء المناسبة باستخدام try-catch
6. استخدم MutationObserver لمراقبة المحتوى الديناميكي
7. تجنب استخدام الدوال غير الآمنة مثل eval، document.write
8. أضف تعليقات واضحة
9. فضّل استخدام NativeBridge API للميزات الأصلية (مثل حفظ الصور، المشاركة، الاهتزاز، إلخ)"#,
);

const CATEGORIES_HEADING: LocalizedText = LocalizedText::new(
    "## 模块分类\n可用分类：",
    "## Module Categories\nAvailable categories: ",
    "## فئات الوحدات\nالفئات المتاحة: ",
);

const TIMING_HEADING: LocalizedText =
    LocalizedText::new("## 执行时机", "## Execution Timing", "## توقيت التنفيذ");

const OUTPUT_FORMAT_HEADING: LocalizedText = LocalizedText::new(
    "## 输出格式要求\n请严格按照以下 JSON 格式输出，不要添加任何其他内容：",
    "## Output Format Requirements\nPlease strictly follow the JSON format below, do not add any other content:",
    "## متطلبات تنسيق الإخراج\nيرجى اتباع تنسيق JSON أدناه بدقة، لا تضف أي محتوى آخر:",
);

const IMPORTANT_NOTES: LocalizedText = LocalizedText::new(
    r#"## 重要提示
1. js_code 中的代码必须是可直接执行的，不需要 IIFE 包装
2. 字符串中的特殊字符需要正确转义
3. 如果用户没有指定 URL 匹配规则，url_matches 留空数组表示匹配所有网站
4. config_items 用于让用户自定义模块行为，如果不需要配置项则留空数组
5. 当需要保存图片/视频、分享、复制、震动等原生功能时，使用 NativeBridge API"#,
    r#"## Important Notes
1. Code in js_code must be directly executable, no IIFE wrapper needed
2. Special characters in strings need to be properly escaped
3. If user doesn't specify URL matching rules, leave url_matches as empty array to match all websites
4. config_items is for users to customize module behavior, leave empty array if no config items needed
5. Use NativeBridge API when native features like saving images/videos, sharing, copying, vibration are needed"#,
    r#"## ملاحظات مهمة
1. يجب أن يكون الكود في js_code قابلاً للتنفيذ مباشرة، لا حاجة لغلاف IIFE
2. يجب تهريب الأحرف الخاصة في السلاسل بشكل صحيح
3. إذا لم يحدد المستخدم قواعد مطابقة URL، اترك url_matches كمصفوفة فارغة لمطابقة جميع المواقع
4. config_items للمستخدمين لتخصيص سلوك الوحدة، اترك مصفوفة فارغة إذا لم تكن هناك حاجة لعناصر التكوين
5. استخدم NativeBridge API عند الحاجة إلى ميزات أصلية مثل حفظ الصور/الفيديو، المشاركة، النسخ، الاهتزاز"#,
);

pub(super) fn sections<'a>(language: Language, request: ModuleDevRequest<'a>) -> Vec<Section<'a>> {
    vec![
        Section::fixed(SectionId::Role, ROLE.get(language)),
        Section::fixed(SectionId::SystemDescription, SYSTEM_DESCRIPTION.get(language)),
        Section::fixed(SectionId::BuiltinApi, BUILTIN_API.get(language)),
        Section::when_not_blank(SectionId::NativeBridgeApi, request.native_bridge_api, |api| {
            api.to_string()
        }),
        Section::fixed(SectionId::CodeStandards, CODE_STANDARDS.get(language)),
        Section::always(SectionId::ModuleCategories, move || {
            format!(
                "{}{}",
                CATEGORIES_HEADING.get(language),
                category_listing(language)
            )
        }),
        Section::always(SectionId::ExecutionTiming, move || {
            format!("{}\n{}", TIMING_HEADING.get(language), run_at_listing(language))
        }),
        Section::when_not_blank(SectionId::CategoryHint, request.category_hint, |hint| {
            hint.to_string()
        }),
        Section::when_not_blank(
            SectionId::ExistingCodeHint,
            request.existing_code_hint,
            |hint| hint.to_string(),
        ),
        Section::always(SectionId::OutputFormat, move || {
            format!(
                "{}\n\n{JSON_FENCE}\n{}\n{FENCE_END}",
                OUTPUT_FORMAT_HEADING.get(language),
                render_output_schema(language)
            )
        }),
        Section::fixed(SectionId::ImportantNotes, IMPORTANT_NOTES.get(language)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompts::sections::{compose_sections, present_ids};

    #[test]
    fn optional_sections_follow_blank_inputs() {
        let ids = present_ids(&sections(Language::English, ModuleDevRequest::default()));
        assert_eq!(
            ids,
            vec![
                SectionId::Role,
                SectionId::SystemDescription,
                SectionId::BuiltinApi,
                SectionId::CodeStandards,
                SectionId::ModuleCategories,
                SectionId::ExecutionTiming,
                SectionId::OutputFormat,
                SectionId::ImportantNotes,
            ]
        );
    }

    #[test]
    fn hints_are_placed_between_timing_and_output_format() {
        let request = ModuleDevRequest {
            category_hint: "## Target Category\nTHEME",
            existing_code_hint: "## Existing Code\nconsole.log(1);",
            native_bridge_api: "## NativeBridge API\nNativeBridge.vibrate(ms)",
        };
        let prompt = compose_sections(sections(Language::English, request));
        let bridge = prompt.find("NativeBridge.vibrate(ms)").unwrap();
        let standards = prompt.find("## Code Standards Requirements").unwrap();
        let timing = prompt.find("## Execution Timing").unwrap();
        let category = prompt.find("## Target Category").unwrap();
        let existing = prompt.find("## Existing Code\n").unwrap();
        let output = prompt.find("## Output Format Requirements").unwrap();
        assert!(bridge < standards);
        assert!(timing < category && category < existing && existing < output);
        assert!(!prompt.contains("\n\n\n"));
    }

    #[test]
    fn chinese_prompt_keeps_schema_tags_in_ascii() {
        let prompt = compose_sections(sections(Language::Chinese, ModuleDevRequest::default()));
        assert!(prompt.starts_with("你是一个专业的 WebToApp 扩展模块开发专家"));
        assert!(prompt.contains("\"category\": \"分类名称（如 CONTENT_FILTER）\""));
        assert!(prompt.contains("- DOCUMENT_END: DOM 加载完成后执行（推荐）"));
        assert!(prompt.ends_with("使用 NativeBridge API"));
    }
}
