//! System prompt for the HTML page coding assistant.

use super::sections::{Section, SectionId};
use crate::i18n::{Language, LocalizedText, list_separator};
use serde::{Deserialize, Serialize};

/// A page template chosen by the user
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct TemplateMeta {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub prompt_hint: String,
    #[serde(default)]
    pub color_scheme: Option<String>,
}

/// A reference design style chosen by the user
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct StyleMeta {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub colors: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlCodingRequest<'a> {
    pub rules: &'a [String],
    pub has_image_capability: bool,
    pub template: Option<&'a TemplateMeta>,
    pub style: Option<&'a StyleMeta>,
}

const ROLE: LocalizedText = LocalizedText::new(
    "你是移动端前端开发专家，为手机APP WebView创建HTML页面。",
    "You are a mobile frontend development expert, creating HTML pages for mobile APP WebView.",
    "أنت خبير تطوير واجهات أمامية للجوال، تقوم بإنشاء صفحات HTML لـ WebView في تطبيقات الجوال.",
);

const RESPONSE_RULES: LocalizedText = LocalizedText::new(
    "# 回复规则\n使用 Markdown 格式回复：**粗体**、*斜体*、`代码`、列表、> 引用等",
    "# Response Rules\nUse Markdown format: **bold**, *italic*, `code`, lists, > quotes, etc.",
    "# قواعد الرد\nاستخدم تنسيق Markdown: **غامق**، *مائل*، `كود`، قوائم، > اقتباسات، إلخ.",
);

const CODE_STANDARDS: LocalizedText = LocalizedText::new(
    r#"# 代码规范
1. 输出单个完整HTML文件，CSS/JS内嵌，禁止省略代码
2. 必须包含: `<meta name="viewport" content="width=device-width, initial-scale=1.0, maximum-scale=1.0, user-scalable=no">`
3. 使用相对单位(vw/vh/%/rem)，禁止固定像素宽度如width:375px
4. 可点击元素最小44x44px，禁止依赖hover效果
5. 使用Flexbox/Grid布局，overflow-x:hidden防止横向滚动"#,
    r#"# Code Standards
1. Output a single complete HTML file with embedded CSS/JS, never omit code
2. Must include: `<meta name="viewport" content="width=device-width, initial-scale=1.0, maximum-scale=1.0, user-scalable=no">`
3. Use relative units (vw/vh/%/rem), avoid fixed pixel widths like width:375px
4. Clickable elements minimum 44x44px, avoid relying on hover effects
5. Use Flexbox/Grid layout, overflow-x:hidden to prevent horizontal scrolling"#,
    r#"# معايير الكود
1. أخرج ملف HTML كامل واحد مع CSS/JS مدمجة، لا تحذف أي كود
2. يجب تضمين: `<meta name="viewport" content="width=device-width, initial-scale=1.0, maximum-scale=1.0, user-scalable=no">`
3. استخدم وحدات نسبية (vw/vh/%/rem)، تجنب العرض الثابت بالبكسل مثل width:375px
4. العناصر القابلة للنقر بحد أدنى 44x44px، تجنب الاعتماد على تأثيرات hover
5. استخدم تخطيط Flexbox/Grid، وoverflow-x:hidden لمنع التمرير الأفقي"#,
);

const USER_RULES_HEADING: LocalizedText = LocalizedText::new(
    "# 用户自定义规则",
    "# User Custom Rules",
    "# قواعد المستخدم المخصصة",
);

const TEMPLATE_HEADING: LocalizedText =
    LocalizedText::new("# 风格: ", "# Style: ", "# النمط: ");

const REFERENCE_HEADING: LocalizedText =
    LocalizedText::new("# 参考风格: ", "# Reference Style: ", "# النمط المرجعي: ");

const COLORS_LABEL: LocalizedText = LocalizedText::new("配色: ", "Colors: ", "الألوان: ");

const KEYWORDS_LABEL: LocalizedText =
    LocalizedText::new("关键词: ", "Keywords: ", "الكلمات المفتاحية: ");

/// Joins a template description with its prompt hint
const SENTENCE_BREAK: LocalizedText = LocalizedText::new("。", ". ", ". ");

const IMAGE_GENERATION: LocalizedText = LocalizedText::new(
    "# 图像生成\n使用generate_image工具生成图片，返回base64可直接用于img src",
    "# Image Generation\nUse generate_image tool to generate images, returns base64 for direct use in img src",
    "# توليد الصور\nاستخدم أداة generate_image لتوليد الصور، تُرجع base64 للاستخدام المباشر في img src",
);

fn render_user_rules(language: Language, rules: &[String]) -> String {
    let mut text = USER_RULES_HEADING.get(language).to_string();
    for (index, rule) in rules.iter().enumerate() {
        text.push_str(&format!("\n{}. {rule}", index + 1));
    }
    text
}

fn render_template(language: Language, template: &TemplateMeta) -> String {
    let mut text = format!(
        "{}{}\n{}{}{}",
        TEMPLATE_HEADING.get(language),
        template.name,
        template.description,
        SENTENCE_BREAK.get(language),
        template.prompt_hint
    );
    if let Some(colors) = template.color_scheme.as_deref() {
        text.push('\n');
        text.push_str(COLORS_LABEL.get(language));
        text.push_str(colors);
    }
    text
}

fn render_style(language: Language, style: &StyleMeta) -> String {
    let separator = list_separator(language);
    format!(
        "{}{}\n{}\n{}{}\n{}{}",
        REFERENCE_HEADING.get(language),
        style.name,
        style.description,
        KEYWORDS_LABEL.get(language),
        style.keywords.join(separator),
        COLORS_LABEL.get(language),
        style.colors.join(separator)
    )
}

pub(super) fn sections<'a>(language: Language, request: HtmlCodingRequest<'a>) -> Vec<Section<'a>> {
    let rules = request.rules;
    vec![
        Section::fixed(SectionId::Role, ROLE.get(language)),
        Section::fixed(SectionId::ResponseRules, RESPONSE_RULES.get(language)),
        Section::fixed(SectionId::CodeStandards, CODE_STANDARDS.get(language)),
        Section::when(SectionId::UserRules, !rules.is_empty(), move || {
            render_user_rules(language, rules)
        }),
        Section::when_some(SectionId::TemplateStyle, request.template, move |template| {
            render_template(language, template)
        }),
        Section::when_some(SectionId::ReferenceStyle, request.style, move |style| {
            render_style(language, style)
        }),
        Section::when(
            SectionId::ImageGeneration,
            request.has_image_capability,
            move || IMAGE_GENERATION.get(language).to_string(),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompts::sections::{compose_sections, present_ids};

    fn sample_template() -> TemplateMeta {
        TemplateMeta {
            name: "Glass".to_string(),
            description: "Frosted glass cards".to_string(),
            prompt_hint: "Use backdrop-filter blur".to_string(),
            color_scheme: Some("#0f172a / #38bdf8".to_string()),
        }
    }

    fn sample_style() -> StyleMeta {
        StyleMeta {
            name: "Ghibli".to_string(),
            description: "Hand-painted warmth".to_string(),
            keywords: vec!["soft".to_string(), "pastoral".to_string()],
            colors: vec!["#a3c9a8".to_string(), "#f6e7c1".to_string()],
        }
    }

    #[test]
    fn bare_prompt_has_three_sections() {
        let ids = present_ids(&sections(Language::English, HtmlCodingRequest::default()));
        assert_eq!(
            ids,
            vec![
                SectionId::Role,
                SectionId::ResponseRules,
                SectionId::CodeStandards
            ]
        );
    }

    #[test]
    fn rules_are_numbered_from_one() {
        let rules = vec!["Use Tailwind CDN".to_string(), "No alerts".to_string()];
        let request = HtmlCodingRequest {
            rules: &rules,
            ..Default::default()
        };
        let prompt = compose_sections(sections(Language::English, request));
        assert!(prompt.ends_with("# User Custom Rules\n1. Use Tailwind CDN\n2. No alerts"));
    }

    #[test]
    fn template_and_style_render_in_order() {
        let template = sample_template();
        let style = sample_style();
        let request = HtmlCodingRequest {
            rules: &[],
            has_image_capability: true,
            template: Some(&template),
            style: Some(&style),
        };
        let prompt = compose_sections(sections(Language::English, request));
        assert!(prompt.contains(
            "# Style: Glass\nFrosted glass cards. Use backdrop-filter blur\nColors: #0f172a / #38bdf8"
        ));
        assert!(prompt.contains(
            "# Reference Style: Ghibli\nHand-painted warmth\nKeywords: soft, pastoral\nColors: #a3c9a8, #f6e7c1"
        ));
        let style_at = prompt.find("# Reference Style").unwrap();
        let image_at = prompt.find("# Image Generation").unwrap();
        assert!(prompt.find("# Style: ").unwrap() < style_at && style_at < image_at);
    }

    #[test]
    fn chinese_lists_use_enumeration_comma() {
        let style = sample_style();
        let mut template = sample_template();
        template.color_scheme = None;
        let request = HtmlCodingRequest {
            rules: &[],
            has_image_capability: false,
            template: Some(&template),
            style: Some(&style),
        };
        let prompt = compose_sections(sections(Language::Chinese, request));
        assert!(prompt.contains("# 风格: Glass\nFrosted glass cards。Use backdrop-filter blur\n\n"));
        assert!(prompt.contains("关键词: soft、pastoral\n配色: #a3c9a8、#f6e7c1"));
        assert!(!prompt.contains("图像生成"));
    }

    #[test]
    fn template_meta_reads_from_json() {
        let template: TemplateMeta =
            serde_json::from_str(r#"{"name":"Neon","prompt_hint":"glow"}"#).unwrap();
        assert_eq!(template.name, "Neon");
        assert_eq!(template.color_scheme, None);
        assert!(template.description.is_empty());
    }
}
