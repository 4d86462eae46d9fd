//! Extension module vocabulary shared by the module development prompts.
//!
//! The category list, execution timings and config item types that appear in the prompt
//! body and in its JSON output example are all rendered from the enums below, so every
//! language lists exactly the same identifiers.

use crate::i18n::{Language, LocalizedText};
use serde_json::{Value, json};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModuleCategory {
    ContentFilter,
    ContentEnhance,
    StyleModifier,
    Theme,
    FunctionEnhance,
    Automation,
    Navigation,
    DataExtract,
    Media,
    Video,
    Image,
    Security,
    Developer,
    Other,
}

impl ModuleCategory {
    pub const ALL: [ModuleCategory; 14] = [
        Self::ContentFilter,
        Self::ContentEnhance,
        Self::StyleModifier,
        Self::Theme,
        Self::FunctionEnhance,
        Self::Automation,
        Self::Navigation,
        Self::DataExtract,
        Self::Media,
        Self::Video,
        Self::Image,
        Self::Security,
        Self::Developer,
        Self::Other,
    ];

    /// Identifier the model must echo back in the `category` field
    pub fn tag(self) -> &'static str {
        match self {
            Self::ContentFilter => "CONTENT_FILTER",
            Self::ContentEnhance => "CONTENT_ENHANCE",
            Self::StyleModifier => "STYLE_MODIFIER",
            Self::Theme => "THEME",
            Self::FunctionEnhance => "FUNCTION_ENHANCE",
            Self::Automation => "AUTOMATION",
            Self::Navigation => "NAVIGATION",
            Self::DataExtract => "DATA_EXTRACT",
            Self::Media => "MEDIA",
            Self::Video => "VIDEO",
            Self::Image => "IMAGE",
            Self::Security => "SECURITY",
            Self::Developer => "DEVELOPER",
            Self::Other => "OTHER",
        }
    }

    /// Parse a category tag, ignoring ASCII case
    pub fn from_tag(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.tag().eq_ignore_ascii_case(trimmed))
    }

    pub fn display_name(self, language: Language) -> &'static str {
        self.labels().0.get(language)
    }

    pub fn description(self, language: Language) -> &'static str {
        self.labels().1.get(language)
    }

    fn labels(self) -> (LocalizedText, LocalizedText) {
        match self {
            Self::ContentFilter => (
                LocalizedText::new("内容过滤", "Content Filter", "تصفية المحتوى"),
                LocalizedText::new(
                    "屏蔽广告、弹窗和不需要的页面元素",
                    "Hide ads, pop-ups and unwanted page elements",
                    "إخفاء الإعلانات والنوافذ المنبثقة وعناصر الصفحة غير المرغوب فيها",
                ),
            ),
            Self::ContentEnhance => (
                LocalizedText::new("内容增强", "Content Enhancement", "تحسين المحتوى"),
                LocalizedText::new(
                    "补充信息或改进页面内容的呈现方式",
                    "Add information or improve how page content is presented",
                    "إضافة معلومات أو تحسين طريقة عرض محتوى الصفحة",
                ),
            ),
            Self::StyleModifier => (
                LocalizedText::new("样式修改", "Style Modifier", "تعديل الأنماط"),
                LocalizedText::new(
                    "修改页面的字体、颜色、间距和布局",
                    "Change fonts, colors, spacing and layout of pages",
                    "تغيير الخطوط والألوان والمسافات وتخطيط الصفحات",
                ),
            ),
            Self::Theme => (
                LocalizedText::new("主题美化", "Theme", "تجميل السمات"),
                LocalizedText::new(
                    "为页面应用完整的视觉主题，例如深色模式",
                    "Apply a complete visual theme such as dark mode",
                    "تطبيق سمة بصرية كاملة مثل الوضع الداكن",
                ),
            ),
            Self::FunctionEnhance => (
                LocalizedText::new("功能增强", "Function Enhancement", "تحسين الوظائف"),
                LocalizedText::new(
                    "为现有页面添加新的交互功能",
                    "Add new interactive features to existing pages",
                    "إضافة ميزات تفاعلية جديدة إلى الصفحات الحالية",
                ),
            ),
            Self::Automation => (
                LocalizedText::new("自动化", "Automation", "الأتمتة"),
                LocalizedText::new(
                    "自动填写表单、点击按钮并重复日常操作",
                    "Fill forms, click buttons and repeat routine actions automatically",
                    "ملء النماذج والنقر على الأزرار وتكرار الإجراءات الروتينية تلقائيًا",
                ),
            ),
            Self::Navigation => (
                LocalizedText::new("导航辅助", "Navigation", "مساعدة التنقل"),
                LocalizedText::new(
                    "通过快捷键、返回顶部和目录改进页面导航",
                    "Improve page navigation with shortcuts, back-to-top buttons and outlines",
                    "تحسين التنقل في الصفحة باختصارات وزر العودة للأعلى وفهرس المحتوى",
                ),
            ),
            Self::DataExtract => (
                LocalizedText::new("数据提取", "Data Extraction", "استخراج البيانات"),
                LocalizedText::new(
                    "从页面中采集表格、链接或文本",
                    "Collect tables, links or text from pages",
                    "جمع الجداول أو الروابط أو النصوص من الصفحات",
                ),
            ),
            Self::Media => (
                LocalizedText::new("媒体处理", "Media", "معالجة الوسائط"),
                LocalizedText::new(
                    "处理页面中的音频和混合媒体",
                    "Handle audio and mixed media on pages",
                    "معالجة الصوت والوسائط المتعددة في الصفحات",
                ),
            ),
            Self::Video => (
                LocalizedText::new("视频增强", "Video", "تحسين الفيديو"),
                LocalizedText::new(
                    "控制播放速度、画中画和视频下载",
                    "Control playback speed, picture-in-picture and video downloads",
                    "التحكم في سرعة التشغيل وصورة داخل صورة وتنزيل الفيديو",
                ),
            ),
            Self::Image => (
                LocalizedText::new("图片处理", "Image", "معالجة الصور"),
                LocalizedText::new(
                    "放大、保存或批量处理页面图片",
                    "Enlarge, save or batch-process page images",
                    "تكبير صور الصفحة أو حفظها أو معالجتها دفعة واحدة",
                ),
            ),
            Self::Security => (
                LocalizedText::new("安全隐私", "Security & Privacy", "الأمان والخصوصية"),
                LocalizedText::new(
                    "拦截跟踪器，保护浏览隐私",
                    "Block trackers and protect privacy while browsing",
                    "حظر أدوات التتبع وحماية الخصوصية أثناء التصفح",
                ),
            ),
            Self::Developer => (
                LocalizedText::new("开发调试", "Developer Tools", "تصحيح التطوير"),
                LocalizedText::new(
                    "调试辅助、元素检查和控制台工具",
                    "Debugging helpers, element inspection and console tools",
                    "أدوات مساعدة للتصحيح وفحص العناصر ووحدة التحكم",
                ),
            ),
            Self::Other => (
                LocalizedText::new("其他", "Other", "أخرى"),
                LocalizedText::new(
                    "不属于其他分类的模块",
                    "Modules that do not fit any other category",
                    "وحدات لا تنتمي إلى أي فئة أخرى",
                ),
            ),
        }
    }
}

/// When an injected module runs relative to page loading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RunAt {
    DocumentStart,
    DocumentEnd,
    DocumentIdle,
}

impl RunAt {
    pub const ALL: [RunAt; 3] = [Self::DocumentStart, Self::DocumentEnd, Self::DocumentIdle];

    pub fn tag(self) -> &'static str {
        match self {
            Self::DocumentStart => "DOCUMENT_START",
            Self::DocumentEnd => "DOCUMENT_END",
            Self::DocumentIdle => "DOCUMENT_IDLE",
        }
    }

    pub fn recommended() -> Self {
        Self::DocumentEnd
    }

    pub fn description(self, language: Language) -> &'static str {
        let text = match self {
            Self::DocumentStart => LocalizedText::new(
                "DOM 未就绪时执行，适合拦截请求",
                "Execute when DOM is not ready, suitable for intercepting requests",
                "التنفيذ عندما لا يكون DOM جاهزًا، مناسب لاعتراض الطلبات",
            ),
            Self::DocumentEnd => LocalizedText::new(
                "DOM 加载完成后执行",
                "Execute after DOM is loaded",
                "التنفيذ بعد تحميل DOM",
            ),
            Self::DocumentIdle => LocalizedText::new(
                "页面完全加载后执行",
                "Execute after page is fully loaded",
                "التنفيذ بعد تحميل الصفحة بالكامل",
            ),
        };
        text.get(language)
    }
}

/// Input widget type of a module config item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigItemType {
    Text,
    Number,
    Boolean,
    Select,
    Textarea,
}

impl ConfigItemType {
    pub const ALL: [ConfigItemType; 5] = [
        Self::Text,
        Self::Number,
        Self::Boolean,
        Self::Select,
        Self::Textarea,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            Self::Text => "TEXT",
            Self::Number => "NUMBER",
            Self::Boolean => "BOOLEAN",
            Self::Select => "SELECT",
            Self::Textarea => "TEXTAREA",
        }
    }

    /// `TEXT|NUMBER|BOOLEAN|SELECT|TEXTAREA`
    pub fn alternatives() -> String {
        Self::ALL
            .iter()
            .map(|item| item.tag())
            .collect::<Vec<_>>()
            .join("|")
    }
}

const RECOMMENDED_MARKER: LocalizedText = LocalizedText::new("（推荐）", " (recommended)", " (موصى به)");

/// One catalog entry as listed in the categories section
pub fn category_entry(language: Language, category: ModuleCategory) -> String {
    match language {
        Language::Chinese => format!("{}({})", category.tag(), category.display_name(language)),
        Language::English => category.tag().to_string(),
        Language::Arabic => format!("{} ({})", category.tag(), category.display_name(language)),
    }
}

/// Entries per line of the category listing; sums to the number of categories
const CATEGORY_LINE_WIDTHS: [usize; 4] = [3, 4, 4, 3];

/// Every category entry, wrapped the way the prompt has always shown them
pub fn category_listing(language: Language) -> String {
    let entries: Vec<String> = ModuleCategory::ALL
        .into_iter()
        .map(|category| category_entry(language, category))
        .collect();
    let mut lines = Vec::with_capacity(CATEGORY_LINE_WIDTHS.len());
    let mut rest = entries.as_slice();
    for width in CATEGORY_LINE_WIDTHS {
        let (line, tail) = rest.split_at(width.min(rest.len()));
        if !line.is_empty() {
            lines.push(line.join(", "));
        }
        rest = tail;
    }
    if !rest.is_empty() {
        lines.push(rest.join(", "));
    }
    lines.join(",\n")
}

/// `- TAG: description` lines for every execution timing
pub fn run_at_listing(language: Language) -> String {
    RunAt::ALL
        .into_iter()
        .map(|run_at| {
            let marker = if run_at == RunAt::recommended() {
                RECOMMENDED_MARKER.get(language)
            } else {
                ""
            };
            format!("- {}: {}{marker}", run_at.tag(), run_at.description(language))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

struct SchemaLabels {
    name: &'static str,
    description: &'static str,
    icon: &'static str,
    category: &'static str,
    run_at: &'static str,
    js_code: &'static str,
    css_code: &'static str,
    item_key: &'static str,
    item_name: &'static str,
    item_description: &'static str,
    item_default: &'static str,
    option: &'static str,
    url_matches: &'static str,
}

fn schema_labels(language: Language) -> SchemaLabels {
    match language {
        Language::Chinese => SchemaLabels {
            name: "模块名称（简洁明了）",
            description: "模块功能描述（一句话说明）",
            icon: "适合的emoji图标",
            category: "分类名称（如 {}）",
            run_at: "执行时机（如 {}）",
            js_code: "JavaScript代码（转义后的字符串）",
            css_code: "CSS代码（如果需要，否则为空字符串）",
            item_key: "配置键名",
            item_name: "显示名称",
            item_description: "配置说明",
            item_default: "默认值",
            option: "选项",
            url_matches: "匹配的URL模式，如 *://*.example.com/*",
        },
        Language::English => SchemaLabels {
            name: "Module name (concise and clear)",
            description: "Module function description (one sentence)",
            icon: "Appropriate emoji icon",
            category: "Category name (e.g., {})",
            run_at: "Execution timing (e.g., {})",
            js_code: "JavaScript code (escaped string)",
            css_code: "CSS code (if needed, otherwise empty string)",
            item_key: "config_key",
            item_name: "Display name",
            item_description: "Configuration description",
            item_default: "Default value",
            option: "Option",
            url_matches: "URL pattern to match, e.g., *://*.example.com/*",
        },
        Language::Arabic => SchemaLabels {
            name: "اسم الوحدة (موجز وواضح)",
            description: "وصف وظيفة الوحدة (جملة واحدة)",
            icon: "رمز تعبيري مناسب",
            category: "اسم الفئة (مثل {})",
            run_at: "توقيت التنفيذ (مثل {})",
            js_code: "كود JavaScript (سلسلة مهربة)",
            css_code: "كود CSS (إذا لزم الأمر، وإلا سلسلة فارغة)",
            item_key: "مفتاح_التكوين",
            item_name: "اسم العرض",
            item_description: "وصف التكوين",
            item_default: "القيمة الافتراضية",
            option: "الخيار",
            url_matches: "نمط URL للمطابقة، مثل *://*.example.com/*",
        },
    }
}

/// The JSON object the model is asked to return.
///
/// Keys, their order and the enumerated values are identical across languages; only the
/// descriptive placeholder strings are localized.
pub fn output_schema_example(language: Language) -> Value {
    let labels = schema_labels(language);
    json!({
        "name": labels.name,
        "description": labels.description,
        "icon": labels.icon,
        "category": labels.category.replace("{}", ModuleCategory::ContentFilter.tag()),
        "run_at": labels.run_at.replace("{}", RunAt::recommended().tag()),
        "js_code": labels.js_code,
        "css_code": labels.css_code,
        "config_items": [
            {
                "key": labels.item_key,
                "name": labels.item_name,
                "description": labels.item_description,
                "type": ConfigItemType::alternatives(),
                "defaultValue": labels.item_default,
                "options": [format!("{}1", labels.option), format!("{}2", labels.option)],
            }
        ],
        "url_matches": [labels.url_matches],
    })
}

/// Pretty-printed output example with two-space indentation
pub fn render_output_schema(language: Language) -> String {
    format!("{:#}", output_schema_example(language))
}
