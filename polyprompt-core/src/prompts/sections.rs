//! Ordered section composition.
//!
//! A prompt is a list of sections in a fixed order. Each section knows whether it is
//! present for the current inputs and how to render its text. Composition walks the
//! list once, renders only present sections, follows each with one blank line, and
//! trims trailing whitespace from the result. Absent optional sections therefore never
//! leave a gap behind.

use crate::config::constants::prompts::SECTION_SEPARATOR;
use std::fmt;

/// Stable identity of a prompt section, used for structural comparisons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Role,
    SystemDescription,
    BuiltinApi,
    NativeBridgeApi,
    CodeStandards,
    ModuleCategories,
    ExecutionTiming,
    CategoryHint,
    ExistingCodeHint,
    OutputFormat,
    ImportantNotes,
    FixInstruction,
    ErrorList,
    OriginalCode,
    FixOutputRules,
    RequestIntro,
    Requirement,
    TargetCategory,
    ExistingCode,
    Closing,
    ResponseRules,
    UserRules,
    TemplateStyle,
    ReferenceStyle,
    ImageGeneration,
}

impl SectionId {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Role => "role",
            Self::SystemDescription => "system_description",
            Self::BuiltinApi => "builtin_api",
            Self::NativeBridgeApi => "native_bridge_api",
            Self::CodeStandards => "code_standards",
            Self::ModuleCategories => "module_categories",
            Self::ExecutionTiming => "execution_timing",
            Self::CategoryHint => "category_hint",
            Self::ExistingCodeHint => "existing_code_hint",
            Self::OutputFormat => "output_format",
            Self::ImportantNotes => "important_notes",
            Self::FixInstruction => "fix_instruction",
            Self::ErrorList => "error_list",
            Self::OriginalCode => "original_code",
            Self::FixOutputRules => "fix_output_rules",
            Self::RequestIntro => "request_intro",
            Self::Requirement => "requirement",
            Self::TargetCategory => "target_category",
            Self::ExistingCode => "existing_code",
            Self::Closing => "closing",
            Self::ResponseRules => "response_rules",
            Self::UserRules => "user_rules",
            Self::TemplateStyle => "template_style",
            Self::ReferenceStyle => "reference_style",
            Self::ImageGeneration => "image_generation",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

type Renderer<'a> = Box<dyn FnOnce() -> String + 'a>;

/// One section of a prompt. Absent sections carry no renderer at all.
pub struct Section<'a> {
    id: SectionId,
    renderer: Option<Renderer<'a>>,
}

impl<'a> Section<'a> {
    /// A section present for every input
    pub fn always(id: SectionId, render: impl FnOnce() -> String + 'a) -> Self {
        Self {
            id,
            renderer: Some(Box::new(render)),
        }
    }

    /// Fixed text that needs no inputs
    pub fn fixed(id: SectionId, text: &'static str) -> Self {
        Self::always(id, move || text.to_string())
    }

    pub fn when(id: SectionId, present: bool, render: impl FnOnce() -> String + 'a) -> Self {
        Self {
            id,
            renderer: present.then(|| Box::new(render) as Renderer<'a>),
        }
    }

    /// Present when `value` is `Some`
    pub fn when_some<T: ?Sized>(
        id: SectionId,
        value: Option<&'a T>,
        render: impl FnOnce(&'a T) -> String + 'a,
    ) -> Self {
        match value {
            Some(value) => Self::always(id, move || render(value)),
            None => Self::absent(id),
        }
    }

    /// Present when `text` contains anything besides whitespace
    pub fn when_not_blank(
        id: SectionId,
        text: &'a str,
        render: impl FnOnce(&'a str) -> String + 'a,
    ) -> Self {
        let value = (!text.trim().is_empty()).then_some(text);
        Self::when_some(id, value, render)
    }

    pub fn absent(id: SectionId) -> Self {
        Self { id, renderer: None }
    }

    pub fn id(&self) -> SectionId {
        self.id
    }

    pub fn is_present(&self) -> bool {
        self.renderer.is_some()
    }
}

impl fmt::Debug for Section<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Section")
            .field("id", &self.id)
            .field("present", &self.is_present())
            .finish()
    }
}

/// Render present sections in order into a single buffer
pub fn compose_sections(sections: Vec<Section<'_>>) -> String {
    let mut output = String::new();
    for section in sections {
        if let Some(render) = section.renderer {
            output.push_str(&render());
            output.push_str(SECTION_SEPARATOR);
        }
    }
    let trimmed = output.trim_end().len();
    output.truncate(trimmed);
    output
}

/// Identifiers of the present sections, in composition order
pub fn present_ids(sections: &[Section<'_>]) -> Vec<SectionId> {
    sections
        .iter()
        .filter(|section| section.is_present())
        .map(Section::id)
        .collect()
}
