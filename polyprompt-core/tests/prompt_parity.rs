use polyprompt_core::i18n::Language;
use polyprompt_core::prompts::catalog::{ConfigItemType, ModuleCategory, RunAt};
use polyprompt_core::prompts::{
    CodeFixRequest, HtmlCodingRequest, ModuleDevRequest, PromptKind, PromptRequest, SectionId,
    StyleMeta, TemplateMeta, UserMessageRequest, category_hint, compose,
    compose_module_dev_system_prompt, existing_code_hint, present_sections,
};
use serde_json::Value;

fn json_block(prompt: &str) -> Value {
    let start = prompt.find("```json\n").expect("json fence") + "```json\n".len();
    let end = start + prompt[start..].find("\n```").expect("closing fence");
    serde_json::from_str(&prompt[start..end]).expect("valid json")
}

/// Object keys and array shapes, with string leaves replaced by a marker
fn shape(value: &Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, value)| (key.clone(), shape(value)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.iter().map(shape).collect()),
        _ => Value::Null,
    }
}

fn request_variants<'a>(
    rules: &'a [String],
    template: &'a TemplateMeta,
    style: &'a StyleMeta,
) -> Vec<PromptRequest<'a>> {
    vec![
        PromptRequest::ModuleDev(ModuleDevRequest::default()),
        PromptRequest::ModuleDev(ModuleDevRequest {
            category_hint: "hint",
            existing_code_hint: "",
            native_bridge_api: "NativeBridge.share(text)",
        }),
        PromptRequest::ModuleDev(ModuleDevRequest {
            category_hint: "hint",
            existing_code_hint: "code",
            native_bridge_api: "   ",
        }),
        PromptRequest::CodeFix(CodeFixRequest {
            error_messages: "",
            code: "",
            attempt: 1,
            max_attempts: 1,
        }),
        PromptRequest::CodeFixSystem,
        PromptRequest::UserMessage(UserMessageRequest {
            requirement: "r",
            category_name: Some("THEME"),
            existing_code: None,
        }),
        PromptRequest::UserMessage(UserMessageRequest {
            requirement: "r",
            category_name: None,
            existing_code: Some("let a;"),
        }),
        PromptRequest::HtmlCoding(HtmlCodingRequest::default()),
        PromptRequest::HtmlCoding(HtmlCodingRequest {
            rules,
            has_image_capability: true,
            template: Some(template),
            style: None,
        }),
        PromptRequest::HtmlCoding(HtmlCodingRequest {
            rules: &[],
            has_image_capability: false,
            template: None,
            style: Some(style),
        }),
    ]
}

#[test]
fn present_sections_match_across_languages() {
    let rules = vec!["one".to_string(), "two".to_string()];
    let template = TemplateMeta {
        name: "t".to_string(),
        ..Default::default()
    };
    let style = StyleMeta {
        name: "s".to_string(),
        ..Default::default()
    };

    for request in request_variants(&rules, &template, &style) {
        let reference = present_sections(Language::ALL[0], &request);
        assert!(!reference.is_empty());
        for language in Language::ALL {
            assert_eq!(
                present_sections(language, &request),
                reference,
                "{} in {language}",
                request.kind()
            );
        }
    }
}

#[test]
fn every_language_has_every_kind() {
    let rules: Vec<String> = Vec::new();
    let template = TemplateMeta::default();
    let style = StyleMeta::default();
    let requests = request_variants(&rules, &template, &style);

    for kind in PromptKind::ALL {
        let request = requests
            .iter()
            .find(|request| request.kind() == kind)
            .expect("a request for every kind");
        for language in Language::ALL {
            assert!(!compose(language, request).trim().is_empty());
        }
    }
}

#[test]
fn module_schema_is_identical_across_languages() {
    let blocks: Vec<Value> = Language::ALL
        .into_iter()
        .map(|language| json_block(&compose_module_dev_system_prompt(language, "", "", "")))
        .collect();

    let reference = &blocks[0];
    for block in &blocks {
        assert_eq!(shape(block), shape(reference));
        assert_eq!(block["config_items"][0]["type"], reference["config_items"][0]["type"]);
    }
    assert_eq!(
        reference["config_items"][0]["type"],
        ConfigItemType::ALL
            .iter()
            .map(|item| item.tag())
            .collect::<Vec<_>>()
            .join("|")
    );
}

#[test]
fn enumerated_tags_appear_in_every_language() {
    for language in Language::ALL {
        let prompt = compose_module_dev_system_prompt(language, "", "", "");
        for category in ModuleCategory::ALL {
            assert!(prompt.contains(category.tag()), "{} in {language}", category.tag());
        }
        for run_at in RunAt::ALL {
            assert!(prompt.contains(&format!("- {}: ", run_at.tag())));
        }
    }
}

#[test]
fn hint_builders_feed_module_prompt_sections() {
    for language in Language::ALL {
        let hint = category_hint(language, ModuleCategory::Automation);
        let existing = existing_code_hint(language, "document.title = 'x';");
        let prompt = compose_module_dev_system_prompt(language, &hint, &existing, "");
        assert!(prompt.contains(&hint));
        assert!(prompt.contains(&existing));
        assert!(prompt.find(&hint) < prompt.find(&existing));

        let request = PromptRequest::ModuleDev(ModuleDevRequest {
            category_hint: &hint,
            existing_code_hint: &existing,
            native_bridge_api: "",
        });
        let ids = present_sections(language, &request);
        assert!(ids.contains(&SectionId::CategoryHint));
        assert!(ids.contains(&SectionId::ExistingCodeHint));
        assert!(!ids.contains(&SectionId::NativeBridgeApi));
    }
}

#[test]
fn documents_never_contain_empty_gaps() {
    for language in Language::ALL {
        let prompt = compose_module_dev_system_prompt(language, "", "", "");
        assert!(!prompt.contains("\n\n\n"), "{language}");
        assert_eq!(prompt, prompt.trim_end());
    }
}
