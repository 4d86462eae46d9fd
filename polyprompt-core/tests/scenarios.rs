use polyprompt_core::i18n::Language;
use polyprompt_core::prompts::{
    StyleMeta, TemplateMeta, compose_code_fix_prompt, compose_code_fix_system_prompt,
    compose_html_coding_system_prompt, compose_user_message,
};

#[test]
fn user_message_without_optional_inputs() {
    let message = compose_user_message(Language::English, "dark mode toggle", None, None);
    assert!(message.contains("dark mode toggle"));
    assert!(!message.contains("Existing Code"));
    assert!(!message.contains("Target Category"));
}

#[test]
fn user_message_orders_category_before_code() {
    let message = compose_user_message(
        Language::English,
        "dark mode toggle",
        Some("THEME"),
        Some("var x=1;"),
    );
    let category = message.find("**Target Category**: THEME").expect("category section");
    let code = message.find("**Existing Code**").expect("existing code section");
    assert!(category < code);
    assert!(message.contains("var x=1;"));
}

#[test]
fn chinese_code_fix_keeps_inputs_verbatim() {
    let prompt = compose_code_fix_prompt(
        Language::Chinese,
        "SyntaxError: unexpected token",
        "var x = ;",
        2,
        3,
    );
    assert!(prompt.contains("2/3"));
    assert!(prompt.contains("SyntaxError: unexpected token"));
    assert!(prompt.contains("var x = ;"));
}

#[test]
fn code_fix_placeholders_survive_hostile_text() {
    let errors = "- Line 1, Column 1: `{attempt}` $code ```\n  Suggestion: {}";
    let code = "const s = `${a}`;\n```\n\t{{x}}\r\n";
    for language in Language::ALL {
        let prompt = compose_code_fix_prompt(language, errors, code, 17, 42);
        assert!(prompt.contains("17/42"), "{language}");
        assert!(prompt.contains(errors), "{language}");
        assert!(prompt.contains(code), "{language}");
    }
}

#[test]
fn user_message_inserts_requirement_literally() {
    let requirement = "<script>alert('x')</script> & **bold** {requirement}";
    for language in Language::ALL {
        let message = compose_user_message(language, requirement, None, Some("  "));
        assert!(message.contains(requirement));
        assert!(!message.contains("```javascript"));
    }
}

#[test]
fn arabic_fix_system_prompt_is_right_to_left_text() {
    let prompt = compose_code_fix_system_prompt(Language::Arabic);
    assert!(Language::Arabic.is_rtl());
    assert!(prompt.starts_with("أنت خبير"));
    assert!(prompt.contains("JavaScript"));
}

#[test]
fn html_prompt_with_every_section() {
    let rules = vec!["Use CSS variables".to_string()];
    let template = TemplateMeta {
        name: "Aurora".to_string(),
        description: "Gradient hero".to_string(),
        prompt_hint: "Animate slowly".to_string(),
        color_scheme: None,
    };
    let style = StyleMeta {
        name: "Minimal".to_string(),
        description: "Lots of whitespace".to_string(),
        keywords: vec!["clean".to_string()],
        colors: vec!["#ffffff".to_string()],
    };
    let prompt = compose_html_coding_system_prompt(
        Language::Arabic,
        &rules,
        true,
        Some(&template),
        Some(&style),
    );
    let order = [
        "# قواعد الرد",
        "# معايير الكود",
        "# قواعد المستخدم المخصصة\n1. Use CSS variables",
        "# النمط: Aurora\nGradient hero. Animate slowly",
        "# النمط المرجعي: Minimal",
        "# توليد الصور",
    ];
    let positions: Vec<usize> = order
        .iter()
        .map(|marker| prompt.find(marker).expect(marker))
        .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    assert!(prompt.contains("width=device-width, initial-scale=1.0"));
}
