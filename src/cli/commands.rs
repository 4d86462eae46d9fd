//! Command handlers

use super::args::{CodeFixArgs, HtmlArgs, LanguageAction, ModuleDevArgs, UserMessageArgs};
use anyhow::{Context, Result, anyhow, bail};
use console::style;
use polyprompt_core::config::constants::defaults;
use polyprompt_core::i18n::{Language, LanguagePreferenceStore, TextDirection};
use polyprompt_core::names::generate_random_name_with;
use polyprompt_core::prompts::{
    ModuleCategory, StyleMeta, TemplateMeta, category_hint, compose_code_fix_prompt,
    compose_code_fix_system_prompt, compose_html_coding_system_prompt,
    compose_module_dev_system_prompt, compose_user_message, existing_code_hint,
    format_syntax_errors,
};
use polyprompt_core::PolypromptConfig;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

/// Resolve a text argument: `@path` reads the file, anything else is used verbatim
pub async fn read_text_arg(value: &str) -> Result<String> {
    match value.strip_prefix('@') {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read input file: {path}")),
        None => Ok(value.to_string()),
    }
}

async fn read_optional_text(value: Option<&str>) -> Result<Option<String>> {
    match value {
        Some(value) => read_text_arg(value).await.map(Some),
        None => Ok(None),
    }
}

async fn read_json_arg<T: DeserializeOwned>(value: &str, what: &str) -> Result<T> {
    let text = read_text_arg(value).await?;
    serde_json::from_str(&text).with_context(|| format!("Failed to parse {what} JSON"))
}

pub async fn handle_module_dev(language: Language, args: &ModuleDevArgs) -> Result<String> {
    let hint = match args.category.as_deref() {
        Some(tag) => {
            let category = ModuleCategory::from_tag(tag).ok_or_else(|| {
                let allowed: Vec<&str> = ModuleCategory::ALL.iter().map(|c| c.tag()).collect();
                anyhow!(
                    "Unknown category `{tag}`. Allowed: {}",
                    allowed.join(", ")
                )
            })?;
            category_hint(language, category)
        }
        None => String::new(),
    };
    let existing = read_optional_text(args.existing_code.as_deref())
        .await?
        .filter(|code| !code.trim().is_empty())
        .map(|code| existing_code_hint(language, &code))
        .unwrap_or_default();
    let bridge = read_optional_text(args.native_bridge_api.as_deref())
        .await?
        .unwrap_or_default();

    Ok(compose_module_dev_system_prompt(
        language, &hint, &existing, &bridge,
    ))
}

pub async fn handle_code_fix(language: Language, args: &CodeFixArgs) -> Result<String> {
    if args.attempt > args.max_attempts {
        bail!(
            "--attempt ({}) must not exceed --max-attempts ({})",
            args.attempt,
            args.max_attempts
        );
    }
    let code = read_text_arg(&args.code).await?;
    let errors = match args.errors.as_deref() {
        Some(errors) => read_text_arg(errors).await?,
        None => format_syntax_errors(&args.issues),
    };
    Ok(compose_code_fix_prompt(
        language,
        &errors,
        &code,
        args.attempt,
        args.max_attempts,
    ))
}

pub fn handle_code_fix_system(language: Language) -> String {
    compose_code_fix_system_prompt(language)
}

pub async fn handle_user_message(language: Language, args: &UserMessageArgs) -> Result<String> {
    let requirement = read_text_arg(&args.requirement).await?;
    let existing = read_optional_text(args.existing_code.as_deref()).await?;
    Ok(compose_user_message(
        language,
        &requirement,
        args.category.as_deref(),
        existing.as_deref(),
    ))
}

pub async fn handle_html(language: Language, args: &HtmlArgs) -> Result<String> {
    let template: Option<TemplateMeta> = match args.template.as_deref() {
        Some(value) => Some(read_json_arg(value, "template").await?),
        None => None,
    };
    let style: Option<StyleMeta> = match args.style.as_deref() {
        Some(value) => Some(read_json_arg(value, "style").await?),
        None => None,
    };
    Ok(compose_html_coding_system_prompt(
        language,
        &args.rules,
        args.image,
        template.as_ref(),
        style.as_ref(),
    ))
}

/// Generate `count` names; a seed makes the sequence reproducible
pub fn handle_name(language: Language, count: usize, seed: Option<u64>) -> Vec<String> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    (0..count)
        .map(|_| generate_random_name_with(&mut rng, language))
        .collect()
}

pub fn handle_languages(current: Language) {
    println!("{}", style("Supported languages").cyan().bold());
    for language in Language::ALL {
        let marker = if language == current { "*" } else { " " };
        let direction = match language.direction() {
            TextDirection::LeftToRight => "ltr",
            TextDirection::RightToLeft => "rtl",
        };
        println!(
            "{} {}  {:<8} {} {}",
            style(marker).green().bold(),
            style(language.code()).bold(),
            language.display_name(),
            language.native_name(),
            style(format!("({direction})")).dim()
        );
    }
}

pub async fn handle_language(
    store: &dyn LanguagePreferenceStore,
    action: &LanguageAction,
) -> Result<()> {
    match action {
        LanguageAction::Show => {
            let language = store.current_language().await?;
            let source = if store.has_selected_language().await? {
                "saved preference"
            } else {
                "system locale"
            };
            println!(
                "{} {} {}",
                style(language.code()).bold(),
                language.native_name(),
                style(format!("({source})")).dim()
            );
        }
        LanguageAction::Set { code } => {
            let language = Language::parse(code).ok_or_else(|| {
                anyhow!(
                    "Unsupported language `{code}`. Allowed: {}",
                    Language::allowed_values().join(", ")
                )
            })?;
            store.set_language(language).await?;
            println!(
                "{} {} ({})",
                style("Language set to").green(),
                style(language.code()).bold(),
                language.native_name()
            );
        }
    }
    Ok(())
}

/// Write the sample configuration, refusing to clobber an existing file unless forced
pub fn handle_init(workspace: &Path, output: Option<&Path>, force: bool) -> Result<PathBuf> {
    let path = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| workspace.join(defaults::CONFIG_FILE_NAME));
    if path.exists() && !force {
        bail!(
            "Configuration file already exists: {} (use --force to overwrite)",
            path.display()
        );
    }
    PolypromptConfig::create_sample_config(&path)?;
    println!(
        "{} {}",
        style("Created").green().bold(),
        path.display()
    );
    Ok(path)
}
