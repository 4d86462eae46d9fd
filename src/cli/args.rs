//! CLI argument parsing

use clap::{Args, Parser, Subcommand};
use polyprompt_core::config::constants::prompts::MAX_FIX_ATTEMPTS;
use polyprompt_core::prompts::SyntaxIssue;
use std::path::PathBuf;

/// Main CLI structure for polyprompt
#[derive(Parser, Debug)]
#[command(
    name = "polyprompt",
    version,
    about = "Compose localized AI prompts for WebToApp extension modules and HTML pages"
)]
pub struct Cli {
    /// Output language code (zh, en, ar); defaults to the saved preference
    #[arg(long, global = true)]
    pub lang: Option<String>,

    /// Configuration file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Workspace root directory; defaults to current directory
    #[arg(long, global = true)]
    pub workspace: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace); overrides `[logging] level`
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
///
/// Text arguments accept either the literal text or `@path` to read it from a file.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// System prompt for generating an extension module
    ModuleDev(ModuleDevArgs),

    /// Prompt asking the model to repair JavaScript syntax errors
    CodeFix(CodeFixArgs),

    /// System prompt for the code fix conversation
    CodeFixSystem,

    /// User message describing a module requirement
    UserMessage(UserMessageArgs),

    /// System prompt for the HTML page coding assistant
    Html(HtmlArgs),

    /// Generate random app names
    Name {
        /// Number of names to generate (default from `[names] count`)
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Fixed seed for reproducible names (default from `[names] seed`)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// List supported languages
    Languages,

    /// Show or change the saved language preference
    Language {
        #[command(subcommand)]
        action: LanguageAction,
    },

    /// Write a sample polyprompt.toml into the workspace
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,

        /// Output path (default: <workspace>/polyprompt.toml)
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

impl Commands {
    /// Whether the command renders language-dependent output.
    ///
    /// `init` and `language` never read the saved preference, so a corrupt preference
    /// file can still be overwritten with `language set`.
    pub fn uses_language(&self) -> bool {
        !matches!(self, Self::Init { .. } | Self::Language { .. })
    }
}

#[derive(Subcommand, Debug)]
pub enum LanguageAction {
    /// Print the current language and whether it was chosen explicitly
    Show,

    /// Save a language preference
    Set {
        /// Language code (zh, en, ar)
        code: String,
    },
}

#[derive(Args, Debug)]
pub struct ModuleDevArgs {
    /// Target category tag, e.g. CONTENT_FILTER
    #[arg(long)]
    pub category: Option<String>,

    /// Existing module code to modify (text or @path)
    #[arg(long)]
    pub existing_code: Option<String>,

    /// NativeBridge API documentation block (text or @path)
    #[arg(long)]
    pub native_bridge_api: Option<String>,
}

#[derive(Args, Debug)]
pub struct CodeFixArgs {
    /// Code that failed the syntax check (text or @path)
    #[arg(long)]
    pub code: String,

    /// Error list text (text or @path)
    #[arg(long, conflicts_with = "issues", required_unless_present = "issues")]
    pub errors: Option<String>,

    /// Structured issue as LINE:COLUMN:MESSAGE; repeatable
    #[arg(long = "issue", value_name = "LINE:COLUMN:MESSAGE", value_parser = parse_issue)]
    pub issues: Vec<SyntaxIssue>,

    /// Current attempt number
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub attempt: u32,

    /// Total attempts allowed
    #[arg(long, default_value_t = MAX_FIX_ATTEMPTS, value_parser = clap::value_parser!(u32).range(1..))]
    pub max_attempts: u32,
}

#[derive(Args, Debug)]
pub struct UserMessageArgs {
    /// Requirement description (text or @path)
    pub requirement: String,

    /// Target category name
    #[arg(long)]
    pub category: Option<String>,

    /// Existing module code (text or @path)
    #[arg(long)]
    pub existing_code: Option<String>,
}

#[derive(Args, Debug)]
pub struct HtmlArgs {
    /// User rule; repeatable, numbered in the order given
    #[arg(long = "rule")]
    pub rules: Vec<String>,

    /// The model can call the image generation tool
    #[arg(long)]
    pub image: bool,

    /// Template metadata as JSON (text or @path)
    #[arg(long)]
    pub template: Option<String>,

    /// Reference style metadata as JSON (text or @path)
    #[arg(long)]
    pub style: Option<String>,
}

/// Parse `LINE:COLUMN:MESSAGE`; the message may itself contain colons
pub fn parse_issue(input: &str) -> Result<SyntaxIssue, String> {
    let mut parts = input.splitn(3, ':');
    let (Some(line), Some(column), Some(message)) = (parts.next(), parts.next(), parts.next())
    else {
        return Err(format!("expected LINE:COLUMN:MESSAGE, got `{input}`"));
    };
    let line = line
        .trim()
        .parse::<usize>()
        .map_err(|err| format!("invalid line `{line}`: {err}"))?;
    let column = column
        .trim()
        .parse::<usize>()
        .map_err(|err| format!("invalid column `{column}`: {err}"))?;
    let message = message.trim();
    if message.is_empty() {
        return Err("issue message must not be empty".to_string());
    }
    Ok(SyntaxIssue::new(line, column, message))
}
