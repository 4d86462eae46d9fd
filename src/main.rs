//! polyprompt - localized prompt composer
//!
//! Binary entry point: loads configuration, installs logging, resolves the output
//! language and dispatches to the command handlers.

use anyhow::{Context, Result};
use clap::Parser;
use polyprompt::cli::{self, Cli, Commands};
use polyprompt_core::names::validate_all_pools;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    let workspace = match args.workspace.clone() {
        Some(path) => path,
        None => std::env::current_dir().context("cannot determine current dir")?,
    };

    let settings = tracing::subscriber::with_default(cli::bootstrap_subscriber(), || {
        cli::load_settings(
            args.config.as_deref(),
            &workspace,
            args.log_level.as_deref(),
        )
    })?;
    cli::init_tracing(&settings.log_level);
    let manager = settings.manager;
    let config = manager.config();
    if let Some(path) = manager.config_path() {
        tracing::debug!(path = %path.display(), "using configuration file");
    }

    validate_all_pools().context("Name pools are misconfigured")?;

    let store = config.preference_store(Some(workspace.as_path()));
    let language = if args.command.uses_language() {
        let language =
            cli::resolve_language(args.lang.as_deref(), &store, config.language.default).await;
        tracing::debug!(language = %language, "resolved output language");
        language
    } else {
        config.language.default
    };

    match &args.command {
        Commands::ModuleDev(cmd) => print_document(cli::handle_module_dev(language, cmd).await?),
        Commands::CodeFix(cmd) => print_document(cli::handle_code_fix(language, cmd).await?),
        Commands::CodeFixSystem => print_document(cli::handle_code_fix_system(language)),
        Commands::UserMessage(cmd) => {
            print_document(cli::handle_user_message(language, cmd).await?)
        }
        Commands::Html(cmd) => print_document(cli::handle_html(language, cmd).await?),
        Commands::Name { count, seed } => {
            let count = count.unwrap_or(config.names.count);
            let seed = seed.or(config.names.seed);
            for name in cli::handle_name(language, count, seed) {
                println!("{name}");
            }
        }
        Commands::Languages => cli::handle_languages(language),
        Commands::Language { action } => cli::handle_language(&store, action).await?,
        Commands::Init { force, output } => {
            cli::handle_init(&workspace, output.as_deref(), *force)?;
        }
    }

    Ok(())
}

fn print_document(document: String) {
    println!("{document}");
}
