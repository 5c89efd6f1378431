mod cli;
mod commands;

use ablate_config::Config;
use anyhow::Result;
use clap::Parser;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // listing and completions work without a config file
    let needs_config = !matches!(
        cli.command,
        cli::Commands::Categories | cli::Commands::Completions { .. }
    );
    let config = match &cli.config {
        _ if !needs_config => Config::default(),
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    // Initialize tracing (stderr, so JSON lines on stdout stay clean)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if needs_config && cli.config.is_none() && !Config::config_path().exists() {
        tracing::warn!(
            path = %Config::config_path().display(),
            "Could not create config file; using defaults"
        );
    }

    match cli.command {
        cli::Commands::Categories => commands::categories::handle(),
        cli::Commands::Redact {
            text,
            category,
            all_entities,
            gazetteer,
        } => commands::redact::handle(&config, text, category, all_entities, gazetteer),
        cli::Commands::Keyword {
            text,
            name,
            keyword,
            whole_word,
        } => commands::keyword::handle(&config, text, name, keyword, whole_word),
        cli::Commands::Run(args) => commands::run::handle(&config, args).await,
        cli::Commands::Completions { shell } => commands::completions::handle(shell),
    }
}
