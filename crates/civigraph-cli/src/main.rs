//! Civigraph CLI - Command-line interface for the relation graph.

use civigraph_cli::commands;
use civigraph_cli::{Cli, Command, Config, Formatter};
use civigraph_review::Reviewer;
use civigraph_store::SqliteStore;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> civigraph_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load or create config
    let config = Config::load().unwrap_or_else(|_| {
        let cfg = Config::default();
        cfg.save().ok();
        cfg
    });

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    // Create formatter
    let formatter = Formatter::new(format, color_enabled);

    // The matcher registry is static; everything else needs the store
    if let Command::Matchers = cli.command {
        return commands::execute_matchers(&formatter);
    }

    let db_path = config.database_path(cli.db.as_deref())?;
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut store = SqliteStore::new(&db_path)?;

    match cli.command {
        Command::Match(mut args) => {
            let catalog_path = config.catalog_path(cli.catalog.as_deref())?;
            args.threshold = args.threshold.or(config.matching.threshold);
            commands::execute_match(args, &mut store, &catalog_path, &formatter).await?;
        }
        Command::List(args) => {
            commands::execute_list(args, &store, &formatter)?;
        }
        Command::Show(args) => {
            commands::execute_show(args, &store, &formatter)?;
        }
        Command::Review(args) => {
            let reviewer = Reviewer::new(config.review.clone());
            commands::execute_review(args, &mut store, &reviewer, &formatter)?;
        }
        Command::Delete(args) => {
            commands::execute_delete(args, &mut store, &formatter)?;
        }
        Command::For(args) => {
            commands::execute_for(args, &store, &formatter)?;
        }
        Command::Matchers => unreachable!(),
    }

    Ok(())
}
