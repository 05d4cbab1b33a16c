//! Search Sync Main Entry Point
//!
//! Command-line surface of the sync plugin. The single `reindex` command
//! rebuilds every configured collection's search index from the host
//! platform's record store.

use clap::{Parser, Subcommand};
use dotenv::dotenv;
use search_sync::orchestrator::ReindexOrchestrator;
use search_sync::{Dependencies, PluginError};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "search-sync", about = "Collection search sync plugin", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rebuild every configured collection's search index from the record store.
    Reindex,
}

/// Initialize tracing/logging.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("search_sync=info,search_sync_repository=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

#[tokio::main]
async fn main() -> Result<(), PluginError> {
    // Load environment variables from .env file
    dotenv().ok();

    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::Reindex => cmd_reindex().await,
    }
}

/// Run the manual reindex command.
///
/// An absent or incomplete configuration is a silent no-op, not an error;
/// the command exits non-zero only when an unrecoverable error escapes.
async fn cmd_reindex() -> Result<(), PluginError> {
    info!("Starting reindex");

    let Some(deps) = Dependencies::from_env().await? else {
        info!("Sync is not configured; nothing to do");
        return Ok(());
    };

    let orchestrator = ReindexOrchestrator::new(deps.records.clone(), deps.index.clone());
    orchestrator.reindex(&deps.config).await;

    info!("Reindex finished");
    Ok(())
}
