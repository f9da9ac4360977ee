//! HTTP server command
//!
//! Resolves configuration, builds the repository and runs the server
//! until Ctrl+C/SIGTERM.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use quotes_server::db::{create_pool, InMemoryQuoteRepo, PgQuoteRepo, QuoteRepository};
use quotes_server::http::run_server;

use crate::config::ConfigSource;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    #[command(flatten)]
    pub source: ConfigSource,

    /// Keep quotes in process memory instead of Postgres (lost on exit)
    #[arg(long)]
    pub in_memory: bool,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let config = args.source.resolve()?;

    let quotes: Arc<dyn QuoteRepository> = if args.in_memory {
        tracing::warn!("Using in-memory storage; quotes are lost on exit");
        Arc::new(InMemoryQuoteRepo::new())
    } else {
        let pool = create_pool(&config.database)
            .await
            .context("Failed to create database pool")?;
        Arc::new(PgQuoteRepo::new(pool).with_timeout(config.server.query_timeout()))
    };

    tracing::info!("Starting quotes server on {}", config.server.bind_addr);

    // Run server (blocks until shutdown)
    run_server(quotes, config.server)
        .await
        .context("Server error")?;

    Ok(())
}
