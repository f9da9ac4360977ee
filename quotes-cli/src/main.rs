//! quotes CLI - runs and configures the quotes HTTP service
//!
//! - `serve`: start the HTTP API against Postgres (or `--in-memory`)
//! - `config show|validate`: inspect the effective configuration

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod config;
mod tracing_setup;

use tracing_setup::{LogFormat, TracingConfig};

#[derive(Parser, Debug)]
#[command(
    name = "quotes",
    author,
    version,
    about = "HTTP repository service for quotes",
    long_about = "Create, read, update, delete and page through quotes over HTTP, \
                  backed by PostgreSQL."
)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(long, global = true)]
    debug: bool,

    /// Log output format
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Compact, env = "QUOTES_LOG_FORMAT")]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
    /// Inspect the effective configuration
    Config(config::ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is fine; variables may come from the real environment
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    tracing_setup::init(&TracingConfig {
        debug: cli.debug,
        format: cli.log_format,
    })?;

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
        Commands::Config(args) => config::run_config(args)?,
    }
    Ok(())
}
