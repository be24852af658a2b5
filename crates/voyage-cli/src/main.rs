//! Voyage CLI Application
//!
//! Command-line interface for the voyage trip planning wizard.

mod args;
mod cli;
mod mcp;
mod renderer;
mod wizard;

use std::time::Duration;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use mcp::{run_stdio_server, VoyageMcpServer};
use renderer::TerminalRenderer;
use voyage_core::{RetryPolicy, SessionBuilder};
use Commands::*;

const RETRY_DELAY: Duration = Duration::from_millis(500);

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        catalog_file,
        no_color,
        retries,
        command,
    } = Args::parse();

    let session = SessionBuilder::new()
        .with_catalog_file(catalog_file)
        .with_retry_policy(RetryPolicy::new(retries, RETRY_DELAY))
        .build()
        .context("Failed to initialize session")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Voyage started");

    match command {
        Some(Plan(args)) => Cli::new(session, renderer).handle_plan(args).await,
        Some(Catalog(args)) => Cli::new(session, renderer).handle_catalog(args).await,
        Some(Serve) => {
            info!("Starting Voyage MCP server");
            run_stdio_server(VoyageMcpServer::new(session))
                .await
                .context("MCP server failed")
        }
        Some(Wizard) | None => Cli::new(session, renderer).run_wizard().await,
    }
}
