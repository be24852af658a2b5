use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{CatalogArgs, PlanArgs};

/// Plan a trip from the terminal
///
/// Voyage walks a trip from a destination through dates, interests and
/// budget, lets you pick places, restaurants and events from the catalog,
/// and lays them out as a day-by-day itinerary. Run without a command for
/// the interactive wizard, or use `plan` to do the whole thing from flags.
/// The `serve` command exposes the same session to AI assistants over MCP.
#[derive(Parser)]
#[command(version, about, name = "voyage")]
pub struct Args {
    /// Path to a JSON catalog file. Defaults to
    /// $XDG_DATA_HOME/voyage/catalog.json when it exists, otherwise the
    /// built-in catalog
    #[arg(long, global = true)]
    pub catalog_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Attempts at itinerary generation before giving up
    #[arg(long, global = true, default_value_t = 3)]
    pub retries: u32,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Voyage CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Plan interactively, one line at a time (default)
    #[command(alias = "w")]
    Wizard,
    /// Plan a whole trip from flags and print the itinerary
    #[command(alias = "p")]
    Plan(PlanArgs),
    /// List the catalog for a destination
    #[command(alias = "c")]
    Catalog(CatalogArgs),
    /// Start the MCP server
    Serve,
}
