//! Catalogs CLI - Command-line interface for hierarchical asset catalogs.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(name = "catalogs")]
#[command(about = "Manage hierarchical asset catalogs", long_about = None)]
#[command(version)]
struct Cli {
    /// Directory holding the catalog definition file
    #[arg(long, global = true, default_value = ".")]
    dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every catalog, sorted by path
    List,
    /// Show the catalog tree
    Tree {
        /// Output format (text, json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Create a catalog
    Add {
        /// Catalog path, components separated by '/'
        path: String,
        /// Display alias (derived from the path if omitted)
        #[arg(short, long)]
        alias: Option<String>,
    },
    /// Delete a catalog
    Rm {
        /// Catalog ID
        id: String,
        /// Also delete every catalog below its path
        #[arg(short, long)]
        recursive: bool,
    },
    /// Move a catalog and everything below it to a new path
    Mv {
        /// Catalog ID
        id: String,
        /// New catalog path
        new_path: String,
    },
    /// Set the display alias of a catalog
    Alias {
        /// Catalog ID
        id: String,
        /// New display alias
        alias: String,
    },
    /// Look up a single catalog
    Find {
        /// Catalog ID
        #[arg(long, conflicts_with = "path", required_unless_present = "path")]
        id: Option<String>,
        /// Catalog path
        #[arg(long)]
        path: Option<String>,
    },
    /// List the catalog IDs at or below a catalog
    Filter {
        /// Catalog ID of the subtree root
        root_id: String,
    },
}

fn main() -> Result<()> {
    // Initialize tracing subscriber
    // Respects RUST_LOG environment variable (e.g., RUST_LOG=debug)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let dir = cli.dir.as_path();

    match cli.command {
        Commands::List => commands::list::run(dir),
        Commands::Tree { format } => commands::tree::run(dir, &format),
        Commands::Add { path, alias } => commands::add::run(dir, &path, alias.as_deref()),
        Commands::Rm { id, recursive } => commands::remove::run(dir, &id, recursive),
        Commands::Mv { id, new_path } => commands::edit::move_catalog(dir, &id, &new_path),
        Commands::Alias { id, alias } => commands::edit::set_alias(dir, &id, &alias),
        Commands::Find { id, path } => match (id, path) {
            (Some(id), _) => commands::find::by_id(dir, &id),
            (None, Some(path)) => commands::find::by_path(dir, &path),
            (None, None) => anyhow::bail!("Pass either --id or --path"),
        },
        Commands::Filter { root_id } => commands::filter::run(dir, &root_id),
    }
}
