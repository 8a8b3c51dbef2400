//! CLI commands.

pub mod add;
pub mod edit;
pub mod filter;
pub mod find;
pub mod list;
pub mod remove;
pub mod tree;

use anyhow::{anyhow, Context, Result};
use catalog_core::{Catalog, CatalogError, CatalogId, CatalogStore};
use console::style;
use std::path::Path;
use tracing::debug;

/// Load the store rooted at `dir`.
pub(crate) fn open_store(dir: &Path) -> Result<CatalogStore> {
    let store =
        CatalogStore::open(dir).map_err(|e| with_hint(e, "Failed to open catalog store"))?;
    debug!(
        dir = %dir.display(),
        catalogs = store.catalog_count(),
        "Opened catalog store"
    );
    Ok(store)
}

/// Merge and write the store back to `dir`.
pub(crate) fn save_store(store: &mut CatalogStore, dir: &Path) -> Result<()> {
    store
        .write_to_disk(dir)
        .map_err(|e| with_hint(e, "Failed to save catalogs"))
}

pub(crate) fn parse_id(text: &str) -> Result<CatalogId> {
    CatalogId::parse(text).with_context(|| format!("Invalid catalog ID: {}", text))
}

/// Look up a live catalog, with a friendlier message for deleted ones.
pub(crate) fn require_catalog(store: &CatalogStore, id: CatalogId) -> Result<&Catalog> {
    store.find_by_id(id).ok_or_else(|| {
        if store.is_deleted(id) {
            anyhow!("Catalog {} is deleted", id)
        } else {
            anyhow!("No catalog with ID {}", id)
        }
    })
}

/// Print one catalog as an aligned `ID  PATH  ALIAS` row.
pub(crate) fn print_row(catalog: &Catalog) {
    println!(
        "{}  {}  {}",
        style(catalog.id()).dim(),
        catalog.path(),
        style(catalog.display_alias()).cyan()
    );
}

fn with_hint(error: CatalogError, context: &str) -> anyhow::Error {
    match error.recovery_suggestion() {
        Some(hint) => anyhow!("{}: {}\n  {} {}", context, error, style("Hint:").cyan(), hint),
        None => anyhow!("{}: {}", context, error),
    }
}
