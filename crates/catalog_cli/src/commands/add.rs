//! Add command - create catalogs.

use super::{open_store, save_store};
use anyhow::{Context, Result};
use console::style;
use std::path::Path;

/// Create a catalog at `path` and print its ID.
pub fn run(dir: &Path, path: &str, alias: Option<&str>) -> Result<()> {
    let mut store = open_store(dir)?;

    let catalog = store
        .create_catalog(path)
        .with_context(|| format!("Cannot create catalog at '{}'", path))?;
    let id = catalog.id();
    let normalized = catalog.path().clone();

    if let Some(alias) = alias {
        store.set_display_alias(id, alias)?;
    }
    save_store(&mut store, dir)?;

    println!("{} Created catalog {}", style("✓").green(), style(&normalized).bold());
    println!("{}", id);

    Ok(())
}
