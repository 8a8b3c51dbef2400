//! Edit commands - move and rename catalogs.

use super::{open_store, parse_id, require_catalog, save_store};
use anyhow::{Context, Result};
use console::style;
use std::path::Path;

/// Move a catalog, and every catalog below it, to `new_path`.
pub fn move_catalog(dir: &Path, id: &str, new_path: &str) -> Result<()> {
    let mut store = open_store(dir)?;
    let id = parse_id(id)?;
    let old_path = require_catalog(&store, id)?.path().clone();

    store
        .update_path(id, new_path)
        .with_context(|| format!("Cannot move catalog to '{}'", new_path))?;
    save_store(&mut store, dir)?;

    let moved = require_catalog(&store, id)?;
    println!(
        "{} Moved {} {} {}",
        style("✓").green(),
        style(&old_path).bold(),
        style("→").cyan(),
        style(moved.path()).bold()
    );

    Ok(())
}

/// Replace the display alias of a catalog.
pub fn set_alias(dir: &Path, id: &str, alias: &str) -> Result<()> {
    let mut store = open_store(dir)?;
    let id = parse_id(id)?;
    require_catalog(&store, id)?;

    store.set_display_alias(id, alias)?;
    save_store(&mut store, dir)?;

    let catalog = require_catalog(&store, id)?;
    println!(
        "{} {} is now shown as {}",
        style("✓").green(),
        style(catalog.path()).bold(),
        style(catalog.display_alias()).cyan()
    );

    Ok(())
}
