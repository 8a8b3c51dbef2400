//! Find command - look up single catalogs.

use super::{open_store, parse_id, print_row, require_catalog};
use anyhow::{anyhow, Result};
use std::path::Path;

/// Print the catalog with the given ID.
pub fn by_id(dir: &Path, id: &str) -> Result<()> {
    let store = open_store(dir)?;
    let id = parse_id(id)?;
    print_row(require_catalog(&store, id)?);
    Ok(())
}

/// Print the catalog at `path`. With several, the lowest ID is shown.
pub fn by_path(dir: &Path, path: &str) -> Result<()> {
    let store = open_store(dir)?;
    let catalog = store
        .find_by_path(path)
        .ok_or_else(|| anyhow!("No catalog at path '{}'", path))?;
    print_row(catalog);
    Ok(())
}
