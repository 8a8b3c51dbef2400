//! List command.

use super::{open_store, print_row};
use anyhow::Result;
use catalog_core::CatalogOrderedSet;
use console::style;
use std::path::Path;

/// Print every live catalog, sorted by path then ID.
pub fn run(dir: &Path) -> Result<()> {
    let store = open_store(dir)?;

    if store.is_empty() {
        println!("{} No catalogs defined.", style("→").cyan());
        return Ok(());
    }

    let ordered: CatalogOrderedSet = store.iter_catalogs().collect();
    for catalog in ordered.iter() {
        print_row(catalog);
    }

    Ok(())
}
