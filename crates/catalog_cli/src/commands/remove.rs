//! Remove command - delete catalogs.

use super::{open_store, parse_id, require_catalog, save_store};
use anyhow::Result;
use console::style;
use std::path::Path;

/// Delete a catalog, or with `recursive` every catalog at or below its path.
pub fn run(dir: &Path, id: &str, recursive: bool) -> Result<()> {
    let mut store = open_store(dir)?;
    let id = parse_id(id)?;
    let path = require_catalog(&store, id)?.path().clone();

    let deleted = if recursive {
        store.prune_catalogs_by_path(path.as_str())
    } else {
        usize::from(store.delete_catalog(id))
    };
    save_store(&mut store, dir)?;

    println!(
        "{} Deleted {} catalog{} at {}",
        style("✓").green(),
        deleted,
        if deleted == 1 { "" } else { "s" },
        style(&path).bold()
    );
    if !recursive && store.tree().find_item(&path).is_some_and(|item| item.has_children()) {
        println!(
            "  {} Catalogs below it remain. Use {} to delete them too.",
            style("Note:").yellow(),
            style("--recursive").cyan()
        );
    }

    Ok(())
}
