use super::{open_store, parse_id};
use anyhow::Result;
use catalog_core::{CatalogId, CatalogOrderedSet, CatalogStore};
use std::path::Path;

/// Print the IDs the filter rooted at `root_id` matches, one per line.
pub fn run(dir: &Path, root_id: &str) -> Result<()> {
    let store = open_store(dir)?;
    let root_id = parse_id(root_id)?;

    for id in matching_ids(&store, root_id) {
        println!("{}", id);
    }
    Ok(())
}

/// Live matches sorted by path, then ID.
///
/// A root that is not live (deleted, unknown or a sentinel) matches only
/// itself.
fn matching_ids(store: &CatalogStore, root_id: CatalogId) -> Vec<CatalogId> {
    if store.find_by_id(root_id).is_none() {
        return vec![root_id];
    }

    let filter = store.create_filter(root_id);
    let matched: CatalogOrderedSet = store
        .iter_catalogs()
        .filter(|c| filter.contains(c.id()))
        .collect();
    matched.iter().map(|c| c.id()).collect()
}
