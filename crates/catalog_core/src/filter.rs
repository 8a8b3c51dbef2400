//! "Catalog or any of its descendants" membership test.

use crate::{CatalogId, CatalogTree};
use std::collections::HashSet;

/// Matches a root catalog id and every catalog below it in the tree.
///
/// Catalogs that share the root's path sit on the same tree item and match
/// too. A root id that no tree item carries (for example a sentinel for
/// "unassigned") matches only itself.
#[derive(Debug, Clone)]
pub struct CatalogFilter {
    root_id: CatalogId,
    matching_ids: HashSet<CatalogId>,
}

impl CatalogFilter {
    /// Builds the filter from a tree snapshot.
    pub fn new(root_id: CatalogId, tree: &CatalogTree) -> Self {
        let mut matching_ids = HashSet::from([root_id]);

        if let Some(root_item) = tree.find_item_by_catalog_id(root_id) {
            matching_ids.extend(root_item.catalog_ids().iter().copied());
            root_item.for_each_descendant(|item| {
                matching_ids.extend(item.catalog_ids().iter().copied());
            });
        }

        Self {
            root_id,
            matching_ids,
        }
    }

    /// The id the filter was built for.
    pub fn root_id(&self) -> CatalogId {
        self.root_id
    }

    /// True if `id` is the root or one of its descendants.
    pub fn contains(&self, id: CatalogId) -> bool {
        self.matching_ids.contains(&id)
    }

    /// Number of ids matched.
    pub fn len(&self) -> usize {
        self.matching_ids.len()
    }

    /// Always false; a filter matches at least its root.
    pub fn is_empty(&self) -> bool {
        self.matching_ids.is_empty()
    }
}
