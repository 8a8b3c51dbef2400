//! Live and deleted catalog sets.

use crate::{Catalog, CatalogId};
use std::collections::HashMap;

/// Owns every catalog the store knows about.
///
/// Live catalogs are kept in insertion order. Deleted catalogs stay here for
/// the lifetime of the collection so that an id removed in memory is never
/// brought back by a stale definition file.
#[derive(Debug, Default)]
pub struct CatalogCollection {
    live: HashMap<CatalogId, Catalog>,
    order: Vec<CatalogId>,
    deleted: HashMap<CatalogId, Catalog>,
}

impl CatalogCollection {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Live catalog by id. Never looks at deleted catalogs.
    pub fn get(&self, id: CatalogId) -> Option<&Catalog> {
        self.live.get(&id)
    }

    pub(crate) fn get_mut(&mut self, id: CatalogId) -> Option<&mut Catalog> {
        self.live.get_mut(&id)
    }

    /// Deleted catalog by id.
    pub fn get_deleted(&self, id: CatalogId) -> Option<&Catalog> {
        self.deleted.get(&id)
    }

    /// True if `id` names a live catalog.
    pub fn is_live(&self, id: CatalogId) -> bool {
        self.live.contains_key(&id)
    }

    /// True if `id` names a deleted catalog.
    pub fn is_deleted(&self, id: CatalogId) -> bool {
        self.deleted.contains_key(&id)
    }

    /// True if `id` is live or deleted.
    pub fn is_known(&self, id: CatalogId) -> bool {
        self.is_live(id) || self.is_deleted(id)
    }

    /// Adds a live catalog.
    ///
    /// Returns `false` without inserting when the path is empty, the catalog
    /// is flagged deleted, or the id is already known.
    pub fn insert(&mut self, catalog: Catalog) -> bool {
        if catalog.path().is_empty() || catalog.is_deleted() || self.is_known(catalog.id()) {
            return false;
        }
        self.order.push(catalog.id());
        self.live.insert(catalog.id(), catalog);
        true
    }

    /// Moves a live catalog to the deleted set.
    ///
    /// Returns `false` if `id` is not live.
    pub fn delete(&mut self, id: CatalogId) -> bool {
        let Some(mut catalog) = self.live.remove(&id) else {
            return false;
        };
        self.order.retain(|&other| other != id);
        catalog.mark_deleted();
        self.deleted.insert(id, catalog);
        true
    }

    /// Iterates live catalogs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Catalog> + '_ {
        self.order.iter().filter_map(|id| self.live.get(id))
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Catalog> + '_ {
        self.live.values_mut()
    }

    /// Iterates deleted catalogs in no particular order.
    pub fn iter_deleted(&self) -> impl Iterator<Item = &Catalog> + '_ {
        self.deleted.values()
    }

    /// Number of live catalogs.
    pub fn len(&self) -> usize {
        self.live.len()
    }

    /// True if there are no live catalogs.
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Number of deleted catalogs.
    pub fn deleted_len(&self) -> usize {
        self.deleted.len()
    }
}
