//! Deterministic ordering of catalogs for serialization.

use crate::{Catalog, CatalogId};
use std::collections::BTreeMap;

/// Catalogs ordered by path, then by id.
///
/// Used when writing a definition file so that saving the same catalogs twice
/// produces the same bytes. Borrows the catalogs; the store keeps ownership.
#[derive(Debug, Default)]
pub struct CatalogOrderedSet<'a> {
    entries: BTreeMap<(&'a str, CatalogId), &'a Catalog>,
}

impl<'a> CatalogOrderedSet<'a> {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a catalog.
    ///
    /// Returns `false` and keeps the existing entry when a catalog with the
    /// same (path, id) pair is already present. Catalogs sharing a path but
    /// not an id are both kept.
    pub fn insert(&mut self, catalog: &'a Catalog) -> bool {
        let key = (catalog.path().as_str(), catalog.id());
        if self.entries.contains_key(&key) {
            return false;
        }
        self.entries.insert(key, catalog);
        true
    }

    /// Number of catalogs in the set.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the set holds no catalogs.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates catalogs in (path, id) order.
    pub fn iter(&self) -> impl Iterator<Item = &'a Catalog> + '_ {
        self.entries.values().copied()
    }
}

impl<'a> FromIterator<&'a Catalog> for CatalogOrderedSet<'a> {
    fn from_iter<I: IntoIterator<Item = &'a Catalog>>(iter: I) -> Self {
        let mut set = Self::new();
        for catalog in iter {
            set.insert(catalog);
        }
        set
    }
}
