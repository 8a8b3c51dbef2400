//! The catalog entity.

use crate::path::{CatalogPath, SEPARATOR};
use crate::CatalogId;

/// Longest display alias, in bytes.
pub const MAX_ALIAS_LEN: usize = 63;

/// Marker put in front of an alias whose head was cut off.
const ELLIPSIS: &str = "...";

/// Stands in for the separator when deriving an alias from a path.
const ALIAS_SEPARATOR: char = '-';

/// One (id, path, alias) record; the unit of organization.
///
/// The id is fixed at construction. Path and alias are only changed through
/// the store so that the tree and the definition file stay in step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    id: CatalogId,
    path: CatalogPath,
    display_alias: String,
    is_deleted: bool,
}

impl Catalog {
    /// Creates a catalog from parts that are already clean.
    ///
    /// No normalization happens here, so reading an already-normalized
    /// definition file and writing it back changes nothing.
    pub fn new(id: CatalogId, path: CatalogPath, display_alias: impl Into<String>) -> Self {
        Self {
            id,
            path,
            display_alias: display_alias.into(),
            is_deleted: false,
        }
    }

    /// Creates a catalog with a fresh random id and an alias derived from `raw_path`.
    ///
    /// # Examples
    ///
    /// ```
    /// use catalog_core::Catalog;
    ///
    /// let catalog = Catalog::from_path(" /some/path  /  ");
    /// assert_eq!(catalog.path().as_str(), "some/path");
    /// assert_eq!(catalog.display_alias(), "some-path");
    /// ```
    pub fn from_path(raw_path: &str) -> Self {
        let path = CatalogPath::new(raw_path);
        let alias = alias_from_path(&path);
        Self::new(CatalogId::new_random(), path, alias)
    }

    /// Returns the catalog id.
    pub fn id(&self) -> CatalogId {
        self.id
    }

    /// Returns the catalog path.
    pub fn path(&self) -> &CatalogPath {
        &self.path
    }

    /// Returns the short human label.
    pub fn display_alias(&self) -> &str {
        &self.display_alias
    }

    /// True once the catalog has been moved to the deleted set.
    pub fn is_deleted(&self) -> bool {
        self.is_deleted
    }

    pub(crate) fn set_path(&mut self, path: CatalogPath) {
        self.path = path;
    }

    pub(crate) fn set_display_alias(&mut self, alias: &str) {
        self.display_alias = clamp_alias(alias.trim());
    }

    pub(crate) fn mark_deleted(&mut self) {
        self.is_deleted = true;
    }
}

/// Derives a display alias: separators become `-`, then the length clamp applies.
pub fn alias_from_path(path: &CatalogPath) -> String {
    let joined: String = path
        .as_str()
        .chars()
        .map(|c| if c == SEPARATOR { ALIAS_SEPARATOR } else { c })
        .collect();
    clamp_alias(&joined)
}

/// Limits `alias` to [`MAX_ALIAS_LEN`] bytes, keeping the tail.
///
/// The head is replaced by `...`. Cuts only happen on character boundaries.
fn clamp_alias(alias: &str) -> String {
    if alias.len() <= MAX_ALIAS_LEN {
        return alias.to_string();
    }

    let keep = MAX_ALIAS_LEN - ELLIPSIS.len();
    let mut start = alias.len() - keep;
    while !alias.is_char_boundary(start) {
        start += 1;
    }
    format!("{}{}", ELLIPSIS, &alias[start..])
}
