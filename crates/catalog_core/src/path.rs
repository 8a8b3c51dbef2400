//! Hierarchical catalog paths.
//!
//! A catalog path is a `/`-separated list of components such as
//! `character/Ellie/poselib`. Paths are case-sensitive and may contain any
//! Unicode text, including whitespace inside a component. Platform path
//! separators are never translated here.

use std::fmt;

/// Separator between path components.
pub const SEPARATOR: char = '/';

pub(crate) const SEPARATOR_STR: &str = "/";

/// Field delimiter of the definition file format. Not allowed in paths.
pub(crate) const FIELD_DELIMITER: char = ':';

/// Replacement for characters a path may not contain.
const REPLACEMENT: char = '-';

/// A normalized hierarchical catalog path.
///
/// A path produced by [`CatalogPath::new`] never starts or ends with a
/// separator or whitespace. It may be empty; the store refuses to keep
/// catalogs with empty paths.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CatalogPath(String);

impl CatalogPath {
    /// Normalizes `raw` into a catalog path.
    ///
    /// Surrounding whitespace and separators are stripped in any interleaving
    /// (`"  /foo/bar  "` becomes `"foo/bar"`). Interior whitespace is kept
    /// verbatim. The field delimiter `:` is replaced by `-` so that every path
    /// can be written to a definition file.
    ///
    /// # Examples
    ///
    /// ```
    /// use catalog_core::CatalogPath;
    ///
    /// let path = CatalogPath::new(" /some/path  /  ");
    /// assert_eq!(path.as_str(), "some/path");
    /// ```
    pub fn new(raw: &str) -> Self {
        let trimmed = raw.trim_matches(|c: char| c == SEPARATOR || c.is_whitespace());
        Self(trimmed.replace(FIELD_DELIMITER, &REPLACEMENT.to_string()))
    }

    /// Wraps an already-normalized string without touching it.
    pub(crate) fn from_normalized(path: String) -> Self {
        Self(path)
    }

    /// Returns the path as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true for the empty path.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates the components from root to leaf.
    ///
    /// The empty path has no components.
    pub fn components(&self) -> impl Iterator<Item = &str> {
        let source = if self.0.is_empty() { None } else { Some(&self.0) };
        source.into_iter().flat_map(|s| s.split(SEPARATOR))
    }

    /// Number of components.
    pub fn depth(&self) -> usize {
        self.components().count()
    }

    /// Last component, or `""` for the empty path.
    pub fn name(&self) -> &str {
        self.0.rsplit(SEPARATOR).next().unwrap_or("")
    }

    /// Path with the last component removed.
    ///
    /// Returns `None` for single-component and empty paths.
    pub fn parent(&self) -> Option<CatalogPath> {
        self.0
            .rfind(SEPARATOR)
            .map(|pos| Self(self.0[..pos].to_string()))
    }

    /// Appends one component.
    pub fn join(&self, component: &str) -> CatalogPath {
        if self.0.is_empty() {
            return Self(component.to_string());
        }
        Self(format!("{}{}{}", self.0, SEPARATOR, component))
    }

    /// True if `self` equals `other` or lies below it.
    ///
    /// Containment is component-wise: `"ab"` is not inside `"a"`. Every path
    /// is contained in the empty path.
    pub fn is_contained_in(&self, other: &CatalogPath) -> bool {
        if other.is_empty() {
            return true;
        }
        match self.0.strip_prefix(other.as_str()) {
            Some(rest) => rest.is_empty() || rest.starts_with(SEPARATOR),
            None => false,
        }
    }

    /// Moves `self` from under `from` to under `to`, keeping the relative suffix.
    ///
    /// Returns `None` when `self` is not contained in `from`.
    ///
    /// # Examples
    ///
    /// ```
    /// use catalog_core::CatalogPath;
    ///
    /// let path = CatalogPath::new("charlib/sub");
    /// let moved = path.rebase(&CatalogPath::new("charlib"), &CatalogPath::new("newlib"));
    /// assert_eq!(moved.unwrap().as_str(), "newlib/sub");
    /// ```
    pub fn rebase(&self, from: &CatalogPath, to: &CatalogPath) -> Option<CatalogPath> {
        if !self.is_contained_in(from) {
            return None;
        }
        if from.is_empty() {
            return Some(if to.is_empty() {
                self.clone()
            } else {
                to.join(&self.0)
            });
        }
        let suffix = &self.0[from.0.len()..];
        let suffix = suffix.strip_prefix(SEPARATOR).unwrap_or(suffix);
        if suffix.is_empty() {
            return Some(to.clone());
        }
        Some(to.join(suffix))
    }
}

impl fmt::Display for CatalogPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for CatalogPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CatalogPath({:?})", self.0)
    }
}

impl AsRef<str> for CatalogPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
