//! Catalog identifiers.

use crate::error::{CatalogError, Result};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// A 128-bit random identifier naming one catalog.
///
/// Ids are the identity of a catalog; paths are only labels. An id is never
/// reused, not even after the catalog it named has been deleted.
///
/// # Examples
///
/// ```
/// use catalog_core::CatalogId;
///
/// let id = CatalogId::parse("ee9c7b40-2f3a-4e5b-9d1c-000000000001").unwrap();
/// assert_eq!(id.to_string(), "ee9c7b40-2f3a-4e5b-9d1c-000000000001");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CatalogId(Uuid);

impl CatalogId {
    /// Length of the hyphenated textual form.
    pub const TEXT_LEN: usize = 36;

    /// Generates a fresh random (v4) id.
    pub fn new_random() -> Self {
        Self(Uuid::new_v4())
    }

    /// The all-zero id. Never generated randomly; usable as an "unassigned" sentinel.
    pub const fn nil() -> Self {
        Self(Uuid::nil())
    }

    /// Wraps an existing UUID.
    #[inline]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    #[inline]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Parses the canonical hyphenated form (`xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx`).
    ///
    /// Other forms `uuid` would accept (simple, braced, URN) are rejected so
    /// that definition files only ever contain one spelling per id.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::InvalidCatalogId` for anything else.
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.len() != Self::TEXT_LEN {
            return Err(CatalogError::InvalidCatalogId(format!(
                "expected {} chars, got {}",
                Self::TEXT_LEN,
                s.len()
            )));
        }

        Uuid::parse_str(s)
            .map(Self)
            .map_err(|e| CatalogError::InvalidCatalogId(format!("{}: {}", s, e)))
    }
}

impl FromStr for CatalogId {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for CatalogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl fmt::Debug for CatalogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CatalogId({})", self.0.hyphenated())
    }
}
