//! Error types for catalog_core operations.

use crate::CatalogId;
use std::path::PathBuf;
use thiserror::Error;

/// Core error type for catalog_core operations.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A string could not be parsed as a catalog id.
    #[error("invalid catalog id: {0}")]
    InvalidCatalogId(String),

    /// A catalog path was empty after normalization.
    #[error("catalog path is empty")]
    EmptyPath,

    /// The definition file declares a version this build cannot read.
    #[error("unsupported definition file version {found} in {}", path.display())]
    UnsupportedVersion {
        /// Path to the definition file
        path: PathBuf,
        /// Version number found in the file
        found: String,
    },

    /// The first significant line of the definition file is not a version line.
    #[error("missing version line in {}", path.display())]
    MissingVersion {
        /// Path to the definition file
        path: PathBuf,
    },

    /// No live catalog exists with the given id.
    #[error("catalog not found: {0}")]
    CatalogNotFound(CatalogId),

    /// Writing the definition file failed.
    #[error("failed to write {}: {}", path.display(), reason)]
    WriteFailed {
        /// Destination path of the write
        path: PathBuf,
        /// Description of the failing step
        reason: String,
    },

    /// Configuration error (loading, parsing, invalid values).
    #[error("configuration error: {0}")]
    ConfigError(String),
}

impl CatalogError {
    /// Returns a user-friendly recovery suggestion for the error, if available.
    pub fn recovery_suggestion(&self) -> Option<&'static str> {
        match self {
            Self::UnsupportedVersion { .. } => {
                Some("The file was written by a newer version. Upgrade before editing it.")
            }
            Self::MissingVersion { .. } => {
                Some("Add a 'VERSION 1' line before the first catalog record.")
            }
            Self::WriteFailed { .. } => Some(
                "Check directory permissions. A leftover '.writing' file can be removed by hand.",
            ),
            Self::CatalogNotFound(_) => Some("List known catalogs with 'catalogs list'."),
            Self::EmptyPath => Some("Catalog paths need at least one non-empty component."),
            _ => None,
        }
    }
}

/// Convenience Result type for catalog_core operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
