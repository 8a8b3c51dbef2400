//! Catalog Core Library
//!
//! A hierarchical catalog store for organizing assets, providing:
//! - Catalogs identified by UUID and placed on `/`-separated paths
//! - A text definition file format with a version gate
//! - Merge-before-write saves that keep other writers' new catalogs
//! - A derived tree view and subtree filters
//!
//! # Quick Start
//!
//! ```
//! use catalog_core::CatalogStore;
//! use tempfile::TempDir;
//!
//! let tmp = TempDir::new().unwrap();
//! let mut store = CatalogStore::new(tmp.path());
//!
//! // Create a catalog; paths are normalized and aliases derived
//! let catalog = store.create_catalog(" /character/Ellie/poselib/ ").unwrap();
//! assert_eq!(catalog.path().as_str(), "character/Ellie/poselib");
//! assert_eq!(catalog.display_alias(), "character-Ellie-poselib");
//!
//! // Persist it
//! assert!(store.save(tmp.path()));
//! ```
//!
//! # Features
//!
//! ## Tree View
//!
//! Every path component becomes a tree item, whether or not a catalog
//! sits exactly on it:
//!
//! ```
//! use catalog_core::CatalogStore;
//!
//! let mut store = CatalogStore::in_memory();
//! store.create_catalog("character/Ellie/poselib").unwrap();
//!
//! let mut lines = Vec::new();
//! store.tree().for_each_item(|item| {
//!     lines.push(format!("{}{}", "  ".repeat(item.count_ancestors()), item.name()));
//! });
//! assert_eq!(lines, ["character", "  Ellie", "    poselib"]);
//! ```
//!
//! ## Subtree Filters
//!
//! ```
//! use catalog_core::CatalogStore;
//!
//! let mut store = CatalogStore::in_memory();
//! let props = store.create_catalog("props").unwrap().id();
//! let chairs = store.create_catalog("props/chairs").unwrap().id();
//! let people = store.create_catalog("people").unwrap().id();
//!
//! let filter = store.create_filter(props);
//! assert!(filter.contains(chairs));
//! assert!(!filter.contains(people));
//! ```

mod catalog;
mod collection;
mod config;
mod definition_file;
mod error;
mod filter;
mod id;
mod ordered_set;
mod path;
mod store;
mod tree;

pub use catalog::{alias_from_path, Catalog, MAX_ALIAS_LEN};
pub use collection::CatalogCollection;
pub use config::{DefinitionsConfig, StoreConfig, CONFIG_FILENAME};
pub use definition_file::{
    AcceptPolicy, DefinitionFile, BACKUP_SUFFIX, DEFAULT_FILENAME, SUPPORTED_VERSION, TEMP_SUFFIX,
};
pub use error::{CatalogError, Result};
pub use filter::CatalogFilter;
pub use id::CatalogId;
pub use ordered_set::CatalogOrderedSet;
pub use path::{CatalogPath, SEPARATOR};
pub use store::CatalogStore;
pub use tree::{CatalogTree, TreeItem};
