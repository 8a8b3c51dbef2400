//! The catalog store: owns the catalogs and mediates every change to them.

use crate::collection::CatalogCollection;
use crate::config::StoreConfig;
use crate::definition_file::{AcceptPolicy, DefinitionFile};
use crate::error::{CatalogError, Result};
use crate::{Catalog, CatalogFilter, CatalogId, CatalogPath, CatalogTree};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// In-memory catalog set backed by at most one definition file.
///
/// A store is loaded once, changed through its methods, and written back
/// with [`CatalogStore::save`]. Saving first merges catalogs that other
/// processes added to the file since it was loaded, so concurrent editors
/// do not silently drop each other's new catalogs.
///
/// The store is not synchronized; share it across threads behind a lock.
///
/// # Examples
///
/// ```
/// use catalog_core::CatalogStore;
/// use tempfile::TempDir;
///
/// let tmp = TempDir::new().unwrap();
/// let mut store = CatalogStore::new(tmp.path());
/// let id = store.create_catalog("character/Ellie/poselib").unwrap().id();
/// assert!(store.save(tmp.path()));
///
/// let reloaded = CatalogStore::open(tmp.path()).unwrap();
/// assert_eq!(reloaded.find_by_id(id).unwrap().path().as_str(), "character/Ellie/poselib");
/// ```
#[derive(Debug, Default)]
pub struct CatalogStore {
    /// Directory used to place a definition file when none is loaded.
    root: Option<PathBuf>,
    config: StoreConfig,
    catalogs: CatalogCollection,
    definition_file: Option<DefinitionFile>,
    tree: CatalogTree,
    unsaved_changes: bool,
}

impl CatalogStore {
    /// Creates an empty store rooted at `root` with default configuration.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self::with_config(root, StoreConfig::default())
    }

    /// Creates an empty store rooted at `root`.
    pub fn with_config(root: impl AsRef<Path>, config: StoreConfig) -> Self {
        Self {
            root: Some(root.as_ref().to_path_buf()),
            config,
            ..Self::default()
        }
    }

    /// Creates an empty store without a root directory.
    ///
    /// Saving places the definition file next to the save target.
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Reads the configuration of `root` and loads its definition file.
    ///
    /// # Errors
    ///
    /// Returns an error only for an unreadable or invalid configuration file.
    /// Problems with the definition file are logged and leave the store empty.
    pub fn open(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref();
        let config = StoreConfig::load(root)?;
        let mut store = Self::with_config(root, config);
        store.load(root);
        Ok(store)
    }

    /// Replaces the store contents with the catalogs found at `source`.
    ///
    /// `source` is either a definition file or a directory holding one under
    /// the configured file name. A missing file leaves the store empty.
    /// Parent paths that no loaded catalog names are added as catalogs of
    /// their own and will be written on the next save.
    pub fn load(&mut self, source: impl AsRef<Path>) {
        let source = source.as_ref();
        self.catalogs = CatalogCollection::new();
        self.definition_file = None;
        self.unsaved_changes = false;

        let file_path = if source.is_dir() {
            source.join(&self.config.definitions.filename)
        } else {
            source.to_path_buf()
        };

        if file_path.is_file() {
            match DefinitionFile::load(&file_path, AcceptPolicy::KeepIfNewId, &mut self.catalogs) {
                Ok(file) => {
                    debug!(
                        path = %file_path.display(),
                        catalogs = self.catalogs.len(),
                        "Loaded catalog definition file"
                    );
                    self.definition_file = Some(file);
                }
                Err(e) => {
                    warn!(
                        path = %file_path.display(),
                        error = %e,
                        "Ignoring unreadable catalog definition file"
                    );
                }
            }
        } else {
            debug!(path = %file_path.display(), "No catalog definition file to load");
        }

        let created = self.create_missing_catalogs();
        if created > 0 {
            debug!(created, "Added catalogs for implied parent paths");
            self.unsaved_changes = true;
        }
        self.rebuild_tree();
    }

    /// Adds a catalog for every parent path that has none.
    fn create_missing_catalogs(&mut self) -> usize {
        let paths: Vec<CatalogPath> = self.catalogs.iter().map(|c| c.path().clone()).collect();
        let mut known: HashSet<CatalogPath> = paths.iter().cloned().collect();

        let mut missing = Vec::new();
        for path in paths {
            let mut parent = path.parent();
            while let Some(p) = parent {
                parent = p.parent();
                if known.insert(p.clone()) {
                    missing.push(p);
                }
            }
        }
        // Shallow paths first, so parents are inserted before their children.
        missing.sort_by_key(|p| p.depth());

        let created = missing.len();
        for path in missing {
            let catalog = Catalog::from_path(path.as_str());
            self.register(catalog);
        }
        created
    }

    /// Inserts a catalog and makes the active definition file responsible for it.
    fn register(&mut self, catalog: Catalog) -> Option<CatalogId> {
        let id = catalog.id();
        if !self.catalogs.insert(catalog) {
            return None;
        }
        if let Some(file) = self.definition_file.as_mut() {
            file.add_member(id);
        }
        Some(id)
    }

    /// Rebuilds the tree from the live catalogs, in insertion order.
    fn rebuild_tree(&mut self) {
        self.tree = CatalogTree::build(self.catalogs.iter());
    }

    /// Live catalog with `id`. Deleted catalogs are never returned.
    pub fn find_by_id(&self, id: CatalogId) -> Option<&Catalog> {
        self.catalogs.get(id)
    }

    /// Live catalog whose path equals `path` after normalization.
    ///
    /// When several catalogs share the path, the one with the lowest id wins.
    pub fn find_by_path(&self, path: &str) -> Option<&Catalog> {
        let path = CatalogPath::new(path);
        self.catalogs
            .iter()
            .filter(|c| *c.path() == path)
            .min_by_key(|c| c.id())
    }

    /// Creates a catalog at `path` with a fresh id and derived alias.
    ///
    /// Nothing is written to disk until [`CatalogStore::save`].
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::EmptyPath` if `path` normalizes to nothing.
    pub fn create_catalog(&mut self, path: &str) -> Result<&Catalog> {
        let catalog = Catalog::from_path(path);
        if catalog.path().is_empty() {
            return Err(CatalogError::EmptyPath);
        }

        let id = catalog.id();
        self.register(catalog);
        self.unsaved_changes = true;
        self.rebuild_tree();
        debug!(catalog_id = %id, "Created catalog");

        self.catalogs.get(id).ok_or(CatalogError::CatalogNotFound(id))
    }

    /// Soft-deletes the catalog with `id`.
    ///
    /// Catalogs below it keep their paths and stay live. Returns `false` if
    /// `id` is not a live catalog.
    pub fn delete_catalog(&mut self, id: CatalogId) -> bool {
        if !self.catalogs.delete(id) {
            return false;
        }
        self.unsaved_changes = true;
        self.rebuild_tree();
        debug!(catalog_id = %id, "Deleted catalog");
        true
    }

    /// Soft-deletes every live catalog whose path is `path` or lies below it.
    ///
    /// Returns the number of deleted catalogs.
    pub fn prune_catalogs_by_path(&mut self, path: &str) -> usize {
        let path = CatalogPath::new(path);
        if path.is_empty() {
            return 0;
        }

        let doomed: Vec<CatalogId> = self
            .catalogs
            .iter()
            .filter(|c| c.path().is_contained_in(&path))
            .map(|c| c.id())
            .collect();
        for &id in &doomed {
            self.catalogs.delete(id);
        }

        if !doomed.is_empty() {
            self.unsaved_changes = true;
            self.rebuild_tree();
        }
        doomed.len()
    }

    /// Moves the catalog with `id` to `new_path`, taking its descendants along.
    ///
    /// Every catalog whose path starts with the old path followed by `/`
    /// keeps its relative suffix under the new path. Ids and aliases stay
    /// the same.
    ///
    /// # Errors
    ///
    /// Returns `CatalogNotFound` for an unknown id and `EmptyPath` if
    /// `new_path` normalizes to nothing.
    pub fn update_path(&mut self, id: CatalogId, new_path: &str) -> Result<()> {
        let new_path = CatalogPath::new(new_path);
        if new_path.is_empty() {
            return Err(CatalogError::EmptyPath);
        }
        let old_path = self
            .catalogs
            .get(id)
            .map(|c| c.path().clone())
            .ok_or(CatalogError::CatalogNotFound(id))?;

        let mut moved = 0;
        for catalog in self.catalogs.iter_mut() {
            let is_target = catalog.id() == id;
            if !is_target && (*catalog.path() == old_path || !catalog.path().is_contained_in(&old_path)) {
                continue;
            }
            if let Some(rebased) = catalog.path().rebase(&old_path, &new_path) {
                catalog.set_path(rebased);
                moved += 1;
            }
        }

        self.unsaved_changes = true;
        self.rebuild_tree();
        debug!(
            catalog_id = %id,
            from = %old_path,
            to = %new_path,
            moved,
            "Updated catalog path"
        );
        Ok(())
    }

    /// Replaces the display alias of the catalog with `id`.
    ///
    /// The alias is trimmed and clamped to the maximum alias length.
    pub fn set_display_alias(&mut self, id: CatalogId, alias: &str) -> Result<()> {
        let catalog = self
            .catalogs
            .get_mut(id)
            .ok_or(CatalogError::CatalogNotFound(id))?;
        catalog.set_display_alias(alias);
        self.unsaved_changes = true;
        Ok(())
    }

    /// Builds a filter matching `root_id` and every catalog below it.
    pub fn create_filter(&self, root_id: CatalogId) -> CatalogFilter {
        CatalogFilter::new(root_id, &self.tree)
    }

    /// The tree built from the live catalogs.
    pub fn tree(&self) -> &CatalogTree {
        &self.tree
    }

    /// Iterates live catalogs in the order they entered the store.
    pub fn iter_catalogs(&self) -> impl Iterator<Item = &Catalog> + '_ {
        self.catalogs.iter()
    }

    /// Number of live catalogs.
    pub fn catalog_count(&self) -> usize {
        self.catalogs.len()
    }

    /// True if the store has no live catalogs.
    pub fn is_empty(&self) -> bool {
        self.catalogs.is_empty()
    }

    /// True if `id` was deleted during the lifetime of this store.
    pub fn is_deleted(&self, id: CatalogId) -> bool {
        self.catalogs.is_deleted(id)
    }

    /// True if anything changed since the last load or save.
    pub fn has_unsaved_changes(&self) -> bool {
        self.unsaved_changes
    }

    /// Path of the active definition file, if one is loaded or was saved.
    pub fn definition_file_path(&self) -> Option<&Path> {
        self.definition_file.as_ref().map(|f| f.path())
    }

    /// Directory used to place a new definition file.
    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    /// The store configuration.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Merges the on-disk file and writes the catalogs back.
    ///
    /// Failures are logged; returns whether the save succeeded. See
    /// [`CatalogStore::write_to_disk`] for the error-returning variant.
    pub fn save(&mut self, target: impl AsRef<Path>) -> bool {
        match self.write_to_disk(target.as_ref()) {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "Failed to save catalogs");
                if let Some(hint) = e.recovery_suggestion() {
                    warn!("{}", hint);
                }
                false
            }
        }
    }

    /// Merges the on-disk file and writes the catalogs back.
    ///
    /// The active definition file is used when there is one. Otherwise a new
    /// one is placed in the store root, or next to `target` for a store
    /// without a root; it takes responsibility for every live catalog. When
    /// there are no catalogs, no deletions and no file on disk, nothing
    /// happens.
    ///
    /// # Errors
    ///
    /// Returns an error if the on-disk file cannot be read or the write
    /// fails. The previous file is left intact in both cases. A file with a
    /// missing or unsupported version line merges nothing and is replaced;
    /// with backups enabled it survives as `<file>~`.
    pub fn write_to_disk(&mut self, target: &Path) -> Result<()> {
        let file_path = match &self.definition_file {
            Some(file) => file.path().to_path_buf(),
            None => self.resolve_definition_path(target),
        };

        if self.catalogs.is_empty() && self.catalogs.deleted_len() == 0 && !file_path.exists() {
            debug!(path = %file_path.display(), "Nothing to save");
            return Ok(());
        }

        let live = &self.catalogs;
        let file = self.definition_file.get_or_insert_with(|| {
            let mut file = DefinitionFile::new(file_path.clone());
            for catalog in live.iter() {
                file.add_member(catalog.id());
            }
            file
        });

        let merged = file.merge_from_disk(&mut self.catalogs)?;
        let written = file.write(&self.catalogs, self.config.definitions.keep_backup);

        // Merged catalogs are live whether or not the write went through.
        if merged > 0 {
            self.rebuild_tree();
        }
        written?;
        self.unsaved_changes = false;
        info!(
            path = %file_path.display(),
            catalogs = self.catalogs.len(),
            merged,
            "Saved catalog definitions"
        );
        Ok(())
    }

    fn resolve_definition_path(&self, target: &Path) -> PathBuf {
        let filename = &self.config.definitions.filename;
        if let Some(root) = &self.root {
            return root.join(filename);
        }
        if target.is_dir() {
            return target.join(filename);
        }
        match target.parent() {
            Some(dir) => dir.join(filename),
            None => PathBuf::from(filename),
        }
    }
}
