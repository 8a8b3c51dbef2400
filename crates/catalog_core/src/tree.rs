//! Hierarchical index built from flat catalog paths.
//!
//! The tree is a read-only view. It is rebuilt from scratch whenever the
//! catalogs change and never patched in place. Items live in an arena owned
//! by the tree and refer to their parent by index.

use crate::path::SEPARATOR_STR;
use crate::{Catalog, CatalogId, CatalogPath};
use std::collections::HashMap;

/// One path component at one depth.
#[derive(Debug, Clone)]
struct TreeNode {
    name: String,
    parent: Option<usize>,
    /// Child indices in first-insertion order.
    children: Vec<usize>,
    child_lookup: HashMap<String, usize>,
    /// Catalogs whose path ends exactly at this node, in the order they were fed.
    catalog_ids: Vec<CatalogId>,
}

impl TreeNode {
    fn new(name: &str, parent: Option<usize>) -> Self {
        Self {
            name: name.to_string(),
            parent,
            children: Vec::new(),
            child_lookup: HashMap::new(),
            catalog_ids: Vec::new(),
        }
    }
}

/// Tree of catalog path components.
///
/// Catalogs sharing a path collapse onto one item. Prefixes that no catalog
/// names exactly still get an item (an implicit item with no catalog ids).
///
/// # Examples
///
/// ```
/// use catalog_core::{Catalog, CatalogTree};
///
/// let catalog = Catalog::from_path("character/Ellie/poselib");
/// let tree = CatalogTree::build([&catalog]);
///
/// let mut seen = Vec::new();
/// tree.for_each_item(|item| seen.push((item.full_path().to_string(), item.count_ancestors())));
/// assert_eq!(
///     seen,
///     vec![
///         ("character".to_string(), 0),
///         ("character/Ellie".to_string(), 1),
///         ("character/Ellie/poselib".to_string(), 2),
///     ]
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct CatalogTree {
    nodes: Vec<TreeNode>,
    roots: Vec<usize>,
    root_lookup: HashMap<String, usize>,
}

impl CatalogTree {
    /// Builds a tree from catalogs in the given order.
    ///
    /// Sibling order is the order in which components are first seen.
    /// Catalogs with empty paths are skipped.
    pub fn build<'a>(catalogs: impl IntoIterator<Item = &'a Catalog>) -> Self {
        let mut tree = Self::default();
        for catalog in catalogs {
            tree.insert(catalog);
        }
        tree
    }

    fn insert(&mut self, catalog: &Catalog) {
        let mut current: Option<usize> = None;
        for component in catalog.path().components() {
            current = Some(self.child_or_insert(current, component));
        }
        if let Some(index) = current {
            self.nodes[index].catalog_ids.push(catalog.id());
        }
    }

    fn child_or_insert(&mut self, parent: Option<usize>, name: &str) -> usize {
        let existing = match parent {
            Some(p) => self.nodes[p].child_lookup.get(name),
            None => self.root_lookup.get(name),
        };
        if let Some(&index) = existing {
            return index;
        }

        let index = self.nodes.len();
        self.nodes.push(TreeNode::new(name, parent));
        match parent {
            Some(p) => {
                let node = &mut self.nodes[p];
                node.children.push(index);
                node.child_lookup.insert(name.to_string(), index);
            }
            None => {
                self.roots.push(index);
                self.root_lookup.insert(name.to_string(), index);
            }
        }
        index
    }

    /// Number of items in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True if the tree has no items.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Visits every item depth-first, parents before children.
    pub fn for_each_item<'a>(&'a self, mut visit: impl FnMut(TreeItem<'a>)) {
        self.walk(&self.roots, &mut visit);
    }

    /// Visits the depth-0 items in insertion order.
    pub fn for_each_root_item<'a>(&'a self, mut visit: impl FnMut(TreeItem<'a>)) {
        for &index in &self.roots {
            visit(self.item(index));
        }
    }

    /// Visits the direct children of `parent` in insertion order.
    pub fn for_each_child_item<'a>(
        &'a self,
        parent: &TreeItem<'_>,
        mut visit: impl FnMut(TreeItem<'a>),
    ) {
        for &index in &self.nodes[parent.index].children {
            visit(self.item(index));
        }
    }

    /// Collects every item in pre-order.
    pub fn items(&self) -> Vec<TreeItem<'_>> {
        let mut items = Vec::with_capacity(self.nodes.len());
        self.for_each_item(|item| items.push(item));
        items
    }

    /// Looks up the item for an exact path.
    pub fn find_item(&self, path: &CatalogPath) -> Option<TreeItem<'_>> {
        let mut current: Option<usize> = None;
        for component in path.components() {
            let next = match current {
                Some(p) => self.nodes[p].child_lookup.get(component),
                None => self.root_lookup.get(component),
            };
            current = Some(*next?);
        }
        current.map(|index| self.item(index))
    }

    /// Looks up the item a catalog id was placed on.
    pub fn find_item_by_catalog_id(&self, id: CatalogId) -> Option<TreeItem<'_>> {
        self.nodes
            .iter()
            .position(|node| node.catalog_ids.contains(&id))
            .map(|index| self.item(index))
    }

    fn item(&self, index: usize) -> TreeItem<'_> {
        TreeItem { tree: self, index }
    }

    fn walk<'a>(&'a self, indices: &[usize], visit: &mut impl FnMut(TreeItem<'a>)) {
        // Explicit stack; paths can be arbitrarily deep.
        let mut stack: Vec<usize> = indices.iter().rev().copied().collect();
        while let Some(index) = stack.pop() {
            visit(self.item(index));
            stack.extend(self.nodes[index].children.iter().rev().copied());
        }
    }
}

/// Borrowed handle to one tree item.
#[derive(Clone, Copy)]
pub struct TreeItem<'a> {
    tree: &'a CatalogTree,
    index: usize,
}

impl<'a> TreeItem<'a> {
    /// The path component this item stands for.
    pub fn name(&self) -> &'a str {
        &self.node().name
    }

    /// Catalogs whose path is exactly this item's path.
    pub fn catalog_ids(&self) -> &'a [CatalogId] {
        &self.node().catalog_ids
    }

    /// The first catalog placed on this item, if any.
    pub fn catalog_id(&self) -> Option<CatalogId> {
        self.node().catalog_ids.first().copied()
    }

    /// True if no catalog has exactly this item's path.
    pub fn is_implicit(&self) -> bool {
        self.node().catalog_ids.is_empty()
    }

    /// The parent item, `None` at depth 0.
    pub fn parent(&self) -> Option<TreeItem<'a>> {
        self.node().parent.map(|index| self.tree.item(index))
    }

    /// Number of items above this one; equals the depth.
    pub fn count_ancestors(&self) -> usize {
        let mut count = 0;
        let mut current = self.node().parent;
        while let Some(index) = current {
            count += 1;
            current = self.tree.nodes[index].parent;
        }
        count
    }

    /// Rebuilds the full path by walking up to the root.
    pub fn full_path(&self) -> CatalogPath {
        let mut names = vec![self.name()];
        let mut current = self.node().parent;
        while let Some(index) = current {
            let node = &self.tree.nodes[index];
            names.push(&node.name);
            current = node.parent;
        }
        names.reverse();
        CatalogPath::from_normalized(names.join(SEPARATOR_STR))
    }

    /// True if the item has at least one child.
    pub fn has_children(&self) -> bool {
        !self.node().children.is_empty()
    }

    /// Direct children in insertion order.
    pub fn children(&self) -> impl Iterator<Item = TreeItem<'a>> + 'a {
        let tree = self.tree;
        tree.nodes[self.index]
            .children
            .iter()
            .map(move |&index| tree.item(index))
    }

    /// Visits this item's descendants (not the item itself) in pre-order.
    pub fn for_each_descendant(&self, mut visit: impl FnMut(TreeItem<'a>)) {
        let tree = self.tree;
        let mut stack: Vec<usize> = self.node().children.iter().rev().copied().collect();
        while let Some(index) = stack.pop() {
            visit(tree.item(index));
            stack.extend(tree.nodes[index].children.iter().rev().copied());
        }
    }

    fn node(&self) -> &'a TreeNode {
        &self.tree.nodes[self.index]
    }
}

impl std::fmt::Debug for TreeItem<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TreeItem")
            .field("path", &self.full_path())
            .field("catalog_ids", &self.catalog_ids())
            .finish()
    }
}
