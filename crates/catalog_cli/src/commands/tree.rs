//! Tree command - show the catalog hierarchy.

use super::open_store;
use anyhow::{Context, Result};
use catalog_core::{CatalogTree, TreeItem};
use console::style;
use serde::Serialize;
use std::path::Path;

/// JSON shape of one tree item.
#[derive(Debug, Serialize)]
struct TreeNodeJson {
    name: String,
    path: String,
    catalog_ids: Vec<String>,
    children: Vec<TreeNodeJson>,
}

impl TreeNodeJson {
    fn from_item(item: TreeItem<'_>) -> Self {
        Self {
            name: item.name().to_string(),
            path: item.full_path().to_string(),
            catalog_ids: item.catalog_ids().iter().map(|id| id.to_string()).collect(),
            children: item.children().map(Self::from_item).collect(),
        }
    }
}

/// Print the tree as indented text or nested JSON.
pub fn run(dir: &Path, format: &str) -> Result<()> {
    let store = open_store(dir)?;
    let tree = store.tree();

    match format {
        "text" => print_text(tree),
        "json" => {
            let mut roots = Vec::new();
            tree.for_each_root_item(|item| roots.push(TreeNodeJson::from_item(item)));
            let json =
                serde_json::to_string_pretty(&roots).context("Failed to serialize to JSON")?;
            println!("{}", json);
        }
        _ => {
            anyhow::bail!("Unsupported format: {}. Use 'text' or 'json'.", format);
        }
    }

    Ok(())
}

fn print_text(tree: &CatalogTree) {
    if tree.is_empty() {
        println!("{} No catalogs defined.", style("→").cyan());
        return;
    }

    tree.for_each_item(|item| {
        let indent = "  ".repeat(item.count_ancestors());
        if item.is_implicit() {
            println!("{}{}", indent, style(item.name()).dim());
        } else {
            println!("{}{}", indent, style(item.name()).bold());
        }
    });
}
