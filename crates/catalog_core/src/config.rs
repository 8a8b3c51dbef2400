//! Configuration for a catalog store.

use crate::definition_file::DEFAULT_FILENAME;
use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the optional configuration file inside a store's root directory.
pub const CONFIG_FILENAME: &str = "catalog.toml";

/// Store configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct StoreConfig {
    /// Definition file settings.
    #[serde(default)]
    pub definitions: DefinitionsConfig,
}

impl StoreConfig {
    /// Loads `catalog.toml` from `root`, or the defaults if it does not exist.
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(CONFIG_FILENAME);
        if path.exists() {
            let content = fs::read_to_string(&path)
                .map_err(|e| CatalogError::ConfigError(format!("failed to read config: {}", e)))?;
            toml::from_str(&content)
                .map_err(|e| CatalogError::ConfigError(format!("failed to parse config: {}", e)))
        } else {
            Ok(StoreConfig::default())
        }
    }

    /// Writes `catalog.toml` into `root`.
    pub fn save(&self, root: &Path) -> Result<()> {
        let path = root.join(CONFIG_FILENAME);
        let content = toml::to_string_pretty(self)
            .map_err(|e| CatalogError::ConfigError(format!("failed to serialize config: {}", e)))?;
        fs::write(&path, content)
            .map_err(|e| CatalogError::ConfigError(format!("failed to write config: {}", e)))?;
        Ok(())
    }
}

/// Definition file settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefinitionsConfig {
    /// File name used when loading a directory or saving without an
    /// active definition file (default: `catalog_definitions.txt`).
    pub filename: String,

    /// Keep the previous file as `<filename>~` on every write (default: true).
    pub keep_backup: bool,
}

impl Default for DefinitionsConfig {
    fn default() -> Self {
        Self {
            filename: DEFAULT_FILENAME.to_string(),
            keep_backup: true,
        }
    }
}
