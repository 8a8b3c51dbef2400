use anyhow::Result;
use catalog_core::CatalogStore;

/// Declarative assertions on catalog store state
pub enum Assertion {
    // Catalogs
    CatalogCount(usize),
    CatalogAt {
        path: String,
    },
    NoCatalogAt {
        path: String,
    },
    CatalogPath {
        label: String,
        path: String,
    },
    CatalogAlias {
        label: String,
        alias: String,
    },
    CatalogDeleted {
        label: String,
    },
    CatalogLive {
        label: String,
    },

    // Tree
    TreeLines(Vec<String>),
    TreeEmpty,

    // Filter
    FilterMatches {
        root: String,
        labels: Vec<String>,
    },
    FilterExcludes {
        root: String,
        labels: Vec<String>,
    },

    // Files
    DefinitionsContain(String),
    DefinitionsLack(String),
    DefinitionsUnchanged,
    BackupExists,
    NoDefinitionFile,

    // Dirty flag
    UnsavedChanges(bool),

    // Custom (takes mutable reference to allow mutations)
    Custom(Box<dyn Fn(&mut CatalogStore) -> Result<()> + Send + Sync>),
}

impl std::fmt::Debug for Assertion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CatalogCount(n) => write!(f, "CatalogCount({})", n),
            Self::CatalogAt { path } => write!(f, "CatalogAt {{ path: {:?} }}", path),
            Self::NoCatalogAt { path } => write!(f, "NoCatalogAt {{ path: {:?} }}", path),
            Self::CatalogPath { label, path } => {
                write!(f, "CatalogPath {{ label: {:?}, path: {:?} }}", label, path)
            }
            Self::CatalogAlias { label, alias } => {
                write!(f, "CatalogAlias {{ label: {:?}, alias: {:?} }}", label, alias)
            }
            Self::CatalogDeleted { label } => write!(f, "CatalogDeleted {{ label: {:?} }}", label),
            Self::CatalogLive { label } => write!(f, "CatalogLive {{ label: {:?} }}", label),
            Self::TreeLines(lines) => write!(f, "TreeLines({:?})", lines),
            Self::TreeEmpty => write!(f, "TreeEmpty"),
            Self::FilterMatches { root, labels } => {
                write!(f, "FilterMatches {{ root: {:?}, labels: {:?} }}", root, labels)
            }
            Self::FilterExcludes { root, labels } => {
                write!(f, "FilterExcludes {{ root: {:?}, labels: {:?} }}", root, labels)
            }
            Self::DefinitionsContain(s) => write!(f, "DefinitionsContain({:?})", s),
            Self::DefinitionsLack(s) => write!(f, "DefinitionsLack({:?})", s),
            Self::DefinitionsUnchanged => write!(f, "DefinitionsUnchanged"),
            Self::BackupExists => write!(f, "BackupExists"),
            Self::NoDefinitionFile => write!(f, "NoDefinitionFile"),
            Self::UnsavedChanges(b) => write!(f, "UnsavedChanges({})", b),
            Self::Custom(_) => write!(f, "Custom(<fn>)"),
        }
    }
}
