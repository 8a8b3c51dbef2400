//! Catalog definition files.
//!
//! A definition file is UTF-8 text:
//!
//! ```text
//! # comment lines and blank lines are ignored anywhere
//! VERSION 1
//!
//! 313ea471-7c68-4b40-8f46-e5d8e3dc9a4e:character/Ellie/poselib:POSE
//! ```
//!
//! Each record is `ID:PATH:ALIAS`. The alias is everything after the second
//! `:`, so paths can never contain one.

use crate::collection::CatalogCollection;
use crate::error::{CatalogError, Result};
use crate::ordered_set::CatalogOrderedSet;
use crate::path::FIELD_DELIMITER;
use crate::{Catalog, CatalogId, CatalogPath};
use std::collections::{BTreeSet, HashSet};
use std::fmt::Write as _;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// File name looked up when loading a directory.
pub const DEFAULT_FILENAME: &str = "catalog_definitions.txt";

/// The only format version this build reads and writes.
pub const SUPPORTED_VERSION: u32 = 1;

/// Suffix of the file written before it is renamed into place.
pub const TEMP_SUFFIX: &str = ".writing";

/// Suffix of the previous file kept after a successful write.
pub const BACKUP_SUFFIX: &str = "~";

const VERSION_MARKER: &str = "VERSION ";
const COMMENT_PREFIX: char = '#';

const HEADER: &str = "\
# Catalog definition file.
#
# Blank lines and lines starting with '#' are ignored.
# The first other line must be the version line, \"VERSION 1\".
# Every line after it describes one catalog:
#   UUID:catalog/path/components:display alias
# The UUID identifies the catalog; paths and aliases need not be unique.
";

/// Decides which parsed records are taken into the live set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcceptPolicy {
    /// Keep a record unless its id is already live. Used on load.
    KeepIfNewId,
    /// Keep a record only if its id is neither live nor deleted. Used when
    /// merging the on-disk file before a save.
    KeepIfAbsentFromLiveAndDeleted,
}

impl AcceptPolicy {
    fn accepts(self, collection: &CatalogCollection, id: CatalogId) -> bool {
        match self {
            Self::KeepIfNewId => !collection.is_live(id),
            Self::KeepIfAbsentFromLiveAndDeleted => !collection.is_known(id),
        }
    }
}

/// On-disk mirror of a set of catalogs.
///
/// Tracks which catalogs it is responsible for persisting; the catalogs
/// themselves are owned by a [`CatalogCollection`].
#[derive(Debug, Clone)]
pub struct DefinitionFile {
    file_path: PathBuf,
    members: BTreeSet<CatalogId>,
}

impl DefinitionFile {
    /// Creates an empty in-memory definition file for `file_path`.
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
            members: BTreeSet::new(),
        }
    }

    /// Reads `file_path` and inserts its catalogs into `collection`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or its version line is
    /// missing or unsupported. In that case nothing is inserted. Malformed
    /// records are logged and skipped without failing the load.
    pub fn load(
        file_path: impl Into<PathBuf>,
        policy: AcceptPolicy,
        collection: &mut CatalogCollection,
    ) -> Result<Self> {
        let mut file = Self::new(file_path);
        file.parse_from_disk(policy, collection)?;
        Ok(file)
    }

    /// Path of the file on disk.
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// True if this file persists the catalog with `id`.
    pub fn contains(&self, id: CatalogId) -> bool {
        self.members.contains(&id)
    }

    /// Makes this file responsible for persisting `id`.
    ///
    /// Returns `false` if it already was.
    pub fn add_member(&mut self, id: CatalogId) -> bool {
        self.members.insert(id)
    }

    /// Number of catalogs this file is responsible for, live or not.
    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// True if the file exists on disk.
    pub fn exists_on_disk(&self) -> bool {
        self.file_path.is_file()
    }

    /// Re-reads the on-disk file and adopts catalogs created elsewhere.
    ///
    /// Only records whose id is neither live nor deleted in `collection` are
    /// taken. In-memory state wins for every id already known, and deleted
    /// ids are never brought back. Returns the number of adopted catalogs.
    /// A missing file, or one with a missing or unsupported version line,
    /// merges nothing.
    pub fn merge_from_disk(&mut self, collection: &mut CatalogCollection) -> Result<usize> {
        if !self.exists_on_disk() {
            return Ok(0);
        }
        let policy = AcceptPolicy::KeepIfAbsentFromLiveAndDeleted;
        let merged = match self.parse_from_disk(policy, collection) {
            Ok(merged) => merged,
            Err(
                e @ (CatalogError::MissingVersion { .. }
                | CatalogError::UnsupportedVersion { .. }),
            ) => {
                warn!(
                    path = %self.file_path.display(),
                    error = %e,
                    "Not merging catalog definition file with an unreadable version"
                );
                return Ok(0);
            }
            Err(e) => return Err(e),
        };
        debug!(
            path = %self.file_path.display(),
            merged,
            "Merged catalogs from definition file on disk"
        );
        Ok(merged)
    }

    fn parse_from_disk(
        &mut self,
        policy: AcceptPolicy,
        collection: &mut CatalogCollection,
    ) -> Result<usize> {
        let content = fs::read_to_string(&self.file_path)?;
        let records = parse_records(&self.file_path, &content)?;

        let mut seen: HashSet<CatalogId> = HashSet::new();
        let mut accepted = 0;
        for (line_number, catalog) in records {
            let id = catalog.id();
            if !seen.insert(id) {
                warn!(
                    path = %self.file_path.display(),
                    line = line_number,
                    catalog_id = %id,
                    "Skipping duplicate catalog id, keeping the first occurrence"
                );
                continue;
            }
            if !policy.accepts(collection, id) {
                continue;
            }
            if collection.insert(catalog) {
                self.members.insert(id);
                accepted += 1;
            }
        }

        debug!(
            path = %self.file_path.display(),
            accepted,
            ?policy,
            "Parsed catalog definition file"
        );
        Ok(accepted)
    }

    /// Renders the file contents for the live member catalogs.
    ///
    /// Records are sorted by path, then id, so unchanged catalogs always
    /// render to the same bytes.
    pub fn render(&self, collection: &CatalogCollection) -> String {
        let ordered: CatalogOrderedSet = self
            .members
            .iter()
            .filter_map(|&id| collection.get(id))
            .collect();

        let mut out = String::with_capacity(HEADER.len() + 64 * (ordered.len() + 1));
        out.push_str(HEADER);
        out.push('\n');
        let _ = writeln!(out, "{}{}", VERSION_MARKER, SUPPORTED_VERSION);
        out.push('\n');
        for catalog in ordered.iter() {
            let _ = writeln!(
                out,
                "{}{}{}{}{}",
                catalog.id(),
                FIELD_DELIMITER,
                catalog.path(),
                FIELD_DELIMITER,
                catalog.display_alias()
            );
        }
        out
    }

    /// Writes the file to its own path. See [`DefinitionFile::write_to`].
    pub fn write(&self, collection: &CatalogCollection, keep_backup: bool) -> Result<()> {
        self.write_to(&self.file_path, collection, keep_backup)
    }

    /// Writes the live member catalogs to `dest`.
    ///
    /// The contents go to `dest.writing` first. Only once that succeeded is
    /// an existing `dest` renamed to `dest~` (when `keep_backup` is set) and
    /// the temporary file renamed into place. A failure before the final
    /// rename leaves the previous `dest` untouched; a stray `.writing` file
    /// may remain.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::WriteFailed` naming the step that failed.
    pub fn write_to(
        &self,
        dest: &Path,
        collection: &CatalogCollection,
        keep_backup: bool,
    ) -> Result<()> {
        let content = self.render(collection);

        if let Some(parent) = dest.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|e| write_failed(dest, format!("cannot create directory: {}", e)))?;
        }

        let tmp_path = with_suffix(dest, TEMP_SUFFIX);
        {
            let mut file = File::create(&tmp_path)
                .map_err(|e| write_failed(dest, format!("cannot create temp file: {}", e)))?;
            file.write_all(content.as_bytes())
                .and_then(|_| file.sync_all())
                .map_err(|e| write_failed(dest, format!("cannot write temp file: {}", e)))?;
        }

        if keep_backup && dest.exists() {
            let backup = with_suffix(dest, BACKUP_SUFFIX);
            if backup.exists() {
                fs::remove_file(&backup)
                    .map_err(|e| write_failed(dest, format!("cannot replace backup: {}", e)))?;
            }
            fs::rename(dest, &backup)
                .map_err(|e| write_failed(dest, format!("cannot create backup: {}", e)))?;
        }

        fs::rename(&tmp_path, dest)
            .map_err(|e| write_failed(dest, format!("cannot move temp file into place: {}", e)))?;

        // fsync parent directory (Unix)
        #[cfg(unix)]
        {
            if let Some(parent) = dest.parent() {
                if let Ok(dir_file) = File::open(parent) {
                    let _ = dir_file.sync_all();
                }
            }
        }

        Ok(())
    }
}

/// Appends `suffix` to the file name of `path` (`a.txt` + `~` = `a.txt~`).
pub(crate) fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(suffix);
    PathBuf::from(name)
}

fn write_failed(path: &Path, reason: String) -> CatalogError {
    CatalogError::WriteFailed {
        path: path.to_path_buf(),
        reason,
    }
}

/// Outcome of parsing one record line.
#[derive(Debug, PartialEq, Eq)]
enum RecordLine {
    Catalog(Catalog),
    /// Present but intentionally empty path field; not an error.
    Ignored,
    Malformed(String),
}

/// Parses definition file contents into catalogs, tagged with 1-based line numbers.
///
/// Fails as a whole when the version line is missing or unsupported.
/// Malformed records are logged and left out.
pub(crate) fn parse_records(source: &Path, content: &str) -> Result<Vec<(usize, Catalog)>> {
    let mut records = Vec::new();
    let mut version_seen = false;

    for (index, raw_line) in content.lines().enumerate() {
        let line_number = index + 1;
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with(COMMENT_PREFIX) {
            continue;
        }

        if !version_seen {
            check_version_line(source, line)?;
            version_seen = true;
            continue;
        }

        match parse_record_line(line) {
            RecordLine::Catalog(catalog) => records.push((line_number, catalog)),
            RecordLine::Ignored => {}
            RecordLine::Malformed(reason) => {
                warn!(
                    path = %source.display(),
                    line = line_number,
                    %reason,
                    "Skipping malformed catalog definition line"
                );
            }
        }
    }

    if !version_seen {
        warn!(path = %source.display(), "Catalog definition file has no version line");
    }
    Ok(records)
}

fn check_version_line(source: &Path, line: &str) -> Result<()> {
    let Some(value) = line.strip_prefix(VERSION_MARKER) else {
        warn!(path = %source.display(), "Catalog definition file does not start with a version line");
        return Err(CatalogError::MissingVersion {
            path: source.to_path_buf(),
        });
    };

    let digits_only = !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit());
    match value.parse::<u32>() {
        Ok(SUPPORTED_VERSION) if digits_only => Ok(()),
        _ => {
            warn!(
                path = %source.display(),
                found = value,
                "Unsupported catalog definition file version"
            );
            Err(CatalogError::UnsupportedVersion {
                path: source.to_path_buf(),
                found: value.to_string(),
            })
        }
    }
}

fn parse_record_line(line: &str) -> RecordLine {
    let Some((id_field, rest)) = line.split_once(FIELD_DELIMITER) else {
        return RecordLine::Malformed("missing ':' after catalog id".to_string());
    };

    let id = match CatalogId::parse(id_field) {
        Ok(id) => id,
        Err(e) => return RecordLine::Malformed(e.to_string()),
    };

    let (path_field, alias) = match rest.find(FIELD_DELIMITER) {
        None => (rest, ""),
        Some(0) => return RecordLine::Ignored,
        Some(pos) => (&rest[..pos], rest[pos + 1..].trim()),
    };

    let path = CatalogPath::new(path_field);
    if path.is_empty() {
        return RecordLine::Malformed("empty catalog path".to_string());
    }
    RecordLine::Catalog(Catalog::new(id, path, alias))
}
