//! # Record Store
//!
//! Reads and writes the complete item list as one unit.
//!
//! ## Load / Save Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  load()                                                                 │
//! │  ├── file missing         → Ok(vec![])                                  │
//! │  ├── file empty/blank     → Ok(vec![])                                  │
//! │  ├── valid JSON array     → Ok(items)  (file order preserved)           │
//! │  └── anything else        → Err(StorageRead)                            │
//! │                                                                         │
//! │  save(items)                                                            │
//! │  └── truncate + write the whole array → Ok(()) or Err(StorageWrite)    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Saving is a plain whole-file write. There is no write-then-rename, so a
//! crash mid-write can lose the file. Two processes saving the same file
//! race, and the last writer wins.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use bakery_core::Item;
use tracing::{debug, info};

use crate::error::{StoreError, StoreResult};

// =============================================================================
// Configuration
// =============================================================================

/// Record store configuration.
///
/// ## Example
/// ```rust
/// use bakery_store::StoreConfig;
///
/// let config = StoreConfig::new("./data/bakery.json").create_if_missing(false);
/// assert!(!config.create_if_missing);
/// ```
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Path to the JSON store file.
    pub path: PathBuf,

    /// Whether `save` and `ensure_exists` may create missing parent
    /// directories.
    /// Default: true
    pub create_if_missing: bool,
}

impl StoreConfig {
    /// Creates a configuration for the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        StoreConfig {
            path: path.into(),
            create_if_missing: true,
        }
    }

    /// Sets whether missing parent directories are created.
    pub fn create_if_missing(mut self, create: bool) -> Self {
        self.create_if_missing = create;
        self
    }
}

// =============================================================================
// Record Store
// =============================================================================

/// Flat-file store holding every item.
#[derive(Debug, Clone)]
pub struct RecordStore {
    config: StoreConfig,
}

impl RecordStore {
    /// Creates a store handle. No file access happens here.
    pub fn new(config: StoreConfig) -> Self {
        RecordStore { config }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.config.path
    }

    /// Creates an empty store file if none exists yet.
    pub fn ensure_exists(&self) -> StoreResult<()> {
        let path = self.path();
        if path.exists() {
            return Ok(());
        }

        self.create_parent_dir()?;
        fs::write(path, "[]").map_err(|e| StoreError::write(path, e))?;

        info!(path = %path.display(), "Created empty item store");
        Ok(())
    }

    /// Reads every item, in file order.
    ///
    /// ## Returns
    /// * `Ok(vec![])` - The file does not exist yet or is blank
    /// * `Ok(items)` - Parsed items
    /// * `Err(StoreError::StorageRead)` - Unreadable or corrupt content
    pub fn load(&self) -> StoreResult<Vec<Item>> {
        let path = self.path();

        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "Store file missing, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(StoreError::read(path, e)),
        };

        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }

        let items: Vec<Item> =
            serde_json::from_str(&raw).map_err(|e| StoreError::read(path, e))?;

        debug!(count = items.len(), "Loaded items");
        Ok(items)
    }

    /// Replaces the whole file with exactly `items`, in the given order.
    pub fn save(&self, items: &[Item]) -> StoreResult<()> {
        let path = self.path();

        let json = serde_json::to_string_pretty(items).map_err(|e| StoreError::write(path, e))?;

        self.create_parent_dir()?;
        fs::write(path, json).map_err(|e| StoreError::write(path, e))?;

        debug!(count = items.len(), path = %path.display(), "Saved items");
        Ok(())
    }

    fn create_parent_dir(&self) -> StoreResult<()> {
        if !self.config.create_if_missing {
            return Ok(());
        }

        match self.path().parent() {
            Some(dir) if !dir.as_os_str().is_empty() => {
                fs::create_dir_all(dir).map_err(|e| StoreError::write(self.path(), e))
            }
            _ => Ok(()),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
