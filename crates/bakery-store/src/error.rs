//! # Store Error Types
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / serde_json::Error                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds the file path and direction           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  AppError (in bakery-cli) ← Printed as a menu message                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::Path;

use thiserror::Error;

/// Record store failures.
///
/// A missing store file is NOT an error; `load` returns an empty list.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store file exists but could not be read or parsed.
    ///
    /// ## When This Occurs
    /// - Corrupt or hand-edited JSON
    /// - Permission denied
    #[error("Error reading {path}: {reason}")]
    StorageRead { path: String, reason: String },

    /// The store file could not be written.
    ///
    /// ## When This Occurs
    /// - Directory missing and cannot be created
    /// - Permission denied, disk full
    #[error("Error writing {path}: {reason}")]
    StorageWrite { path: String, reason: String },
}

impl StoreError {
    /// Creates a StorageRead error for a path.
    pub fn read(path: &Path, reason: impl ToString) -> Self {
        StoreError::StorageRead {
            path: path.display().to_string(),
            reason: reason.to_string(),
        }
    }

    /// Creates a StorageWrite error for a path.
    pub fn write(path: &Path, reason: impl ToString) -> Self {
        StoreError::StorageWrite {
            path: path.display().to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
