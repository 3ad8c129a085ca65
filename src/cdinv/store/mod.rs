//! # Storage Layer
//!
//! Persistence is wholesale: [`DataStore::save`] writes the entire inventory and
//! [`DataStore::load`] reads the entire inventory back. There are no partial
//! reads or writes.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage
//!   - One data file (default `CDInventory.dat`)
//!   - Gzip-compressed JSON array of records
//!   - Writes go to a temp file that is renamed over the target
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Can simulate a missing file, a failing read or a failing write
//!
//! ## Missing Files
//!
//! A data file that does not exist yet is not an error. `load` returns
//! [`LoadOutcome::Missing`] so callers can tell the user and carry on with an
//! empty inventory. Any other I/O or decoding failure is an `Err`.

use crate::error::Result;
use crate::model::Record;
use std::path::{Path, PathBuf};

pub mod fs;
pub mod memory;

/// What a load found on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded(Vec<Record>),
    Missing(PathBuf),
}

impl LoadOutcome {
    /// The loaded records; empty when the file was missing.
    pub fn into_records(self) -> Vec<Record> {
        match self {
            LoadOutcome::Loaded(records) => records,
            LoadOutcome::Missing(_) => Vec::new(),
        }
    }
}

/// Abstract interface for inventory persistence.
pub trait DataStore {
    /// Read the full inventory snapshot
    fn load(&self) -> Result<LoadOutcome>;

    /// Overwrite the snapshot with `records`
    fn save(&mut self, records: &[Record]) -> Result<()>;

    /// Location of the snapshot, for messages
    fn path(&self) -> &Path;
}
