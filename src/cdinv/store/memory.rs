use super::{DataStore, LoadOutcome};
use crate::error::{CdError, Result};
use crate::model::Record;
use std::io;
use std::path::{Path, PathBuf};

/// In-memory storage for testing and development.
/// Does NOT persist data.
///
/// `snapshot` is `None` until the first save, which is how a missing data file
/// is modelled.
pub struct InMemoryStore {
    snapshot: Option<Vec<Record>>,
    path: PathBuf,
    simulate_read_error: bool,
    simulate_write_error: bool,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self {
            snapshot: None,
            path: PathBuf::from("memory://CDInventory.dat"),
            simulate_read_error: false,
            simulate_write_error: false,
        }
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose snapshot already holds `records`.
    pub fn with_records(records: Vec<Record>) -> Self {
        Self {
            snapshot: Some(records),
            ..Self::default()
        }
    }

    /// Enable read error simulation, standing in for an unreadable data file.
    pub fn set_simulate_read_error(&mut self, simulate: bool) {
        self.simulate_read_error = simulate;
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&mut self, simulate: bool) {
        self.simulate_write_error = simulate;
    }

    pub fn snapshot(&self) -> Option<&[Record]> {
        self.snapshot.as_deref()
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<LoadOutcome> {
        if self.simulate_read_error {
            return Err(CdError::Io(io::Error::other("Simulated read error")));
        }
        Ok(match &self.snapshot {
            Some(records) => LoadOutcome::Loaded(records.clone()),
            None => LoadOutcome::Missing(self.path.clone()),
        })
    }

    fn save(&mut self, records: &[Record]) -> Result<()> {
        if self.simulate_write_error {
            return Err(CdError::Io(io::Error::other("Simulated write error")));
        }
        self.snapshot = Some(records.to_vec());
        Ok(())
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_records(mut self, count: usize) -> Self {
            let records: Vec<Record> = (0..count)
                .map(|i| {
                    Record::new(
                        i as i64 + 1,
                        format!("Test CD {}", i + 1),
                        format!("Artist {}", i + 1),
                    )
                })
                .collect();
            self.store.save(&records).unwrap();
            self
        }

        pub fn with_record(mut self, id: i64, title: &str, artist: &str) -> Self {
            let mut records = self.store.snapshot().map(<[Record]>::to_vec).unwrap_or_default();
            records.push(Record::new(id, title, artist));
            self.store.save(&records).unwrap();
            self
        }
    }
}
