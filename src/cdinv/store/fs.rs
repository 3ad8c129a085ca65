use super::{DataStore, LoadOutcome};
use crate::error::{CdError, Result};
use crate::model::Record;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use uuid::Uuid;

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(CdError::Io)?;
            }
        }
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "inventory".to_string());
        self.path
            .with_file_name(format!(".{}-{}.tmp", name, Uuid::new_v4()))
    }

    fn write_snapshot(path: &Path, records: &[Record]) -> Result<()> {
        let file = File::create(path).map_err(CdError::Io)?;
        let mut encoder = GzEncoder::new(BufWriter::new(file), Compression::default());
        serde_json::to_writer(&mut encoder, records).map_err(CdError::Serialization)?;
        let mut writer = encoder.finish().map_err(CdError::Io)?;
        writer.flush().map_err(CdError::Io)?;
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load(&self) -> Result<LoadOutcome> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                warn!(path = %self.path.display(), "inventory file not found");
                return Ok(LoadOutcome::Missing(self.path.clone()));
            }
            Err(e) => return Err(CdError::Io(e)),
        };

        let decoder = GzDecoder::new(BufReader::new(file));
        let records: Vec<Record> =
            serde_json::from_reader(decoder).map_err(CdError::Serialization)?;
        debug!(path = %self.path.display(), count = records.len(), "loaded inventory");
        Ok(LoadOutcome::Loaded(records))
    }

    fn save(&mut self, records: &[Record]) -> Result<()> {
        self.ensure_parent()?;

        // Atomic write: temp file then rename
        let tmp_path = self.tmp_path();
        let written = Self::write_snapshot(&tmp_path, records)
            .and_then(|()| fs::rename(&tmp_path, &self.path).map_err(CdError::Io));
        if let Err(e) = written {
            let _ = fs::remove_file(&tmp_path);
            return Err(e);
        }

        debug!(path = %self.path.display(), count = records.len(), "saved inventory");
        Ok(())
    }

    fn path(&self) -> &Path {
        &self.path
    }
}
