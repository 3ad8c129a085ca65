use crate::error::{CdError, Result};
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "cdinv.json";
const DEFAULT_DATA_FILE: &str = "CDInventory.dat";
const DEFAULT_LOG_LEVEL: &str = "warn";

/// Configuration for cdinv, read from `cdinv.json` in the working directory.
/// Every field is optional in the file.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct InventoryConfig {
    /// Inventory data file. Relative paths resolve against the config directory.
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// Diagnostic log filter used when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Colored console messages
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

fn default_color() -> bool {
    true
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            log_level: default_log_level(),
            color: default_color(),
        }
    }
}

impl InventoryConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        let content = match fs::read_to_string(&config_path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(CdError::Io(e)),
        };

        serde_json::from_str(&content).map_err(|e| CdError::Config {
            path: config_path,
            message: e.to_string(),
        })
    }

    /// Absolute location of the data file for a config living in `config_dir`.
    pub fn data_path<P: AsRef<Path>>(&self, config_dir: P) -> PathBuf {
        if self.data_file.is_absolute() {
            self.data_file.clone()
        } else {
            config_dir.as_ref().join(&self.data_file)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = InventoryConfig::default();
        assert_eq!(config.data_file, PathBuf::from("CDInventory.dat"));
        assert_eq!(config.log_level, "warn");
        assert!(config.color);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempdir().unwrap();
        let config = InventoryConfig::load(dir.path()).unwrap();
        assert_eq!(config, InventoryConfig::default());
    }

    #[test]
    fn test_load_full_config() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            r#"{"data_file": "music/cds.dat", "log_level": "debug", "color": false}"#,
        )
        .unwrap();

        let loaded = InventoryConfig::load(dir.path()).unwrap();
        assert_eq!(
            loaded,
            InventoryConfig {
                data_file: PathBuf::from("music/cds.dat"),
                log_level: "debug".to_string(),
                color: false,
            }
        );
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"color": false}"#).unwrap();

        let config = InventoryConfig::load(dir.path()).unwrap();
        assert!(!config.color);
        assert_eq!(config.data_file, PathBuf::from("CDInventory.dat"));
    }

    #[test]
    fn test_malformed_config_names_file() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "{ nope").unwrap();

        let err = InventoryConfig::load(dir.path()).unwrap_err();
        assert!(matches!(err, CdError::Config { .. }));
        assert!(err.to_string().contains(CONFIG_FILENAME));
    }

    #[test]
    fn test_data_path_resolution() {
        let config = InventoryConfig::default();
        assert_eq!(
            config.data_path("/srv/cds"),
            PathBuf::from("/srv/cds/CDInventory.dat")
        );

        let absolute = InventoryConfig {
            data_file: PathBuf::from("/var/lib/cds.dat"),
            ..InventoryConfig::default()
        };
        assert_eq!(absolute.data_path("/srv/cds"), PathBuf::from("/var/lib/cds.dat"));
    }
}
