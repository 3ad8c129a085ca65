use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CdError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error in {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },

    /// The console input reached end-of-file while a prompt was waiting.
    #[error("Input closed")]
    InputClosed,
}

pub type Result<T> = std::result::Result<T, CdError>;
