//! Reading and writing simulation defaults on disk.
//!
//! Full records round-trip through RON, JSON or bincode. Deployment targets
//! can also ship partial override files which are layered over a preset.

pub mod format;
pub mod layered;

pub use format::{ConfigFormat, load, load_overrides, save};
pub use layered::{LayeredConfig, load_layered};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not determine config format from path: {0}")]
    UnknownExtension(String),

    #[error("RON parse error: {0}")]
    RonParse(#[from] ron::error::SpannedError),

    #[error("RON write error: {0}")]
    RonWrite(#[from] ron::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("bincode error: {0}")]
    Bincode(#[from] bincode::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;
