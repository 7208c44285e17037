use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimulatorError {
    #[error("unable to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unable to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unable to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("unable to serialize input settings: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("invalid frame time {0}")]
    InvalidFrameTime(f32),
}

pub type Result<T> = std::result::Result<T, SimulatorError>;
