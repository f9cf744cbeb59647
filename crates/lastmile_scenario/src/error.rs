use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("failed to read scenario {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write scenario {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid scenario json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("scenario has no delivery locations")]
    Empty,

    #[error("location jitter must be non-negative, got {0}")]
    InvalidJitter(f64),
}
