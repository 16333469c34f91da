// crates/cli/src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Engine(#[from] token_scan_engine::error::EngineError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Failed to read jobs file '{path}': {source}")]
    JobsFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid jobs file '{path}': {source}")]
    JobsFileFormat {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Invalid arguments: {0}")]
    Args(String),
}

pub type Result<T> = std::result::Result<T, AppError>;
