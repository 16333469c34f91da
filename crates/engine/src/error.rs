use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File '{path}' is not valid UTF-8: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: std::str::Utf8Error,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl EngineError {
    /// Whether this error means the file could not be accessed or decoded,
    /// as opposed to a configuration problem.
    #[must_use]
    pub const fn is_file_access(&self) -> bool {
        matches!(self, Self::FileRead { .. } | Self::Decode { .. })
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
