use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors raised by the local cache.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Cache I/O failed at '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cache file '{path}' is corrupt: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode cache records: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Preferences file '{path}' is corrupt: {source}")]
    Preferences {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to encode preferences: {0}")]
    PreferencesEncode(#[from] toml::ser::Error),
}

impl CacheError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        CacheError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
