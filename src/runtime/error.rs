use thiserror::Error;

use crate::cache::CacheError;
use crate::feed::FetchError;

/// Failures that prevent the app core from starting.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Local storage is unavailable: {0}")]
    Cache(#[from] CacheError),

    #[error("Failed to create HTTP client: {0}")]
    Feed(#[from] FetchError),
}
