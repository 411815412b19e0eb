//! Local persistence: cached categories and refresh bookkeeping.

mod error;
mod records;
mod refresh;
mod store;

pub use error::CacheError;
pub use records::{CachedCategory, CachedFact};
pub use refresh::RefreshTracker;
pub use store::{CacheChanges, CacheStore};

/// Run blocking cache work (file IO, `flock`) off the async workers.
///
/// Returns `None` if the blocking task panicked or was cancelled.
pub(crate) async fn run_blocking<T, F>(task: F) -> Option<T>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    match tokio::task::spawn_blocking(task).await {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::warn!(error = %err, "Blocking cache task failed");
            None
        }
    }
}
