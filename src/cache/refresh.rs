//! Last successful refresh timestamp, kept beside the cache records.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use super::error::CacheError;

const PREFERENCES_FILE: &str = "preferences.toml";

#[derive(Debug, Default, Serialize, Deserialize)]
struct Preferences {
    /// Milliseconds since the Unix epoch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    last_refresh_ms: Option<u64>,
}

/// Reads and records when the feed was last fetched successfully.
#[derive(Clone)]
pub struct RefreshTracker {
    path: PathBuf,
    write_lock: Arc<Mutex<()>>,
}

impl RefreshTracker {
    pub fn new(dir: &Path) -> Self {
        Self {
            path: dir.join(PREFERENCES_FILE),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn last_refresh(&self) -> Result<Option<SystemTime>, CacheError> {
        Ok(self
            .load()?
            .last_refresh_ms
            .map(|ms| UNIX_EPOCH + Duration::from_millis(ms)))
    }

    pub fn record_refresh(&self, at: SystemTime) -> Result<(), CacheError> {
        let ms = at
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        self.store(&Preferences {
            last_refresh_ms: Some(ms),
        })
    }

    /// Forget the last refresh so the next activation fetches.
    pub fn reset(&self) -> Result<(), CacheError> {
        self.store(&Preferences::default())
    }

    /// True when the last refresh happened less than `window` before `now`.
    ///
    /// A timestamp ahead of `now` counts as fresh. Unreadable preferences
    /// count as stale.
    pub fn is_fresh(&self, now: SystemTime, window: Duration) -> bool {
        let last = match self.last_refresh() {
            Ok(Some(last)) => last,
            Ok(None) => return false,
            Err(err) => {
                tracing::warn!(error = %err, "Failed to read last refresh time");
                return false;
            }
        };
        match now.duration_since(last) {
            Ok(age) => age < window,
            Err(_) => true,
        }
    }

    fn load(&self) -> Result<Preferences, CacheError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Preferences::default()),
            Err(e) => return Err(CacheError::io(&self.path, e)),
        };
        toml::from_str(&content).map_err(|e| CacheError::Preferences {
            path: self.path.clone(),
            source: e,
        })
    }

    fn store(&self, preferences: &Preferences) -> Result<(), CacheError> {
        let content = toml::to_string(preferences)?;
        let tmp_path = self.path.with_extension("toml.tmp");
        let _guard = self.write_lock.lock();
        fs::write(&tmp_path, content)
            .and_then(|_| fs::rename(&tmp_path, &self.path))
            .map_err(|e| CacheError::io(&self.path, e))
    }
}
