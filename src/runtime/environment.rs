use std::sync::Arc;
use std::time::Duration;

use crate::cache::{CacheStore, RefreshTracker};
use crate::config::Config;
use crate::feed::{CategoryFeed, HttpFeed};

use super::error::StartupError;

/// Everything the effects need, passed in explicitly.
#[derive(Clone)]
pub struct Environment {
    pub feed: Arc<dyn CategoryFeed>,
    pub cache: CacheStore,
    pub refresh: RefreshTracker,
    /// Cache reads are preferred over fetching while the last refresh is
    /// younger than this.
    pub freshness: Duration,
    pub ad_delay: Duration,
}

impl Environment {
    /// Build the live environment: HTTP feed plus on-disk cache.
    pub fn from_config(config: &Config) -> Result<Self, StartupError> {
        let cache = CacheStore::open(config.cache.resolved_dir())?;
        let feed = HttpFeed::new(&config.feed)?;
        Ok(Self::new(Arc::new(feed), cache, config))
    }

    /// Build an environment around an existing cache and feed.
    pub fn new(feed: Arc<dyn CategoryFeed>, cache: CacheStore, config: &Config) -> Self {
        let refresh = RefreshTracker::new(cache.dir());
        Self {
            feed,
            cache,
            refresh,
            freshness: config.cache.freshness(),
            ad_delay: config.ads.simulated_delay(),
        }
    }
}
