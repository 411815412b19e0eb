use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub feed: FeedConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub ads: AdConfig,
}

/// Remote feed settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedConfig {
    /// Base URL the feed file name is appended to. Must end with `/`.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Feed file name relative to `base_url`.
    #[serde(default = "default_feed_path")]
    pub path: String,
    /// Total request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Local cache settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// How long a successful fetch is trusted before refetching (default: 3600).
    #[serde(default = "default_freshness")]
    pub freshness_seconds: u64,
    /// Directory holding the cache files. Defaults to the platform data dir.
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

/// Simulated rewarded-ad settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdConfig {
    /// How long "watching" the ad takes (default: 2000).
    #[serde(default = "default_ad_delay")]
    pub simulated_delay_ms: u64,
}

fn default_base_url() -> String {
    "https://raw.githubusercontent.com/AppSci/promova-test-task-iOS/main/".to_string()
}

fn default_feed_path() -> String {
    "animals.json".to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_freshness() -> u64 {
    3600
}

fn default_ad_delay() -> u64 {
    2000
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            path: default_feed_path(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            freshness_seconds: default_freshness(),
            dir: None,
        }
    }
}

impl Default for AdConfig {
    fn default() -> Self {
        Self {
            simulated_delay_ms: default_ad_delay(),
        }
    }
}

impl FeedConfig {
    /// Full feed URL.
    pub fn url(&self) -> String {
        format!("{}{}", self.base_url, self.path)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.timeout_seconds))
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.connect_timeout_seconds))
    }
}

impl CacheConfig {
    pub fn freshness(&self) -> Duration {
        Duration::from_secs(self.freshness_seconds)
    }

    /// Resolved cache directory.
    pub fn resolved_dir(&self) -> PathBuf {
        self.dir.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("animal-facts")
        })
    }
}

impl AdConfig {
    pub fn simulated_delay(&self) -> Duration {
        Duration::from_millis(self.simulated_delay_ms)
    }
}
