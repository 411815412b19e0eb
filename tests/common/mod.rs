//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_feed;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use animal_facts::cache::CacheStore;
use animal_facts::config::Config;
use animal_facts::feed::{CategoryFeed, FetchError};
use animal_facts::model::{Category, CategoryStatus};
use animal_facts::runtime::Environment;
use async_trait::async_trait;
use parking_lot::Mutex;
use tempfile::TempDir;

/// A feed body in the upstream format: out of order, with a duplicate and a
/// category whose content is missing.
pub const SAMPLE_FEED: &str = r#"[
  {
    "title": "Dogs",
    "description": "Loyal companions",
    "image": "https://example.com/dogs.png",
    "order": 2,
    "status": "paid",
    "content": [
      { "fact": "Dogs can learn over 100 words.", "image": "https://example.com/d1.png" },
      { "fact": "A dog's nose print is unique.", "image": "" }
    ]
  },
  {
    "title": "Cats",
    "description": "Independent hunters",
    "image": "https://example.com/cats.png",
    "order": 1,
    "status": "free",
    "content": [
      { "fact": "Cats sleep most of the day.", "image": "https://example.com/c1.png" },
      { "fact": "A group of cats is a clowder.", "image": "" },
      { "fact": "Cats have five toes on their front paws.", "image": "" }
    ]
  },
  {
    "title": "Birds",
    "description": "Feathered friends",
    "image": "https://example.com/birds.png",
    "order": 3,
    "status": "paid"
  },
  {
    "title": "Cats",
    "description": "Independent hunters",
    "image": "https://example.com/cats.png",
    "order": 1,
    "status": "free",
    "content": [
      { "fact": "Duplicate entry.", "image": "" }
    ]
  }
]"#;

pub fn cats() -> Category {
    Category::new(
        "Cats",
        "Independent hunters",
        "https://example.com/cats.png",
        1,
        CategoryStatus::Free,
        vec![
            ("Cats sleep most of the day.".into(), "https://example.com/c1.png".into()),
            ("A group of cats is a clowder.".into(), String::new()),
        ],
    )
}

pub fn dogs() -> Category {
    Category::new(
        "Dogs",
        "Loyal companions",
        "https://example.com/dogs.png",
        2,
        CategoryStatus::Paid,
        vec![("Dogs can learn over 100 words.".into(), String::new())],
    )
}

pub fn birds() -> Category {
    Category::new(
        "Birds",
        "Feathered friends",
        "",
        3,
        CategoryStatus::ComingSoon,
        vec![],
    )
}

/// In-memory feed returning a preset result and counting calls.
pub struct StubFeed {
    result: Mutex<Result<Vec<Category>, u16>>,
    calls: AtomicUsize,
}

impl StubFeed {
    pub fn ok(categories: Vec<Category>) -> Arc<Self> {
        Arc::new(Self {
            result: Mutex::new(Ok(categories)),
            calls: AtomicUsize::new(0),
        })
    }

    /// A feed that always answers with the given HTTP status.
    pub fn failing(status: u16) -> Arc<Self> {
        Arc::new(Self {
            result: Mutex::new(Err(status)),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn set_ok(&self, categories: Vec<Category>) {
        *self.result.lock() = Ok(categories);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CategoryFeed for StubFeed {
    async fn fetch_categories(&self) -> Result<Vec<Category>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &*self.result.lock() {
            Ok(categories) => Ok(categories.clone()),
            Err(status) => Err(FetchError::HttpStatus { status: *status }),
        }
    }
}

/// Test config with a short ad delay.
pub fn test_config() -> Config {
    let mut config = Config::default();
    config.ads.simulated_delay_ms = 50;
    config
}

/// Environment over a fresh temp cache dir. Keep the `TempDir` alive for
/// the duration of the test.
pub fn temp_env(feed: Arc<StubFeed>) -> (TempDir, Environment) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let cache = CacheStore::open(dir.path()).expect("Failed to open cache");
    let env = Environment::new(feed, cache, &test_config());
    (dir, env)
}

/// Generous upper bound for async waits in tests.
pub const WAIT: Duration = Duration::from_secs(5);
