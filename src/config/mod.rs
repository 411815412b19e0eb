//! Application configuration: types, defaults and TOML loading.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{AdConfig, CacheConfig, Config, FeedConfig};
