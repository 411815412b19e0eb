//! Remote category feed.

mod error;
mod http;

use async_trait::async_trait;

use crate::model::Category;

pub use error::FetchError;
pub use http::HttpFeed;

/// Source of the category list.
///
/// One call is one attempt: implementations do not retry.
#[async_trait]
pub trait CategoryFeed: Send + Sync {
    async fn fetch_categories(&self) -> Result<Vec<Category>, FetchError>;
}
