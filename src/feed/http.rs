use async_trait::async_trait;
use reqwest::Client;

use super::error::FetchError;
use super::CategoryFeed;
use crate::config::FeedConfig;
use crate::model::Category;

/// Fetches the category feed over HTTP.
pub struct HttpFeed {
    client: Client,
    url: String,
}

impl HttpFeed {
    pub fn new(config: &FeedConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout())
            .timeout(config.timeout())
            .build()
            .map_err(FetchError::Transport)?;

        Ok(Self {
            client,
            url: config.url(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl CategoryFeed for HttpFeed {
    async fn fetch_categories(&self) -> Result<Vec<Category>, FetchError> {
        tracing::debug!(url = %self.url, "Fetching category feed");

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(FetchError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| {
            tracing::debug!(error = %e, "Failed to read feed body");
            FetchError::InvalidResponse
        })?;

        let categories: Vec<Category> =
            serde_json::from_slice(&body).map_err(FetchError::Decoding)?;

        tracing::info!(count = categories.len(), "Fetched category feed");
        Ok(categories)
    }
}
