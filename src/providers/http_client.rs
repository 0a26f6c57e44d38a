//! HTTP Client for the Catalog API
//!
//! Thin wrapper over `reqwest::Client`. One call issues exactly one request:
//! there is no retry, no caching and no request deadline.

use reqwest::{Client, Response};
use tracing::debug;

/// HTTP client used by catalog fetchers
#[derive(Debug, Clone)]
pub struct CatalogHttpClient {
    /// Inner HTTP client (connection pool is shared between clones)
    client: Client,
}

impl CatalogHttpClient {
    /// Create a new client sending the given user agent
    pub fn new(user_agent: &str) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .pool_max_idle_per_host(10)
            .user_agent(user_agent)
            .build()?;

        Ok(CatalogHttpClient { client })
    }

    /// Issue a single GET request
    pub async fn get(&self, url: &str) -> Result<Response, reqwest::Error> {
        debug!(url = %url, "Sending catalog request");

        let response = self.client.get(url).send().await?;

        debug!(
            url = %url,
            status = response.status().as_u16(),
            "Catalog request completed"
        );

        Ok(response)
    }
}
