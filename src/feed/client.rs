// src/feed/client.rs

//! HTTP feed client.

use std::time::Duration;

use async_trait::async_trait;
use url::Url;

use crate::config::FeedConfig;
use crate::error::Result;

/// Source of raw feed bytes.
///
/// One outbound call per `fetch`; failures are returned to the caller and
/// never retried here.
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Fetch the raw feed document, requesting at most `count` items.
    async fn fetch(&self, count: u32) -> Result<Vec<u8>>;
}

/// Create a configured asynchronous HTTP client.
pub fn create_client(config: &FeedConfig) -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .user_agent(&config.user_agent)
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()?;
    Ok(client)
}

/// Feed client backed by a single HTTP GET against the configured endpoint.
pub struct HttpFeedClient {
    client: reqwest::Client,
    url: Url,
}

impl HttpFeedClient {
    /// Build a client from feed configuration.
    pub fn new(config: &FeedConfig) -> Result<Self> {
        Ok(Self {
            client: create_client(config)?,
            url: Url::parse(&config.url)?,
        })
    }

    /// Endpoint URL with the requested item count appended.
    fn request_url(&self, count: u32) -> Url {
        let mut url = self.url.clone();
        url.query_pairs_mut()
            .append_pair("count", &count.to_string());
        url
    }
}

#[async_trait]
impl FeedSource for HttpFeedClient {
    async fn fetch(&self, count: u32) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(self.request_url(count))
            .send()
            .await?
            .error_for_status()?;
        Ok(response.bytes().await?.to_vec())
    }
}
