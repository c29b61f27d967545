use super::PageFetcher;
use crate::config::ScraperConfig;
use crate::error::Result;
use async_trait::async_trait;
use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, REFERER, USER_AGENT};
use reqwest::Client;
use std::time::Duration;

/// Plain HTTP fetcher spoofing a browser user agent.
///
/// Responses are requested gzip-encoded and decoded transparently.
pub struct RequestFetcher {
    client: Client,
}

impl RequestFetcher {
    pub fn new(config: &ScraperConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_str(&config.user_agent)?);

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(headers)
            .gzip(true)
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for RequestFetcher {
    async fn fetch_html(&self, url: &str) -> Result<String> {
        debug!("GET {}", url);
        let response = self.client.get(url).send().await?.error_for_status()?;
        Ok(response.text().await?)
    }

    async fn fetch_bytes(&self, url: &str, referer: &str) -> Result<Vec<u8>> {
        debug!("GET {} (referer {})", url, referer);
        let response = self
            .client
            .get(url)
            .header(REFERER, HeaderValue::from_str(referer)?)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.bytes().await?.to_vec())
    }
}
