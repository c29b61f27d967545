mod request;

pub use request::RequestFetcher;

use crate::error::Result;
use async_trait::async_trait;

/// Network boundary of the agent
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch an HTML page
    async fn fetch_html(&self, url: &str) -> Result<String>;

    /// Fetch raw bytes (poster and background art), sending `referer`
    async fn fetch_bytes(&self, url: &str, referer: &str) -> Result<Vec<u8>>;
}
