use std::time::Duration;

use log::debug;
use reqwest::Client;

use crate::error::ExtractError;

/// Browser-like User-Agent; some recipe sites refuse the reqwest default.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Fetches raw page bytes over a shared, pooled HTTP client.
#[derive(Clone)]
pub struct RecipeFetcher {
    client: Client,
}

impl RecipeFetcher {
    pub fn new(timeout: Option<Duration>, user_agent: Option<&str>) -> Self {
        let timeout = timeout.unwrap_or(Duration::from_secs(30));
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent.unwrap_or(DEFAULT_USER_AGENT))
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }

    /// GET the page and return the raw body bytes.
    ///
    /// HTTP error statuses are not treated as failures: the body of a 404
    /// page is handed to the extractor like any other response.
    pub async fn fetch(&self, url: &str) -> Result<Vec<u8>, ExtractError> {
        debug!("Fetching {url}");
        let response = self.client.get(url).send().await?;
        let body = response.bytes().await?;
        Ok(body.to_vec())
    }
}

impl Default for RecipeFetcher {
    fn default() -> Self {
        Self::new(None, None)
    }
}
