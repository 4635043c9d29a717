//! Download of pack metadata from an IPFS gateway.
use std::time::Duration;

use async_trait::async_trait;

use crate::{Error, Result};

/// Default timeout of metadata downloads.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Source of pack metadata documents.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Returns the body served at `url`.
    async fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}

/// Fetches over HTTP(S).
#[derive(Clone, Debug)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// A fetcher giving up on requests after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).use_rustls_tls().build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.client.get(url).send().await?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(Error::NotFound(url.to_owned()));
        }
        let response = response.error_for_status()?;
        Ok(response.bytes().await?.to_vec())
    }
}
