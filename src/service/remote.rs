//! Remote dataset fetching.

use async_trait::async_trait;

use crate::{config::RemoteLinks, error::Error, model::dataset::DatasetKind};

/// Retrieves the raw body of a remote dataset.
///
/// The body is returned as text and is never parsed here; whatever stores it decides how to
/// interpret it.
#[async_trait]
pub trait RemoteFetcher: Send + Sync {
    /// Fetches the latest dataset of `kind` as raw text.
    async fn fetch_text(&self, kind: DatasetKind) -> Result<String, Error>;
}

/// [`RemoteFetcher`] issuing one HTTP GET per dataset against configured links.
#[derive(Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
    links: RemoteLinks,
}

impl HttpFetcher {
    /// Creates a new instance of [`HttpFetcher`]
    pub fn new(client: reqwest::Client, links: RemoteLinks) -> Self {
        Self { client, links }
    }
}

#[async_trait]
impl RemoteFetcher for HttpFetcher {
    /// GETs the dataset link for `kind` and returns the response body.
    ///
    /// # Returns
    /// - `Ok(String)` - Response body of a successful request
    /// - `Err(Error::Http)` - Connection failure, non-success status or unreadable body
    async fn fetch_text(&self, kind: DatasetKind) -> Result<String, Error> {
        let body = self
            .client
            .get(self.links.data(kind))
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        Ok(body)
    }
}
