//! Wikimedia Commons client - the production [`ImageSource`] implementation.
//!
//! Talks to the MediaWiki action API in two calls per artwork: a full-text
//! search restricted to the file namespace, then an `imageinfo` metadata
//! lookup for the winning title.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::user_agent::BROWSER_USER_AGENT;

use super::{ImageSource, RemoteImageInfo, ResolveError};

/// Default MediaWiki API endpoint.
const DEFAULT_API_URL: &str = "https://commons.wikimedia.org/w/api.php";

/// Connect timeout for API requests.
const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Total request timeout. Both API calls carry the same bound as the image
/// download, so a stalled search cannot hang the batch.
const REQUEST_TIMEOUT_SECS: u64 = 10;

// ==================== MediaWiki API Response Types ====================

/// Top-level response to `list=search`.
#[derive(Debug, Deserialize)]
struct SearchResponse {
    query: Option<SearchQuery>,
}

#[derive(Debug, Deserialize)]
struct SearchQuery {
    #[serde(default)]
    search: Vec<SearchHit>,
}

/// One search hit; `title` is the canonical `File:...` identifier.
#[derive(Debug, Deserialize)]
struct SearchHit {
    title: String,
}

/// Top-level response to `prop=imageinfo`.
#[derive(Debug, Deserialize)]
struct InfoResponse {
    query: Option<InfoQuery>,
}

#[derive(Debug, Deserialize)]
struct InfoQuery {
    /// Keyed by page id; with `srlimit=1` there is at most one entry.
    #[serde(default)]
    pages: HashMap<String, InfoPage>,
}

#[derive(Debug, Deserialize)]
struct InfoPage {
    #[serde(default)]
    imageinfo: Vec<RemoteImageInfo>,
}

// ==================== CommonsClient ====================

/// Client for the Wikimedia Commons search-and-metadata API.
///
/// Requests carry a browser-like User-Agent; the API returns 403 to clients
/// that identify as generic automation.
pub struct CommonsClient {
    client: Client,
    api_url: String,
}

impl CommonsClient {
    /// Creates a client against the public Commons API.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::ClientBuild`] if HTTP client construction fails.
    pub fn new() -> Result<Self, ResolveError> {
        Self::build(DEFAULT_API_URL.to_string())
    }

    /// Creates a client with a custom API URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::ClientBuild`] if HTTP client construction fails.
    pub fn with_api_url(api_url: impl Into<String>) -> Result<Self, ResolveError> {
        Self::build(api_url.into())
    }

    fn build(api_url: String) -> Result<Self, ResolveError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(BROWSER_USER_AGENT)
            .gzip(true)
            .build()
            .map_err(|source| ResolveError::ClientBuild { source })?;

        Ok(Self { client, api_url })
    }

    async fn get_json<T>(&self, url: &str, query: &str) -> Result<T, ResolveError>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ResolveError::network(query, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ResolveError::http_status(query, status.as_u16()));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ResolveError::decode(query, e))
    }
}

impl std::fmt::Debug for CommonsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommonsClient")
            .field("api_url", &self.api_url)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl ImageSource for CommonsClient {
    #[tracing::instrument(skip(self), fields(query = %query))]
    async fn search_title(&self, query: &str) -> Result<Option<String>, ResolveError> {
        // srnamespace=6 restricts the search to the File: namespace.
        let url = format!(
            "{}?action=query&format=json&list=search&srsearch={}&srnamespace=6&srlimit=1",
            self.api_url,
            urlencoding::encode(query)
        );
        debug!(api_url = %url, "Calling Commons search API");

        let body: SearchResponse = self.get_json(&url, query).await?;
        let title = body
            .query
            .and_then(|q| q.search.into_iter().next())
            .map(|hit| hit.title);

        debug!(title = ?title, "Search result");
        Ok(title)
    }

    #[tracing::instrument(skip(self), fields(title = %title))]
    async fn image_info(&self, title: &str) -> Result<Option<RemoteImageInfo>, ResolveError> {
        let url = format!(
            "{}?action=query&format=json&prop=imageinfo&titles={}&iiprop=url%7Csize",
            self.api_url,
            urlencoding::encode(title)
        );
        debug!(api_url = %url, "Calling Commons imageinfo API");

        let body: InfoResponse = self.get_json(&url, title).await?;
        let info = body
            .query
            .and_then(|q| q.pages.into_values().next())
            .and_then(|page| page.imageinfo.into_iter().next());

        debug!(info = ?info, "Imageinfo result");
        Ok(info)
    }
}
