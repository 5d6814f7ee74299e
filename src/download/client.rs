//! HTTP client wrapper for downloading image files.
//!
//! Streams the response body to disk in chunks so large originals never have
//! to fit in memory.

use std::path::{Path, PathBuf};
use std::time::Duration;

use futures_util::StreamExt;
use reqwest::Client;
use tokio::fs::File;
use tokio::io::{AsyncWriteExt, BufWriter};
use tracing::{debug, info, instrument, warn};
use url::Url;

use crate::user_agent::BROWSER_USER_AGENT;

use super::error::DownloadError;
use super::filename::truncate_url_for_log;

/// Connect timeout for download requests.
const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Total request timeout so a stalled server cannot hang the batch.
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// HTTP client for downloading image files with streaming support.
///
/// Created once and reused across the batch to take advantage of connection
/// pooling.
///
/// # Example
///
/// ```no_run
/// use artfetch_core::download::HttpClient;
/// use std::path::Path;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = HttpClient::new();
/// let path = client
///     .download_to_file(
///         "https://upload.wikimedia.org/mona_lisa.jpg",
///         Path::new("artwork_images"),
///         "tb1_Mona Lisa.jpg",
///     )
///     .await?;
/// println!("Saved to: {}", path.display());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpClient {
    /// Creates a new HTTP client with the shared browser User-Agent and a
    /// 10-second timeout.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client builder fails to build with the static
    /// configuration. This should never happen in practice.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn new() -> Self {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(BROWSER_USER_AGENT)
            .gzip(true)
            .build()
            .expect("failed to build HTTP client with static configuration");
        Self { client }
    }

    /// Downloads `url` to `directory/filename`, creating the directory (and
    /// any missing parents) first and overwriting an existing file.
    ///
    /// The body is streamed to disk in chunks. On a mid-stream failure the
    /// partial file is left behind; the caller only sees the error.
    ///
    /// # Errors
    ///
    /// Returns [`DownloadError`] if:
    /// - The URL is invalid
    /// - The request fails (network error, timeout)
    /// - The server returns any status other than 200
    /// - Creating the directory or writing the file fails
    #[instrument(skip(self), fields(url = %truncate_url_for_log(url), filename))]
    pub async fn download_to_file(
        &self,
        url: &str,
        directory: &Path,
        filename: &str,
    ) -> Result<PathBuf, DownloadError> {
        debug!("starting download");

        Url::parse(url).map_err(|_| DownloadError::invalid_url(url))?;

        tokio::fs::create_dir_all(directory)
            .await
            .map_err(|e| DownloadError::io(directory.to_path_buf(), e))?;

        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                DownloadError::timeout(url)
            } else {
                DownloadError::network(url, e)
            }
        })?;

        let status = response.status();
        if status.as_u16() != 200 {
            warn!(
                status = status.as_u16(),
                url = %truncate_url_for_log(url),
                "server refused download"
            );
            return Err(DownloadError::http_status(url, status.as_u16()));
        }

        let file_path = directory.join(filename);
        let file = File::create(&file_path)
            .await
            .map_err(|e| DownloadError::io(file_path.clone(), e))?;
        let mut writer = BufWriter::new(file);

        let mut bytes_written: u64 = 0;
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| {
                if e.is_timeout() {
                    DownloadError::timeout(url)
                } else {
                    DownloadError::network(url, e)
                }
            })?;
            writer
                .write_all(&chunk)
                .await
                .map_err(|e| DownloadError::io(file_path.clone(), e))?;
            bytes_written += chunk.len() as u64;
        }

        writer
            .flush()
            .await
            .map_err(|e| DownloadError::io(file_path.clone(), e))?;

        info!(path = %file_path.display(), bytes = bytes_written, "download complete");
        Ok(file_path)
    }
}
