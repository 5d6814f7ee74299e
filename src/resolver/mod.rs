//! Image resolution for artwork queries.
//!
//! Resolution is a two-stage remote lookup against a MediaWiki-style media
//! repository, behind the [`ImageSource`] trait so the remote API is an
//! injected collaborator:
//!
//! - [`ImageSource`] - async trait with the two API operations
//! - [`CommonsClient`] - production implementation against Wikimedia Commons
//! - [`resolve_image`] - selection policy (first hit, minimum pixel width)
//!
//! Resolution failure never propagates: [`resolve_image`] converts any
//! [`ResolveError`] into "no candidate" after logging it, so one bad query
//! cannot abort the batch.
//!
//! # Example
//!
//! ```no_run
//! use artfetch_core::resolver::{CommonsClient, MIN_IMAGE_WIDTH, resolve_image};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let source = CommonsClient::new()?;
//! if let Some(candidate) = resolve_image(&source, "Mona Lisa Vinci", MIN_IMAGE_WIDTH).await {
//!     println!("Best image: {} ({}px wide)", candidate.url, candidate.width);
//! }
//! # Ok(())
//! # }
//! ```

mod commons;
mod error;

pub use commons::CommonsClient;
pub use error::ResolveError;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

/// Default minimum acceptable image width in pixels.
pub const MIN_IMAGE_WIDTH: u32 = 200;

/// Image metadata as reported by the remote repository.
///
/// Both fields are optional in the API response; the selection policy treats
/// a missing width or URL as "no candidate".
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteImageInfo {
    /// Direct URL of the original file.
    pub url: Option<String>,
    /// Pixel width of the original file.
    pub width: Option<u32>,
}

/// A resolved image that passed the minimum-width policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageCandidate {
    /// Direct URL of the image file.
    pub url: String,
    /// Reported pixel width.
    pub width: u32,
}

/// The two remote operations consumed from the media repository.
///
/// # Object Safety
///
/// Uses `async_trait` so the driver can hold a `&dyn ImageSource` and tests
/// can substitute a double. Rust 2024 native async traits are not
/// object-safe, so `async_trait` is required here.
#[async_trait]
pub trait ImageSource: Send + Sync {
    /// Full-text search in the file namespace; returns the first hit's
    /// canonical file title, or `None` when the search has no results.
    async fn search_title(&self, query: &str) -> Result<Option<String>, ResolveError>;

    /// Metadata lookup for a file title; returns the file's URL and pixel
    /// width, or `None` when the title has no image info.
    async fn image_info(&self, title: &str) -> Result<Option<RemoteImageInfo>, ResolveError>;
}

/// Resolves an artwork query to its best candidate image.
///
/// Policy: take the single top search hit, accept it only when the reported
/// width is present and at least `min_width`. An undersized candidate is a
/// policy rejection, not an error. Remote failures at either stage are logged
/// and collapsed into `None` so the caller's batch keeps going.
pub async fn resolve_image(
    source: &dyn ImageSource,
    query: &str,
    min_width: u32,
) -> Option<ImageCandidate> {
    let title = match source.search_title(query).await {
        Ok(Some(title)) => title,
        Ok(None) => {
            debug!(query, "No search results");
            return None;
        }
        Err(error) => {
            warn!(query, error = %error, "Search request failed");
            return None;
        }
    };

    let info = match source.image_info(&title).await {
        Ok(Some(info)) => info,
        Ok(None) => {
            debug!(%title, "No image info for title");
            return None;
        }
        Err(error) => {
            warn!(%title, error = %error, "Image info request failed");
            return None;
        }
    };

    let width = info.width.unwrap_or(0);
    if width < min_width {
        debug!(%title, width, min_width, "Candidate below minimum width");
        return None;
    }

    let url = info.url?;
    Some(ImageCandidate { url, width })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    /// Scripted double for the two-call API.
    struct StubSource {
        title: Result<Option<String>, ResolveError>,
        info: Result<Option<RemoteImageInfo>, ResolveError>,
    }

    impl StubSource {
        fn found(url: Option<&str>, width: Option<u32>) -> Self {
            Self {
                title: Ok(Some("File:Stub.jpg".to_string())),
                info: Ok(Some(RemoteImageInfo {
                    url: url.map(str::to_string),
                    width,
                })),
            }
        }
    }

    #[async_trait]
    impl ImageSource for StubSource {
        async fn search_title(&self, _query: &str) -> Result<Option<String>, ResolveError> {
            match &self.title {
                Ok(t) => Ok(t.clone()),
                Err(_) => Err(ResolveError::http_status("stub", 500)),
            }
        }

        async fn image_info(&self, _title: &str) -> Result<Option<RemoteImageInfo>, ResolveError> {
            match &self.info {
                Ok(i) => Ok(i.clone()),
                Err(_) => Err(ResolveError::http_status("stub", 500)),
            }
        }
    }

    #[tokio::test]
    async fn test_resolve_returns_url_when_width_meets_minimum() {
        let source = StubSource::found(Some("https://img.example/a.jpg"), Some(300));
        let candidate = resolve_image(&source, "query", 200).await.unwrap();
        assert_eq!(candidate.url, "https://img.example/a.jpg");
        assert_eq!(candidate.width, 300);
    }

    #[tokio::test]
    async fn test_resolve_rejects_candidate_below_minimum_width() {
        let source = StubSource::found(Some("https://img.example/a.jpg"), Some(150));
        assert!(resolve_image(&source, "query", 200).await.is_none());
    }

    #[tokio::test]
    async fn test_resolve_treats_missing_width_as_too_small() {
        let source = StubSource::found(Some("https://img.example/a.jpg"), None);
        assert!(resolve_image(&source, "query", 200).await.is_none());
    }

    #[tokio::test]
    async fn test_resolve_absent_when_no_search_results() {
        let source = StubSource {
            title: Ok(None),
            info: Ok(None),
        };
        assert!(resolve_image(&source, "query", 200).await.is_none());
    }

    #[tokio::test]
    async fn test_resolve_absent_when_info_has_no_url() {
        let source = StubSource::found(None, Some(500));
        assert!(resolve_image(&source, "query", 200).await.is_none());
    }

    #[tokio::test]
    async fn test_resolve_swallows_search_errors() {
        let source = StubSource {
            title: Err(ResolveError::http_status("query", 500)),
            info: Ok(None),
        };
        assert!(resolve_image(&source, "query", 200).await.is_none());
    }

    #[tokio::test]
    async fn test_resolve_swallows_info_errors() {
        let source = StubSource {
            title: Ok(Some("File:Stub.jpg".to_string())),
            info: Err(ResolveError::http_status("title", 500)),
        };
        assert!(resolve_image(&source, "query", 200).await.is_none());
    }

    #[tokio::test]
    async fn test_resolve_boundary_width_is_accepted() {
        let source = StubSource::found(Some("https://img.example/a.jpg"), Some(200));
        assert!(resolve_image(&source, "query", 200).await.is_some());
    }
}
