//! Streaming HTTP download of resolved artwork images.
//!
//! - [`HttpClient`] - reqwest wrapper that streams a GET body to disk
//! - [`DownloadError`] - per-item failure taxonomy
//! - [`artwork_filename`] / [`sanitize_artwork_name`] - output naming

mod client;
mod error;
mod filename;

pub use client::HttpClient;
pub use error::DownloadError;
pub use filename::{artwork_filename, sanitize_artwork_name, truncate_url_for_log};
