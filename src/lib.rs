//! Artfetch Core Library
//!
//! This library powers the `artfetch` tool, which turns one line of
//! `textbook(artwork,artwork)` input into a folder of representative artwork
//! images fetched from Wikimedia Commons.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//! - [`parser`] - Input grammar for textbook/artwork query batches
//! - [`resolver`] - Two-stage MediaWiki search behind the `ImageSource` trait
//! - [`download`] - Streaming HTTP download and filename sanitization
//! - [`app`] - Sequential batch driver and per-item reporting

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod app;
pub mod download;
pub mod parser;
pub mod resolver;

pub(crate) mod user_agent;

// Re-export commonly used types
pub use app::{BatchStats, ItemOutcome, ItemReport, process_batch};
pub use download::{DownloadError, HttpClient, artwork_filename, sanitize_artwork_name};
pub use parser::{QueryBatch, TextbookGroup, parse_input};
pub use resolver::{
    CommonsClient, ImageCandidate, ImageSource, MIN_IMAGE_WIDTH, RemoteImageInfo, ResolveError,
    resolve_image,
};
