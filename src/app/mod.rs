//! Sequential batch driver: parse order in, one resolution and download at a
//! time, console reporting per item.
//!
//! The driver owns the lifecycle of each artwork query to completion before
//! touching the next one. No per-item failure ever terminates the batch.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::download::{HttpClient, artwork_filename};
use crate::parser::QueryBatch;
use crate::resolver::{ImageSource, resolve_image};

/// Outcome of processing a single artwork query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemOutcome {
    /// An image was resolved and saved to this path.
    Saved(PathBuf),
    /// No search hit, or the only candidate was below the minimum width.
    NoCandidate,
    /// A candidate was resolved but the download failed.
    DownloadFailed,
}

/// Per-item record of what happened, in batch order.
#[derive(Debug, Clone)]
pub struct ItemReport {
    /// The textbook label the artwork belongs to.
    pub label: String,
    /// The raw artwork query.
    pub query: String,
    /// What happened to this item.
    pub outcome: ItemOutcome,
}

/// Aggregate counts over a finished batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchStats {
    saved: usize,
    not_found: usize,
    failed: usize,
}

impl BatchStats {
    /// Tallies outcomes from a batch run.
    #[must_use]
    pub fn from_reports(reports: &[ItemReport]) -> Self {
        let mut stats = Self::default();
        for report in reports {
            match report.outcome {
                ItemOutcome::Saved(_) => stats.saved += 1,
                ItemOutcome::NoCandidate => stats.not_found += 1,
                ItemOutcome::DownloadFailed => stats.failed += 1,
            }
        }
        stats
    }

    /// Number of images saved to disk.
    #[must_use]
    pub fn saved(&self) -> usize {
        self.saved
    }

    /// Number of queries with no acceptable candidate.
    #[must_use]
    pub fn not_found(&self) -> usize {
        self.not_found
    }

    /// Number of failed downloads.
    #[must_use]
    pub fn failed(&self) -> usize {
        self.failed
    }

    /// Total items processed.
    #[must_use]
    pub fn total(&self) -> usize {
        self.saved + self.not_found + self.failed
    }
}

/// Processes every `(label, query)` entry of the batch in input order.
///
/// For each entry: resolve the best candidate image, build the
/// `{label}_{sanitized}.jpg` filename, download into `output_dir`, and report
/// the result on the console. Resolution and download failures are recorded
/// in the returned reports and never abort the batch.
pub async fn process_batch(
    batch: &QueryBatch,
    source: &dyn ImageSource,
    client: &HttpClient,
    output_dir: &Path,
    min_width: u32,
) -> Vec<ItemReport> {
    let mut reports = Vec::with_capacity(batch.len());

    for (label, query) in batch.entries() {
        info!(query, textbook = label, "Searching for artwork");

        let outcome = match resolve_image(source, query, min_width).await {
            Some(candidate) => {
                let filename = artwork_filename(label, query);
                match client
                    .download_to_file(&candidate.url, output_dir, &filename)
                    .await
                {
                    Ok(path) => {
                        info!(filename = %filename, "Saved");
                        ItemOutcome::Saved(path)
                    }
                    Err(error) => {
                        warn!(query, error = %error, "Download failed");
                        ItemOutcome::DownloadFailed
                    }
                }
            }
            None => {
                warn!(query, min_width, "No suitable image found");
                ItemOutcome::NoCandidate
            }
        };

        reports.push(ItemReport {
            label: label.to_string(),
            query: query.to_string(),
            outcome,
        });
    }

    reports
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::parser::parse_input;
    use crate::resolver::{RemoteImageInfo, ResolveError};
    use async_trait::async_trait;

    /// Source that never finds anything.
    struct EmptySource;

    #[async_trait]
    impl ImageSource for EmptySource {
        async fn search_title(&self, _query: &str) -> Result<Option<String>, ResolveError> {
            Ok(None)
        }

        async fn image_info(&self, _title: &str) -> Result<Option<RemoteImageInfo>, ResolveError> {
            Ok(None)
        }
    }

    #[test]
    fn test_batch_stats_tally() {
        let reports = vec![
            ItemReport {
                label: "tb1".into(),
                query: "A".into(),
                outcome: ItemOutcome::Saved(PathBuf::from("tb1_A.jpg")),
            },
            ItemReport {
                label: "tb1".into(),
                query: "B".into(),
                outcome: ItemOutcome::NoCandidate,
            },
            ItemReport {
                label: "tb2".into(),
                query: "C".into(),
                outcome: ItemOutcome::DownloadFailed,
            },
        ];
        let stats = BatchStats::from_reports(&reports);
        assert_eq!(stats.saved(), 1);
        assert_eq!(stats.not_found(), 1);
        assert_eq!(stats.failed(), 1);
        assert_eq!(stats.total(), 3);
    }

    #[tokio::test]
    async fn test_process_batch_reports_every_item_in_order() {
        let batch = parse_input("tb1(A,B),tb2(C)");
        let client = HttpClient::new();
        let dir = std::env::temp_dir().join("artfetch-driver-test");

        let reports = process_batch(&batch, &EmptySource, &client, &dir, 200).await;

        assert_eq!(reports.len(), 3);
        assert_eq!(reports[0].query, "A");
        assert_eq!(reports[1].query, "B");
        assert_eq!(reports[2].query, "C");
        assert!(
            reports
                .iter()
                .all(|r| r.outcome == ItemOutcome::NoCandidate)
        );
        // Nothing resolved, so the output directory is never created.
        assert!(!dir.exists());
    }

    #[tokio::test]
    async fn test_process_batch_empty_batch_is_a_no_op() {
        let batch = parse_input("");
        let client = HttpClient::new();
        let reports =
            process_batch(&batch, &EmptySource, &client, Path::new("unused"), 200).await;
        assert!(reports.is_empty());
    }
}
