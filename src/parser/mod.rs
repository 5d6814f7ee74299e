//! Input parsing for the textbook/artwork query grammar.
//!
//! The input is one line of free text of the form
//! `label1(item1,item2),label2(item3)`: an identifier followed by a
//! parenthesized comma-separated list, repeated. Text that does not match the
//! pattern is skipped silently; the grammar simply does not match it.
//!
//! # Example
//!
//! ```
//! use artfetch_core::parser::parse_input;
//!
//! let batch = parse_input("textbook1(Mona Lisa Vinci,Fountaine Duchamp)");
//! assert_eq!(batch.len(), 2);
//! assert_eq!(batch.groups[0].label, "textbook1");
//! ```

mod input;

pub use input::{QueryBatch, TextbookGroup};

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

/// Matches one `identifier(...)` group. The inner list may be empty.
#[allow(clippy::expect_used)]
static GROUP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\w+)\(([^)]*)\)").expect("group pattern is valid"));

/// Parses one raw input line into an ordered [`QueryBatch`].
///
/// Each matched group contributes a [`TextbookGroup`] whose artwork list is
/// the parenthesized content split on commas, with surrounding whitespace
/// trimmed from each item. Commas are the field delimiter and cannot appear
/// inside a query; a literal parenthesis inside a label or query has no
/// defined handling (the pattern fails to match such segments).
///
/// Empty input yields an empty batch, not an error.
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
#[must_use]
pub fn parse_input(input: &str) -> QueryBatch {
    let mut batch = QueryBatch::new();

    if input.trim().is_empty() {
        debug!("Empty input provided");
        return batch;
    }

    for captures in GROUP_RE.captures_iter(input) {
        let label = &captures[1];
        let artworks: Vec<String> = captures[2]
            .split(',')
            .map(|item| item.trim().to_string())
            .collect();
        debug!(label, artworks = artworks.len(), "Parsed textbook group");
        batch.add_group(TextbookGroup::new(label, artworks));
    }

    batch
}
