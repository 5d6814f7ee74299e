//! Types representing the parsed query batch.

use std::fmt;

/// One textbook group from the input line: a label plus the artwork queries
/// listed inside its parentheses, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextbookGroup {
    /// The textbook label (the identifier before the parentheses).
    pub label: String,
    /// Artwork query strings, whitespace-trimmed, in input order.
    pub artworks: Vec<String>,
}

impl TextbookGroup {
    /// Creates a new group.
    #[must_use]
    pub fn new(label: impl Into<String>, artworks: Vec<String>) -> Self {
        Self {
            label: label.into(),
            artworks,
        }
    }
}

impl fmt::Display for TextbookGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.label, self.artworks.join(","))
    }
}

/// Ordered collection of textbook groups parsed from one input line.
///
/// Produced once by [`parse_input`](crate::parser::parse_input) and immutable
/// afterward; the driver walks [`entries`](Self::entries) in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryBatch {
    /// Successfully parsed groups, in input order.
    pub groups: Vec<TextbookGroup>,
}

impl QueryBatch {
    /// Creates a new empty batch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a parsed group.
    pub fn add_group(&mut self, group: TextbookGroup) {
        self.groups.push(group);
    }

    /// Returns true if no groups were parsed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Returns the total number of artwork queries across all groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.artworks.len()).sum()
    }

    /// Iterates over `(label, artwork query)` pairs in input order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.groups.iter().flat_map(|group| {
            group
                .artworks
                .iter()
                .map(|artwork| (group.label.as_str(), artwork.as_str()))
        })
    }
}

impl fmt::Display for QueryBatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let artworks = self.len();
        let textbooks = self.groups.len();
        write!(
            f,
            "Parsed {artworks} artwork{} in {textbooks} textbook{}",
            plural_s(artworks),
            plural_s(textbooks)
        )
    }
}

fn plural_s(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_textbook_group_display() {
        let group = TextbookGroup::new("tb1", vec!["A".to_string(), "B".to_string()]);
        assert_eq!(group.to_string(), "tb1(A,B)");
    }

    #[test]
    fn test_query_batch_new_is_empty() {
        let batch = QueryBatch::new();
        assert!(batch.is_empty());
        assert_eq!(batch.len(), 0);
        assert_eq!(batch.entries().count(), 0);
    }

    #[test]
    fn test_query_batch_len_counts_artworks_not_groups() {
        let mut batch = QueryBatch::new();
        batch.add_group(TextbookGroup::new(
            "tb1",
            vec!["A".to_string(), "B".to_string()],
        ));
        batch.add_group(TextbookGroup::new("tb2", vec!["C".to_string()]));

        assert!(!batch.is_empty());
        assert_eq!(batch.len(), 3);
        assert_eq!(batch.groups.len(), 2);
    }

    #[test]
    fn test_query_batch_entries_preserves_input_order() {
        let mut batch = QueryBatch::new();
        batch.add_group(TextbookGroup::new(
            "tb1",
            vec!["A".to_string(), "B".to_string()],
        ));
        batch.add_group(TextbookGroup::new("tb2", vec!["C".to_string()]));

        let entries: Vec<_> = batch.entries().collect();
        assert_eq!(entries, vec![("tb1", "A"), ("tb1", "B"), ("tb2", "C")]);
    }

    #[test]
    fn test_query_batch_display_singular() {
        let mut batch = QueryBatch::new();
        batch.add_group(TextbookGroup::new("tb1", vec!["A".to_string()]));
        assert_eq!(batch.to_string(), "Parsed 1 artwork in 1 textbook");
    }

    #[test]
    fn test_query_batch_display_plural() {
        let mut batch = QueryBatch::new();
        batch.add_group(TextbookGroup::new(
            "tb1",
            vec!["A".to_string(), "B".to_string()],
        ));
        batch.add_group(TextbookGroup::new("tb2", vec!["C".to_string()]));
        assert_eq!(batch.to_string(), "Parsed 3 artworks in 2 textbooks");
    }
}
