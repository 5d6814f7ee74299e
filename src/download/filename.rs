//! Filesystem-safe filename assembly for saved artwork images.

/// Sanitizes an artwork query into a filesystem-safe name.
///
/// Keeps alphanumeric characters, spaces, and underscores; drops everything
/// else; then trims trailing whitespace. `"Mona: Lisa! (ver.2)"` becomes
/// `"Mona Lisa ver2"`.
#[must_use]
pub fn sanitize_artwork_name(query: &str) -> String {
    let kept: String = query
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '_'))
        .collect();
    kept.trim_end().to_string()
}

/// Builds the output filename for one artwork: `{label}_{sanitized}.jpg`.
///
/// The extension is always `.jpg` regardless of the actual image format.
#[must_use]
pub fn artwork_filename(label: &str, query: &str) -> String {
    format!("{label}_{}.jpg", sanitize_artwork_name(query))
}

/// Truncates a URL for log readability, appending an ellipsis when cut.
#[must_use]
pub fn truncate_url_for_log(url: &str) -> String {
    const MAX_LEN: usize = 50;
    if url.chars().count() <= MAX_LEN {
        url.to_string()
    } else {
        let head: String = url.chars().take(MAX_LEN).collect();
        format!("{head}...")
    }
}
