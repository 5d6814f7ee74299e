//! Shared User-Agent string for resolver and download HTTP clients.
//!
//! Wikimedia Commons rejects generic automated clients with 403, so both the
//! API lookups and the image download present the same browser-like header.
//! Single source here so the two clients never drift apart.

/// Browser-like User-Agent sent on every remote request.
pub(crate) const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

#[cfg(test)]
mod tests {
    use super::*;

    /// The header must look like a mainstream browser, not an automated tool.
    #[test]
    fn test_user_agent_is_browser_like() {
        assert!(BROWSER_USER_AGENT.starts_with("Mozilla/5.0"));
        assert!(BROWSER_USER_AGENT.contains("Chrome/"));
        assert!(!BROWSER_USER_AGENT.contains("artfetch"));
    }
}
