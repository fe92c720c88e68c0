// src/config.rs
// =============================================================================
// Runtime settings for a crawl.
//
// There is no config file and no environment variables: everything comes
// from the command line (see cli.rs), with the defaults below.
// =============================================================================

use std::time::Duration;

/// How many fetches may be outstanding at once within one level
pub const DEFAULT_CONCURRENCY: usize = 50;

/// Per-fetch timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlConfig {
    /// Upper bound on in-flight fetches for a single level (always >= 1)
    pub concurrency: usize,
    /// A fetch still pending after this long counts as failed
    pub fetch_timeout: Duration,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            concurrency: DEFAULT_CONCURRENCY,
            fetch_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CrawlConfig::default();
        assert_eq!(config.concurrency, 50);
        assert_eq!(config.fetch_timeout, Duration::from_secs(10));
    }
}
