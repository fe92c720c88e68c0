// src/crawl/dispatch.rs
// =============================================================================
// Fetches every path in the current frontier concurrently.
//
// Fan-out: one fetch per frontier entry, at most `concurrency` in flight.
// Fan-in: the call returns only after every fetch has settled.
//
// `buffered` (unlike `buffer_unordered`) hands results back in input order
// no matter which request finishes first, so the merge that follows sees
// bodies in frontier order every time.
//
// A failed or timed-out fetch becomes a FetchResult without a body. It is
// logged at debug level (visible with -vv) and never stops its siblings.
// =============================================================================

use futures::stream::{self, StreamExt};
use tokio::time::timeout;

use crate::config::CrawlConfig;
use crate::error::FetchError;
use crate::fetch::Fetcher;

/// Failed fetches are expected and not shown at the default verbosity
pub const FETCH_FAILURE_LEVEL: log::Level = log::Level::Debug;

/// The outcome of fetching one frontier entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResult {
    /// site + path, exactly as requested
    pub url: String,
    pub body: Result<String, FetchError>,
}

impl FetchResult {
    /// The body text, or None when the fetch failed
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref().ok()
    }

    pub fn is_failure(&self) -> bool {
        self.body.is_err()
    }
}

/// Fetches `site + path` for every path in `frontier` and returns one result
/// per path, in the same order as `frontier`.
pub async fn fetch_all<F>(
    fetcher: &F,
    site: &str,
    frontier: &[String],
    config: &CrawlConfig,
) -> Vec<FetchResult>
where
    F: Fetcher + ?Sized,
{
    let fetches = frontier.iter().map(move |path| {
        // Plain concatenation: no normalization, no escaping
        let url = format!("{}{}", site, path);
        async move {
            log::debug!("fetching {}", url);

            // The fetcher may have its own timeout; this one covers fetchers
            // that never settle at all.
            let body = match timeout(config.fetch_timeout, fetcher.fetch(&url)).await {
                Ok(body) => body,
                Err(_) => Err(FetchError::Timeout { url: url.clone() }),
            };

            if let Err(e) = &body {
                log::log!(FETCH_FAILURE_LEVEL, "no links from {}: {}", url, e);
            }

            FetchResult { url, body }
        }
    });

    stream::iter(fetches)
        .buffered(config.concurrency.max(1))
        .collect()
        .await
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. buffered vs buffer_unordered
//    - Both run up to N futures at once
//    - buffer_unordered yields whichever finishes first
//    - buffered waits so it can yield them in the order they went in
//
// 2. Why no tokio::spawn?
//    - The futures borrow the fetcher and the config
//    - Polling them from one stream keeps those borrows valid and still
//      overlaps all the network waiting
//
// 3. What does tokio::time::timeout return?
//    - Ok(output) if the inner future finished in time
//    - Err(Elapsed) otherwise, and the inner future is dropped
// -----------------------------------------------------------------------------
