// src/fetch/mod.rs
// =============================================================================
// This module is the crawler's only contact with the network.
//
// The crawl engine talks to a `Fetcher`: give it an absolute URL, get back
// the body text or a FetchError. The real implementation (http.rs) uses
// reqwest; tests plug in small in-memory fetchers instead.
//
// Rust concepts:
// - Traits: The seam between the crawl engine and the HTTP client
// - async-trait: Async methods on traits
// =============================================================================

mod http;
#[cfg(test)]
pub mod fake;

pub use http::HttpFetcher;

use async_trait::async_trait;

use crate::error::FetchError;

/// Something that can GET a URL and hand back its body as text.
///
/// Implementations must allow many calls to be outstanding at once.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

// Lets callers lend a fetcher to a Crawler and keep using it afterwards
#[async_trait]
impl<T: Fetcher + ?Sized> Fetcher for &T {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        (**self).fetch(url).await
    }
}
