// src/error.rs
// =============================================================================
// Error types for a single fetch.
//
// A failed fetch is never fatal: the dispatcher logs it and the level simply
// gets no links from that page. Everything else that can go wrong (building
// the HTTP client, writing a report) uses anyhow::Result and ends the run.
//
// Rust concepts:
// - thiserror: Derives std::error::Error and Display from attributes
// - Enums with named fields: Each variant carries the URL it failed on
// =============================================================================

use thiserror::Error;

/// Why a single URL could not produce a body.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// site + path did not form a parseable absolute URL
    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The request did not settle within the per-fetch timeout
    #[error("timed out fetching {url}")]
    Timeout { url: String },

    /// DNS failure, refused connection, TLS handshake error, etc.
    #[error("could not connect to {url}: {reason}")]
    Connect { url: String, reason: String },

    /// Response arrived but the body could not be read as text
    #[error("could not read body of {url}: {reason}")]
    Body { url: String, reason: String },

    /// Any other transport failure
    #[error("request to {url} failed: {reason}")]
    Request { url: String, reason: String },
}
