// src/crawl/mod.rs
// =============================================================================
// This module is the crawl engine.
//
// Submodules, leaves first:
// - extract: Pulls href values out of a response body
// - frontier: The grow-only, deduplicated link set
// - dispatch: Concurrent fetch of one frontier, results in frontier order
// - driver: Runs the levels and reports each one
// =============================================================================

mod dispatch;
mod driver;
mod extract;
mod frontier;

pub use driver::{Crawler, LevelReport};
