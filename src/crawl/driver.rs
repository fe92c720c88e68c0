// src/crawl/driver.rs
// =============================================================================
// This module runs the crawl one level at a time.
//
// How a level works:
// 1. Fetch every path in the frontier concurrently (dispatch.rs)
// 2. Wait for all of them to settle
// 3. Extract links from each body, in frontier order (extract.rs)
// 4. Merge them into the link set; the new paths become the next frontier
// 5. Report the level
//
// Levels never overlap: level N+1 cannot start before level N's merge is
// done, because its frontier is the output of that merge. The merge runs on
// one task with no fetches in flight, so the session needs no locks.
//
// An empty frontier does not end the crawl early. The remaining levels
// still run, fetch nothing, and report "found no new links".
// =============================================================================

use anyhow::Result;
use serde::Serialize;

use super::dispatch::fetch_all;
use super::extract::extract_links;
use super::frontier::{LinkSet, ROOT_PATH};
use crate::config::CrawlConfig;
use crate::fetch::Fetcher;

/// Everything one crawl has learned so far. Each crawl owns its own session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlSession {
    links: LinkSet,
    frontier: Vec<String>,
}

impl CrawlSession {
    /// Link set and frontier both start out as just the root path
    pub fn new() -> Self {
        Self {
            links: LinkSet::seeded(),
            frontier: vec![ROOT_PATH.to_string()],
        }
    }

    pub fn links(&self) -> &LinkSet {
        &self.links
    }

    /// Paths found by the most recent level, still to be fetched
    pub fn frontier(&self) -> &[String] {
        &self.frontier
    }
}

impl Default for CrawlSession {
    fn default() -> Self {
        Self::new()
    }
}

/// What happened during one level
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LevelReport {
    /// 1-based level number
    pub level: usize,
    /// False when this level's merge produced an empty frontier
    pub found_new_links: bool,
    /// Paths first discovered at this level, in discovery order
    pub new_links: Vec<String>,
    /// The whole link set after this level
    pub links: Vec<String>,
    /// Number of fetches issued
    pub fetched: usize,
    /// How many of those produced no body
    pub failed: usize,
    /// The URLs that produced no body, in frontier order
    pub failed_urls: Vec<String>,
}

// Non-positive depth runs nothing; anything too big for usize saturates
fn level_count(depth: i64) -> usize {
    if depth <= 0 {
        0
    } else {
        usize::try_from(depth).unwrap_or(usize::MAX)
    }
}

pub struct Crawler<F> {
    site: String,
    fetcher: F,
    config: CrawlConfig,
}

impl<F: Fetcher> Crawler<F> {
    pub fn new(site: impl Into<String>, fetcher: F, config: CrawlConfig) -> Self {
        Self {
            site: site.into(),
            fetcher,
            config,
        }
    }

    pub fn site(&self) -> &str {
        &self.site
    }

    /// Runs `depth` levels from a fresh session, calling `on_level` after
    /// each one. Zero or negative depth runs nothing.
    ///
    /// An error from `on_level` stops the crawl and is returned as is.
    pub async fn crawl_levels<C>(&self, depth: i64, mut on_level: C) -> Result<CrawlSession>
    where
        C: FnMut(&LevelReport) -> Result<()>,
    {
        let mut session = CrawlSession::new();
        let levels = level_count(depth);

        for level in 1..=levels {
            let report = self.crawl_level(&mut session, level).await;
            on_level(&report)?;
        }

        Ok(session)
    }

    /// One fetch, extract, merge cycle over the session's current frontier
    pub async fn crawl_level(&self, session: &mut CrawlSession, level: usize) -> LevelReport {
        log::info!(
            "level {}: fetching {} page(s) from {}",
            level,
            session.frontier.len(),
            self.site
        );

        let results = fetch_all(&self.fetcher, &self.site, &session.frontier, &self.config).await;
        let failed_urls: Vec<String> = results
            .iter()
            .filter(|r| r.is_failure())
            .map(|r| r.url.clone())
            .collect();
        let failed = failed_urls.len();

        // Bodies are already in frontier order, so candidates are too
        let candidates = results
            .iter()
            .filter_map(|result| result.body())
            .flat_map(extract_links);

        let new_links = session.links.merge_and_advance(candidates);
        session.frontier = new_links.clone();

        log::info!(
            "level {}: {} new link(s), {} total, {} failed fetch(es)",
            level,
            new_links.len(),
            session.links.len(),
            failed
        );

        LevelReport {
            level,
            found_new_links: !new_links.is_empty(),
            new_links,
            links: session.links.to_vec(),
            fetched: results.len(),
            failed,
            failed_urls,
        }
    }
}
