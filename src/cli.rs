// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Usage: level-crawler <SITE> <DEPTH> [--json] [--concurrency N]
//                                     [--timeout-secs S] [-v...]
//
// If SITE or DEPTH is missing, or DEPTH is not an integer, clap prints a
// usage message to stderr and exits with a non-zero status before any
// crawling starts.
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Derive macros: Automatically generate code for our types
// =============================================================================

use clap::Parser;
use std::time::Duration;

use crate::config::{CrawlConfig, DEFAULT_CONCURRENCY, DEFAULT_TIMEOUT_SECS};

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "level-crawler",
    version = "0.1.0",
    about = "Crawl a website breadth-first and list every link found per level",
    long_about = "level-crawler fetches the root page of a site, collects every <a href=\"...\"> \
                  it finds, then fetches all of those paths concurrently, one level at a time. \
                  After each level it prints every link discovered so far."
)]
pub struct Cli {
    /// Base site prepended to every discovered path (e.g., http://example.com)
    ///
    /// Paths are joined by plain concatenation, so leave off the trailing slash
    pub site: String,

    /// Number of levels to crawl
    ///
    /// 0 or a negative number crawls nothing
    #[arg(allow_negative_numbers = true)]
    pub depth: i64,

    /// Print each level as a JSON object on its own line
    #[arg(long)]
    pub json: bool,

    /// Maximum number of requests in flight at once within a level
    #[arg(long, default_value_t = DEFAULT_CONCURRENCY as u64, value_parser = clap::value_parser!(u64).range(1..))]
    pub concurrency: u64,

    /// Seconds to wait for a single page before giving up on it
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_secs: u64,

    /// Log more detail to stderr (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Builds the crawl settings from the parsed flags
    pub fn to_config(&self) -> CrawlConfig {
        CrawlConfig {
            concurrency: usize::try_from(self.concurrency).unwrap_or(usize::MAX),
            fetch_timeout: Duration::from_secs(self.timeout_secs),
        }
    }

    /// Maps -v occurrences onto a log level; warnings are always shown
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}
