// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap (usage errors exit here)
// 2. Set up logging to stderr
// 3. Crawl the site level by level, printing each level as it finishes
// 4. Exit with proper code (0 = crawl finished, 2 = error)
//
// Failed page fetches are not errors: they are logged and the crawl moves
// on. Only things like a broken HTTP client setup or a closed stdout end
// the run early.
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli;    // src/cli.rs - command-line parsing
mod config; // src/config.rs - crawl settings
mod crawl;  // src/crawl/ - the level-by-level crawl engine
mod error;  // src/error.rs - fetch failure types
mod fetch;  // src/fetch/ - HTTP access
mod report; // src/report.rs - level output

use anyhow::Result;
use clap::Parser; // Parser trait enables the parse() method

use cli::Cli;
use crawl::Crawler;
use fetch::HttpFetcher;

// The #[tokio::main] attribute transforms our async main into a real main function
// It creates a tokio runtime and runs our async code inside it
#[tokio::main]
async fn main() {
    // Prints usage to stderr and exits non-zero if arguments are missing or bad
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .format_timestamp(None)
        .init();

    let exit_code = match run(cli).await {
        Ok(()) => 0,
        Err(e) => {
            // If an unexpected error occurred, print it and exit with code 2
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run(cli: Cli) -> Result<()> {
    let config = cli.to_config();
    let fetcher = HttpFetcher::new(&config)?;
    let crawler = Crawler::new(cli.site, fetcher, config);
    let json = cli.json;

    log::info!("crawling {} for {} level(s)", crawler.site(), cli.depth);

    let session = crawler
        .crawl_levels(cli.depth, |level| {
            report::write_level(&mut std::io::stdout().lock(), level, json)
        })
        .await?;

    log::info!(
        "done: {} link(s) known, {} left unfetched",
        session.links().len(),
        session.frontier().len()
    );

    Ok(())
}
