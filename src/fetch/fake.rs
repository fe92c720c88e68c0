// src/fetch/fake.rs
// In-memory Fetcher for tests: canned pages, failures, delays and hangs.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use super::Fetcher;
use crate::error::FetchError;

enum Page {
    Body(String, Duration),
    Fail,
    Hang,
}

#[derive(Default)]
pub struct FakeFetcher {
    pages: HashMap<String, Page>,
    calls: Mutex<Vec<String>>,
    in_flight: AtomicUsize,
    peak: AtomicUsize,
}

impl FakeFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(self, url: &str, body: &str) -> Self {
        self.slow_page(url, body, Duration::ZERO)
    }

    pub fn slow_page(mut self, url: &str, body: &str, delay: Duration) -> Self {
        self.pages
            .insert(url.to_string(), Page::Body(body.to_string(), delay));
        self
    }

    pub fn failing(mut self, url: &str) -> Self {
        self.pages.insert(url.to_string(), Page::Fail);
        self
    }

    pub fn hanging(mut self, url: &str) -> Self {
        self.pages.insert(url.to_string(), Page::Hang);
        self
    }

    /// Every URL requested so far, in the order the requests started
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Most fetches ever outstanding at the same moment
    pub fn peak_in_flight(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Fetcher for FakeFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        self.calls.lock().unwrap().push(url.to_string());
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now, Ordering::SeqCst);

        let result = match self.pages.get(url) {
            Some(Page::Body(body, delay)) => {
                if !delay.is_zero() {
                    tokio::time::sleep(*delay).await;
                }
                Ok(body.clone())
            }
            Some(Page::Fail) => Err(FetchError::Connect {
                url: url.to_string(),
                reason: "simulated network error".to_string(),
            }),
            Some(Page::Hang) => {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                Err(FetchError::Timeout { url: url.to_string() })
            }
            None => Err(FetchError::Request {
                url: url.to_string(),
                reason: "no such page".to_string(),
            }),
        };

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        result
    }
}
