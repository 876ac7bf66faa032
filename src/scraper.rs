use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

use crate::parser::{self, RawPair};
use crate::settings::Settings;

/// Scrape stats returned after completion.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScrapeStats {
    pub total: usize,
    pub ok: usize,
    pub errors: usize,
    /// Pages that downloaded but matched no layout.
    pub empty: usize,
}

/// Sequential page fetcher: one request at a time, fixed pause between them.
pub struct Fetcher {
    client: reqwest::Client,
    delay: Duration,
}

impl Fetcher {
    pub fn new(settings: &Settings) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(settings.user_agent.as_str())
            .timeout(settings.timeout())
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Fetcher {
            client,
            delay: settings.delay(),
        })
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Best effort. Any failure, timeouts and non-2xx included, is logged
    /// and comes back as `None`.
    pub async fn fetch(&self, url: &str) -> Option<String> {
        match self.get_text(url).await {
            Ok(body) => Some(body),
            Err(e) => {
                warn!("Fetch failed for {}: {:#}", url, e);
                None
            }
        }
    }

    async fn get_text(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        Ok(response.text().await?)
    }
}

/// Fetch and parse every page in order. A page that fails or matches nothing
/// contributes no pairs; the caller decides whether an empty total is fatal.
pub async fn scrape_pages(fetcher: &Fetcher, urls: &[String]) -> (Vec<RawPair>, ScrapeStats) {
    let total = urls.len();
    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40} {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=> "),
    );

    let mut stats = ScrapeStats {
        total,
        ..Default::default()
    };
    let mut pairs = Vec::new();
    let started = Instant::now();

    for (i, url) in urls.iter().enumerate() {
        if i > 0 {
            tokio::time::sleep(fetcher.delay).await;
        }
        pb.set_message(url.clone());

        match fetcher.fetch(url).await {
            Some(html) => {
                stats.ok += 1;
                let found = parser::parse_vocab_page(&html, url);
                pb.suspend(|| info!("[{}/{}] {} -> {} words found", i + 1, total, url, found.len()));
                if found.is_empty() {
                    stats.empty += 1;
                }
                pairs.extend(found);
            }
            None => stats.errors += 1,
        }
        pb.inc(1);
    }

    pb.finish_and_clear();
    info!(
        "Scraped {} pages ({} ok, {} errors, {} without words) in {:.1}s",
        stats.total,
        stats.ok,
        stats.errors,
        stats.empty,
        started.elapsed().as_secs_f64()
    );

    (pairs, stats)
}

/// A run that collected nothing from any page is a failure; empty pages
/// alongside productive ones are not.
pub fn require_words(pairs: Vec<RawPair>) -> Result<Vec<RawPair>> {
    if pairs.is_empty() {
        bail!("No words extracted from any page");
    }
    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fetcher() -> Fetcher {
        let settings = Settings {
            timeout_secs: 2,
            ..Settings::default()
        };
        Fetcher::new(&settings).unwrap().with_delay(Duration::ZERO)
    }

    #[tokio::test]
    async fn unreachable_page_is_none() {
        assert!(fetcher().fetch("http://127.0.0.1:9/").await.is_none());
    }

    #[tokio::test]
    async fn failed_pages_yield_no_pairs() {
        let urls = vec![
            "http://127.0.0.1:9/a".to_string(),
            "not a url".to_string(),
        ];
        let (pairs, stats) = scrape_pages(&fetcher(), &urls).await;
        assert!(pairs.is_empty());
        assert_eq!(
            stats,
            ScrapeStats {
                total: 2,
                ok: 0,
                errors: 2,
                empty: 0
            }
        );
    }

    #[tokio::test]
    async fn all_pages_empty_is_fatal() {
        let urls = vec!["http://127.0.0.1:9/a".to_string()];
        let (pairs, _) = scrape_pages(&fetcher(), &urls).await;
        let err = require_words(pairs).unwrap_err();
        assert_eq!(err.to_string(), "No words extracted from any page");
    }

    #[test]
    fn some_empty_pages_are_fine() {
        let mut pairs = Vec::new();
        for html in [
            "",
            "<ul><li>1. 가격 - price</li></ul>",
            "<p>nothing here</p>",
        ] {
            pairs.extend(parser::parse_vocab_page(html, "page"));
        }
        let pairs = require_words(pairs).unwrap();
        assert_eq!(pairs, vec![RawPair::new("가격", "price")]);
    }
}
