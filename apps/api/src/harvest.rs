//! Web content harvesting — fetches the fixed set of portfolio pages and
//! extracts their visible text.
//!
//! The section list is known at build time. Every request re-fetches all six
//! pages; nothing is cached. A page that cannot be fetched (bad status or
//! transport fault) contributes placeholder text instead of aborting the
//! harvest, so the remaining pages are unaffected.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context as _, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use scraper::{Html, Node};
use tokio::sync::Semaphore;
use tracing::{debug, warn};
use url::Url;

/// User-Agent string for harvest requests.
const USER_AGENT: &str = concat!("portfolio-chat/", env!("CARGO_PKG_VERSION"));

const PORTFOLIO_BASE_URL: &str = "https://www.zhizhenyang.com";

/// Site sections harvested in addition to the root page.
const SECTION_PATHS: [&str; 5] = [
    "my-mindsets",
    "mays-competencies",
    "myers-briggs-assessment",
    "strengthfinders",
    "about-me",
];

/// Placeholder stored for a section that could not be fetched.
pub const FETCH_FAILED: &str = "Error: Failed to fetch content.";

/// A slow section must not wedge the whole request.
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);
const FETCH_CONCURRENCY: usize = 3;

/// One harvested site section: its URL and the extracted visible text,
/// or [`FETCH_FAILED`] when the fetch did not succeed.
#[derive(Debug, Clone)]
pub struct HarvestedPage {
    pub url: String,
    pub text: String,
}

/// Seam for the harvester. The production implementation is `WebHarvester`;
/// tests substitute fixed pages.
#[async_trait]
pub trait SiteHarvester: Send + Sync {
    /// Fetches every site section and returns one entry per section,
    /// in section order.
    async fn harvest(&self) -> Vec<HarvestedPage>;
}

/// Fetches the portfolio site sections over HTTP.
pub struct WebHarvester {
    client: Client,
    base_url: Url,
}

impl WebHarvester {
    pub fn new() -> Result<Self> {
        let base_url = Url::parse(PORTFOLIO_BASE_URL).context("invalid portfolio base URL")?;
        Self::for_base_url(base_url)
    }

    fn for_base_url(base_url: Url) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(FETCH_TIMEOUT)
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self { client, base_url })
    }

    /// The root page plus the five named sections, in fixed order.
    fn section_urls(&self) -> Vec<Url> {
        let mut urls = vec![self.base_url.clone()];
        for path in SECTION_PATHS {
            match self.base_url.join(path) {
                Ok(url) => urls.push(url),
                Err(e) => warn!(%path, error = %e, "skipping malformed section path"),
            }
        }
        urls
    }
}

#[async_trait]
impl SiteHarvester for WebHarvester {
    async fn harvest(&self) -> Vec<HarvestedPage> {
        let urls = self.section_urls();
        let semaphore = Arc::new(Semaphore::new(FETCH_CONCURRENCY));

        let mut handles = Vec::with_capacity(urls.len());
        for url in &urls {
            let client = self.client.clone();
            let sem = Arc::clone(&semaphore);
            let url = url.clone();
            handles.push(tokio::spawn(async move {
                let _permit = sem.acquire().await.expect("semaphore closed");
                fetch_section(&client, &url).await
            }));
        }

        let mut pages = Vec::with_capacity(urls.len());
        for (handle, url) in handles.into_iter().zip(urls) {
            let text = match handle.await {
                Ok(text) => text,
                Err(e) => {
                    warn!(%url, error = %e, "section fetch task failed");
                    FETCH_FAILED.to_string()
                }
            };
            pages.push(HarvestedPage {
                url: url.to_string(),
                text,
            });
        }

        debug!(
            sections = pages.len(),
            failed = pages.iter().filter(|p| p.text == FETCH_FAILED).count(),
            "harvest completed"
        );

        pages
    }
}

/// Fetch one section. Any failure collapses to [`FETCH_FAILED`]; the caller
/// keeps going with the remaining sections.
async fn fetch_section(client: &Client, url: &Url) -> String {
    let response = match client.get(url.as_str()).send().await {
        Ok(response) => response,
        Err(e) => {
            warn!(%url, error = %e, "section fetch failed");
            return FETCH_FAILED.to_string();
        }
    };

    if response.status() != StatusCode::OK {
        warn!(%url, status = %response.status(), "section fetch returned bad status");
        return FETCH_FAILED.to_string();
    }

    match response.text().await {
        Ok(body) => visible_text(&body),
        Err(e) => {
            warn!(%url, error = %e, "section body read failed");
            FETCH_FAILED.to_string()
        }
    }
}

/// Extracts the visible text of an HTML page: every text node outside
/// script/style/noscript, whitespace collapsed to single spaces.
fn visible_text(html: &str) -> String {
    let doc = Html::parse_document(html);
    let mut words: Vec<&str> = Vec::new();

    for node in doc.root_element().descendants() {
        if let Node::Text(text) = node.value() {
            let hidden = node.ancestors().any(|ancestor| {
                matches!(
                    ancestor.value(),
                    Node::Element(el) if matches!(el.name(), "script" | "style" | "noscript")
                )
            });
            if !hidden {
                words.extend(text.split_whitespace());
            }
        }
    }

    words.join(" ")
}
