use anyhow::{Context, Result};
use reqwest::Client;
use std::time::Duration;
use tracing::{error, info};
use url::Url;

use common::Config;

use crate::fetch;
use crate::links::{self, LinkKind, SearchHit};
use crate::matching;
use crate::scraping::{self, Anchor};

/// Statistics subject pages checked by the statistics search.
const SUBJECT_PATHS: &[&str] = &[
    "/statistics-table",
    "/subject/12",  // population
    "/subject/52",  // economy / PDRB
    "/subject/563", // poverty
    "/subject/15",  // industry
    "/subject/28",  // education
    "/subject/30",  // health
];

/// Path of the publication index page.
const PUBLICATION_PATH: &str = "/publication";

/// Searches the BPS Kota Medan website for links matching a keyword.
///
/// Holds the single HTTP session used for the whole run. The three sources
/// (navigation, statistics, publications) run strictly one after the other;
/// a failing page is logged and contributes zero results.
pub struct Searcher {
    client: Client,
    base: Url,
    delay: Duration,
    max_response_bytes: Option<u64>,
}

impl Searcher {
    pub fn new(config: &Config) -> Result<Self> {
        let base = Url::parse(config.base_url())
            .with_context(|| format!("invalid base URL: {}", config.base_url()))?;
        let client = fetch::build_client(config.user_agent(), config.fetch_timeout_seconds())?;

        Ok(Searcher {
            client,
            base,
            delay: Duration::from_millis(config.delay_ms()),
            max_response_bytes: config.max_response_bytes(),
        })
    }

    /// Runs all three sources in order, then deduplicates by URL and caps
    /// the result count. First occurrence wins, so navigation hits shadow
    /// later statistics and publication hits for the same URL.
    pub async fn search_links(&self, keyword: &str, max_results: usize) -> Vec<SearchHit> {
        let mut results = Vec::new();

        results.extend(self.search_navigation(keyword).await);
        results.extend(self.search_statistics(keyword).await);
        results.extend(self.search_publications(keyword).await);

        let unique = links::dedupe_by_url(results, max_results);
        info!("search for '{}' produced {} links", keyword, unique.len());
        unique
    }

    /// Scans the home page for navigation anchors containing the keyword.
    /// Only direct substring matches count here; the synonym table is not
    /// consulted for navigation links.
    async fn search_navigation(&self, keyword: &str) -> Vec<SearchHit> {
        let page = match fetch::fetch_page(&self.client, &self.base, self.max_response_bytes).await
        {
            Ok(body) => body,
            Err(e) => {
                error!("navigation search failed: {}", e);
                return Vec::new();
            }
        };

        let mut hits = Vec::new();
        for anchor in scraping::extract_anchors(&page) {
            if !matching::matches_directly(keyword, &anchor.text) {
                continue;
            }

            let description = format!("Halaman {} dari website BPS Kota Medan", anchor.text);
            if let Some(hit) = self.make_hit(&anchor, LinkKind::Navigation, description) {
                hits.push(hit);
            }
        }

        info!("navigation search: {} candidate links", hits.len());
        hits
    }

    /// Walks the fixed statistics subject pages, collecting anchors that
    /// match the keyword directly or through the synonym table. Sleeps the
    /// politeness delay after each successfully processed page; a failing
    /// page is skipped and the walk continues.
    async fn search_statistics(&self, keyword: &str) -> Vec<SearchHit> {
        let mut hits = Vec::new();

        for path in SUBJECT_PATHS {
            let Some(url) = links::absolutize(&self.base, path) else {
                error!("statistics search: cannot resolve {}", path);
                continue;
            };

            let page = match fetch::fetch_page(&self.client, &url, self.max_response_bytes).await {
                Ok(body) => body,
                Err(e) => {
                    error!("statistics search failed for {}: {}", path, e);
                    continue;
                }
            };

            for anchor in scraping::extract_anchors(&page) {
                if !matching::matches_with_synonyms(keyword, &anchor.text) {
                    continue;
                }

                let description = format!("Data statistik {} dari BPS Kota Medan", keyword);
                if let Some(hit) = self.make_hit(&anchor, LinkKind::Statistics, description) {
                    hits.push(hit);
                }
            }

            // informal rate limiting between statistics pages
            tokio::time::sleep(self.delay).await;
        }

        info!("statistics search: {} candidate links", hits.len());
        hits
    }

    /// Scans the publication index page, with the same synonym-aware
    /// matching as the statistics search.
    async fn search_publications(&self, keyword: &str) -> Vec<SearchHit> {
        let Some(url) = links::absolutize(&self.base, PUBLICATION_PATH) else {
            error!("publication search: cannot resolve {}", PUBLICATION_PATH);
            return Vec::new();
        };

        let page = match fetch::fetch_page(&self.client, &url, self.max_response_bytes).await {
            Ok(body) => body,
            Err(e) => {
                error!("publication search failed: {}", e);
                return Vec::new();
            }
        };

        let mut hits = Vec::new();
        for anchor in scraping::extract_anchors(&page) {
            if !matching::matches_with_synonyms(keyword, &anchor.text) {
                continue;
            }

            let description = format!("Publikasi mengenai {} dari BPS Kota Medan", keyword);
            if let Some(hit) = self.make_hit(&anchor, LinkKind::Publication, description) {
                hits.push(hit);
            }
        }

        info!("publication search: {} candidate links", hits.len());
        hits
    }

    /// Shared URL normalization and validation for one anchor. Returns
    /// `None` for links that resolve off-site or point at document
    /// downloads.
    fn make_hit(&self, anchor: &Anchor, kind: LinkKind, description: String) -> Option<SearchHit> {
        let url = links::absolutize(&self.base, &anchor.href)?;
        if !links::is_acceptable(&self.base, &url) {
            return None;
        }

        Some(SearchHit {
            title: anchor.text.clone(),
            url: url.to_string(),
            description,
            kind,
        })
    }
}
