use std::collections::HashSet;

use serde::Serialize;
use url::Url;

/// One matching link, serialized to the output JSON as
/// `{"title", "url", "description", "type"}`.
#[derive(Debug, Clone, Serialize)]
pub struct SearchHit {
    pub title: String,
    pub url: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: LinkKind,
}

/// Which source produced a hit. Serialized lowercase into the `type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    Navigation,
    Statistics,
    Publication,
    Curated,
}

/// Extensions that point at document downloads rather than pages.
const UNWANTED_EXTENSIONS: &[&str] = &[".pdf", ".doc", ".docx", ".xls", ".xlsx"];

/// Resolves an href against the site base URL. Relative paths resolve from
/// the site root regardless of which page they were found on; absolute URLs
/// pass through unchanged.
pub fn absolutize(base: &Url, href: &str) -> Option<Url> {
    base.join(href).ok()
}

/// A link is kept when it lives on the same host as the base URL and its
/// path does not end in a document-download extension.
pub fn is_acceptable(base: &Url, candidate: &Url) -> bool {
    if candidate.host_str() != base.host_str() {
        return false;
    }

    let path = candidate.path().to_lowercase();
    !UNWANTED_EXTENSIONS.iter().any(|ext| path.ends_with(ext))
}

/// URL-based deduplication: first occurrence wins, source order is
/// preserved, and at most `max` hits survive.
pub fn dedupe_by_url(hits: Vec<SearchHit>, max: usize) -> Vec<SearchHit> {
    let mut seen = HashSet::new();
    let mut unique = Vec::new();

    for hit in hits {
        if unique.len() >= max {
            break;
        }
        if seen.insert(hit.url.clone()) {
            unique.push(hit);
        }
    }

    unique
}
