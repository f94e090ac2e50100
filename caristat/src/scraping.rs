use scraper::{Html, Selector};
use tracing::warn;

/// A raw anchor pulled out of a page: visible text plus href attribute.
#[derive(Debug, Clone)]
pub struct Anchor {
    pub text: String,
    pub href: String,
}

/// Extracts every `<a href=...>` element from an HTML document.
///
/// The anchor text is assembled from the element's text fragments with each
/// fragment trimmed, so nested markup collapses and surrounding whitespace
/// goes away. Anchors with an empty href are dropped; anchors with empty
/// text are kept (they simply never match a keyword).
pub fn extract_anchors(html: &str) -> Vec<Anchor> {
    let document = Html::parse_document(html);

    let selector = match Selector::parse("a[href]") {
        Ok(selector) => selector,
        Err(e) => {
            warn!("scraping: anchor selector failed to parse: {}", e);
            return Vec::new();
        }
    };

    let mut anchors = Vec::new();
    for element in document.select(&selector) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };
        if href.is_empty() {
            continue;
        }

        let text: String = element
            .text()
            .map(str::trim)
            .filter(|fragment| !fragment.is_empty())
            .collect();

        anchors.push(Anchor {
            text,
            href: href.to_string(),
        });
    }

    anchors
}
