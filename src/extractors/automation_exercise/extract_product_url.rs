use anyhow::Result;
use reqwest::Url;
use scraper::ElementRef;

use crate::extractors::automation_exercise::selectors::PageSelectors;
use crate::utilities::resolve_url::resolve_url;

/// Absolute detail page URL, taken from the card's `/product_details/` link.
pub fn extract_product_url(card: &ElementRef, selectors: &PageSelectors, base_url: &Url) -> Result<Option<String>> {
    card.select(&selectors.product_link)
        .next()
        .and_then(|link| link.value().attr("href"))
        .map(|href| resolve_url(base_url, href.trim()))
        .transpose()
}
