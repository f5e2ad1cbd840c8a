use anyhow::Result;
use reqwest::Url;
use scraper::ElementRef;

use crate::extractors::automation_exercise::selectors::PageSelectors;
use crate::utilities::resolve_url::resolve_url;

/// Absolute thumbnail URL of a listing card.
pub fn extract_image_url(card: &ElementRef, selectors: &PageSelectors, base_url: &Url) -> Result<Option<String>> {
    card.select(&selectors.image)
        .next()
        .and_then(|image| image.value().attr("src"))
        .map(str::trim)
        .filter(|src| !src.is_empty())
        .map(|src| resolve_url(base_url, src))
        .transpose()
}
