use scraper::ElementRef;

use crate::extractors::automation_exercise::selectors::PageSelectors;
use crate::utilities::normalize_text::element_text;

/// Name label of a listing card.
pub fn extract_product_name(card: &ElementRef, selectors: &PageSelectors) -> Option<String> {
    card.select(&selectors.product_name)
        .next()
        .and_then(|label| element_text(&label))
}
