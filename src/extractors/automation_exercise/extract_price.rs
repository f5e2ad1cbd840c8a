use scraper::ElementRef;

use crate::extractors::automation_exercise::selectors::PageSelectors;
use crate::utilities::normalize_text::normalize_text;

/// Price label of a listing card, without the currency prefix.
pub fn extract_price(
    card: &ElementRef,
    selectors: &PageSelectors,
    currency_prefix: &str,
) -> Option<String> {
    card.select(&selectors.price)
        .next()
        .and_then(|label| strip_currency(&label.text().collect::<String>(), currency_prefix))
}

pub fn strip_currency(raw: &str, currency_prefix: &str) -> Option<String> {
    if currency_prefix.is_empty() {
        return normalize_text(raw);
    }
    normalize_text(&raw.replace(currency_prefix, ""))
}
