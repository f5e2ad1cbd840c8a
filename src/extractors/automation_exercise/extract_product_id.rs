use scraper::ElementRef;

use crate::extractors::automation_exercise::selectors::PageSelectors;
use crate::utilities::normalize_text::normalize_text;

/// Reads `data-product-id` from the card's "Add to cart" control.
pub fn extract_product_id(card: &ElementRef, selectors: &PageSelectors) -> Option<String> {
    card.select(&selectors.cart_button)
        .next()
        .and_then(|button| button.value().attr("data-product-id"))
        .and_then(normalize_text)
}
