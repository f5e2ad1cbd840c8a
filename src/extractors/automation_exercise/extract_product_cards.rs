use anyhow::Result;
use scraper::Html;

use crate::config::config::SiteConfig;
use crate::extractors::automation_exercise::extract_image_url::extract_image_url;
use crate::extractors::automation_exercise::extract_price::extract_price;
use crate::extractors::automation_exercise::extract_product_id::extract_product_id;
use crate::extractors::automation_exercise::extract_product_name::extract_product_name;
use crate::extractors::automation_exercise::extract_product_url::extract_product_url;
use crate::extractors::automation_exercise::selectors::PageSelectors;
use crate::utilities::resolve_url::parse_base_url;

/// Summary fields read from one listing card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductCard {
    pub product_id: Option<String>,
    pub product_name: Option<String>,
    pub price: Option<String>,
    pub image_url: Option<String>,
    pub product_url: Option<String>,
}

/// Extracts every product card of the listing page, in document order.
/// A card missing some element still yields a card, with that field absent.
/// Only an invalid base URL or an unresolvable link is an error.
pub fn extract_product_cards(
    html_content: &str,
    site: &SiteConfig,
    selectors: &PageSelectors,
) -> Result<Vec<ProductCard>> {
    let base_url = parse_base_url(&site.base_url)?;
    let document = Html::parse_document(html_content);

    document
        .select(&selectors.product_card)
        .map(|card| -> Result<ProductCard> {
            Ok(ProductCard {
                product_id: extract_product_id(&card, selectors),
                product_name: extract_product_name(&card, selectors),
                price: extract_price(&card, selectors, &site.currency_prefix),
                image_url: extract_image_url(&card, selectors, &base_url)?,
                product_url: extract_product_url(&card, selectors, &base_url)?,
            })
        })
        .collect()
}
