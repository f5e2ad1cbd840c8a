use scraper::Html;

use crate::extractors::automation_exercise::extract_description::{extract_description, join_category};
use crate::extractors::automation_exercise::extract_labeled_value::extract_labeled_value;
use crate::extractors::automation_exercise::selectors::PageSelectors;

pub const BRAND_LABEL: &str = "Brand:";
pub const CATEGORY_LABEL: &str = "Category:";
pub const AVAILABILITY_LABEL: &str = "Availability:";

/// Extended attributes read from a product detail page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductDetails {
    pub brand: Option<String>,
    pub category: Option<String>,
    pub availability: Option<String>,
}

/// Each field is looked up independently inside `div.product-information`;
/// without that block every field is absent.
pub fn extract_product_details(html_content: &str, selectors: &PageSelectors) -> ProductDetails {
    let document = Html::parse_document(html_content);

    let Some(information) = document.select(&selectors.product_information).next() else {
        return ProductDetails::default();
    };

    let category = extract_labeled_value(&information, selectors, CATEGORY_LABEL);
    let description = extract_description(&information, selectors);

    ProductDetails {
        brand: extract_labeled_value(&information, selectors, BRAND_LABEL),
        category: join_category(category, description),
        availability: extract_labeled_value(&information, selectors, AVAILABILITY_LABEL),
    }
}
