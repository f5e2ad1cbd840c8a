use anyhow::{anyhow, Result};
use scraper::Selector;

/// Compiled CSS selectors for the listing and detail pages.
pub struct PageSelectors {
    pub product_card: Selector,
    pub product_name: Selector,
    pub price: Selector,
    pub image: Selector,
    pub product_link: Selector,
    pub cart_button: Selector,
    pub product_information: Selector,
    pub bold_label: Selector,
    pub description: Selector,
}

impl PageSelectors {
    pub fn new() -> Result<Self> {
        Ok(PageSelectors {
            product_card: parse("div.col-sm-4")?,
            product_name: parse("p")?,
            price: parse("h2")?,
            image: parse("img")?,
            product_link: parse("a[href*='/product_details/']")?,
            cart_button: parse("a.add-to-cart")?,
            product_information: parse("div.product-information")?,
            bold_label: parse("b")?,
            description: parse("p")?,
        })
    }
}

fn parse(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| anyhow!("Invalid selector '{}': {:?}", css, e))
}
