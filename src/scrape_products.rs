use anyhow::{Context, Result};
use colored::Colorize;

use crate::config::config::AppConfig;
use crate::extractors::automation_exercise::extract_product_cards::extract_product_cards;
use crate::extractors::automation_exercise::extract_product_details::extract_product_details;
use crate::extractors::automation_exercise::selectors::PageSelectors;
use crate::models::product_record::ProductRecord;
use crate::utilities::csv_writer::export_products;
use crate::utilities::fetch_page::FetchPage;
use crate::utilities::generate_delay::generate_delay;

/// Fetches the listing page, then visits each card's detail page in turn.
///
/// Records come back in listing order. Cards without a detail link are kept
/// without a detail request. The first fetch error aborts the whole run.
pub async fn scrape_products<F: FetchPage>(fetcher: &F, config: &AppConfig) -> Result<Vec<ProductRecord>> {
    let selectors = PageSelectors::new()?;

    let listing_url = config.site.listing_url();
    let listing_html = fetcher
        .fetch_page(&listing_url)
        .await
        .with_context(|| format!("Failed to fetch listing page {}", listing_url))?;

    let cards = extract_product_cards(&listing_html, &config.site, &selectors)?;
    println!("{}", format!("Found {} products on main page", cards.len()).green());

    let total = cards.len();
    let mut products = Vec::with_capacity(total);

    for (index, card) in cards.into_iter().enumerate() {
        let mut product = ProductRecord::from_card(card);
        let name = product.product_name.as_deref().unwrap_or(config.export.missing_value.as_str());

        let details = match product.product_url.as_deref() {
            Some(product_url) => {
                println!("[{}/{}] {}", index + 1, total, name);
                let detail_html = fetcher
                    .fetch_page(product_url)
                    .await
                    .with_context(|| format!("Failed to fetch detail page {}", product_url))?;
                Some(extract_product_details(&detail_html, &selectors))
            }
            None => {
                println!(
                    "{}",
                    format!("[{}/{}] {}: no detail link, skipping detail page", index + 1, total, name).yellow()
                );
                None
            }
        };

        if let Some(details) = details {
            product.apply_details(details);
        }
        products.push(product);

        generate_delay(&config.pacing).await;
    }

    Ok(products)
}

/// Scrapes every product and only then writes the CSV; a failed run leaves
/// whatever is at `export.output_path` untouched.
pub async fn run<F: FetchPage>(fetcher: &F, config: &AppConfig) -> Result<Vec<ProductRecord>> {
    let products = scrape_products(fetcher, config).await?;
    export_products(&products, &config.export).await?;
    Ok(products)
}
