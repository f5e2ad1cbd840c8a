use anyhow::Result;
use chrono::Utc;
use colored::Colorize;

use crate::utilities::csv_writer::render_preview;
use crate::utilities::fetch_page::HttpFetcher;

// Import modules
mod config;
mod extractors;
mod models;
mod scrape_products;
mod utilities;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration settings
    let config = match config::config::load_config() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("{}", format!("Failed to load configuration: {}", e).red());
            return Err(e.into());
        }
    };

    let started_at = Utc::now();
    println!("Scraping {} (started {})", config.site.listing_url(), started_at.to_rfc3339());

    let fetcher = HttpFetcher::new(&config.http)?;

    let products = match scrape_products::run(&fetcher, &config).await {
        Ok(products) => products,
        Err(e) => {
            eprintln!("{}", format!("Scraping failed: {:#}", e).red());
            return Err(e);
        }
    };

    println!(
        "{}",
        format!("Data exported to '{}' successfully.", config.export.output_path).green()
    );

    println!("{}", render_preview(&products, &config.export)?);

    let elapsed = Utc::now() - started_at;
    println!(
        "Exported {} products in {:.1}s",
        products.len(),
        elapsed.num_milliseconds() as f64 / 1000.0
    );

    Ok(())
}
