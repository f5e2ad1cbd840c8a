use anyhow::{anyhow, Context, Result};
use csv_async::AsyncWriterBuilder;
use tokio::fs::File as AsyncFile;
use tokio::io::BufWriter;

use crate::config::config::ExportConfig;
use crate::models::product_record::{ProductRecord, CSV_HEADERS};

/// Writes all products to `export.output_path`, replacing any previous file.
///
/// # Arguments
/// * `products` - The scraped products, in listing order.
/// * `export` - Output path and missing-value marker.
///
/// # Returns an error if the file cannot be created or written.
pub async fn export_products(products: &[ProductRecord], export: &ExportConfig) -> Result<()> {
    let file_out = AsyncFile::create(&export.output_path)
        .await
        .with_context(|| format!("Failed to create {}", export.output_path))?;
    let writer = BufWriter::new(file_out);
    let mut csv_writer = AsyncWriterBuilder::new().create_writer(writer);

    csv_writer
        .write_record(&CSV_HEADERS)
        .await
        .context("Failed to write CSV header")?;

    for product in products {
        csv_writer
            .write_record(&product.to_csv_record(&export.missing_value))
            .await
            .context("Failed to write CSV record")?;
    }

    csv_writer
        .flush()
        .await
        .with_context(|| format!("Failed to flush {}", export.output_path))?;

    Ok(())
}

/// Header plus the first `export.preview_rows` rows, rendered as CSV text.
pub fn render_preview(products: &[ProductRecord], export: &ExportConfig) -> Result<String> {
    let mut writer = csv::WriterBuilder::new().from_writer(Vec::new());

    writer.write_record(CSV_HEADERS)?;
    for product in products.iter().take(export.preview_rows) {
        writer.write_record(product.to_csv_record(&export.missing_value))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow!("Failed to render preview: {}", e.error()))?;
    Ok(String::from_utf8(bytes)?)
}
