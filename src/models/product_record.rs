use crate::extractors::automation_exercise::extract_product_cards::ProductCard;
use crate::extractors::automation_exercise::extract_product_details::ProductDetails;

/// Export column names, in output order.
pub const CSV_HEADERS: [&str; 8] = [
    "product_id",
    "product_name",
    "category",
    "brand",
    "price",
    "availability",
    "product_url",
    "image_url",
];

/// One scraped product. Every field is optional; absence is only turned into
/// the missing-value marker when the record is written out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductRecord {
    pub product_id: Option<String>,
    pub product_name: Option<String>,
    pub category: Option<String>,
    pub brand: Option<String>,
    pub price: Option<String>,
    pub availability: Option<String>,
    pub product_url: Option<String>,
    pub image_url: Option<String>,
}

impl ProductRecord {
    pub fn from_card(card: ProductCard) -> Self {
        ProductRecord {
            product_id: card.product_id,
            product_name: card.product_name,
            price: card.price,
            product_url: card.product_url,
            image_url: card.image_url,
            ..Default::default()
        }
    }

    pub fn apply_details(&mut self, details: ProductDetails) {
        self.brand = details.brand;
        self.category = details.category;
        self.availability = details.availability;
    }

    /// Cells in `CSV_HEADERS` order, absent fields replaced by `missing_value`.
    pub fn to_csv_record(&self, missing_value: &str) -> [String; 8] {
        [
            &self.product_id,
            &self.product_name,
            &self.category,
            &self.brand,
            &self.price,
            &self.availability,
            &self.product_url,
            &self.image_url,
        ]
        .map(|field| field.clone().unwrap_or_else(|| missing_value.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_record_keeps_column_order_and_fills_gaps() {
        let mut record = ProductRecord::from_card(ProductCard {
            product_id: Some("1".to_string()),
            product_name: Some("Blue Top".to_string()),
            price: Some("500".to_string()),
            image_url: Some("https://automationexercise.com/get_product_picture/1".to_string()),
            product_url: None,
        });
        record.apply_details(ProductDetails {
            brand: Some("Polo".to_string()),
            category: None,
            availability: Some("In Stock".to_string()),
        });

        assert_eq!(
            record.to_csv_record("N/A"),
            [
                "1",
                "Blue Top",
                "N/A",
                "Polo",
                "500",
                "In Stock",
                "N/A",
                "https://automationexercise.com/get_product_picture/1",
            ]
            .map(String::from)
        );
    }

    #[test]
    fn empty_record_is_all_missing_markers() {
        let cells = ProductRecord::default().to_csv_record("N/A");

        assert_eq!(cells.len(), CSV_HEADERS.len());
        assert!(cells.iter().all(|cell| cell == "N/A"));
    }
}
