pub mod extract_description;
pub mod extract_image_url;
pub mod extract_labeled_value;
pub mod extract_price;
pub mod extract_product_cards;
pub mod extract_product_details;
pub mod extract_product_id;
pub mod extract_product_name;
pub mod extract_product_url;
pub mod selectors;
