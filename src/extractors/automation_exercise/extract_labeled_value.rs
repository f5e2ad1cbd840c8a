use scraper::node::Node;
use scraper::ElementRef;

use crate::extractors::automation_exercise::selectors::PageSelectors;
use crate::utilities::normalize_text::{element_text, normalize_text};

/// Finds the bold label whose text is exactly `label` (e.g. `"Brand:"`) and
/// returns the text of the node right after it.
pub fn extract_labeled_value(
    container: &ElementRef,
    selectors: &PageSelectors,
    label: &str,
) -> Option<String> {
    let label_element = container
        .select(&selectors.bold_label)
        .find(|bold| bold.text().collect::<String>() == label)?;

    let sibling = label_element.next_sibling()?;
    match sibling.value() {
        Node::Text(text) => normalize_text(text),
        Node::Element(_) => ElementRef::wrap(sibling).and_then(|element| element_text(&element)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use scraper::Html;

    use super::*;

    fn value_of(html: &str, label: &str) -> Option<String> {
        let document = Html::parse_fragment(html);
        let selectors = PageSelectors::new().unwrap();
        let container = document.select(&selectors.product_information).next().unwrap();
        extract_labeled_value(&container, &selectors, label)
    }

    #[test]
    fn reads_text_after_label() {
        let html = r#"<div class="product-information"><p><b>Brand:</b> Polo</p></div>"#;

        assert_eq!(value_of(html, "Brand:"), Some("Polo".to_string()));
    }

    #[test]
    fn label_must_match_literally() {
        let html = r#"<div class="product-information"><p><b>Brand</b> Polo</p><p><b>Brand: </b> H&amp;M</p></div>"#;

        assert_eq!(value_of(html, "Brand:"), None);
    }

    #[test]
    fn element_sibling_contributes_its_text() {
        let html = r#"<div class="product-information"><p><b>Availability:</b><span> In Stock </span></p></div>"#;

        assert_eq!(value_of(html, "Availability:"), Some("In Stock".to_string()));
    }

    #[test]
    fn label_without_sibling_is_absent() {
        let html = r#"<div class="product-information"><p><b>Condition:</b></p></div>"#;

        assert_eq!(value_of(html, "Condition:"), None);
    }
}
