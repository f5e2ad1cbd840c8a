use scraper::ElementRef;

use crate::extractors::automation_exercise::selectors::PageSelectors;
use crate::utilities::normalize_text::element_text;

pub const CATEGORY_SEPARATOR: &str = " | ";

/// Text of the first paragraph in the product information block.
pub fn extract_description(container: &ElementRef, selectors: &PageSelectors) -> Option<String> {
    container
        .select(&selectors.description)
        .next()
        .and_then(|paragraph| element_text(&paragraph))
}

/// Appends `CATEGORY_SEPARATOR` and the description whenever a description is
/// present, even after an empty category.
pub fn join_category(category: Option<String>, description: Option<String>) -> Option<String> {
    match (category, description) {
        (category, Some(description)) => Some(format!(
            "{}{}{}",
            category.unwrap_or_default(),
            CATEGORY_SEPARATOR,
            description
        )),
        (category, None) => category,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_and_description_are_pipe_joined() {
        assert_eq!(
            join_category(Some("Clothes".to_string()), Some("Cotton T-shirt".to_string())),
            Some("Clothes | Cotton T-shirt".to_string())
        );
    }

    #[test]
    fn no_trailing_separator_without_description() {
        assert_eq!(
            join_category(Some("Clothes".to_string()), None),
            Some("Clothes".to_string())
        );
    }

    #[test]
    fn description_without_category_keeps_leading_separator() {
        assert_eq!(
            join_category(None, Some("Cotton T-shirt".to_string())),
            Some(" | Cotton T-shirt".to_string())
        );
        assert_eq!(join_category(None, None), None);
    }
}
