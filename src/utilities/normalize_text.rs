use scraper::ElementRef;

/// Trims surrounding whitespace; an empty result counts as absent.
pub fn normalize_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// All text below `element`, concatenated and trimmed.
pub fn element_text(element: &ElementRef) -> Option<String> {
    normalize_text(&element.text().collect::<String>())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_text_is_absent() {
        assert_eq!(normalize_text("  \n\t "), None);
        assert_eq!(normalize_text(" Polo \n"), Some("Polo".to_string()));
    }
}
