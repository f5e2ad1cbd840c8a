use anyhow::{Context, Result};
use reqwest::Url;

pub fn parse_base_url(base_url: &str) -> Result<Url> {
    Url::parse(base_url).with_context(|| format!("Invalid base URL: {}", base_url))
}

/// Resolves a link found on the page against the site's base URL.
pub fn resolve_url(base_url: &Url, path: &str) -> Result<String> {
    let resolved = base_url
        .join(path)
        .with_context(|| format!("Failed to resolve '{}' against {}", path, base_url))?;
    Ok(resolved.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        parse_base_url("https://automationexercise.com").unwrap()
    }

    #[test]
    fn site_relative_paths_land_under_base() {
        assert_eq!(
            resolve_url(&base(), "/product_details/1").unwrap(),
            "https://automationexercise.com/product_details/1"
        );
        assert_eq!(
            resolve_url(&base(), "get_product_picture/2").unwrap(),
            "https://automationexercise.com/get_product_picture/2"
        );
    }

    #[test]
    fn absolute_and_protocol_relative_links() {
        assert_eq!(
            resolve_url(&base(), "https://cdn.example.com/a.jpg").unwrap(),
            "https://cdn.example.com/a.jpg"
        );
        assert_eq!(
            resolve_url(&base(), "//cdn.example.com/a.jpg").unwrap(),
            "https://cdn.example.com/a.jpg"
        );
    }

    #[test]
    fn invalid_base_url_is_reported() {
        let err = parse_base_url("automationexercise.com").unwrap_err();

        assert!(err.to_string().contains("Invalid base URL"));
    }
}
