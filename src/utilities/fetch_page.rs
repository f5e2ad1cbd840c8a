use anyhow::{anyhow, Context, Result};
use reqwest::Client;
use tokio::time::Duration;

use crate::config::config::HttpConfig;

pub trait FetchPage {
    /// Returns the body of `url`; any transport failure or non-2xx status is an error.
    async fn fetch_page(&self, url: &str) -> Result<String>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(http: &HttpConfig) -> Result<Self> {
        let mut builder = Client::builder();

        if let Some(timeout_secs) = http.timeout_secs {
            builder = builder.timeout(Duration::from_secs(timeout_secs));
        }
        if let Some(user_agent) = &http.user_agent {
            builder = builder.user_agent(user_agent.clone());
        }

        let client = builder.build().context("Failed to build HTTP client")?;
        Ok(HttpFetcher { client })
    }
}

impl FetchPage for HttpFetcher {
    async fn fetch_page(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("Failed to send request to {}", url))?;

        let status = response.status();
        if !status.is_success() {
            return Err(anyhow!("Request to {} failed with status {}", url, status));
        }

        response
            .text()
            .await
            .with_context(|| format!("Failed to read response body from {}", url))
    }
}

#[cfg(test)]
mod tests {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    use super::*;

    /// Serves one canned HTTP response and returns the URL to request.
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 2048];
            socket.read(&mut buf).await.unwrap();

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
        });

        format!("http://{}/products", addr)
    }

    fn local_fetcher() -> HttpFetcher {
        HttpFetcher {
            client: Client::builder().no_proxy().build().unwrap(),
        }
    }

    #[test]
    fn builds_client_from_http_settings() {
        let http = HttpConfig {
            timeout_secs: Some(5),
            user_agent: Some("ae_products_scraper".to_string()),
        };

        assert!(HttpFetcher::new(&http).is_ok());
    }

    #[tokio::test]
    async fn returns_body_of_successful_response() {
        let url = serve_once("200 OK", "<html><body>ok</body></html>").await;
        let fetcher = local_fetcher();

        let body = fetcher.fetch_page(&url).await.unwrap();

        assert_eq!(body, "<html><body>ok</body></html>");
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let url = serve_once("404 Not Found", "missing").await;
        let fetcher = local_fetcher();

        let err = fetcher.fetch_page(&url).await.unwrap_err();

        assert!(err.to_string().contains("404"));
    }
}
