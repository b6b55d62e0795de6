use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde_json::Value;

use crate::scrape::{extract_content, ContentScraper};

#[derive(Debug, Clone)]
pub struct FirecrawlClient {
    client: Client,
    base_url: String,
    timeout: Duration,
}

#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    #[error("HTTP error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Scrape API rejected the API key")]
    Unauthorized,
    #[error("Scrape API rate limit exceeded")]
    RateLimited,
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
    #[error("No content found in scrape response")]
    NoContent,
}

impl Default for FirecrawlClient {
    fn default() -> Self {
        Self::new()
    }
}

impl FirecrawlClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: "https://api.firecrawl.dev".into(),
            timeout: Self::SCRAPE_TIMEOUT,
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Scrapes `url`, keeping the reason for a failure.
    #[tracing::instrument(skip(self, api_key))]
    pub async fn try_scrape(&self, url: &str, api_key: &str) -> Result<String, ScrapeError> {
        let resp = self
            .client
            .post(format!("{}/v1/scrape", self.base_url))
            .bearer_auth(api_key)
            .json(&serde_json::json!({ "url": url }))
            .timeout(self.timeout)
            .send()
            .await?;

        match resp.status() {
            status if status.is_success() => {}
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                return Err(ScrapeError::Unauthorized)
            }
            StatusCode::TOO_MANY_REQUESTS => return Err(ScrapeError::RateLimited),
            status => {
                let message = resp.text().await.unwrap_or_default();
                return Err(ScrapeError::Api {
                    status: status.as_u16(),
                    message,
                });
            }
        }

        let doc = resp.json::<Value>().await?;
        extract_content(&doc).ok_or(ScrapeError::NoContent)
    }
}

impl ContentScraper for FirecrawlClient {
    async fn scrape(&self, url: &str, api_key: &str) -> String {
        self.try_scrape(url, api_key)
            .await
            .inspect_err(|e| tracing::error!(error = %e, url, "Firecrawl API error"))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};

    async fn scrape_with_response(status: usize, body: &str) -> String {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("POST", "/v1/scrape")
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await;

        FirecrawlClient::new()
            .with_base_url(server.url())
            .scrape("https://blog.example.com/post", "fc-test")
            .await
    }

    #[tokio::test]
    async fn test_sends_url_and_bearer_key() {
        let mut server = Server::new_async().await;
        let m = server
            .mock("POST", "/v1/scrape")
            .match_header("authorization", "Bearer fc-test")
            .match_body(Matcher::Json(
                serde_json::json!({"url": "https://blog.example.com/post"}),
            ))
            .with_status(200)
            .with_body(r#"{"content": "X"}"#)
            .create_async()
            .await;

        let text = FirecrawlClient::new()
            .with_base_url(server.url())
            .scrape("https://blog.example.com/post", "fc-test")
            .await;

        m.assert_async().await;
        assert_eq!(text, "X");
    }

    #[tokio::test]
    async fn test_nested_markdown_response() {
        let text =
            scrape_with_response(200, r#"{"success": true, "data": {"markdown": "Y"}}"#).await;
        assert_eq!(text, "Y");
    }

    #[tokio::test]
    async fn test_server_error_returns_empty() {
        let text = scrape_with_response(500, r#"{"error": "boom"}"#).await;
        assert_eq!(text, "");
    }

    #[tokio::test]
    async fn test_unrecognized_shape_returns_empty() {
        let text = scrape_with_response(200, r#"{"success": true, "data": {}}"#).await;
        assert_eq!(text, "");
    }

    #[tokio::test]
    async fn test_invalid_json_returns_empty() {
        let text = scrape_with_response(200, "<html>not json</html>").await;
        assert_eq!(text, "");
    }

    #[tokio::test]
    async fn test_network_error_returns_empty() {
        // nothing listens on port 1
        let text = FirecrawlClient::new()
            .with_base_url("http://127.0.0.1:1")
            .scrape("https://blog.example.com/post", "fc-test")
            .await;
        assert_eq!(text, "");
    }

    #[tokio::test]
    async fn test_timeout_returns_empty() {
        // accepts connections but never answers
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let _server = tokio::spawn(async move {
            let mut held = Vec::new();
            while let Ok((socket, _)) = listener.accept().await {
                held.push(socket);
            }
        });

        let client = FirecrawlClient::new()
            .with_base_url(format!("http://{addr}"))
            .with_timeout(Duration::from_millis(200));

        let started = std::time::Instant::now();
        let text = client.scrape("https://blog.example.com/post", "fc-test").await;
        assert_eq!(text, "");
        assert!(started.elapsed() < Duration::from_secs(10));

        let err = client
            .try_scrape("https://blog.example.com/post", "fc-test")
            .await
            .unwrap_err();
        assert!(matches!(err, ScrapeError::Request(ref e) if e.is_timeout()));
    }

    #[test]
    fn test_default_timeout_is_sixty_seconds() {
        let client = FirecrawlClient::new();
        assert_eq!(client.timeout, Duration::from_secs(60));
        assert_eq!(client.timeout, FirecrawlClient::SCRAPE_TIMEOUT);
    }

    async fn try_scrape_with_status(status: usize, body: &str) -> ScrapeError {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("POST", "/v1/scrape")
            .with_status(status)
            .with_body(body)
            .create_async()
            .await;

        FirecrawlClient::new()
            .with_base_url(server.url())
            .try_scrape("https://a.example", "key")
            .await
            .unwrap_err()
    }

    #[tokio::test]
    async fn test_try_scrape_distinguishes_failures() {
        assert!(matches!(
            try_scrape_with_status(401, "").await,
            ScrapeError::Unauthorized
        ));
        assert!(matches!(
            try_scrape_with_status(429, "").await,
            ScrapeError::RateLimited
        ));
        assert!(matches!(
            try_scrape_with_status(200, r#"{"data": {"markdown": ""}}"#).await,
            ScrapeError::NoContent
        ));

        match try_scrape_with_status(502, "bad gateway").await {
            ScrapeError::Api { status, message } => {
                assert_eq!(status, 502);
                assert_eq!(message, "bad gateway");
            }
            other => panic!("Expected Api error, got {other:?}"),
        }
    }
}
