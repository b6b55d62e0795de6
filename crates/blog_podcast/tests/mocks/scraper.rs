use std::sync::{Arc, Mutex};

use blog_podcast::ContentScraper;

#[derive(Clone)]
pub struct MockScraper {
    pub content: String,
    pub calls: Arc<Mutex<Vec<(String, String)>>>,
}

impl MockScraper {
    pub fn new(content: &str) -> Self {
        Self {
            content: content.to_string(),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Mirrors a scrape API failure: empty text
    pub fn failing() -> Self {
        Self::new("")
    }
}

impl ContentScraper for MockScraper {
    async fn scrape(&self, url: &str, api_key: &str) -> String {
        self.calls
            .lock()
            .unwrap()
            .push((url.to_string(), api_key.to_string()));
        self.content.clone()
    }
}
