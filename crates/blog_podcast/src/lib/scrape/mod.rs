pub mod firecrawl;

use std::{future::Future, time::Duration};

use serde_json::Value;

pub trait ContentScraper {
    const SCRAPE_TIMEOUT: Duration = Duration::from_secs(60);

    /// Extracts the readable text of `url`.
    ///
    /// Failure is signalled by an empty string, never by an error: callers must
    /// treat empty text as "nothing usable was scraped".
    fn scrape(&self, url: &str, api_key: &str) -> impl Future<Output = String>;
}

type ContentProbe = fn(&Value) -> Option<&Value>;

/// Known locations of the page text in a scrape response, in priority order.
static CONTENT_PROBES: [(&str, ContentProbe); 4] = [
    ("content", |doc| doc.get("content")),
    ("markdown", |doc| doc.get("markdown")),
    ("data.content", |doc| doc.get("data")?.get("content")),
    ("data.markdown", |doc| doc.get("data")?.get("markdown")),
];

/// Returns the first non-empty value found by [`CONTENT_PROBES`], as text.
///
/// Strings are returned verbatim; any other non-empty JSON value is returned as
/// its JSON text. Documents that are not objects never match.
pub fn extract_content(doc: &Value) -> Option<String> {
    if !doc.is_object() {
        return None;
    }

    CONTENT_PROBES.iter().find_map(|(field, probe)| {
        let text = probe(doc).and_then(non_empty_text)?;
        tracing::debug!(field, "Found scraped content");
        Some(text)
    })
}

fn non_empty_text(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::Array(items) if items.is_empty() => None,
        Value::Object(map) if map.is_empty() => None,
        other => Some(other.to_string()),
    }
}
