pub mod artifact_store;
pub mod narrator;
pub mod scraper;
