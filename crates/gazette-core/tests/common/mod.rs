#![allow(dead_code)]
use gazette_core::Article;

/// Helper to parse a list of articles from a JSON string slice.
/// Panics if the JSON is invalid (intended for tests).
pub fn articles_from_json(json: &str) -> Vec<Article> {
    serde_json::from_str(json).expect("Failed to parse test articles from JSON")
}

/// Returns the titles of the given articles, in order.
pub fn titles(articles: &[Article]) -> Vec<&str> {
    articles.iter().map(|a| a.title()).collect()
}

/// A provider-shaped result set used across ranking scenarios.
pub fn tech_feed() -> Vec<Article> {
    articles_from_json(
        r#"[
        {
            "title": "Markets rally on chip demand",
            "description": "Semiconductor stocks climb as Rust adoption grows in embedded",
            "content": "Investors cheered...",
            "source": { "name": "Financial Wire" }
        },
        {
            "title": "Rust 2024 edition lands",
            "description": "The new edition stabilises let chains",
            "content": "Rust developers can now...",
            "source": { "name": "Rust Blog" }
        },
        {
            "title": "Go 1.23 ships iterators",
            "description": "Range-over-func is here",
            "content": "Go and Rust both...",
            "source": { "name": "Go Blog" }
        },
        {
            "title": "Weather: storms ahead",
            "description": "Heavy rain expected",
            "content": "Meteorologists warn..."
        }
    ]"#,
    )
}
