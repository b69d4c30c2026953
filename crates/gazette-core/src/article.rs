//! Article model as returned by the news provider.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Well-known field paths used for ranking.
pub mod fields {
    pub const TITLE: &str = "title";
    pub const DESCRIPTION: &str = "description";
    pub const CONTENT: &str = "content";
    pub const SOURCE: &str = "source";
    pub const SOURCE_NAME: &str = "source.name";
}

/// A news article.
///
/// The provider record is kept verbatim: every key, including explicit
/// `null`s and values of unexpected types, is serialized back exactly as it
/// was received. Fields are read through [`Article::resolve`], which treats
/// anything that is not a string as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Article {
    fields: Map<String, Value>,
}

impl Article {
    /// Creates an article with only a title set.
    pub fn titled(title: impl Into<String>) -> Self {
        Self::default().with_field(fields::TITLE, title.into())
    }

    /// Returns this article with `key` set to `value`.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Returns this article with the given description.
    pub fn with_description(self, description: impl Into<String>) -> Self {
        self.with_field(fields::DESCRIPTION, description.into())
    }

    /// Returns this article with the given content.
    pub fn with_content(self, content: impl Into<String>) -> Self {
        self.with_field(fields::CONTENT, content.into())
    }

    /// Returns this article with the given source name.
    ///
    /// Other keys of an existing `source` object are kept; a `source` that
    /// is not an object is replaced.
    pub fn with_source_name(mut self, name: impl Into<String>) -> Self {
        let source = self
            .fields
            .entry(fields::SOURCE)
            .or_insert_with(|| Value::Object(Map::new()));
        if !source.is_object() {
            *source = Value::Object(Map::new());
        }
        if let Value::Object(map) = source {
            map.insert("name".to_string(), Value::String(name.into()));
        }
        self
    }

    /// Headline, or `""` when missing, `null` or not a string.
    pub fn title(&self) -> &str {
        self.resolve(fields::TITLE).unwrap_or_default()
    }

    /// Raw value of a top-level key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// The whole provider record.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Resolves a dot-separated field path to a string value.
    ///
    /// Paths use the wire names (`"title"`, `"publishedAt"`, `"source.name"`).
    /// Returns `None` when any segment is missing or not an object, or the
    /// final value is not a string.
    ///
    /// # Examples
    ///
    /// ```
    /// use gazette_core::Article;
    ///
    /// let article = Article::titled("Rust 2024").with_source_name("BBC");
    /// assert_eq!(article.resolve("title"), Some("Rust 2024"));
    /// assert_eq!(article.resolve("source.name"), Some("BBC"));
    /// assert_eq!(article.resolve("source.country"), None);
    /// assert_eq!(article.resolve("author"), None);
    /// ```
    pub fn resolve(&self, path: &str) -> Option<&str> {
        let (head, rest) = match path.split_once('.') {
            Some((head, rest)) => (head, Some(rest)),
            None => (path, None),
        };

        let value = self.fields.get(head)?;
        match rest {
            None => value.as_str(),
            Some(rest) => rest
                .split('.')
                .try_fold(value, |current, segment| current.get(segment))?
                .as_str(),
        }
    }
}

impl From<Map<String, Value>> for Article {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}
