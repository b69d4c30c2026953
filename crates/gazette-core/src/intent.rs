//! Query intents.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::article::fields;

/// What a client is searching for.
///
/// The intent picks both the cache namespace and the fields the ranker
/// scores against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchIntent {
    /// Free-text search, upstream order preserved.
    General,
    /// Ranked by headline.
    Title,
    /// Ranked by publisher name.
    Author,
    /// Ranked by headline, then description, then body, merged by title.
    Keyword,
}

impl SearchIntent {
    /// All intents, in routing order.
    pub const ALL: [SearchIntent; 4] = [Self::General, Self::Title, Self::Author, Self::Keyword];

    /// Returns the lowercase name used in cache keys, logs and metrics.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Title => "title",
            Self::Author => "author",
            Self::Keyword => "keyword",
        }
    }

    /// Field paths ranked for this intent, in merge priority order.
    ///
    /// # Examples
    ///
    /// ```
    /// use gazette_core::SearchIntent;
    ///
    /// assert!(SearchIntent::General.ranking_fields().is_empty());
    /// assert_eq!(SearchIntent::Author.ranking_fields(), &["source.name"]);
    /// assert_eq!(SearchIntent::Keyword.ranking_fields().len(), 3);
    /// ```
    pub fn ranking_fields(&self) -> &'static [&'static str] {
        match self {
            Self::General => &[],
            Self::Title => &[fields::TITLE],
            Self::Author => &[fields::SOURCE_NAME],
            Self::Keyword => &[fields::TITLE, fields::DESCRIPTION, fields::CONTENT],
        }
    }
}

impl fmt::Display for SearchIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
