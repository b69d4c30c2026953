//! Relevance ranking.
//!
//! The provider only offers free-text search, so field-specific searches
//! (title, author, keyword) are emulated here by reordering the provider's
//! results according to how many query words appear in the target field.

use std::cmp::Reverse;

use crate::article::Article;
use crate::intent::SearchIntent;

pub mod dedupe;
pub use dedupe::dedupe_merge;

/// Splits a query into lowercase words.
///
/// Empty or whitespace-only queries yield no tokens.
pub fn tokenize(query: &str) -> Vec<String> {
    query.split_whitespace().map(str::to_lowercase).collect()
}

/// Counts the tokens that appear anywhere in `value`, ignoring case.
///
/// Each token is counted independently, so a query repeating a word scores
/// it twice. A missing value scores zero.
pub fn score(value: Option<&str>, tokens: &[String]) -> usize {
    let haystack = value.unwrap_or_default().to_lowercase();
    tokens
        .iter()
        .filter(|token| haystack.contains(token.as_str()))
        .count()
}

/// Orders `articles` by descending match score of `field` against `query`.
///
/// The sort is stable: articles with equal scores keep their input order,
/// which makes an empty query return the input unchanged. The input slice
/// is not modified.
///
/// # Examples
///
/// ```
/// use gazette_core::{Article, rank};
///
/// let articles = vec![
///     Article::titled("Go news"),
///     Article::titled("Rust update"),
///     Article::titled("Go and Rust"),
/// ];
///
/// let ranked = rank(&articles, "go rust", "title");
/// let titles: Vec<_> = ranked.iter().map(|a| a.title()).collect();
/// assert_eq!(titles, ["Go and Rust", "Go news", "Rust update"]);
/// ```
pub fn rank(articles: &[Article], query: &str, field: &str) -> Vec<Article> {
    let tokens = tokenize(query);

    let mut scored: Vec<(usize, &Article)> = articles
        .iter()
        .map(|article| (score(article.resolve(field), &tokens), article))
        .collect();

    // slice::sort_by_key is stable
    scored.sort_by_key(|(score, _)| Reverse(*score));

    scored.into_iter().map(|(_, article)| article.clone()).collect()
}

/// Applies the ranking strategy of `intent` to a fetched result set.
///
/// - No ranking fields: upstream order is kept.
/// - One field: a single [`rank`] pass.
/// - Several fields: one pass per field over the same input, combined with
///   [`dedupe_merge`] in field order.
pub fn rank_for_intent(intent: SearchIntent, articles: Vec<Article>, query: &str) -> Vec<Article> {
    match intent.ranking_fields() {
        [] => articles,
        [field] => rank(&articles, query, field),
        fields => dedupe_merge(fields.iter().map(|field| rank(&articles, query, field))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(articles: &[Article]) -> Vec<&str> {
        articles.iter().map(|a| a.title()).collect()
    }

    #[test]
    fn test_tokenize_lowercases_and_splits() {
        assert_eq!(tokenize("Go  RUST\tnews\n"), vec!["go", "rust", "news"]);
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   ").is_empty());
    }

    #[test]
    fn test_score_counts_substring_matches() {
        let tokens = tokenize("go rust");
        assert_eq!(score(Some("Go and Rust"), &tokens), 2);
        assert_eq!(score(Some("Google"), &tokens), 1);
        assert_eq!(score(Some("Python"), &tokens), 0);
        assert_eq!(score(None, &tokens), 0);
    }

    #[test]
    fn test_score_counts_repeated_tokens() {
        let tokens = tokenize("rust rust");
        assert_eq!(score(Some("rust"), &tokens), 2);
    }

    #[test]
    fn test_rank_descending_and_stable() {
        let articles = vec![
            Article::titled("Go news"),
            Article::titled("Rust update"),
            Article::titled("Go and Rust"),
        ];

        let ranked = rank(&articles, "go rust", "title");
        assert_eq!(titles(&ranked), ["Go and Rust", "Go news", "Rust update"]);
    }

    #[test]
    fn test_rank_empty_query_keeps_order() {
        let articles = vec![
            Article::titled("c"),
            Article::titled("a"),
            Article::titled("b"),
        ];

        assert_eq!(titles(&rank(&articles, "", "title")), ["c", "a", "b"]);
        assert_eq!(titles(&rank(&articles, "  ", "title")), ["c", "a", "b"]);
    }

    #[test]
    fn test_rank_nested_field() {
        let articles = vec![
            Article::titled("no source"),
            Article::titled("bbc").with_source_name("BBC"),
            Article::titled("cnn").with_source_name("CNN"),
        ];

        let ranked = rank(&articles, "bbc", "source.name");
        assert_eq!(titles(&ranked), ["bbc", "no source", "cnn"]);
    }

    #[test]
    fn test_rank_does_not_modify_input() {
        let articles = vec![Article::titled("x"), Article::titled("rust")];
        let before = articles.clone();

        let ranked = rank(&articles, "rust", "title");

        assert_eq!(articles, before);
        assert_eq!(titles(&ranked), ["rust", "x"]);
    }

    #[test]
    fn test_rank_empty_input() {
        assert!(rank(&[], "rust", "title").is_empty());
    }

    #[test]
    fn test_rank_for_general_keeps_upstream_order() {
        let articles = vec![Article::titled("b rust"), Article::titled("a")];
        let ranked = rank_for_intent(SearchIntent::General, articles, "a");
        assert_eq!(titles(&ranked), ["b rust", "a"]);
    }

    #[test]
    fn test_rank_for_author_uses_source_name() {
        let articles = vec![
            Article::titled("reuters in title").with_source_name("AP"),
            Article::titled("plain").with_source_name("Reuters"),
        ];

        let ranked = rank_for_intent(SearchIntent::Author, articles, "reuters");
        assert_eq!(titles(&ranked), ["plain", "reuters in title"]);
    }

    #[test]
    fn test_rank_for_keyword_merges_passes() {
        let articles = vec![
            Article::titled("one").with_content("rust inside"),
            Article::titled("two").with_description("about rust"),
            Article::titled("three rust"),
            Article::titled("four"),
        ];

        let ranked = rank_for_intent(SearchIntent::Keyword, articles, "rust");

        // The title pass already lists every article, later passes add nothing.
        assert_eq!(titles(&ranked), ["three rust", "one", "two", "four"]);
    }
}
