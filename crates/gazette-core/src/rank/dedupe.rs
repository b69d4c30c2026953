use std::collections::HashSet;

use serde_json::Value;

use crate::article::{Article, fields};

/// Concatenates ranking passes and drops repeated titles.
///
/// Passes are consumed in the order given, so earlier passes take priority:
/// the first article seen with a given title is kept and every later article
/// with exactly the same title is dropped, whatever its other fields hold.
/// Titles compare by their raw JSON value, so all articles without a title
/// collapse into one, as do all articles with a `null` title.
/// The surviving articles keep their concatenation order.
///
/// # Examples
///
/// ```
/// use gazette_core::{Article, dedupe_merge};
///
/// let passes = vec![
///     vec![Article::titled("A"), Article::titled("B")],
///     vec![Article::titled("B"), Article::titled("C")],
///     vec![Article::titled("A"), Article::titled("D")],
/// ];
///
/// let merged = dedupe_merge(passes);
/// let titles: Vec<_> = merged.iter().map(|a| a.title()).collect();
/// assert_eq!(titles, ["A", "B", "C", "D"]);
/// ```
pub fn dedupe_merge<I>(passes: I) -> Vec<Article>
where
    I: IntoIterator<Item = Vec<Article>>,
{
    let mut seen: HashSet<Option<String>> = HashSet::new();
    let mut merged = Vec::new();

    for article in passes.into_iter().flatten() {
        let key = article.get(fields::TITLE).map(Value::to_string);
        if seen.insert(key) {
            merged.push(article);
        }
    }

    merged
}
