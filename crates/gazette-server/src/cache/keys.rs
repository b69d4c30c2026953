//! Cache key generation.

use std::fmt;

use gazette_core::SearchIntent;

/// Key unica para cache de resultados.
///
/// Cada intent tiene su propio namespace: la misma query bajo `title` y
/// `author` produce keys distintas porque el ranking difiere. La query se
/// guarda tal cual (sin normalizar), ya que el proveedor puede distinguir
/// mayusculas.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    intent: SearchIntent,
    query: String,
    /// Solo para `General`; los intents rankeados usan el default del proveedor.
    max: Option<String>,
}

impl CacheKey {
    /// Key para busqueda general, que depende tambien del numero de resultados.
    ///
    /// # Examples
    ///
    /// ```
    /// use gazette_server::cache::CacheKey;
    ///
    /// let key = CacheKey::general("ai", "10");
    /// assert_eq!(key.to_string(), "general:ai:10");
    /// ```
    pub fn general(query: impl Into<String>, max: impl Into<String>) -> Self {
        Self {
            intent: SearchIntent::General,
            query: query.into(),
            max: Some(max.into()),
        }
    }

    /// Key para busqueda por titulo.
    pub fn title(query: impl Into<String>) -> Self {
        Self::ranked(SearchIntent::Title, query)
    }

    /// Key para busqueda por autor (nombre de la fuente).
    pub fn author(query: impl Into<String>) -> Self {
        Self::ranked(SearchIntent::Author, query)
    }

    /// Key para busqueda por keyword.
    pub fn keyword(query: impl Into<String>) -> Self {
        Self::ranked(SearchIntent::Keyword, query)
    }

    /// Construye la key para cualquier intent.
    ///
    /// `max` solo se usa para `General`.
    pub fn for_intent(intent: SearchIntent, query: impl Into<String>, max: &str) -> Self {
        match intent {
            SearchIntent::General => Self::general(query, max),
            ranked => Self::ranked(ranked, query),
        }
    }

    fn ranked(intent: SearchIntent, query: impl Into<String>) -> Self {
        Self {
            intent,
            query: query.into(),
            max: None,
        }
    }

    /// Retorna el intent.
    pub fn intent(&self) -> SearchIntent {
        self.intent
    }

    /// Retorna la query.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Retorna el max (solo general).
    pub fn max(&self) -> Option<&str> {
        self.max.as_deref()
    }
}

// Solo para logs; la igualdad usa los campos, no este string.
impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.intent, self.query)?;
        if let Some(max) = &self.max {
            write!(f, ":{}", max)?;
        }
        Ok(())
    }
}
