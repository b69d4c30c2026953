use serde::Deserialize;

/// Parametros de `GET /articles`.
///
/// Ambos son opcionales: una query ausente se trata como vacia y `max` se
/// reenvia al proveedor sin validar.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArticlesQuery {
    #[serde(default)]
    pub query: String,
    pub max: Option<String>,
}

/// Parametro `q` de los endpoints rankeados.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FieldQuery {
    #[serde(default)]
    pub q: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::Query;
    use axum::http::Uri;

    #[test]
    fn test_articles_query_full() {
        let uri: Uri = "/articles?query=ai&max=5".parse().unwrap();
        let Query(params) = Query::<ArticlesQuery>::try_from_uri(&uri).unwrap();

        assert_eq!(params.query, "ai");
        assert_eq!(params.max.as_deref(), Some("5"));
    }

    #[test]
    fn test_articles_query_defaults() {
        let uri: Uri = "/articles".parse().unwrap();
        let Query(params) = Query::<ArticlesQuery>::try_from_uri(&uri).unwrap();

        assert_eq!(params.query, "");
        assert_eq!(params.max, None);
    }

    #[test]
    fn test_max_is_not_interpreted() {
        let uri: Uri = "/articles?query=ai&max=-3".parse().unwrap();
        let Query(params) = Query::<ArticlesQuery>::try_from_uri(&uri).unwrap();

        assert_eq!(params.max.as_deref(), Some("-3"));
    }

    #[test]
    fn test_field_query_decodes_spaces() {
        let uri: Uri = "/articles/title?q=go%20rust".parse().unwrap();
        let Query(params) = Query::<FieldQuery>::try_from_uri(&uri).unwrap();

        assert_eq!(params.q, "go rust");
    }

    #[test]
    fn test_field_query_missing_is_empty() {
        let uri: Uri = "/articles/title".parse().unwrap();
        let Query(params) = Query::<FieldQuery>::try_from_uri(&uri).unwrap();

        assert_eq!(params.q, "");
    }
}
