//! Article search handlers.

use axum::extract::{Query, State};
use tracing::{info, instrument};

use crate::error::AppError;
use crate::extractors::{ArticlesQuery, FieldQuery};
use crate::handlers::response::ArticlesResponse;
use crate::state::AppState;

/// GET /articles?query=..&max=..
///
/// Resultados del proveedor en su orden original.
#[instrument(skip_all, fields(query = %params.query, max = ?params.max))]
pub async fn get_articles(
    State(state): State<AppState>,
    Query(params): Query<ArticlesQuery>,
) -> Result<ArticlesResponse, AppError> {
    let lookup = state
        .service()
        .general(&params.query, params.max.as_deref())
        .await?;

    info!(count = lookup.articles.len(), cache = lookup.cache.as_str(), "Articles found");
    Ok(lookup.into())
}

/// GET /articles/title?q=..
#[instrument(skip_all, fields(q = %params.q))]
pub async fn get_by_title(
    State(state): State<AppState>,
    Query(params): Query<FieldQuery>,
) -> Result<ArticlesResponse, AppError> {
    let lookup = state.service().by_title(&params.q).await?;

    info!(count = lookup.articles.len(), cache = lookup.cache.as_str(), "Articles ranked by title");
    Ok(lookup.into())
}

/// GET /articles/author?q=..
///
/// Rankea por `source.name`; el proveedor no expone autores.
#[instrument(skip_all, fields(q = %params.q))]
pub async fn get_by_author(
    State(state): State<AppState>,
    Query(params): Query<FieldQuery>,
) -> Result<ArticlesResponse, AppError> {
    let lookup = state.service().by_author(&params.q).await?;

    info!(count = lookup.articles.len(), cache = lookup.cache.as_str(), "Articles ranked by source");
    Ok(lookup.into())
}

/// GET /articles/keyword?q=..
#[instrument(skip_all, fields(q = %params.q))]
pub async fn get_by_keyword(
    State(state): State<AppState>,
    Query(params): Query<FieldQuery>,
) -> Result<ArticlesResponse, AppError> {
    let lookup = state.service().by_keyword(&params.q).await?;

    info!(count = lookup.articles.len(), cache = lookup.cache.as_str(), "Articles ranked by keyword");
    Ok(lookup.into())
}
