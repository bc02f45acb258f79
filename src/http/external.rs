//! `/external-books` passthrough handlers.
//!
//! Local stores are never touched here.

use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
};

use crate::http::response::{ApiError, ApiResult};
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::upstream::BooksQuery;

pub async fn all_books(State(state): State<AppState>) -> ApiResult<Response> {
    relay(&state, BooksQuery::All).await
}

pub async fn book_by_isbn(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
) -> ApiResult<Response> {
    relay(&state, BooksQuery::Isbn(isbn)).await
}

pub async fn books_by_author(
    State(state): State<AppState>,
    Path(author): Path<String>,
) -> ApiResult<Response> {
    relay(&state, BooksQuery::Author(author)).await
}

pub async fn books_by_title(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> ApiResult<Response> {
    relay(&state, BooksQuery::Title(title)).await
}

/// Forward one query and relay the body, or collapse any failure.
async fn relay(state: &AppState, query: BooksQuery) -> ApiResult<Response> {
    match state.books_api.fetch(&query).await {
        Ok(body) => Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response()),
        Err(e) => {
            tracing::warn!(operation = query.operation(), error = %e, "Books API call failed");
            metrics::record_upstream_failure(query.operation());
            Err(ApiError::Upstream(query.failure_message()))
        }
    }
}
