//! Catalog and review handlers.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use serde::Deserialize;

use crate::http::response::{ApiError, ApiResult, ReviewDeleted};
use crate::http::server::AppState;
use crate::store::{Book, Review, StoreError};

#[derive(Debug, Deserialize)]
pub struct ReviewRequest {
    pub username: String,
    pub review: String,
}

#[derive(Debug, Deserialize)]
pub struct DeleteReviewRequest {
    pub username: String,
}

/// Read the leading integer of a path id: `"1abc"` and `"1.5"` both name
/// book 1. No leading digits, or a negative sign, cannot name a book.
fn parse_book_id(raw: &str) -> ApiResult<u32> {
    let raw = raw.trim_start();
    let raw = raw.strip_prefix('+').unwrap_or(raw);
    let end = raw
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(raw.len());

    raw[..end]
        .parse()
        .map_err(|_| ApiError::from(StoreError::BookNotFound))
}

pub async fn list_books(State(state): State<AppState>) -> Json<Vec<Book>> {
    Json(state.store.list_books())
}

pub async fn book_by_isbn(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
) -> ApiResult<Json<Book>> {
    Ok(Json(state.store.book_by_isbn(&isbn)?))
}

pub async fn books_by_author(
    State(state): State<AppState>,
    Path(author): Path<String>,
) -> ApiResult<Json<Vec<Book>>> {
    Ok(Json(state.store.books_by_author(&author)?))
}

pub async fn books_by_title(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> ApiResult<Json<Vec<Book>>> {
    Ok(Json(state.store.books_by_title(&title)?))
}

pub async fn get_reviews(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Vec<Review>>> {
    let book_id = parse_book_id(&id)?;
    Ok(Json(state.store.reviews(book_id)?))
}

/// Add or modify a review. The username in the body is trusted as-is.
pub async fn upsert_review(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<ReviewRequest>, JsonRejection>,
) -> ApiResult<Json<Vec<Review>>> {
    let Json(body) = payload?;
    let book_id = parse_book_id(&id)?;

    let reviews = state
        .store
        .upsert_review(book_id, &body.username, &body.review)?;
    tracing::debug!(book_id, username = %body.username, "Review stored");
    Ok(Json(reviews))
}

pub async fn delete_review(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<DeleteReviewRequest>, JsonRejection>,
) -> ApiResult<Json<ReviewDeleted>> {
    let Json(body) = payload?;
    let book_id = parse_book_id(&id)?;

    let reviews = state.store.delete_review(book_id, &body.username)?;
    tracing::debug!(book_id, username = %body.username, "Review deleted");
    Ok(Json(ReviewDeleted {
        message: "Review deleted successfully",
        reviews,
    }))
}
