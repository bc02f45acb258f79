//! Registration and login handlers.
//!
//! No session or token is issued on login; later requests identify the user
//! only by the username they carry.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::http::response::{ApiResult, LoginResponse};
use crate::http::server::AppState;
use crate::observability::metrics;

#[derive(Debug, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<Credentials>, JsonRejection>,
) -> ApiResult<(StatusCode, &'static str)> {
    let Json(creds) = payload?;
    state.store.register(&creds.username, &creds.password)?;

    metrics::record_registration();
    tracing::info!(username = %creds.username, "User registered");
    Ok((StatusCode::CREATED, "User registered successfully"))
}

pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<Credentials>, JsonRejection>,
) -> ApiResult<Json<LoginResponse>> {
    let Json(creds) = payload?;
    let username = state.store.login(&creds.username, &creds.password)?;

    Ok(Json(LoginResponse {
        message: "Login successful",
        username,
    }))
}
