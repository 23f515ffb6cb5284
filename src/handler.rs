//! HTTP request handlers for the URL shortener API
//!
//! Every handler is a thin pass-through to [`UrlStore`](crate::store::UrlStore):
//! - Returning a random stored URL
//! - Listing all URLs
//! - Creating short URLs
//! - Redirecting short codes to their destinations
//! - Deleting URLs by id

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};
use serde_json::json;

use crate::error::StoreError;
use crate::model::{CreateParams, Lookup, UrlRecord};
use crate::store::AppState;

/// Returns a randomly chosen URL record
///
/// # Response
///
/// - **200 OK** - A record picked uniformly among the stored ones
/// - **404 Not Found** - The store is empty
pub async fn get_random_url(
    State(state): State<AppState>,
) -> Result<Json<UrlRecord>, StoreError> {
    let id = state.store.get_random().await?;

    // The record can vanish between the two calls if a delete sneaks in
    let record = state
        .store
        .get(&Lookup::by_id(id))
        .await
        .ok_or(StoreError::NotFound(id))?;

    tracing::debug!(id, "picked random url");
    Ok(Json(record))
}

/// Lists every stored URL in creation order
///
/// # Example Response
///
/// ```json
/// [
///   { "id": 1, "full_url": "https://example.com", "short_url_code": "aZ3kP9qX" }
/// ]
/// ```
pub async fn list_urls(State(state): State<AppState>) -> Json<Vec<UrlRecord>> {
    let records: Vec<UrlRecord> = state.store.enumerate().await.collect();

    tracing::debug!(count = records.len(), "listing urls");
    Json(records)
}

/// Creates a new short URL
///
/// # Example Request
///
/// `POST /urls?url=https://example.com/very/long/url`
///
/// # Response
///
/// - **201 Created** - The stored record with its id and short code
pub async fn create_short_url(
    State(state): State<AppState>,
    Query(params): Query<CreateParams>,
) -> impl IntoResponse {
    let record = state.store.create(params.url).await;

    tracing::info!(
        id = record.id(),
        code = record.short_url_code(),
        "created short url"
    );
    (StatusCode::CREATED, Json(record))
}

/// Redirects a short code to its original destination
///
/// # Response
///
/// - **307 Temporary Redirect** - Redirects to the stored `full_url`
/// - **404 Not Found** - No record carries this code
pub async fn redirect_url(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> impl IntoResponse {
    match state.store.get(&Lookup::by_code(code.as_str())).await {
        Some(record) => {
            tracing::debug!(%code, full_url = record.full_url(), "redirecting");
            Redirect::temporary(record.full_url()).into_response()
        }
        None => {
            tracing::debug!(%code, "unknown short code");
            (
                StatusCode::NOT_FOUND,
                Json(json!({
                    "error": "No url found",
                    "code": "not_found"
                })),
            )
                .into_response()
        }
    }
}

/// Deletes a URL by id
///
/// # Response
///
/// - **200 OK** - `{"msg": "URL deleted"}`
/// - **404 Not Found** - No record with this id
pub async fn delete_short_url(
    Path(id): Path<u64>,
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, StoreError> {
    state.store.delete(id).await.inspect_err(|err| {
        tracing::debug!(id, %err, "delete rejected");
    })?;

    tracing::info!(id, "deleted short url");
    Ok(Json(json!({ "msg": "URL deleted" })))
}
