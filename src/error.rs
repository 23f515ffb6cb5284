//! Error types returned by the URL store
//!
//! The store only reports these conditions; translating them into HTTP
//! responses happens here so handlers can bubble them up with `?`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No record carries the requested identifier
    #[error("URL doesn't exist")]
    NotFound(u64),

    /// Random selection was asked for while the store holds no records
    #[error("URL list is empty")]
    EmptyCollection,
}

pub type Result<T> = std::result::Result<T, StoreError>;

impl StoreError {
    pub fn code(&self) -> &'static str {
        match self {
            StoreError::NotFound(_) => "not_found",
            StoreError::EmptyCollection => "empty_collection",
        }
    }
}

impl IntoResponse for StoreError {
    fn into_response(self) -> Response {
        // Both conditions surface to clients as a plain 404
        (
            StatusCode::NOT_FOUND,
            Json(json!({
                "error": self.to_string(),
                "code": self.code()
            })),
        )
            .into_response()
    }
}
