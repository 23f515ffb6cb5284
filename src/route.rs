//! Route definitions for the URL shortener API
//!
//! This module maps every HTTP route to its handler and injects the shared
//! store into the router.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handler::{
    create_short_url, delete_short_url, get_random_url, list_urls, redirect_url,
};
use crate::store::AppState;

/// Creates and configures the Axum application router with all routes
///
/// # Route Definitions
///
/// - `GET /` - Returns a random stored URL
/// - `GET /urls` - Lists all stored URLs
/// - `POST /urls` (or `/urls/`) - Creates a short URL from the `url` query param
/// - `DELETE /urls/{id}` - Deletes a URL by id
/// - `GET /{code}` - Redirects to the original URL
///
/// # Example Usage
///
/// ```no_run
/// # use url_shortener::store::{AppState, UrlStore};
/// # use url_shortener::route::create_app;
/// let app = create_app(AppState::new(UrlStore::new()));
/// // axum::serve(listener, app).await.unwrap();
/// ```
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(get_random_url))
        .route("/urls", get(list_urls).post(create_short_url))
        .route("/urls/", post(create_short_url))
        .route("/urls/{id}", delete(delete_short_url))
        .route("/{code}", get(redirect_url))
        .with_state(state)
}
