//! API route configuration.

use crate::api::handlers::{
    create_link_handler, delete_link_handler, get_link_handler, health_handler,
    list_links_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// All REST routes, nested under `/api` by [`crate::routes::app_router`].
///
/// # Endpoints
///
/// - `GET    /health`        - Link store health check
/// - `GET    /links`         - List links (optional `?search=`)
/// - `POST   /links`         - Create a short link
/// - `GET    /links/{code}`  - Fetch one link with click statistics
/// - `DELETE /links/{code}`  - Delete a link
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_handler))
        .route("/links", get(list_links_handler).post(create_link_handler))
        .route(
            "/links/{code}",
            get(get_link_handler).delete(delete_link_handler),
        )
}
