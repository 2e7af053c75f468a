//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::Redirect,
};

use crate::application::services::Resolution;
use crate::application::services::link_service::link_not_found;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its target URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Look up the code
/// 2. Record the click (counter + last-click time, one atomic update)
/// 3. Return 307 Temporary Redirect to the URL read in step 1
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
/// Returns 500 if the click cannot be recorded; no redirect is issued then.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    match state.redirect_service.resolve(&code).await? {
        Resolution::Redirect { target_url } => Ok(Redirect::temporary(&target_url)),
        Resolution::NotFound => Err(link_not_found(&code)),
    }
}
