//! Short code resolution with click counting.

use std::sync::Arc;

use axum::http::HeaderValue;
use serde_json::json;
use tracing::{debug, error};

use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Terminal state of resolving a short code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The code exists and its click was recorded.
    Redirect { target_url: String },
    /// No link has this code.
    NotFound,
}

/// Resolves short codes to target URLs and records clicks.
pub struct RedirectService<L: LinkRepository + ?Sized> {
    link_repository: Arc<L>,
}

impl<L: LinkRepository + ?Sized> RedirectService<L> {
    pub fn new(link_repository: Arc<L>) -> Self {
        Self { link_repository }
    }

    /// Looks up `code`, records one click, and returns where to redirect.
    ///
    /// The order is lookup, then increment, then respond with the target URL
    /// read at lookup time. A link deleted between the two steps resolves to
    /// [`Resolution::NotFound`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if either store call fails. The click is
    /// counted before any redirect is issued, so a failed increment means no
    /// redirect. A stored target that cannot be sent as a `Location` header is
    /// also [`AppError::Internal`], and no click is counted for it.
    pub async fn resolve(&self, code: &str) -> Result<Resolution, AppError> {
        let Some(link) = self.link_repository.find_by_code(code).await? else {
            debug!(code = %code, "Short code not found");
            return Ok(Resolution::NotFound);
        };

        if HeaderValue::from_str(&link.target_url).is_err() {
            error!(code = %code, "Stored target URL is not a valid Location header");
            return Err(AppError::internal(
                "Target URL cannot be redirected to",
                json!({ "code": code }),
            ));
        }

        match self.link_repository.increment_clicks(code).await {
            Ok(Some(updated)) => {
                debug!(code = %code, total_clicks = updated.total_clicks, "Click recorded");
                Ok(Resolution::Redirect {
                    target_url: link.target_url,
                })
            }
            Ok(None) => {
                debug!(code = %code, "Link removed before click was recorded");
                Ok(Resolution::NotFound)
            }
            Err(e) => {
                error!(code = %code, error = %e, "Failed to record click");
                Err(e)
            }
        }
    }
}
