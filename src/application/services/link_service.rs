//! Link creation, lookup, listing and deletion.

use std::sync::Arc;

use serde_json::json;
use tracing::{debug, info, warn};

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::{generate_code, validate_custom_code};
use crate::utils::url_validator::validate_target_url;

/// Maximum number of random codes tried before giving up.
pub const MAX_GENERATION_ATTEMPTS: usize = 5;

/// Service for creating and managing short links.
///
/// All validation happens here, before the repository is touched.
pub struct LinkService<L: LinkRepository + ?Sized> {
    link_repository: Arc<L>,
}

impl<L: LinkRepository + ?Sized> LinkService<L> {
    /// Creates a new link service.
    pub fn new(link_repository: Arc<L>) -> Self {
        Self { link_repository }
    }

    /// Creates a short link.
    ///
    /// # Code Allocation
    ///
    /// - If `custom_code` is provided it must match `^[A-Za-z0-9]{6,8}$` and
    ///   must not exist yet. An existing code is reported as a conflict; no
    ///   alternative is substituted.
    /// - Otherwise a random 6-character code is generated. A code that is
    ///   already taken, either at the existence check or at insert time, costs
    ///   one of [`MAX_GENERATION_ATTEMPTS`] attempts.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL or the custom code is invalid.
    /// Returns [`AppError::Conflict`] if the custom code already exists.
    /// Returns [`AppError::Exhausted`] if no free code was found.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn create_link(
        &self,
        target_url: String,
        custom_code: Option<String>,
    ) -> Result<Link, AppError> {
        validate_target_url(&target_url).map_err(|e| {
            AppError::bad_request("Invalid URL format", json!({ "reason": e.to_string() }))
        })?;

        let link = match custom_code {
            Some(code) => self.create_with_custom_code(code, target_url).await?,
            None => self.create_with_generated_code(target_url).await?,
        };

        info!(code = %link.code, target_url = %link.target_url, "Link created");
        Ok(link)
    }

    async fn create_with_custom_code(
        &self,
        code: String,
        target_url: String,
    ) -> Result<Link, AppError> {
        validate_custom_code(&code)?;

        if self.link_repository.find_by_code(&code).await?.is_some() {
            debug!(code = %code, "Custom code already taken");
            return Err(code_taken(&code));
        }

        // A concurrent create may still win between the check and the insert;
        // the store's unique constraint reports it as a conflict.
        self.link_repository
            .create(NewLink { code: code.clone(), target_url })
            .await
            .map_err(|e| match e {
                AppError::Conflict { .. } => code_taken(&code),
                other => other,
            })
    }

    async fn create_with_generated_code(&self, target_url: String) -> Result<Link, AppError> {
        for attempt in 1..=MAX_GENERATION_ATTEMPTS {
            let code = generate_code();

            if self.link_repository.find_by_code(&code).await?.is_some() {
                debug!(code = %code, attempt, "Generated code collided");
                continue;
            }

            let new_link = NewLink {
                code: code.clone(),
                target_url: target_url.clone(),
            };

            match self.link_repository.create(new_link).await {
                Ok(link) => return Ok(link),
                Err(AppError::Conflict { .. }) => {
                    debug!(code = %code, attempt, "Generated code taken concurrently");
                }
                Err(e) => return Err(e),
            }
        }

        warn!(
            attempts = MAX_GENERATION_ATTEMPTS,
            "Failed to generate a unique short code"
        );
        Err(AppError::exhausted(
            "Failed to generate unique code",
            json!({ "attempts": MAX_GENERATION_ATTEMPTS }),
        ))
    }

    /// Retrieves a link by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this code.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn get_link(&self, code: &str) -> Result<Link, AppError> {
        self.link_repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| link_not_found(code))
    }

    /// Lists links newest first, optionally filtered by a case-insensitive
    /// substring of the code or target URL.
    ///
    /// A blank search term lists everything.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn list_links(&self, search: Option<&str>) -> Result<Vec<Link>, AppError> {
        match search.map(str::trim).filter(|term| !term.is_empty()) {
            Some(term) => self.link_repository.search(term).await,
            None => self.link_repository.list_all().await,
        }
    }

    /// Permanently deletes a link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this code.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn delete_link(&self, code: &str) -> Result<(), AppError> {
        if !self.link_repository.delete(code).await? {
            return Err(link_not_found(code));
        }

        info!(code = %code, "Link deleted");
        Ok(())
    }

    /// Checks that the link store is reachable.
    pub async fn check_store(&self) -> Result<(), AppError> {
        self.link_repository.ping().await
    }
}

pub(crate) fn link_not_found(code: &str) -> AppError {
    AppError::not_found("Link not found", json!({ "code": code }))
}

fn code_taken(code: &str) -> AppError {
    AppError::conflict(
        "Code already exists. Please try a different code.",
        json!({ "code": code }),
    )
}
