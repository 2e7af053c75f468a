//! JSON body extractor that runs `validator` rules.

use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use serde_json::json;
use validator::Validate;

use crate::error::AppError;

/// Deserializes a JSON body and validates it.
///
/// Malformed JSON, a wrong content type and failed validation rules are all
/// reported as [`AppError::Validation`] (400) with the standard error body,
/// instead of axum's plain-text 415/422 rejections.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            AppError::bad_request(
                "Invalid request body",
                json!({ "reason": rejection.body_text() }),
            )
        })?;

        value.validate()?;

        Ok(ValidatedJson(value))
    }
}
