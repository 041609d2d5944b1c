use axum::{extract::FromRequestParts, http::request::Parts};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::application::http::server::api_entities::api_error::ApiError;

/// Query string extractor that also runs `validator` rules.
///
/// Usage:
/// ```rust,ignore
/// async fn handler(
///     ValidateQuery(query): ValidateQuery<AlternativesQuery>,
/// ) -> Result<Response<AlternativesReport>, ApiError> {
///     // query.max_results is within bounds here
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ValidateQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidateQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let query_string = parts.uri.query().unwrap_or("");
        let value: T = serde_urlencoded::from_str(query_string)
            .map_err(|e| ApiError::BadRequest(format!("Invalid query string: {}", e)))?;

        value
            .validate()
            .map_err(|e| ApiError::BadRequest(e.to_string()))?;

        Ok(ValidateQuery(value))
    }
}
