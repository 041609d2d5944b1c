use axum::{
    extract::{Request, State},
    http::{HeaderMap, HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use nutriscan_core::domain::session::ports::SessionService;
use uuid::Uuid;

use crate::application::http::server::{api_entities::api_error::ApiError, app_state::AppState};

pub const SESSION_HEADER: HeaderName = HeaderName::from_static("x-session-id");

/// Parses the `x-session-id` header, `None` when absent.
pub fn requested_session_id(headers: &HeaderMap) -> Result<Option<Uuid>, ApiError> {
    headers
        .get(&SESSION_HEADER)
        .map(|value| {
            value
                .to_str()
                .ok()
                .and_then(|id| Uuid::parse_str(id.trim()).ok())
                .ok_or_else(|| ApiError::BadRequest("Invalid x-session-id header".to_string()))
        })
        .transpose()
}

/// Loads the caller's session into request extensions and echoes its id.
///
/// A missing or unknown `x-session-id` starts a fresh session; a malformed one is rejected.
pub async fn session_middleware(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let requested = requested_session_id(req.headers())?;

    let session = state
        .service
        .get_or_create_session(requested)
        .await
        .map_err(ApiError::from)?;
    let session_id = session.id;

    req.extensions_mut().insert(session);
    let mut response = next.run(req).await;

    if let Ok(value) = HeaderValue::from_str(&session_id.to_string()) {
        response.headers_mut().insert(SESSION_HEADER, value);
    }

    Ok(response)
}
