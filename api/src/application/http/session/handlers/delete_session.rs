use axum::{extract::State, http::HeaderMap};
use nutriscan_core::domain::session::ports::SessionService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
    session_middleware::requested_session_id,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DeleteSessionResponse {
    pub message: String,
}

#[utoipa::path(
    delete,
    path = "",
    tag = "session",
    summary = "Delete session",
    description = "Discards the session and everything stored in it. Without a session id nothing is deleted.",
    params(
        ("x-session-id" = Option<String>, Header, description = "Session id"),
    ),
    responses(
        (status = 200, body = DeleteSessionResponse),
        (status = 400, description = "Malformed session id")
    ),
)]
pub async fn delete_session(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response<DeleteSessionResponse>, ApiError> {
    if let Some(id) = requested_session_id(&headers)? {
        state
            .service
            .delete_session(id)
            .await
            .map_err(ApiError::from)?;
    }

    Ok(Response::OK(DeleteSessionResponse {
        message: "Session deleted successfully".to_string(),
    }))
}
