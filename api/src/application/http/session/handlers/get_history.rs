use axum::Extension;
use nutriscan_core::domain::session::entities::Session;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::api_entities::{api_error::ApiError, response::Response};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetHistoryResponse {
    /// Identities of visited products, oldest first
    pub data: Vec<String>,
}

#[utoipa::path(
    get,
    path = "/history",
    tag = "session",
    summary = "Get visited products",
    params(
        ("x-session-id" = Option<String>, Header, description = "Session id, created when missing"),
    ),
    responses(
        (status = 200, body = GetHistoryResponse)
    ),
)]
pub async fn get_history(
    Extension(session): Extension<Session>,
) -> Result<Response<GetHistoryResponse>, ApiError> {
    Ok(Response::OK(GetHistoryResponse {
        data: session.history,
    }))
}
