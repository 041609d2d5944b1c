use axum::Extension;
use nutriscan_core::domain::session::entities::Session;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::api_entities::{api_error::ApiError, response::Response};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetSessionResponse {
    pub data: Session,
}

#[utoipa::path(
    get,
    path = "",
    tag = "session",
    summary = "Get session",
    description = "Returns the whole session: search results, current product, history, comparison selection and chat history. A session is created when the header is missing or unknown.",
    params(
        ("x-session-id" = Option<String>, Header, description = "Session id, created when missing"),
    ),
    responses(
        (status = 200, body = GetSessionResponse),
        (status = 400, description = "Malformed session id")
    ),
)]
pub async fn get_session(
    Extension(session): Extension<Session>,
) -> Result<Response<GetSessionResponse>, ApiError> {
    Ok(Response::OK(GetSessionResponse { data: session }))
}
