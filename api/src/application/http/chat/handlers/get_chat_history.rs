use axum::Extension;
use nutriscan_core::domain::{narrative::entities::ChatMessage, session::entities::Session};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::api_entities::{api_error::ApiError, response::Response};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ChatHistoryResponse {
    pub data: Vec<ChatMessage>,
}

#[utoipa::path(
    get,
    path = "/chat",
    tag = "chat",
    summary = "Get chat history",
    description = "Returns the chatbot exchanges of the session, oldest first.",
    params(
        ("x-session-id" = Option<String>, Header, description = "Session id, created when missing"),
    ),
    responses(
        (status = 200, body = ChatHistoryResponse)
    ),
)]
pub async fn get_chat_history(
    Extension(session): Extension<Session>,
) -> Result<Response<ChatHistoryResponse>, ApiError> {
    Ok(Response::OK(ChatHistoryResponse {
        data: session.chat_history,
    }))
}
