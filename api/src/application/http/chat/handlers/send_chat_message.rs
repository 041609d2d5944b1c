use axum::{Extension, extract::State};
use nutriscan_core::domain::{
    narrative::entities::ChatMessage,
    session::{entities::Session, ports::SessionService},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    chat::validators::ChatMessageValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SendChatMessageResponse {
    pub data: ChatMessage,
}

#[utoipa::path(
    post,
    path = "/chat",
    tag = "chat",
    summary = "Ask the nutrition chatbot",
    description = "Sends a question along with the session's chat history. The exchange is recorded only when the model answers.",
    params(
        ("x-session-id" = Option<String>, Header, description = "Session id, created when missing"),
    ),
    request_body = ChatMessageValidator,
    responses(
        (status = 201, body = SendChatMessageResponse),
        (status = 400, description = "Empty or oversized message"),
        (status = 502, description = "Completion service failure")
    ),
)]
pub async fn send_chat_message(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    ValidateJson(payload): ValidateJson<ChatMessageValidator>,
) -> Result<Response<SendChatMessageResponse>, ApiError> {
    let (_, reply) = state
        .service
        .chat(session, payload.message)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(SendChatMessageResponse { data: reply }))
}
