use axum::{Router, middleware, routing::get};
use utoipa::OpenApi;

use super::handlers::{
    get_chat_history::{__path_get_chat_history, get_chat_history},
    send_chat_message::{__path_send_chat_message, send_chat_message},
};
use crate::application::{
    http::server::app_state::AppState, session_middleware::session_middleware,
};

#[derive(OpenApi)]
#[openapi(paths(get_chat_history, send_chat_message))]
pub struct ChatApiDoc;

pub fn chat_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/session/chat", state.args.server.root_path),
            get(get_chat_history).post(send_chat_message),
        )
        .layer(middleware::from_fn_with_state(state.clone(), session_middleware))
}
