use axum::{
    Router, middleware,
    routing::{delete, get},
};
use utoipa::OpenApi;

use super::handlers::{
    delete_session::{__path_delete_session, delete_session},
    get_history::{__path_get_history, get_history},
    get_session::{__path_get_session, get_session},
};
use crate::application::{
    http::server::app_state::AppState, session_middleware::session_middleware,
};

#[derive(OpenApi)]
#[openapi(paths(get_session, delete_session, get_history))]
pub struct SessionApiDoc;

pub fn session_routes(state: AppState) -> Router<AppState> {
    let scoped = Router::new()
        .route(
            &format!("{}/session", state.args.server.root_path),
            get(get_session),
        )
        .route(
            &format!("{}/session/history", state.args.server.root_path),
            get(get_history),
        )
        .layer(middleware::from_fn_with_state(state.clone(), session_middleware));

    // Deleting must not open a session when none is given.
    Router::new()
        .route(
            &format!("{}/session", state.args.server.root_path),
            delete(delete_session),
        )
        .merge(scoped)
}
