use axum::{
    Router, middleware,
    routing::{delete, get},
};
use utoipa::OpenApi;

use super::handlers::{
    clear_comparison::{__path_clear_comparison, clear_comparison},
    get_comparison::{__path_get_comparison, get_comparison},
    remove_from_comparison::{__path_remove_from_comparison, remove_from_comparison},
};
use crate::application::{
    http::server::app_state::AppState, session_middleware::session_middleware,
};

#[derive(OpenApi)]
#[openapi(paths(get_comparison, clear_comparison, remove_from_comparison))]
pub struct ComparisonApiDoc;

pub fn comparison_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/session/comparison", state.args.server.root_path),
            get(get_comparison).delete(clear_comparison),
        )
        .route(
            &format!(
                "{}/session/comparison/{{product_id}}",
                state.args.server.root_path
            ),
            delete(remove_from_comparison),
        )
        .layer(middleware::from_fn_with_state(state.clone(), session_middleware))
}
