use axum::{
    Router, middleware,
    routing::{get, post},
};
use utoipa::OpenApi;

use super::handlers::{
    analyze_current_product::{__path_analyze_current_product, analyze_current_product},
    get_alternatives::{__path_get_alternatives, get_alternatives},
    get_current_product::{__path_get_current_product, get_current_product},
};
use crate::application::{
    http::server::app_state::AppState, session_middleware::session_middleware,
};

#[derive(OpenApi)]
#[openapi(paths(get_current_product, analyze_current_product, get_alternatives))]
pub struct CurrentProductApiDoc;

pub fn current_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/session/current", state.args.server.root_path),
            get(get_current_product),
        )
        .route(
            &format!("{}/session/current/analysis", state.args.server.root_path),
            post(analyze_current_product),
        )
        .route(
            &format!("{}/session/current/alternatives", state.args.server.root_path),
            get(get_alternatives),
        )
        .layer(middleware::from_fn_with_state(state.clone(), session_middleware))
}
