use axum::{Router, middleware, routing::post};
use utoipa::OpenApi;

use super::handlers::{
    search_products::{__path_search_products, search_products},
    select_product::{__path_select_product, select_product},
};
use crate::application::{
    http::server::app_state::AppState, session_middleware::session_middleware,
};

#[derive(OpenApi)]
#[openapi(paths(search_products, select_product))]
pub struct SearchApiDoc;

pub fn search_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/session/search", state.args.server.root_path),
            post(search_products),
        )
        .route(
            &format!("{}/session/selection", state.args.server.root_path),
            post(select_product),
        )
        .layer(middleware::from_fn_with_state(state.clone(), session_middleware))
}
