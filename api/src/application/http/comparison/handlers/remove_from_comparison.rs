use axum::{
    Extension,
    extract::{Path, State},
};
use nutriscan_core::domain::session::{entities::Session, ports::SessionService};

use super::clear_comparison::ComparisonSelectionResponse;
use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    delete,
    path = "/comparison/{product_id}",
    tag = "comparison",
    summary = "Remove product from comparison",
    params(
        ("x-session-id" = Option<String>, Header, description = "Session id, created when missing"),
        ("product_id" = String, Path, description = "Product code, or catalog id"),
    ),
    responses(
        (status = 200, body = ComparisonSelectionResponse),
        (status = 404, description = "Product not in the comparison")
    ),
)]
pub async fn remove_from_comparison(
    Path(product_id): Path<String>,
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
) -> Result<Response<ComparisonSelectionResponse>, ApiError> {
    let session = state
        .service
        .remove_from_comparison(session, product_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ComparisonSelectionResponse::from(session)))
}
