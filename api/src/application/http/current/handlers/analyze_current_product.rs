use axum::{Extension, extract::State};
use nutriscan_core::domain::session::{entities::Session, ports::SessionService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ProductAnalysisResponse {
    pub product_id: Option<String>,
    pub analysis: String,
}

#[utoipa::path(
    post,
    path = "/current/analysis",
    tag = "current",
    summary = "Analyze current product",
    description = "Asks the language model for a short nutritional assessment of the current product.",
    params(
        ("x-session-id" = Option<String>, Header, description = "Session id, created when missing"),
    ),
    responses(
        (status = 200, body = ProductAnalysisResponse),
        (status = 409, description = "No product selected"),
        (status = 502, description = "Completion service failure")
    ),
)]
pub async fn analyze_current_product(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
) -> Result<Response<ProductAnalysisResponse>, ApiError> {
    let product_id = session
        .current_product
        .as_ref()
        .and_then(|product| product.identity())
        .map(str::to_string);

    let analysis = state
        .service
        .analyze_current_product(session)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ProductAnalysisResponse {
        product_id,
        analysis,
    }))
}
