use axum::{Extension, extract::State};
use nutriscan_core::domain::session::{
    entities::Session, ports::SessionService, value_objects::ProductDetails,
};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/current",
    tag = "current",
    summary = "Get current product",
    description = "Returns the current product with its macronutrient and key nutrient datasets.",
    params(
        ("x-session-id" = Option<String>, Header, description = "Session id, created when missing"),
    ),
    responses(
        (status = 200, body = ProductDetails),
        (status = 409, description = "No product selected")
    ),
)]
pub async fn get_current_product(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
) -> Result<Response<ProductDetails>, ApiError> {
    let details = state
        .service
        .current_product(session)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(details))
}
