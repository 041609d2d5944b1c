use axum::{Extension, extract::State};
use nutriscan_core::domain::session::{
    entities::Session, ports::SessionService, value_objects::ProductDetails,
};

use crate::application::http::{
    search::validators::SelectProductValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/selection",
    tag = "search",
    summary = "Select a product",
    description = "Makes a product current. A product from the last search results is also recorded in the history and added to the comparison. Any other product, such as an alternative, is looked up by barcode and only shown.",
    params(
        ("x-session-id" = Option<String>, Header, description = "Session id, created when missing"),
    ),
    request_body = SelectProductValidator,
    responses(
        (status = 200, body = ProductDetails),
        (status = 404, description = "Product neither in the search results nor in the catalog")
    ),
)]
pub async fn select_product(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    ValidateJson(payload): ValidateJson<SelectProductValidator>,
) -> Result<Response<ProductDetails>, ApiError> {
    let session = state
        .service
        .select_product(session, payload.product_id.trim().to_string())
        .await
        .map_err(ApiError::from)?;

    let details = state
        .service
        .current_product(session)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(details))
}
