use axum::extract::{Path, State};
use nutriscan_core::domain::{
    product::{helpers::is_barcode, ports::ProductService},
    session::value_objects::ProductDetails,
};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/{barcode}",
    tag = "product",
    summary = "Get product by barcode",
    description = "Looks a product up in the catalog by barcode, without touching any session.",
    params(
        ("barcode" = String, Path, description = "EAN/UPC barcode, 8 to 13 digits"),
    ),
    responses(
        (status = 200, body = ProductDetails),
        (status = 400, description = "Not a barcode"),
        (status = 404, description = "Unknown product")
    ),
)]
pub async fn get_product(
    Path(barcode): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<ProductDetails>, ApiError> {
    if !is_barcode(&barcode) {
        return Err(ApiError::BadRequest(format!("'{}' is not a barcode", barcode)));
    }

    let product = state
        .service
        .get_product(barcode)
        .await
        .ok_or_else(|| ApiError::NotFound("Product not found".to_string()))?;

    Ok(Response::OK(ProductDetails::new(product)))
}
