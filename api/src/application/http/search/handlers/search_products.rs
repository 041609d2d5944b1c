use axum::{Extension, extract::State};
use nutriscan_core::domain::{
    product::{entities::Product, value_objects::SearchProductsInput},
    session::{entities::Session, ports::SessionService},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    search::validators::SearchProductsValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SearchProductsResponse {
    pub count: usize,
    pub data: Vec<Product>,
}

#[utoipa::path(
    post,
    path = "/search",
    tag = "search",
    summary = "Search products",
    description = "Searches the catalog by name or barcode, applies the dietary filters and stores the results in the session. A new search deselects the current product. Omitted caps do not restrict sugar or salt.",
    params(
        ("x-session-id" = Option<String>, Header, description = "Session id, created when missing"),
    ),
    request_body = SearchProductsValidator,
    responses(
        (status = 200, body = SearchProductsResponse),
        (status = 400, description = "Invalid search request")
    ),
)]
pub async fn search_products(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    ValidateJson(payload): ValidateJson<SearchProductsValidator>,
) -> Result<Response<SearchProductsResponse>, ApiError> {
    let input = SearchProductsInput {
        filters: payload.filters(),
        page_size: payload.page_size(),
        query: payload.query,
    };

    let session = state
        .service
        .search(session, input)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(SearchProductsResponse {
        count: session.search_results.len(),
        data: session.search_results,
    }))
}
