use axum::{Extension, extract::State};
use nutriscan_core::domain::{
    product::entities::Product,
    session::{entities::Session, ports::SessionService},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ComparisonSelectionResponse {
    pub count: usize,
    pub data: Vec<Product>,
}

impl From<Session> for ComparisonSelectionResponse {
    fn from(session: Session) -> Self {
        Self {
            count: session.selected_products.len(),
            data: session.selected_products,
        }
    }
}

#[utoipa::path(
    delete,
    path = "/comparison",
    tag = "comparison",
    summary = "Clear comparison",
    description = "Removes every product from the comparison. The visit history is kept.",
    params(
        ("x-session-id" = Option<String>, Header, description = "Session id, created when missing"),
    ),
    responses(
        (status = 200, body = ComparisonSelectionResponse)
    ),
)]
pub async fn clear_comparison(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
) -> Result<Response<ComparisonSelectionResponse>, ApiError> {
    let session = state
        .service
        .clear_comparison(session)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ComparisonSelectionResponse::from(session)))
}
