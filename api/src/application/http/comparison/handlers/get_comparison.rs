use axum::{Extension, extract::State};
use nutriscan_core::domain::{
    charts::value_objects::ComparisonChart,
    session::{entities::Session, ports::SessionService},
};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/comparison",
    tag = "comparison",
    summary = "Compare selected products",
    description = "Returns sugar, salt and saturated fat per 100g for every product selected in the session, grouped by indicator.",
    params(
        ("x-session-id" = Option<String>, Header, description = "Session id, created when missing"),
    ),
    responses(
        (status = 200, body = ComparisonChart),
        (status = 422, description = "Fewer than two products selected")
    ),
)]
pub async fn get_comparison(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
) -> Result<Response<ComparisonChart>, ApiError> {
    let chart = state
        .service
        .comparison(session)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(chart))
}
