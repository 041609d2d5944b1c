use axum::{Extension, extract::State};
use nutriscan_core::domain::session::{
    entities::Session, ports::SessionService, value_objects::AlternativesReport,
};

use crate::application::http::{
    current::validators::AlternativesQuery,
    query_extractor::ValidateQuery,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "/current/alternatives",
    tag = "current",
    summary = "Find healthier alternatives",
    description = "Searches the current product's category for products with a strictly better Nutri-Score, best first, with a recommendation text. The text falls back to a fixed summary when the language model is unavailable.",
    params(
        ("x-session-id" = Option<String>, Header, description = "Session id, created when missing"),
        AlternativesQuery,
    ),
    responses(
        (status = 200, body = AlternativesReport),
        (status = 409, description = "No product selected")
    ),
)]
pub async fn get_alternatives(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    ValidateQuery(query): ValidateQuery<AlternativesQuery>,
) -> Result<Response<AlternativesReport>, ApiError> {
    let report = state
        .service
        .current_alternatives(session, query.max_results())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(report))
}
