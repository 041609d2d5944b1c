use crate::application::http::{
    chat::router::ChatApiDoc, comparison::router::ComparisonApiDoc,
    current::router::CurrentProductApiDoc, health::router::HealthApiDoc,
    product::router::ProductApiDoc, search::router::SearchApiDoc,
    session::router::SessionApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "NutriScan API",
        description = "Food product lookup on OpenFoodFacts with healthier alternatives and AI narratives"
    ),
    nest(
        (path = "/health", api = HealthApiDoc),
        (path = "/products", api = ProductApiDoc),
        (path = "/session", api = SessionApiDoc),
        (path = "/session", api = SearchApiDoc),
        (path = "/session", api = CurrentProductApiDoc),
        (path = "/session", api = ComparisonApiDoc),
        (path = "/session", api = ChatApiDoc),
    )
)]
pub struct ApiDoc;
