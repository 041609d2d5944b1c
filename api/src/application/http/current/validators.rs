use nutriscan_core::domain::product::value_objects::DEFAULT_MAX_ALTERNATIVES;
use serde::{Deserialize, Serialize};
use utoipa::IntoParams;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AlternativesQuery {
    /// Maximum number of alternatives, 10 when omitted
    #[validate(range(min = 1, max = 20, message = "max_results must be between 1 and 20"))]
    #[serde(default)]
    pub max_results: Option<usize>,
}

impl AlternativesQuery {
    pub fn max_results(&self) -> usize {
        self.max_results.unwrap_or(DEFAULT_MAX_ALTERNATIVES)
    }
}
