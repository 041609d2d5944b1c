use nutriscan_core::domain::product::value_objects::{
    DEFAULT_MAX_SALT, DEFAULT_MAX_SUGAR, DEFAULT_PAGE_SIZE, SearchFilters,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// Search request with optional label and nutrient filters.
///
/// Omitted caps are unrestricted (50 g sugar, 10 g salt). Clients that want the
/// stricter starting point of a filter panel should send `max_sugar: 30` and
/// `max_salt: 5` explicitly.
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct SearchProductsValidator {
    /// Product name or barcode
    #[validate(
        length(min = 1, max = 200, message = "query must be 1 to 200 characters"),
        custom(function = "not_blank")
    )]
    pub query: String,

    #[serde(default)]
    pub vegan: bool,

    #[serde(default)]
    pub gluten_free: bool,

    #[serde(default)]
    pub organic: bool,

    /// Maximum sugars in g/100g, 50 (no restriction) when omitted
    #[validate(range(min = 0.0, max = 50.0, message = "max_sugar must be between 0 and 50"))]
    #[serde(default)]
    pub max_sugar: Option<f64>,

    /// Maximum salt in g/100g, 10 (no restriction) when omitted
    #[validate(range(min = 0.0, max = 10.0, message = "max_salt must be between 0 and 10"))]
    #[serde(default)]
    pub max_salt: Option<f64>,

    #[validate(range(min = 1, max = 100, message = "page_size must be between 1 and 100"))]
    #[serde(default)]
    pub page_size: Option<u32>,
}

impl SearchProductsValidator {
    pub fn filters(&self) -> SearchFilters {
        SearchFilters {
            vegan: self.vegan,
            gluten_free: self.gluten_free,
            organic: self.organic,
            max_sugar: self.max_sugar.unwrap_or(DEFAULT_MAX_SUGAR),
            max_salt: self.max_salt.unwrap_or(DEFAULT_MAX_SALT),
        }
    }

    pub fn page_size(&self) -> u32 {
        self.page_size.unwrap_or(DEFAULT_PAGE_SIZE)
    }
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct SelectProductValidator {
    /// Product code, or catalog id when the product has no code
    #[validate(
        length(min = 1, max = 64, message = "product_id must be 1 to 64 characters"),
        custom(function = "not_blank")
    )]
    pub product_id: String,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("must not be blank".into()));
    }
    Ok(())
}
