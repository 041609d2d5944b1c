use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const DEFAULT_PAGE_SIZE: u32 = 20;
pub const ALTERNATIVES_PAGE_SIZE: u32 = 50;
pub const DEFAULT_MAX_ALTERNATIVES: usize = 10;
pub const NUTRISCORE_SORT_KEY: &str = "nutriscore_grade";

pub const DEFAULT_MAX_SUGAR: f64 = 50.0;
pub const DEFAULT_MAX_SALT: f64 = 10.0;

/// Dietary criteria applied to every search result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SearchFilters {
    #[serde(default)]
    pub vegan: bool,
    #[serde(default)]
    pub gluten_free: bool,
    #[serde(default)]
    pub organic: bool,
    /// Maximum sugars in g/100g
    #[serde(default = "default_max_sugar")]
    pub max_sugar: f64,
    /// Maximum salt in g/100g
    #[serde(default = "default_max_salt")]
    pub max_salt: f64,
}

impl Default for SearchFilters {
    fn default() -> Self {
        Self {
            vegan: false,
            gluten_free: false,
            organic: false,
            max_sugar: DEFAULT_MAX_SUGAR,
            max_salt: DEFAULT_MAX_SALT,
        }
    }
}

impl SearchFilters {
    /// No dietary requirement and no nutrient cap.
    pub fn unrestricted() -> Self {
        Self {
            max_sugar: f64::INFINITY,
            max_salt: f64::INFINITY,
            ..Self::default()
        }
    }
}

fn default_max_sugar() -> f64 {
    DEFAULT_MAX_SUGAR
}

fn default_max_salt() -> f64 {
    DEFAULT_MAX_SALT
}

#[derive(Debug, Clone)]
pub struct SearchProductsInput {
    pub query: String,
    pub filters: SearchFilters,
    pub page_size: u32,
}

/// Text search sent to the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogQuery {
    pub search_terms: String,
    pub page_size: u32,
    pub sort_by: Option<String>,
}

impl CatalogQuery {
    pub fn new(search_terms: impl Into<String>, page_size: u32) -> Self {
        Self {
            search_terms: search_terms.into(),
            page_size,
            sort_by: None,
        }
    }

    pub fn sorted_by(mut self, key: impl Into<String>) -> Self {
        self.sort_by = Some(key.into());
        self
    }
}
