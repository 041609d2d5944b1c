use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    charts::{helpers::product_charts, value_objects::ProductCharts},
    product::entities::Product,
};

/// A product with its display image and chart datasets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductDetails {
    pub product: Product,
    /// Small front image when available, the full image otherwise.
    pub image_url: Option<String>,
    pub charts: ProductCharts,
}

impl ProductDetails {
    pub fn new(product: Product) -> Self {
        Self {
            image_url: product.image().map(str::to_string),
            charts: product_charts(&product),
            product,
        }
    }
}

/// Healthier alternatives of the current product and their narrative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AlternativesReport {
    pub product: Product,
    pub alternatives: Vec<Product>,
    pub recommendation: String,
}
