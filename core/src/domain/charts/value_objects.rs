use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const GRAMS_PER_100G: &str = "g/100g";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
}

impl ChartPoint {
    pub fn new(label: &str, value: Option<f64>) -> Self {
        Self {
            label: label.to_string(),
            value: value.unwrap_or(0.0),
        }
    }
}

/// A single-series dataset (pie or bar chart).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ChartDataset {
    pub title: String,
    pub unit: String,
    pub points: Vec<ChartPoint>,
}

/// Product columns of a grouped comparison chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ComparedProduct {
    pub identity: Option<String>,
    pub name: String,
    pub nutriscore: String,
}

/// One indicator across every compared product, in product order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ComparisonSeries {
    pub indicator: String,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ComparisonChart {
    pub title: String,
    pub unit: String,
    pub products: Vec<ComparedProduct>,
    pub series: Vec<ComparisonSeries>,
}

/// Both datasets shown next to a product's details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductCharts {
    pub macro_distribution: ChartDataset,
    pub key_nutrients: ChartDataset,
}
