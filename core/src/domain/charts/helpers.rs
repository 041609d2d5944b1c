use crate::domain::{
    charts::value_objects::{
        ChartDataset, ChartPoint, ComparedProduct, ComparisonChart, ComparisonSeries,
        GRAMS_PER_100G, ProductCharts,
    },
    common::entities::app_errors::CoreError,
    product::entities::{Nutriments, Product},
};

const MACRO_TITLE: &str = "Répartition approximative des macronutriments (g/100g)";
const KEY_NUTRIENTS_TITLE: &str = "Nutriments clés (pour 100g)";
const COMPARISON_TITLE: &str = "Comparaison nutritionnelle entre produits";

const SUGAR_INDICATOR: &str = "Sucre (g/100g)";
const SALT_INDICATOR: &str = "Sel (g/100g)";
const SATURATED_FAT_INDICATOR: &str = "Graisses saturées (g/100g)";

/// Carbohydrates, fat and proteins, absent values plotted as zero.
pub fn macro_distribution(nutriments: &Nutriments) -> ChartDataset {
    ChartDataset {
        title: MACRO_TITLE.to_string(),
        unit: GRAMS_PER_100G.to_string(),
        points: vec![
            ChartPoint::new("Glucides", nutriments.carbohydrates_100g),
            ChartPoint::new("Lipides", nutriments.fat_100g),
            ChartPoint::new("Protéines", nutriments.proteins_100g),
        ],
    }
}

pub fn key_nutrients(nutriments: &Nutriments) -> ChartDataset {
    ChartDataset {
        title: KEY_NUTRIENTS_TITLE.to_string(),
        unit: GRAMS_PER_100G.to_string(),
        points: vec![
            ChartPoint::new("Sucres (g/100g)", nutriments.sugars_100g),
            ChartPoint::new("Sel (g/100g)", nutriments.salt_100g),
            ChartPoint::new("Graisses saturées (g/100g)", nutriments.saturated_fat_100g),
            ChartPoint::new("Fibres (g/100g)", nutriments.fiber_100g),
        ],
    }
}

pub fn product_charts(product: &Product) -> ProductCharts {
    ProductCharts {
        macro_distribution: macro_distribution(&product.nutriments),
        key_nutrients: key_nutrients(&product.nutriments),
    }
}

/// Grouped sugar, salt and saturated fat values for side-by-side comparison.
pub fn compare_products(products: &[Product]) -> Result<ComparisonChart, CoreError> {
    if products.len() < 2 {
        return Err(CoreError::NotEnoughProducts);
    }

    let indicators: [(&str, fn(&Nutriments) -> Option<f64>); 3] = [
        (SUGAR_INDICATOR, |n| n.sugars_100g),
        (SALT_INDICATOR, |n| n.salt_100g),
        (SATURATED_FAT_INDICATOR, |n| n.saturated_fat_100g),
    ];

    let series = indicators
        .iter()
        .map(|(indicator, value)| ComparisonSeries {
            indicator: indicator.to_string(),
            values: products
                .iter()
                .map(|product| value(&product.nutriments).unwrap_or(0.0))
                .collect(),
        })
        .collect();

    let products = products
        .iter()
        .map(|product| ComparedProduct {
            identity: product.identity().map(str::to_string),
            name: product.display_name().to_string(),
            nutriscore: product.grade_label(),
        })
        .collect();

    Ok(ComparisonChart {
        title: COMPARISON_TITLE.to_string(),
        unit: GRAMS_PER_100G.to_string(),
        products,
        series,
    })
}
