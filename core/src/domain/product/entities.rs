use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

use crate::domain::product::lenient;

pub const UNNAMED_PRODUCT: &str = "Produit sans nom";
pub const UNKNOWN_BRAND: &str = "Marque inconnue";

/// A catalog product as returned by OpenFoodFacts.
///
/// Every field is optional and deserialized leniently: a value of the wrong
/// shape is treated as absent instead of failing the whole product.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub code: Option<String>,

    #[serde(
        rename = "_id",
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,

    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub product_name: Option<String>,

    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub brands: Option<String>,

    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub categories: Option<String>,

    #[serde(default, deserialize_with = "lenient::text_list")]
    pub categories_tags: Vec<String>,

    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub labels: Option<String>,

    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub nutriscore_grade: Option<String>,

    #[serde(
        default,
        deserialize_with = "lenient::integer",
        skip_serializing_if = "Option::is_none"
    )]
    pub nova_group: Option<u8>,

    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub ingredients_text: Option<String>,

    #[serde(default, deserialize_with = "lenient::text_list")]
    pub additives_original_tags: Vec<String>,

    #[serde(default, deserialize_with = "lenient::or_default")]
    pub nutriments: Nutriments,

    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub image_front_small_url: Option<String>,

    #[serde(
        default,
        deserialize_with = "lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub image_url: Option<String>,
}

impl Product {
    /// `code` when present, `_id` otherwise. All identity comparisons go through here.
    pub fn identity(&self) -> Option<&str> {
        non_empty(&self.code).or_else(|| non_empty(&self.id))
    }

    pub fn has_same_identity(&self, other: &Product) -> bool {
        self.identity() == other.identity()
    }

    pub fn display_name(&self) -> &str {
        non_empty(&self.product_name).unwrap_or(UNNAMED_PRODUCT)
    }

    pub fn brand_or_unknown(&self) -> &str {
        non_empty(&self.brands).unwrap_or(UNKNOWN_BRAND)
    }

    /// Upper-cased Nutri-Score letter, `?` when missing.
    pub fn grade_label(&self) -> String {
        non_empty(&self.nutriscore_grade)
            .map(|grade| grade.trim().to_uppercase())
            .unwrap_or_else(|| "?".to_string())
    }

    pub fn nova_label(&self) -> String {
        self.nova_group
            .map(|nova| nova.to_string())
            .unwrap_or_else(|| "?".to_string())
    }

    pub fn image(&self) -> Option<&str> {
        non_empty(&self.image_front_small_url).or_else(|| non_empty(&self.image_url))
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Nutrient values per 100g.
#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
pub struct Nutriments {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sugars_100g: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub salt_100g: Option<f64>,

    #[serde(rename = "saturated-fat_100g", skip_serializing_if = "Option::is_none")]
    pub saturated_fat_100g: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fiber_100g: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub carbohydrates_100g: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub proteins_100g: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fat_100g: Option<f64>,

    #[serde(rename = "energy-kcal_100g", skip_serializing_if = "Option::is_none")]
    pub energy_kcal_100g: Option<f64>,
}

impl<'de> Deserialize<'de> for Nutriments {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let map = Map::<String, Value>::deserialize(deserializer)?;
        let pick = |keys: &[&str]| {
            keys.iter()
                .find_map(|key| map.get(*key).and_then(lenient::number_value))
        };

        Ok(Self {
            sugars_100g: pick(&["sugars_100g", "sugar_100g"]),
            salt_100g: pick(&["salt_100g"]),
            saturated_fat_100g: pick(&["saturated-fat_100g", "saturated_fat_100g"]),
            fiber_100g: pick(&["fiber_100g"]),
            carbohydrates_100g: pick(&["carbohydrates_100g", "carbohydrates"]),
            proteins_100g: pick(&["proteins_100g", "proteins"]),
            fat_100g: pick(&["fat_100g", "fat"]),
            energy_kcal_100g: pick(&["energy-kcal_100g"]),
        })
    }
}
