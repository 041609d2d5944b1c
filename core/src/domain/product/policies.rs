use crate::domain::product::{entities::Product, value_objects::SearchFilters};

const VEGAN_KEYWORDS: &[&str] = &["vegan", "végétalien"];
const GLUTEN_FREE_KEYWORDS: &[&str] = &["sans gluten", "gluten-free"];
const ORGANIC_KEYWORDS: &[&str] = &["bio", "organic"];

/// Returns whether `product` satisfies every requested criterion.
///
/// Label checks are keyword matches on the lower-cased `labels` text. Vegan and
/// organic reject on a missing keyword; gluten-free only rejects when the
/// ingredient list mentions gluten. Nutrient caps ignore absent values.
pub fn matches(product: &Product, filters: &SearchFilters) -> bool {
    let labels = lowercase(&product.labels);
    let ingredients = lowercase(&product.ingredients_text);

    if filters.vegan && !contains_any(&labels, VEGAN_KEYWORDS) {
        return false;
    }

    if filters.gluten_free
        && !contains_any(&labels, GLUTEN_FREE_KEYWORDS)
        && ingredients.contains("gluten")
    {
        return false;
    }

    if filters.organic && !contains_any(&labels, ORGANIC_KEYWORDS) {
        return false;
    }

    if exceeds(product.nutriments.sugars_100g, filters.max_sugar) {
        return false;
    }

    if exceeds(product.nutriments.salt_100g, filters.max_salt) {
        return false;
    }

    true
}

fn lowercase(text: &Option<String>) -> String {
    text.as_deref().unwrap_or_default().to_lowercase()
}

fn contains_any(haystack: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| haystack.contains(keyword))
}

fn exceeds(value: Option<f64>, max: f64) -> bool {
    value.is_some_and(|value| value > max)
}
