use crate::domain::{
    narrative::value_objects::RECOMMENDATION_CANDIDATES,
    product::{entities::Product, helpers::product_rank},
};

pub const NO_ALTERNATIVE_FOUND: &str = "Aucune alternative trouvée pour ce produit.";
pub const NO_BETTER_ALTERNATIVE: &str =
    "Aucune alternative avec un meilleur Nutri-Score trouvée dans cette catégorie.";

/// Recommendation text built without the model, used when the completion fails.
pub fn fallback_recommendation(product: &Product, candidates: &[Product]) -> String {
    if candidates.is_empty() {
        return NO_ALTERNATIVE_FOUND.to_string();
    }

    let current_rank = product_rank(product);
    let recommendations: Vec<String> = candidates
        .iter()
        .take(RECOMMENDATION_CANDIDATES)
        .filter(|candidate| product_rank(candidate) < current_rank)
        .map(|candidate| {
            format!(
                "• **{}** ({}) — Nutri-Score: {} — Meilleur score nutritionnel que le produit actuel.",
                candidate.display_name(),
                candidate.brand_or_unknown(),
                candidate.grade_label(),
            )
        })
        .collect();

    if recommendations.is_empty() {
        NO_BETTER_ALTERNATIVE.to_string()
    } else {
        format!(
            "**Alternatives recommandées :**\n\n{}",
            recommendations.join("\n\n")
        )
    }
}
