use std::fmt::Write as _;

use crate::domain::{
    narrative::{
        entities::ChatMessage,
        value_objects::{
            DEFAULT_MAX_TOKENS, NarrativePrompt, RECOMMENDATION_CANDIDATES,
            RECOMMENDATION_MAX_TOKENS,
        },
    },
    product::entities::{Nutriments, Product},
};

const ANALYSIS_SYSTEM_PROMPT: &str =
    "Tu es un expert en nutrition. Tu expliques de manière simple, factuelle et non alarmiste.";

const CHAT_SYSTEM_PROMPT: &str = "Tu es un assistant en nutrition. Tu donnes des explications \
générales basées sur des principes de santé publique (type PNNS), sans poser de diagnostic \
médical et sans donner de conseils médicaux personnalisés. Si une question relève de la \
médecine (symptômes graves, traitement), recommande de consulter un professionnel de santé.";

const RECOMMENDATION_SYSTEM_PROMPT: &str = "Tu es un expert en nutrition qui aide à choisir des \
produits plus sains dans la même catégorie. Tu donnes des explications claires et factuelles.";

pub fn product_analysis_prompt(product: &Product) -> NarrativePrompt {
    let ingredients = product.ingredients_text.as_deref().unwrap_or_default();
    let additives = if product.additives_original_tags.is_empty() {
        "aucun".to_string()
    } else {
        product.additives_original_tags.join(", ")
    };

    let user_content = format!(
        "Produit: {} - Marque: {}\n\
         Nutri-Score: {}\n\
         NOVA: {}\n\
         Nutriments (g/100g): {}\n\
         Ingrédients: {}\n\
         Additifs: {}\n\n\
         Donne une analyse claire et pédagogique de la qualité nutritionnelle de ce produit pour \
         un adulte moyen, avec :\n\
         - points positifs\n\
         - points de vigilance (sucre, sel, graisses saturées, ultra-transformation)\n\
         - une conclusion globale (à consommer souvent / occasionnellement / rarement).\n\
         Réponse en français, en 2-3 paragraphes maximum.",
        product.display_name(),
        product.brand_or_unknown(),
        product.grade_label(),
        product.nova_label(),
        describe_nutriments(&product.nutriments),
        ingredients,
        additives,
    );

    NarrativePrompt {
        system: ANALYSIS_SYSTEM_PROMPT.to_string(),
        history: Vec::new(),
        user_content,
        max_tokens: DEFAULT_MAX_TOKENS,
    }
}

pub fn chat_prompt(message: String, history: Vec<ChatMessage>) -> NarrativePrompt {
    NarrativePrompt {
        system: CHAT_SYSTEM_PROMPT.to_string(),
        history,
        user_content: message,
        max_tokens: DEFAULT_MAX_TOKENS,
    }
}

pub fn alternatives_prompt(product: &Product, candidates: &[Product]) -> NarrativePrompt {
    let mut candidates_text = String::new();
    for (index, candidate) in candidates.iter().take(RECOMMENDATION_CANDIDATES).enumerate() {
        let _ = write!(
            candidates_text,
            "{}. {} ({})\n   Nutri-Score: {} | NOVA: {}\n   Sucre: {}g/100g | Graisses saturées: {}g/100g\n\n",
            index + 1,
            candidate.display_name(),
            candidate.brand_or_unknown(),
            candidate.grade_label(),
            candidate.nova_label(),
            format_amount(candidate.nutriments.sugars_100g),
            format_amount(candidate.nutriments.saturated_fat_100g),
        );
    }

    let user_content = format!(
        "Produit actuel: {}\n\
         Nutri-Score: {} | NOVA: {}\n\n\
         Alternatives possibles:\n{}\n\
         Compare ces alternatives au produit actuel et recommande les 3-5 meilleures options en \
         expliquant brièvement pourquoi elles sont meilleures (meilleur Nutri-Score, moins de \
         sucre, moins de graisses saturées, moins ultra-transformé, etc.).\n\
         Réponse en français, sous forme de liste à puces avec le nom du produit et une \
         explication courte (1-2 phrases).",
        product.display_name(),
        product.grade_label(),
        product.nova_label(),
        candidates_text,
    );

    NarrativePrompt {
        system: RECOMMENDATION_SYSTEM_PROMPT.to_string(),
        history: Vec::new(),
        user_content,
        max_tokens: RECOMMENDATION_MAX_TOKENS,
    }
}

fn describe_nutriments(nutriments: &Nutriments) -> String {
    let entries = [
        ("sucres", nutriments.sugars_100g),
        ("sel", nutriments.salt_100g),
        ("graisses saturées", nutriments.saturated_fat_100g),
        ("fibres", nutriments.fiber_100g),
        ("glucides", nutriments.carbohydrates_100g),
        ("protéines", nutriments.proteins_100g),
        ("lipides", nutriments.fat_100g),
    ];

    let described: Vec<String> = entries
        .iter()
        .filter_map(|(label, value)| value.map(|v| format!("{label}: {v}")))
        .collect();

    if described.is_empty() {
        "non renseignés".to_string()
    } else {
        described.join(", ")
    }
}

fn format_amount(value: Option<f64>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| "?".to_string())
}
