use std::sync::LazyLock;

use regex::Regex;

use crate::domain::product::entities::Product;

/// Ordinal assigned to a missing or unrecognized Nutri-Score.
pub const UNRANKED: u8 = 99;

static BARCODE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{8,13}$").expect("valid barcode pattern"));

/// Strips surrounding whitespace plus inner spaces and hyphens.
pub fn clean_barcode(query: &str) -> String {
    query.trim().replace([' ', '-'], "")
}

/// A query is a barcode when, once cleaned, it is 8 to 13 ASCII digits.
pub fn is_barcode(query: &str) -> bool {
    BARCODE_PATTERN.is_match(&clean_barcode(query))
}

/// Maps a Nutri-Score letter to an ordinal where lower is better.
pub fn nutriscore_to_value(grade: Option<&str>) -> u8 {
    match grade.map(|g| g.trim().to_uppercase()).as_deref() {
        Some("A") => 1,
        Some("B") => 2,
        Some("C") => 3,
        Some("D") => 4,
        Some("E") => 5,
        _ => UNRANKED,
    }
}

pub fn product_rank(product: &Product) -> u8 {
    nutriscore_to_value(product.nutriscore_grade.as_deref())
}

/// Picks the catalog search term used to look for alternatives.
///
/// The most specific category tag wins, with its locale prefix removed.
/// Without tags, the last word of the first free-text category is used.
pub fn derive_search_term(product: &Product) -> Option<String> {
    let term = if let Some(tag) = product.categories_tags.last() {
        tag.replace("en:", "").replace("fr:", "")
    } else {
        let categories = product.categories.as_deref().unwrap_or_default();
        categories
            .split(',')
            .next()
            .and_then(|segment| segment.split_whitespace().last())
            .unwrap_or_default()
            .to_string()
    };

    Some(term).filter(|term| !term.is_empty())
}

/// Keeps candidates strictly better than `product`, best first.
///
/// Candidates are scanned in catalog order; the source product and candidates
/// without a name or a grade are skipped, and scanning stops once
/// `max_results` candidates are retained.
pub fn select_alternatives(
    product: &Product,
    candidates: Vec<Product>,
    max_results: usize,
) -> Vec<Product> {
    let current_rank = product_rank(product);
    let mut alternatives = Vec::new();

    for candidate in candidates {
        if alternatives.len() >= max_results {
            break;
        }
        if candidate.has_same_identity(product) {
            continue;
        }
        if is_blank(&candidate.product_name) || is_blank(&candidate.nutriscore_grade) {
            continue;
        }
        if product_rank(&candidate) < current_rank {
            alternatives.push(candidate);
        }
    }

    alternatives.sort_by_key(product_rank);
    alternatives.truncate(max_results);
    alternatives
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(str::is_empty)
}
