pub mod analyze_current_product;
pub mod get_alternatives;
pub mod get_current_product;
