pub mod search_products;
pub mod select_product;
