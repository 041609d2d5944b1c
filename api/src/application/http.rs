pub mod chat;
pub mod comparison;
pub mod current;
pub mod health;
pub mod product;
pub mod query_extractor;
pub mod search;
pub mod server;
pub mod session;
