pub mod charts;
pub mod common;
pub mod narrative;
pub mod product;
pub mod session;
