pub mod clear_comparison;
pub mod get_comparison;
pub mod remove_from_comparison;
