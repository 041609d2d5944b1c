pub mod helpers;
pub mod value_objects;

pub use helpers::*;
pub use value_objects::*;
